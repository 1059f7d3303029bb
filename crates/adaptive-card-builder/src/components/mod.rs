//! Composers that assemble multi-node fragments from plain domain inputs.

pub mod aaa;
pub mod actions;
pub mod buttons;
pub mod chart;
pub mod status;
pub mod title;
pub mod top_bar;

pub use aaa::{AaaCard, aaa_card};
pub use actions::{
    ActionDescriptor, aaa_actions, action_set_from_descriptors, actions_from_descriptors,
};
pub use buttons::{
    ELABORATION_TARGETS, SheetDescriptor, ToggleTrio, button_panel, menu_dropdown, menu_list,
    toggle_visibility_trio,
};
pub use chart::chart_section;
pub use status::{StatusColor, status_indicator};
pub use title::title_section;
pub use top_bar::{TitleState, loading_skeleton, simple_top_bar, status_top_bar, top_bar};
