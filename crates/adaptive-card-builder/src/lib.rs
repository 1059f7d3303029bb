//! Adaptive Card builder.
//! Element constructors produce a typed node tree, composers assemble the App
//! Analysis card sections from plain inputs, and the renderer turns the tree
//! into schema-conformant card JSON.

pub mod components;
pub mod config;
pub mod document;
pub mod elements;
pub mod errors;
pub mod inspect;
pub mod lint;
pub mod node;
pub mod renderer;
pub mod templates;

pub use config::BuilderConfig;
pub use document::{DEFAULT_SCHEMA_VERSION, Document, SCHEMA_URL, assemble, merge_cards};
pub use errors::{CardError, CardResult, DerivationError, RenderError};
pub use inspect::{CardSize, card_size, extract_input_values};
pub use lint::{LintWarning, is_known_element, lint_card};
pub use node::{Attr, Attributes, Fragment, Node, NodeKind};
pub use renderer::{prettify_json, render, render_document, render_node};
