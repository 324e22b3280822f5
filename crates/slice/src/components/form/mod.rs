//! Declarative form subsystem.
//!
//! - [`schema`]: what a form looks like (fields, labels, choices, rules)
//! - [`state`]: the values, checked entries and errors entered so far
//! - [`view`]: navigation, editing and validation dispatch
//! - [`render`]: drawing a view into a frame

pub mod field;
pub mod render;
pub mod schema;
pub mod state;
pub mod view;

pub use field::{Choice, FieldKind, FormField};
pub use render::render_form;
pub use schema::FormSchema;
pub use state::FormState;
pub use view::{FormChange, FormView};
