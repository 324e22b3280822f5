//! Order domain for the `slice` terminal client.
//!
//! This crate is UI-free. It owns the menu catalog, the mutable order draft,
//! the validation rules together with their user-facing messages, the
//! confirmation text for accepted orders, and the JSON wire payload for the
//! kitchen endpoint. The TUI crate layers interaction on top of these types.

pub mod catalog;
pub mod confirm;
pub mod draft;
pub mod payload;
pub mod rules;

pub use catalog::{topping_by_id, ToppingOption, TOPPINGS};
pub use confirm::confirmation_message;
pub use draft::OrderDraft;
pub use payload::OrderPayload;
