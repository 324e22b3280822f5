use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
    Tick,
    Render,
    Resize(u16, u16),
    Suspend,
    Resume,
    Quit,
    Error(String),
    Navigate(usize),
    /// Whole-form validation result, tagged with the draft revision it was
    /// computed against. The order page drops results for stale revisions.
    OrderValidity { revision: u64, valid: bool },
    /// The kitchen accepted the order; carries the confirmation text that
    /// was composed when the order went out.
    OrderAccepted(String),
    /// The kitchen rejected the order; carries the failure text shown to
    /// the user (server message verbatim when one exists).
    OrderRejected(String),
}
