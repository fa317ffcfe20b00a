//! Shared types for the transaction date picker.
//!
//! Nothing here touches the DOM, so the whole module is testable on the host.

pub mod clock;
pub mod config;
pub mod initial_date;

pub use clock::{Clock, SystemClock};
pub use config::{PickerConfig, PickerOptions};
pub use initial_date::InitialDate;
