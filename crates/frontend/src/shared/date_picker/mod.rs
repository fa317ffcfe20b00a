//! Calendar widget binding for the transaction date field.
//!
//! [`binder`] holds the logic and the capability traits; [`dom`] and
//! [`mc_datepicker`] are the browser-side implementations of those traits.

pub mod binder;
pub mod dom;
pub mod error;
pub mod mc_datepicker;

pub use binder::{bind, BindOutcome, DateField, Picker, PickerFactory, SkipReason};
pub use error::PickerError;
