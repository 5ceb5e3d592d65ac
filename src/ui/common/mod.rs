//! Common reusable UI components

pub mod message;
pub mod spinner;

pub use message::{ErrorMessage, WarningMessageStatic};
pub use spinner::{InlineSpinner, LoadingSpinner, Spinner, SpinnerSize};
