// Reusable UI widgets

pub mod spinner;

pub use spinner::{Spinner, SpinnerWidget};
