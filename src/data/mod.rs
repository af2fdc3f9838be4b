//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;

pub use cleaner::{CleanError, CleaningReport, DataCleaner};
pub use loader::{DataLoader, LoaderError};
