pub mod core;
pub mod formatter;
pub mod grammar;
pub mod rules;
pub mod selection;

// Re-export the main types for convenience
pub use core::{Column, Item, LoadError, Template};
pub use rules::{Rules, SelectionRule};
pub use selection::SelectedItem;
