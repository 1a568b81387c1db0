//! Command translator implementations

pub mod locale_table;

pub use locale_table::{LocaleTable, LocaleTableTranslator};
