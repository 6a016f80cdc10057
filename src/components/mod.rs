//! Components
//!
//! Display-facing building blocks that carry no screen state of their own.

pub mod data_table;
