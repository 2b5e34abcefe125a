//! Grouped constants

pub mod backend;
pub mod symmetric;
