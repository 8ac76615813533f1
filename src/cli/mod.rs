//! Command-Line Interface

pub mod generate;
