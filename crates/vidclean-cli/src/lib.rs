//! CLI library components for the vidclean pipeline.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
