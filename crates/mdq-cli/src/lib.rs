//! CLI library components for mdq.

pub mod config;
pub mod logging;
pub mod pipeline;
