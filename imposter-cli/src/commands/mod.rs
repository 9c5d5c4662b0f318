//! CLI command implementations.

pub mod generate;
pub mod locale;
pub mod stats;
pub mod themes;
pub mod translate;
