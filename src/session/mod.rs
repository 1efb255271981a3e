//! Session layer: user-facing inputs with their input floors, TOML
//! configuration, and the recalculation pipeline that feeds a front end.

pub mod config;
pub mod pipeline;
pub mod types;
