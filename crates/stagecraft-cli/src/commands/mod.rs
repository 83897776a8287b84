//! CLI command implementations

pub mod run;
pub mod scenes;
pub mod tour;
