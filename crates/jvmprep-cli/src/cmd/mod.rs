//! CLI commands

pub mod prepare;
