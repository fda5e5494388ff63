//! CLI subcommand implementations.

pub mod product;
pub mod search;
