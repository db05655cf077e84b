//! CLI subcommand implementations

pub mod catalog;
pub mod compare;
pub mod search;
pub mod suggest;
