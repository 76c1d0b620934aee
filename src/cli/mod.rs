//! Command-line interface module.

mod args;
pub mod generate;
pub mod init;
pub mod query;

pub use args::{Cli, Commands, GenerateArgs, QueryArgs};
