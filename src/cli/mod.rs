pub mod commands;
pub mod list;
pub mod serve;
pub mod validate;

pub use commands::{Cli, Commands};
