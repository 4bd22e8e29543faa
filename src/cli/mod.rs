mod args;
mod command;

pub use args::Cli;
pub use command::Command;

pub use args::parse;
