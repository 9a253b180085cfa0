mod args;

pub use args::parse;
pub use args::Cli;
