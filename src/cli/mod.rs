pub mod args;
pub mod commands;
pub mod prompt;

pub use args::Args;
pub use commands::CliApp;
pub use prompt::Terminal;
