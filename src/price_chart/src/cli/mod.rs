pub mod commands;
pub mod params;

pub use commands::{Cli, OriginArg, OutputFormat};
pub use params::resolve_config;
