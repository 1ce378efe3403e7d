pub mod env;

pub use env::{MissingEnvVarError, get_env_var, get_env_path};
