//! Configuration: TOML file loading with precedence, and key bindings.

mod keybindings;
mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    apply_cli_overrides, apply_env_overrides, load_config_file, resolve, CliOverrides, Config,
    ConfigError, ConfigFile,
};
