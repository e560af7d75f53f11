use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod env_vars;
pub mod models;

pub use models::*;

/// Loads the layered application configuration.
///
/// Sources, later ones overriding earlier ones:
/// 1. `config/default.*` at the workspace root (optional)
/// 2. `config/{RUN_ENV}.*` (optional, `RUN_ENV` defaults to "debug")
/// 3. Environment variables prefixed with `BOTBLOCKS`, `__` as the path
///    separator (e.g. `BOTBLOCKS__CALENDLY__API_BASE_URL`)
///
/// After deserialization, every string field whose file value is the literal
/// `secret_from_env` is replaced from the environment (see [`env_vars`]), so
/// credentials never live in config files or in source.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env_vars::get_config_prefix();

    let workspace_root = workspace_root();
    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{}", run_env));

    debug!(
        "Loading configuration from {} and {} with env prefix {}",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(apply_env_overrides_from_marker(raw_config))
}

// Under cargo, CARGO_MANIFEST_DIR points at this crate; two levels up is the
// workspace root where config/ lives. Deployed binaries resolve relative to
// their working directory instead.
fn workspace_root() -> PathBuf {
    match env::var("CARGO_MANIFEST_DIR").map(PathBuf::from) {
        Ok(manifest_dir) => manifest_dir
            .ancestors()
            .nth(2)
            .map(PathBuf::from)
            .unwrap_or(manifest_dir),
        Err(_) => PathBuf::from("."),
    }
}

/// Applies environment overrides based on "secret_from_env" markers in the
/// serialized config.
pub fn apply_env_overrides_from_marker(config: AppConfig) -> AppConfig {
    let mut json = serde_json::to_value(&config).expect("AppConfig must be serializable");
    env_vars::inject_env_vars(&mut json);
    serde_json::from_value(json).expect("AppConfig must remain deserializable")
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// This function checks if the dotenv file has already been loaded using a
/// `OnceCell`. If not, it attempts to load the dotenv file named by
/// `DOTENV_OVERRIDE`, falling back to a file named ".env".
///
/// # Return
///
/// The path of the dotenv file that was (or would have been) loaded.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
