use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{Level, debug};

use crate::utilities::errors::AppError;

pub const DEFAULT_STORAGE_NAMESPACE: &str = "propertyLedger";
pub const DEFAULT_LEASE_EXPIRING_WINDOW_DAYS: i64 = 60;
pub const MAX_LEASE_EXPIRING_WINDOW_DAYS: i64 = 3_650;

/// What happens to dependent records when their parent is deleted.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "lowercase")]
pub enum DeletePolicy {
    /// Dependents are removed (or unlinked where the link is optional).
    #[default]
    Cascade,
    /// The delete is rejected while dependents exist.
    Restrict,
}

impl FromStr for DeletePolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cascade" => Ok(Self::Cascade),
            "restrict" | "reject" => Ok(Self::Restrict),
            other => Err(AppError::ValidationError(format!(
                "Unknown delete policy '{other}', expected cascade or restrict"
            ))),
        }
    }
}

impl fmt::Display for DeletePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cascade => write!(f, "cascade"),
            Self::Restrict => write!(f, "restrict"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub base_dir: PathBuf,
    pub tracing_level: Level,

    // STORAGE
    pub data_dir: PathBuf,
    pub storage_namespace: String,

    // DELETE POLICIES
    pub property_delete_policy: DeletePolicy,
    pub tenant_delete_policy: DeletePolicy,
    pub unit_delete_policy: DeletePolicy,

    // LEASES
    pub lease_expiring_window_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        let base_dir = PathBuf::from(".");
        Self {
            data_dir: base_dir.join("data"),
            base_dir,
            tracing_level: Level::INFO,
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_string(),
            property_delete_policy: DeletePolicy::Cascade,
            tenant_delete_policy: DeletePolicy::Cascade,
            unit_delete_policy: DeletePolicy::Cascade,
            lease_expiring_window_days: DEFAULT_LEASE_EXPIRING_WINDOW_DAYS,
        }
    }
}

impl Config {
    pub async fn init() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let base_dir = find_project_root().unwrap_or_else(|| PathBuf::from("."));

        let tracing_level = get_config_value(
            "TRACING_LEVEL",
            Some("TRACING_LEVEL"),
            None,
            Some(Level::INFO),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("TRACING_LEVEL".to_string()))?;

        let data_dir = get_config_value(
            "DATA_DIR",
            Some("DATA_DIR"),
            None,
            Some(base_dir.join("data")),
        )
        .await?
        .ok_or_else(|| AppError::EnvironmentVariableNotSetError("DATA_DIR".to_string()))?;

        let storage_namespace = get_config_value(
            "STORAGE_NAMESPACE",
            Some("STORAGE_NAMESPACE"),
            None,
            Some(DEFAULT_STORAGE_NAMESPACE.to_string()),
        )
        .await?
        .ok_or_else(|| {
            AppError::EnvironmentVariableNotSetError("STORAGE_NAMESPACE".to_string())
        })?;

        let property_delete_policy = get_config_value(
            "PROPERTY_DELETE_POLICY",
            Some("PROPERTY_DELETE_POLICY"),
            None,
            Some(DeletePolicy::Cascade),
        )
        .await?
        .unwrap_or_default();
        let tenant_delete_policy = get_config_value(
            "TENANT_DELETE_POLICY",
            Some("TENANT_DELETE_POLICY"),
            None,
            Some(DeletePolicy::Cascade),
        )
        .await?
        .unwrap_or_default();
        let unit_delete_policy = get_config_value(
            "UNIT_DELETE_POLICY",
            Some("UNIT_DELETE_POLICY"),
            None,
            Some(DeletePolicy::Cascade),
        )
        .await?
        .unwrap_or_default();

        let lease_expiring_window_days = get_config_value(
            "LEASE_EXPIRING_WINDOW_DAYS",
            Some("LEASE_EXPIRING_WINDOW_DAYS"),
            None,
            Some(DEFAULT_LEASE_EXPIRING_WINDOW_DAYS),
        )
        .await
        .map(bounded_window_days)?;

        let config = Config {
            base_dir,
            tracing_level,
            data_dir,
            storage_namespace,
            property_delete_policy,
            tenant_delete_policy,
            unit_delete_policy,
            lease_expiring_window_days,
        };

        debug!(
            "config resolved: data_dir={}, namespace={}, property_delete_policy={}",
            config.data_dir.display(),
            config.storage_namespace,
            config.property_delete_policy
        );

        Ok(config)
    }
}

/// Out-of-range windows fall back to the default.
fn bounded_window_days(days: Option<i64>) -> i64 {
    days.filter(|days| (0..=MAX_LEASE_EXPIRING_WINDOW_DAYS).contains(days))
        .unwrap_or(DEFAULT_LEASE_EXPIRING_WINDOW_DAYS)
}

fn find_project_root() -> Option<PathBuf> {
    let mut dir = std::env::current_dir().ok()?;
    loop {
        if dir.join("Cargo.toml").exists() {
            return Some(dir);
        }
        if !dir.pop() {
            return None;
        }
    }
}

/// Try to resolve config value from Docker secrets, file path, or env var.
/// - `secret_name` → filename inside `/run/secrets/`
/// - `env_name` → optional environment variable key
/// - `fallback_path` → fallback file path (checked if exists)
///
/// A source whose content does not parse as `T` is skipped, not an error.
pub async fn get_config_value<T>(
    secret_name: &str,
    env_name: Option<&str>,
    fallback_path: Option<&PathBuf>,
    fallback: Option<T>,
) -> Result<Option<T>, AppError>
where
    T: FromStr,
{
    // 1. Docker secrets
    let docker_secret = Path::new("/run/secrets").join(secret_name);
    if docker_secret.exists() {
        match fs::read_to_string(&docker_secret).await {
            Ok(content) => {
                if let Ok(parsed) = T::from_str(content.trim()) {
                    return Ok(Some(parsed));
                }
            }
            Err(e) => {
                return Err(AppError::FileReadError(format!(
                    "Failed to read docker secret at {0}, {e}",
                    docker_secret.display()
                )));
            }
        }
    }

    // 2. Env var
    if let Some(env_key) = env_name
        && let Ok(val) = std::env::var(env_key)
        && let Ok(parsed) = T::from_str(val.trim())
    {
        return Ok(Some(parsed));
    }

    // 3. Fallback file path
    if let Some(path) = fallback_path
        && path.exists()
    {
        match fs::read_to_string(path).await {
            Ok(content) => {
                if let Ok(parsed) = T::from_str(content.trim()) {
                    return Ok(Some(parsed));
                }
            }
            Err(e) => {
                return Err(AppError::FileReadError(format!(
                    "Failed to read fallback file at {}, {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    // 4. Final fallback
    Ok(fallback)
}
