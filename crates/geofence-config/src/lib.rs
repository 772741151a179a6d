use geofence_core::GeofenceResult;
use geofence_geo::ZoneCatalog;
use serde::{Deserialize, Serialize};
use std::{env, fmt};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Dev,
    Test,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "local" => Self::Local,
            "dev" | "development" => Self::Dev,
            "test" | "testing" => Self::Test,
            "staging" => Self::Staging,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::Local => "local",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Staging => "staging",
            Self::Prod => "prod",
        };
        write!(f, "{value}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    pub fn from_env(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "text" | "pretty" | "plain" => Self::Text,
            _ => Self::Json,
        }
    }
}

/// Where the zone catalog comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneSource {
    Builtin,
    File(String),
}

impl ZoneSource {
    pub fn load(&self) -> GeofenceResult<ZoneCatalog> {
        match self {
            Self::Builtin => Ok(ZoneCatalog::builtin()),
            Self::File(path) => ZoneCatalog::from_json_file(path),
        }
    }
}

impl fmt::Display for ZoneSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::File(path) => write!(f, "{path}"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub service_name: String,
    pub environment: Environment,
    pub region: Option<String>,
    pub bind_addr: String,
    pub metrics_addr: Option<String>,
    pub log_level: String,
    pub log_format: LogFormat,
    pub zones: ZoneSource,
}

impl ServiceConfig {
    pub fn from_env(default_service_name: &str) -> Self {
        Self::from_lookup(default_service_name, |key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup instead of the process
    /// environment.
    pub fn from_lookup<F>(default_service_name: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = lookup("GEOFENCE_BIND_ADDR").unwrap_or_else(|| {
            let port = lookup("PORT")
                .and_then(|value| value.trim().parse::<u16>().ok())
                .unwrap_or(DEFAULT_PORT);
            format!("0.0.0.0:{port}")
        });
        let zones = lookup("GEOFENCE_ZONES_PATH")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(ZoneSource::File)
            .unwrap_or(ZoneSource::Builtin);

        Self {
            service_name: var("GEOFENCE_SERVICE_NAME", default_service_name),
            environment: Environment::from_env(&var("GEOFENCE_ENV", "local")),
            region: lookup("GEOFENCE_REGION"),
            bind_addr,
            metrics_addr: lookup("GEOFENCE_METRICS_ADDR"),
            log_level: var("GEOFENCE_LOG_LEVEL", "info"),
            log_format: LogFormat::from_env(&var("GEOFENCE_LOG_FORMAT", "json")),
            zones,
        }
    }
}
