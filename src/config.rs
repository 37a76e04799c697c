//! Server configuration assembled once at startup from the process environment.

use std::collections::BTreeMap;
use std::env;
use std::time::Duration;

use validator::{Validate, ValidationError};

use crate::services::flutter_env::exported_keys;

/// Value shipped in sample `.env` files that must never reach the backend.
pub const PLACEHOLDER_PROJECT_ID: &str = "your_sanity_project_id_here";
/// Query API version pinned for every backend request.
pub const SANITY_API_VERSION: &str = "2023-05-03";

/// Connection settings for the headless content backend.
#[derive(Debug, Clone, Validate)]
pub struct SanityConfig {
    #[validate(length(min = 1), custom(function = "reject_placeholder"))]
    pub project_id: String,
    #[validate(length(min = 1))]
    pub dataset: String,
    pub api_version: String,
    /// Query the CDN host instead of the live API.
    pub use_cdn: bool,
    /// Explicit base URL overriding the host derived from `project_id`.
    pub api_host: Option<String>,
    /// Optional bearer token for private datasets.
    pub token: Option<String>,
    pub timeout: Duration,
}

fn reject_placeholder(project_id: &str) -> Result<(), ValidationError> {
    if project_id.trim() == PLACEHOLDER_PROJECT_ID {
        return Err(ValidationError::new("placeholder"));
    }
    Ok(())
}

impl SanityConfig {
    /// Whether the backend client should be constructed at all.
    pub fn is_configured(&self) -> bool {
        self.validate().is_ok()
    }

    /// Base URL of the query API, e.g. `https://abc.api.sanity.io`.
    pub fn base_url(&self) -> String {
        match &self.api_host {
            Some(host) => host.trim_end_matches('/').to_string(),
            None if self.use_cdn => format!("https://{}.apicdn.sanity.io", self.project_id),
            None => format!("https://{}.api.sanity.io", self.project_id),
        }
    }

    /// Full URL of the query endpoint for the configured dataset.
    pub fn query_url(&self) -> String {
        format!(
            "{}/v{}/data/query/{}",
            self.base_url(),
            self.api_version,
            self.dataset
        )
    }
}

/// Deployment environment reported by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Staging,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            _ => Self::Development,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Staging => "staging",
            Self::Production => "production",
        }
    }
}

/// General application settings.
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub app_name: String,
    pub environment: AppEnvironment,
    pub is_debug: bool,
}

/// Payment provider settings forwarded to the embedded client through the
/// shell page loader.
#[derive(Debug, Clone)]
pub struct GoKwikConfig {
    pub merchant_id: String,
    pub environment: String,
    pub is_sandbox: bool,
    pub enable_logging: bool,
}

/// Location and loader settings of the pre-built client bundle.
#[derive(Debug, Clone)]
pub struct BundleConfig {
    /// Directory on disk holding the bundle.
    pub bundle_dir: String,
    /// Public URL prefix the bundle is served under (trailing slash).
    pub asset_base: String,
    pub canvaskit_base_url: String,
    pub renderer: String,
    /// Ceiling of the bounded wait for the bootstrap script.
    pub bootstrap_attempts: u32,
    pub bootstrap_interval: Duration,
}

impl BundleConfig {
    pub const BOOTSTRAP_FILE: &'static str = "flutter_bootstrap.js";
}

/// Immutable server configuration passed explicitly to every component.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates: String,
    pub sanity: SanityConfig,
    pub app: AppSettings,
    pub gokwik: GoKwikConfig,
    pub bundle: BundleConfig,
    /// Snapshot of the variables re-exported by the `.env` endpoint.
    pub exported_env: BTreeMap<String, String>,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let var_or = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());
        let flag = |key: &str| var(key).map(|value| value == "true").unwrap_or(false);
        let number = |key: &str, default: u64| {
            var(key)
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(default)
        };

        let port = var_or("PORT", "8080").parse::<u16>().unwrap_or(8080);

        let sanity = SanityConfig {
            project_id: var_or("SANITY_PROJECT_ID", ""),
            dataset: var_or("SANITY_DATASET", "production"),
            api_version: SANITY_API_VERSION.to_string(),
            use_cdn: flag("SANITY_USE_CDN"),
            api_host: var("SANITY_API_HOST"),
            token: var("SANITY_TOKEN"),
            timeout: Duration::from_secs(number("SANITY_TIMEOUT_SECS", 10).max(1)),
        };

        let environment = AppEnvironment::parse(&var_or("APP_ENV", "development"));
        let app = AppSettings {
            app_name: var_or("APP_NAME", "Design Wear"),
            environment,
            is_debug: environment == AppEnvironment::Development,
        };

        let gokwik_environment = var_or("GOKWIK_ENVIRONMENT", "sandbox");
        let gokwik = GoKwikConfig {
            merchant_id: var_or("GOKWIK_MERCHANT_ID", ""),
            is_sandbox: gokwik_environment != "production",
            environment: gokwik_environment,
            enable_logging: flag("DEBUG_MODE"),
        };

        let bundle = BundleConfig {
            bundle_dir: var_or("FLUTTER_BUNDLE_DIR", "./public/flutter-assets"),
            asset_base: "/flutter-assets/".to_string(),
            canvaskit_base_url: "/flutter-assets/canvaskit/".to_string(),
            renderer: var_or("FLUTTER_RENDERER", "canvaskit"),
            bootstrap_attempts: u32::try_from(number("FLUTTER_BOOTSTRAP_ATTEMPTS", 50))
                .unwrap_or(u32::MAX)
                .max(1),
            bootstrap_interval: Duration::from_millis(number("FLUTTER_BOOTSTRAP_INTERVAL_MS", 100)),
        };

        let exported_env = exported_keys()
            .filter_map(|key| lookup(key).map(|value| (key.to_string(), value)))
            .filter(|(_, value)| !value.is_empty())
            .collect();

        Self {
            address: var_or("ADDRESS", "127.0.0.1"),
            port,
            templates: var_or("TEMPLATES_DIR", "templates/**/*"),
            sanity,
            app,
            gokwik,
            bundle,
            exported_env,
        }
    }
}
