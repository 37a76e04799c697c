//! Server side of embedding the pre-built client bundle.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use actix_files::Files;
use serde::Serialize;
use thiserror::Error;

use crate::config::{BundleConfig, ServerConfig};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShellError {
    #[error("bootstrap script {path} did not appear after {attempts} attempts")]
    BootstrapTimeout { path: String, attempts: u32 },
    #[error("bundle mount already in progress")]
    AlreadyMounting,
}

/// Poll for `path` to exist, at most `attempts` times `interval` apart.
pub async fn wait_for_file(path: &Path, attempts: u32, interval: Duration) -> Result<(), ShellError> {
    for attempt in 1..=attempts {
        if path.is_file() {
            return Ok(());
        }
        if attempt < attempts {
            actix_web::rt::time::sleep(interval).await;
        }
    }

    Err(ShellError::BootstrapTimeout {
        path: path.display().to_string(),
        attempts,
    })
}

/// Resets the in-flight flag however the mount attempt ends.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Tracks whether the bundle on disk is ready to be served.
pub struct BundleMount {
    config: BundleConfig,
    mounting: AtomicBool,
    mounted: AtomicBool,
}

impl BundleMount {
    pub fn new(config: BundleConfig) -> Self {
        Self {
            config,
            mounting: AtomicBool::new(false),
            mounted: AtomicBool::new(false),
        }
    }

    pub fn config(&self) -> &BundleConfig {
        &self.config
    }

    pub fn bootstrap_path(&self) -> PathBuf {
        Path::new(&self.config.bundle_dir).join(BundleConfig::BOOTSTRAP_FILE)
    }

    /// Wait for the bootstrap script and mark the bundle as mounted.
    ///
    /// Only one attempt may run at a time; a concurrent call fails with
    /// [`ShellError::AlreadyMounting`] instead of waiting.
    pub async fn mount(&self) -> Result<(), ShellError> {
        if self
            .mounting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ShellError::AlreadyMounting);
        }
        let _guard = InFlight(&self.mounting);

        if self.is_mounted() {
            return Ok(());
        }

        let path = self.bootstrap_path();
        wait_for_file(
            &path,
            self.config.bootstrap_attempts,
            self.config.bootstrap_interval,
        )
        .await?;

        self.mounted.store(true, Ordering::Release);
        log::info!("Client bundle mounted from {}", self.config.bundle_dir);
        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Best-effort unmount; never fails.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::AcqRel) {
            log::info!("Client bundle unmounted");
        }
    }

    /// Static file service for the bundle, relative to its mount scope.
    pub fn files(&self) -> Files {
        Files::new("", &self.config.bundle_dir).index_file("index.html")
    }
}

/// Payment provider settings handed to the embedded client.
#[derive(Debug, Serialize)]
pub struct PaymentContext {
    pub merchant_id: String,
    pub environment: String,
    pub sandbox: bool,
    pub logging: bool,
}

/// Values interpolated into the shell page loader.
#[derive(Debug, Serialize)]
pub struct ShellContext {
    pub app_name: String,
    pub environment: &'static str,
    pub debug: bool,
    pub payments: PaymentContext,
    pub flutter_id: String,
    pub asset_base: String,
    pub canvaskit_base_url: String,
    pub renderer: String,
    pub bootstrap_attempts: u32,
    pub bootstrap_interval_ms: u64,
    pub bundle_mounted: bool,
}

impl ShellContext {
    pub fn new(config: &ServerConfig, bundle: &BundleMount, flutter_id: impl Into<String>) -> Self {
        let bundle_config = bundle.config();
        Self {
            app_name: config.app.app_name.clone(),
            environment: config.app.environment.as_str(),
            debug: config.app.is_debug,
            payments: PaymentContext {
                merchant_id: config.gokwik.merchant_id.clone(),
                environment: config.gokwik.environment.clone(),
                sandbox: config.gokwik.is_sandbox,
                logging: config.gokwik.enable_logging,
            },
            flutter_id: flutter_id.into(),
            asset_base: bundle_config.asset_base.clone(),
            canvaskit_base_url: bundle_config.canvaskit_base_url.clone(),
            renderer: bundle_config.renderer.clone(),
            bootstrap_attempts: bundle_config.bootstrap_attempts,
            bootstrap_interval_ms: bundle_config.bootstrap_interval.as_millis() as u64,
            bundle_mounted: bundle.is_mounted(),
        }
    }

    /// JSON for an inline `<script>` block.
    ///
    /// `<`, `>` and `&` are written as unicode escapes so no value can close
    /// the surrounding script element.
    pub fn script_json(&self) -> serde_json::Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json
            .replace('<', "\\u003c")
            .replace('>', "\\u003e")
            .replace('&', "\\u0026"))
    }
}
