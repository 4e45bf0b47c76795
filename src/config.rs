//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Default EmailJS API origin
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com";

const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
const ENDPOINT_VAR: &str = "EMAILJS_ENDPOINT";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// EmailJS service identifier
    pub emailjs_service_id: Option<String>,
    /// EmailJS template identifier
    pub emailjs_template_id: Option<String>,
    /// EmailJS public key
    pub emailjs_public_key: Option<String>,
    /// Override for the EmailJS API origin
    pub emailjs_endpoint: Option<String>,
}

impl SiteConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("ca", "sarinaskitchen", "kitchen-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn data_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: SiteConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the relay settings, letting environment variables win over the file
    pub fn relay_config(&self) -> RelayConfig {
        self.relay_config_with(|var| std::env::var(var).ok())
    }

    fn relay_config_with(&self, env: impl Fn(&str) -> Option<String>) -> RelayConfig {
        let pick = |var: &str, file: &Option<String>| {
            non_empty(env(var)).or_else(|| non_empty(file.clone()))
        };
        RelayConfig {
            service_id: pick(SERVICE_ID_VAR, &self.emailjs_service_id),
            template_id: pick(TEMPLATE_ID_VAR, &self.emailjs_template_id),
            public_key: pick(PUBLIC_KEY_VAR, &self.emailjs_public_key),
            endpoint: pick(ENDPOINT_VAR, &self.emailjs_endpoint)
                .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Relay configuration problems. Not retryable without new configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing mail relay configuration: {}", .missing.join(", "))]
    MissingCredentials { missing: Vec<&'static str> },
}

/// Credentials the mail relay needs for every call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Read-only relay settings, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub endpoint: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
        }
    }
}

impl RelayConfig {
    /// All three credentials, or the names of the ones that are missing
    pub fn credentials(&self) -> Result<RelayCredentials, ConfigError> {
        match (&self.service_id, &self.template_id, &self.public_key) {
            (Some(service_id), Some(template_id), Some(public_key)) => Ok(RelayCredentials {
                service_id: service_id.clone(),
                template_id: template_id.clone(),
                public_key: public_key.clone(),
            }),
            _ => {
                let missing = [
                    (SERVICE_ID_VAR, &self.service_id),
                    (TEMPLATE_ID_VAR, &self.template_id),
                    (PUBLIC_KEY_VAR, &self.public_key),
                ]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| name)
                .collect();
                Err(ConfigError::MissingCredentials { missing })
            }
        }
    }
}
