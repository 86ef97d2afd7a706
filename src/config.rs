//! Configuration management
//!
//! Everything a run needs that is not code: sender and copy list, scoping
//! lists, template choice, release schedule, SMTP relay and phonebook path.
//! Config is stored at `~/.relnag/config.toml` unless overridden.
//!
//! ```toml
//! phonebook = "people.json"
//!
//! [nag]
//! from = "release-mgmt@example.com"
//! cc = ["release-drivers@example.com"]
//! template = "tracking_nag.html"
//! deny_list = ["contractors-lead@example.com"]
//!
//! [nag.extra]
//! release = "Firefox 133"
//!
//! [release]
//! dates = ["2026-11-10", "2026-12-08"]
//!
//! [smtp]
//! host = "smtp.example.com"
//! username = "nagbot"
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::adapters::ScheduleCalendar;
use crate::core::services::{DEFAULT_FROM, DeliverySettings, Eligibility, NagPolicy};
use crate::paths;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Phonebook JSON file; relative paths are resolved against the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonebook: Option<PathBuf>,

    /// Nag policy and delivery defaults
    #[serde(default)]
    pub nag: NagConfig,

    /// Release schedule
    #[serde(default)]
    pub release: ReleaseConfig,

    /// SMTP relay; without it only dry runs can deliver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub smtp: Option<SmtpConfig>,
}

/// Policy and delivery settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NagConfig {
    /// Sender address
    #[serde(default = "default_from")]
    pub from: String,

    /// Addresses copied on every message
    #[serde(default)]
    pub cc: Vec<String>,

    /// Whether delivery happens at all
    #[serde(default = "default_send")]
    pub send: bool,

    /// Subject line
    #[serde(default = "default_title")]
    pub title: String,

    /// Nag template name (e.g. `tracking_nag.html`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// Only people under these managers are nagged
    #[serde(default)]
    pub allow_list: Vec<String>,

    /// People under these managers are never nagged
    #[serde(default)]
    pub deny_list: Vec<String>,

    /// Extra values handed to the template
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

fn default_from() -> String {
    DEFAULT_FROM.to_string()
}

const fn default_send() -> bool {
    true
}

fn default_title() -> String {
    "Issues needing attention before the release".to_string()
}

impl Default for NagConfig {
    fn default() -> Self {
        Self {
            from: default_from(),
            cc: Vec::new(),
            send: default_send(),
            title: default_title(),
            template: None,
            allow_list: Vec::new(),
            deny_list: Vec::new(),
            extra: BTreeMap::new(),
        }
    }
}

/// Release schedule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseConfig {
    /// Release dates (`YYYY-MM-DD`), any order
    #[serde(default)]
    pub dates: Vec<NaiveDate>,
}

/// SMTP relay settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpConfig {
    /// Relay host name
    pub host: String,

    /// Relay port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Use STARTTLS instead of implicit TLS
    #[serde(default = "default_starttls")]
    pub starttls: bool,

    /// Login name; no authentication when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Environment variable holding the password
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

const fn default_port() -> u16 {
    587
}

const fn default_starttls() -> bool {
    true
}

fn default_password_env() -> String {
    "RELNAG_SMTP_PASSWORD".to_string()
}

impl Config {
    /// Get the default config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from `path`, or defaults if the file does not exist
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;

        if let (Some(phonebook), Some(dir)) = (&config.phonebook, path.parent()) {
            if phonebook.is_relative() {
                config.phonebook = Some(dir.join(phonebook));
            }
        }

        Ok(config)
    }

    /// Save config to `path`
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Delivery defaults for a run
    #[must_use]
    pub fn delivery_settings(&self) -> DeliverySettings {
        DeliverySettings {
            from: self.nag.from.clone(),
            cc: self.nag.cc.iter().cloned().collect::<BTreeSet<_>>(),
            send: self.nag.send,
        }
    }

    /// Rendering and scoping policy for a run
    #[must_use]
    pub fn policy(&self) -> NagPolicy {
        NagPolicy {
            template: self.nag.template.clone(),
            extra: self.nag.extra.clone(),
            eligibility: Eligibility::new(self.nag.allow_list.clone(), self.nag.deny_list.clone()),
        }
    }

    /// Release calendar from the configured schedule
    #[must_use]
    pub fn calendar(&self) -> ScheduleCalendar {
        ScheduleCalendar::new(self.release.dates.clone())
    }
}
