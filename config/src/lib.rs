//! Configuration for Folio.
//!
//! Read from `~/.folio/config.toml`. Every table and key is optional; absent
//! values fall back to the defaults in [`folio_types::motion`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_types::{MotionTimings, UiOptions};
use serde::Deserialize;
use thiserror::Error;

pub const REDUCED_MOTION_ENV: &str = "FOLIO_REDUCED_MOTION";
pub const NO_MOTION_ENV: &str = "NO_MOTION";

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub motion: Option<MotionConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Collapse every motion duration to zero.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Use ASCII-only glyphs for icons, arrows and bars.
    #[serde(default)]
    pub ascii_only: bool,
}

/// Per-effect durations in milliseconds.
#[derive(Debug, Default, Deserialize)]
pub struct MotionConfig {
    /// `0` disables autoclose.
    pub intro_autoclose: Option<u64>,
    pub intro_exit: Option<u64>,
    pub intro_curtain: Option<u64>,
    pub intro_ripple: Option<u64>,
    pub intro_progress: Option<u64>,
    pub route_reveal: Option<u64>,
    pub route_idle: Option<u64>,
    pub route_wipe: Option<u64>,
    pub link_delay: Option<u64>,
    pub section_reveal: Option<u64>,
    pub toast: Option<u64>,
}

impl MotionConfig {
    /// Overlay the configured values onto `base`.
    #[must_use]
    pub fn apply(&self, base: MotionTimings) -> MotionTimings {
        let ms = |value: Option<u64>, fallback: Duration| value.map_or(fallback, Duration::from_millis);
        MotionTimings {
            intro_autoclose: match self.intro_autoclose {
                Some(0) => None,
                Some(value) => Some(Duration::from_millis(value)),
                None => base.intro_autoclose,
            },
            intro_exit: ms(self.intro_exit, base.intro_exit),
            intro_curtain: ms(self.intro_curtain, base.intro_curtain),
            intro_ripple: ms(self.intro_ripple, base.intro_ripple),
            intro_progress: ms(self.intro_progress, base.intro_progress),
            route_reveal: ms(self.route_reveal, base.route_reveal),
            route_idle: ms(self.route_idle, base.route_idle),
            route_wipe: ms(self.route_wipe, base.route_wipe),
            link_delay: ms(self.link_delay, base.link_delay),
            section_reveal: ms(self.section_reveal, base.section_reveal),
            toast: ms(self.toast, base.toast),
        }
    }
}

impl FolioConfig {
    /// Load from the default path. `Ok(None)` when there is no file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let app = self.app.as_ref();
        UiOptions {
            ascii_only: app.is_some_and(|cfg| cfg.ascii_only),
            high_contrast: app.is_some_and(|cfg| cfg.high_contrast),
            reduced_motion: app.is_some_and(|cfg| cfg.reduced_motion),
        }
    }

    /// Configured timings, before the motion preference is applied.
    #[must_use]
    pub fn motion_timings(&self) -> MotionTimings {
        self.motion
            .as_ref()
            .map_or_else(MotionTimings::default, |motion| motion.apply(MotionTimings::default()))
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}

/// Settings taken from the process environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub reduced_motion: Option<bool>,
}

impl EnvOverrides {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `FOLIO_REDUCED_MOTION` takes precedence; a non-empty `NO_MOTION`
    /// requests reduced motion when it is unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let explicit = lookup(REDUCED_MOTION_ENV).and_then(|raw| {
            let parsed = parse_flag(&raw);
            if parsed.is_none() {
                tracing::warn!("Ignoring unrecognized {REDUCED_MOTION_ENV} value: {raw}");
            }
            parsed
        });
        let no_motion = lookup(NO_MOTION_ENV)
            .filter(|value| !value.trim().is_empty())
            .map(|_| true);
        Self {
            reduced_motion: explicit.or(no_motion),
        }
    }

    #[must_use]
    pub fn apply(self, options: UiOptions) -> UiOptions {
        UiOptions {
            reduced_motion: self.reduced_motion.unwrap_or(options.reduced_motion),
            ..options
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "0" | "false" | "off" | "no" => Some(false),
        "1" | "true" | "on" | "yes" => Some(true),
        _ => None,
    }
}

/// Everything the app needs from configuration, resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub ui: UiOptions,
    /// Effective timings: already collapsed when motion is reduced.
    pub timings: MotionTimings,
}

impl Settings {
    #[must_use]
    pub fn resolve(config: Option<&FolioConfig>, env: EnvOverrides) -> Self {
        let ui = env.apply(config.map(FolioConfig::ui_options).unwrap_or_default());
        let timings = config
            .map(FolioConfig::motion_timings)
            .unwrap_or_default()
            .effective(ui.motion());
        Self { ui, timings }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None, EnvOverrides::default())
    }
}
