//! Render-loop settings shared by both front-ends.
//!
//! The web page supplies them as `data-*` attributes on `<body>`, the native
//! preview as command-line flags. Defaults reproduce the site as shipped.

use crate::clock::RotationMode;
use crate::error::{Result, VisualsError};
use log::LevelFilter;

pub const KEY_ROTATION: &str = "rotation";
pub const KEY_PAUSE_HIDDEN: &str = "pause-hidden";
pub const KEY_LOG: &str = "log";

#[derive(Clone, Debug, PartialEq)]
pub struct LoopConfig {
    pub rotation: RotationMode,
    /// Skip update and submit while the page is hidden. Off by default.
    pub pause_when_hidden: bool,
    pub log_level: LevelFilter,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            rotation: RotationMode::PerFrame,
            pause_when_hidden: false,
            log_level: LevelFilter::Info,
        }
    }
}

impl LoopConfig {
    /// Apply one `key = value` setting. Unknown keys are ignored.
    pub fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = || VisualsError::InvalidConfig {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            KEY_ROTATION => self.rotation = value.parse().map_err(|_| invalid())?,
            KEY_PAUSE_HIDDEN => self.pause_when_hidden = parse_flag(value).ok_or_else(invalid)?,
            KEY_LOG => self.log_level = value.trim().parse().map_err(|_| invalid())?,
            _ => log::debug!("[config] ignoring unknown key `{}`", key),
        }
        Ok(())
    }

    /// Build from key/value pairs, keeping the default for any bad value.
    ///
    /// Returns the config together with the errors that were skipped so the
    /// caller can report them once logging is up.
    pub fn from_pairs<'a, I>(pairs: I) -> (Self, Vec<VisualsError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut cfg = Self::default();
        let mut errors = Vec::new();
        for (key, value) in pairs {
            if let Err(e) = cfg.apply(key, value) {
                errors.push(e);
            }
        }
        (cfg, errors)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
