use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Anchor, ConfigError, Layer, Margin};

/// Largest accepted surface edge, in pixels.
const MAX_DIMENSION: u32 = 16_384;

/// Surface configuration returned by a script's options function.
///
/// `width`, `height`, `layer` and `anchor` are required; the rest fall back
/// to host defaults. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowOptions {
    pub width: u32,
    pub height: u32,
    pub layer: Layer,
    pub anchor: Anchor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_zone: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self::new(100, 256, Layer::Bottom, Anchor::TOP)
    }
}

impl WindowOptions {
    /// Exclusive zone used when none is given: the surface neither reserves
    /// space nor is moved by other surfaces' zones.
    pub const DEFAULT_EXCLUSIVE_ZONE: i32 = -1;

    pub fn new(width: u32, height: u32, layer: Layer, anchor: Anchor) -> Self {
        Self {
            width,
            height,
            layer,
            anchor,
            exclusive_zone: None,
            margin: None,
            namespace: None,
        }
    }

    /// Parses and validates a JSON options document.
    pub fn from_json_str(src: &str) -> Result<Self, ConfigError> {
        let options: WindowOptions =
            serde_json::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reads, parses and validates a JSON options file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        log::debug!("loading window options from {}", path.display());
        Self::from_json_str(&src)
    }

    /// Checks the values a surface can actually be created with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [("width", self.width), ("height", self.height)] {
            if v == 0 || v > MAX_DIMENSION {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be in 1..={MAX_DIMENSION}, got {v}"
                )));
            }
        }
        if let Some(ns) = &self.namespace {
            if ns.trim().is_empty() {
                return Err(ConfigError::Invalid("namespace must not be blank".into()));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn effective_exclusive_zone(&self) -> i32 {
        self.exclusive_zone.unwrap_or(Self::DEFAULT_EXCLUSIVE_ZONE)
    }

    #[inline]
    pub fn effective_margin(&self) -> Margin {
        self.margin.unwrap_or_default()
    }

    /// Size of an ARGB8888 frame for this surface, in bytes.
    #[inline]
    pub fn frame_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }
}
