use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::foundation::error::{OverlayError, OverlayResult};
use crate::layout::config::OverlayConfig;
use crate::pages::PageSet;
use crate::render::style::Style;

/// Everything tunable about a generation run. Missing fields keep their built-in values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Geometry of the landscape pages.
    pub landscape: OverlayConfig,
    /// Geometry of the portrait pages.
    pub portrait: OverlayConfig,
    /// Colors and radii.
    pub style: Style,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            landscape: OverlayConfig::landscape(),
            portrait: OverlayConfig::portrait(),
            style: Style::default(),
        }
    }
}

impl Settings {
    /// Parse JSON settings.
    pub fn from_reader(r: impl Read) -> OverlayResult<Self> {
        let settings: Self =
            serde_json::from_reader(r).map_err(|e| OverlayError::serde(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file.
    pub fn from_path(path: impl AsRef<Path>) -> OverlayResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| OverlayError::io(path, e))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate both orientation configs.
    pub fn validate(&self) -> OverlayResult<()> {
        self.landscape.validate()?;
        self.portrait.validate()?;
        if self.landscape.canvas.width < self.landscape.canvas.height {
            return Err(OverlayError::validation("landscape canvas must be wider than tall"));
        }
        if self.portrait.canvas.width > self.portrait.canvas.height {
            return Err(OverlayError::validation("portrait canvas must be taller than wide"));
        }
        Ok(())
    }

    /// The split-QWERTY page set for these settings.
    pub fn page_set(&self) -> OverlayResult<PageSet> {
        PageSet::split_qwerty(self.landscape.clone(), self.portrait.clone())
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
