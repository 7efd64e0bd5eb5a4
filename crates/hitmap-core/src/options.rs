//! Configuration options for hitmap picking.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::id::MAX_HIT_ID;

/// Options controlling identifier allocation and progressive picking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitmapOptions {
    /// Whether id 0 is kept for the cleared background and never allocated.
    pub reserve_background: bool,

    /// Maximum number of ids a single identification pass may allocate.
    /// Defaults to every value the pick color codec can encode.
    pub max_ids_per_pass: u32,

    /// Maximum number of overlapping layers one pointer query peels.
    pub max_pick_depth: usize,
}

impl Default for HitmapOptions {
    fn default() -> Self {
        Self {
            reserve_background: true,
            max_ids_per_pass: MAX_HIT_ID + 1,
            max_pick_depth: 8,
        }
    }
}

impl HitmapOptions {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Saves options to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
