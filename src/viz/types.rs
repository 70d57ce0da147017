//! Public types and constants for the poster layout.

use crate::error::{PosterError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Pixel columns and first row of one ranked list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLayout {
    pub rank_x: i32,
    pub location_x: i32,
    /// Center of the value text.
    pub value_x: i32,
    pub unit_x: i32,
    /// Vertical center of the first row.
    pub start_y: i32,
}

/// Font sizes in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSizes {
    pub date: f64,
    pub rank: f64,
    pub location: f64,
    pub value: f64,
    pub unit: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            date: 38.0,
            rank: 34.0,
            location: 34.0,
            value: 60.0,
            unit: 18.0,
        }
    }
}

/// Where everything goes on the template. Defaults match the full-size poster template.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    /// Center of the date text.
    pub date: (i32, i32),
    pub date_color: (u8, u8, u8),
    pub top: ListLayout,
    pub bottom: ListLayout,
    /// Distance between consecutive rows.
    pub row_step: i32,
    /// Offset of the upper unit line from the row center.
    pub unit_upper_dy: i32,
    /// Offset of the lower unit line from the row center.
    pub unit_lower_dy: i32,
    pub font_sizes: FontSizes,
}

impl Default for Layout {
    fn default() -> Self {
        let top = ListLayout {
            rank_x: 650,
            location_x: 710,
            value_x: 950,
            unit_x: 1020,
            start_y: 415,
        };
        Self {
            date: (540, 250),
            date_color: (0, 77, 136),
            top,
            bottom: ListLayout {
                start_y: 665,
                ..top
            },
            row_step: 44,
            unit_upper_dy: -15,
            unit_lower_dy: 5,
            font_sizes: FontSizes::default(),
        }
    }
}

impl Layout {
    /// Read a layout from JSON. Any field left out, at any depth, keeps its default.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let err = |reason: String| PosterError::Layout {
            path: path.to_path_buf(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| err(e.to_string()))?;
        Self::from_json_str(&text).map_err(|e| err(e.to_string()))
    }

    /// Overlay a (possibly partial) JSON layout on [`Layout::default`].
    pub fn from_json_str(text: &str) -> serde_json::Result<Self> {
        let patch: Value = serde_json::from_str(text)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge(&mut merged, patch);
        serde_json::from_value(merged)
    }

    /// Vertical center of row `index` (0-based) of a list.
    pub fn row_y(&self, list: &ListLayout, index: usize) -> i32 {
        list.start_y + index as i32 * self.row_step
    }
}

/// Objects merge key by key; anything else replaces the base value.
fn merge(base: &mut Value, patch: Value) {
    match (base, patch) {
        (Value::Object(base), Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

/// Upper line of the unit label ("µg/").
pub const UNIT_UPPER: &str = "มคก./";
/// Lower line of the unit label ("m³").
pub const UNIT_LOWER: &str = "ลบ.ม.";

/// Bold and regular font files used on the poster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPaths {
    pub bold: PathBuf,
    pub regular: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            bold: PathBuf::from("Sarabun-Bold.ttf"),
            regular: PathBuf::from("Sarabun-Regular.ttf"),
        }
    }
}
