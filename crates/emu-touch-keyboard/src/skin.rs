//! Declarative skin tables.
//!
//! A skin table lists, per keyboard image, the pixel boundaries that the
//! keyboard constructors turn into rows, spans and polygons. Values must
//! match the artwork exactly, so they are stored as data rather than code:
//!
//! ```json
//! { "skins": [
//!     { "name": "C64 Keyboard", "family": "c64",
//!       "rows": [69, 257, 446, 635, 824, 1012], "top_half_left": 100, ... }
//! ] }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tables for the skins shipped with the front end.
pub const BUILTIN_SKINS: &str = include_str!("../data/skins.json");

/// One entry of a skin table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinDefinition {
    /// Name the skin is looked up by.
    pub name: String,
    /// Artwork name, when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub family: SkinFamily,
}

impl SkinDefinition {
    #[must_use]
    pub fn image_name(&self) -> &str {
        self.image.as_deref().unwrap_or(&self.name)
    }
}

/// Physical layout family of a skin, with its boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum SkinFamily {
    /// C64, VIC-20 and relatives: combined cursor keys, function key column.
    #[serde(rename = "c64")]
    C64(C64Skin),
    /// Plus/4: function key row and a diamond cursor cluster.
    #[serde(rename = "plus4")]
    Plus4(Plus4Skin),
}

impl SkinFamily {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::C64(_) => "c64",
            Self::Plus4(_) => "plus4",
        }
    }
}

fn default_true() -> bool {
    true
}

/// Boundaries of a C64-family skin.
///
/// The top two key rows are offset from the bottom two on the real
/// machine, hence separate left/right edges for each half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct C64Skin {
    /// Edges between the five key rows, top to bottom.
    pub rows: [i32; 6],
    pub top_half_left: i32,
    pub top_half_right: i32,
    pub bottom_half_left: i32,
    pub bottom_half_right: i32,
    pub function_keys_left: i32,
    pub function_keys_right: i32,
    pub space_left: i32,
    pub space_right: i32,
    pub ctrl_right: i32,
    pub restore_left: i32,
    pub return_left: i32,
    pub left_shift_left: i32,
    pub left_shift_right: i32,
    pub right_shift_left: i32,
    pub right_shift_right: i32,
    /// Lock key is SHIFT LOCK (true) or C= LOCK (false).
    #[serde(default = "default_true")]
    pub lock_is_shift: bool,
    /// Pound key prints a yen sign.
    #[serde(default)]
    pub pound_is_yen: bool,
}

/// Boundaries of a Plus/4 skin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plus4Skin {
    /// Edges between the six key rows (function keys first), top to bottom.
    pub rows: [i32; 7],
    pub function_left: i32,
    pub function_right: i32,
    pub left: i32,
    pub right: i32,
    pub left_control_right: i32,
    pub right_control_left: i32,
    pub return_left: i32,
    pub return_right: i32,
    pub left_shift_left: i32,
    pub left_shift_right: i32,
    pub right_shift_left: i32,
    pub right_shift_right: i32,
    pub space_left: i32,
    pub space_right: i32,
    /// Box around the diamond cursor cluster.
    pub cursor_top: f64,
    pub cursor_left: f64,
    pub cursor_right: f64,
    pub cursor_bottom: f64,
}

#[derive(Debug, Deserialize)]
struct SkinTable {
    skins: Vec<SkinDefinition>,
}

/// Parse a skin table document.
pub fn parse_skins(json: &str) -> Result<Vec<SkinDefinition>, ConfigError> {
    let table: SkinTable = serde_json::from_str(json)?;
    Ok(table.skins)
}
