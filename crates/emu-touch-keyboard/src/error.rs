//! Configuration errors raised while building skins.
//!
//! Hit queries never fail. Everything that can go wrong is caught when a
//! skin table is turned into a [`crate::Keyboard`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Span with zero or negative width.
    #[error("span [{left}, {right}) has no width")]
    EmptySpanRange { left: i32, right: i32 },

    /// Span without any keys to divide its range among.
    #[error("span [{left}, {right}) has no keys")]
    NoKeys { left: i32, right: i32 },

    /// Row with zero or negative height.
    #[error("row [{top}, {bottom}) has no height")]
    EmptyRowRange { top: i32, bottom: i32 },

    /// Cursor cluster box that cannot hold a diamond.
    #[error("cursor cluster ({left}, {top})-({right}, {bottom}) is degenerate")]
    DegenerateCursorCluster {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    #[error("skin '{0}' is defined more than once")]
    DuplicateSkin(String),

    #[error("skin '{name}': {source}")]
    InvalidSkin {
        name: String,
        #[source]
        source: Box<ConfigError>,
    },

    #[error("cannot read skin table: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed skin table: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn in_skin(self, name: &str) -> Self {
        Self::InvalidSkin {
            name: name.to_string(),
            source: Box::new(self),
        }
    }
}
