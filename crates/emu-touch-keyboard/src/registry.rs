//! Catalogue of keyboard skins by name.
//!
//! The built-in catalogue is assembled on first use and frozen for the
//! rest of the process. Concurrent first lookups block until the one
//! construction finishes; nobody ever sees a partly filled table.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::ConfigError;
use crate::keyboard::Keyboard;
use crate::skin::{BUILTIN_SKINS, SkinDefinition, parse_skins};

/// Immutable name → keyboard map.
#[derive(Debug, Default)]
pub struct Registry {
    keyboards: HashMap<String, Keyboard>,
}

impl Registry {
    /// Build every skin of a JSON skin table.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_definitions(parse_skins(json)?)
    }

    /// Build every skin in `definitions`. Any invalid skin or repeated
    /// name fails the whole registry.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = SkinDefinition>,
    ) -> Result<Self, ConfigError> {
        let mut keyboards = HashMap::new();
        for definition in definitions {
            if keyboards.contains_key(&definition.name) {
                return Err(ConfigError::DuplicateSkin(definition.name));
            }
            let keyboard = Keyboard::from_definition(&definition)?;
            debug!(
                skin = %definition.name,
                family = definition.family.label(),
                rows = keyboard.layout().rows().len(),
                polygons = keyboard.layout().polygons().len(),
                "built keyboard skin"
            );
            keyboards.insert(definition.name, keyboard);
        }
        Ok(Self { keyboards })
    }

    /// The skins shipped with the front end.
    ///
    /// # Panics
    ///
    /// Panics on first use if the embedded skin table is invalid.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let registry = Self::from_json(BUILTIN_SKINS)
                .unwrap_or_else(|e| panic!("built-in skin table is invalid: {e}"));
            debug!(skins = registry.len(), "keyboard registry ready");
            registry
        })
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Keyboard> {
        self.keyboards.get(name)
    }

    /// Skin names in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.keyboards.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keyboards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyboards.is_empty()
    }
}

/// Look up a built-in skin. `None` means no such skin exists, which the
/// caller should treat as a configuration fault.
#[must_use]
pub fn keyboard(name: &str) -> Option<&'static Keyboard> {
    Registry::builtin().get(name)
}
