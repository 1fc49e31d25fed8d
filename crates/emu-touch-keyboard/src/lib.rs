//! Touch hit-testing for on-screen Commodore keyboard skins.
//!
//! Each skin is a photograph of a real keyboard. A touch point, already
//! converted into the image's pixel space by the caller, is resolved to a
//! logical [`Key`] in two tiers: axis-aligned rows of evenly divided spans
//! cover almost every key, and polygons catch the few irregular regions
//! (the Plus/4 diamond cursor cluster) only when no row claims the point.
//!
//! Skins are built once from declarative tables and never change. The
//! process-wide catalogue is reached through [`keyboard()`].

mod error;
mod geometry;
mod key;
mod keyboard;
mod layout;
pub mod registry;
pub mod skin;
pub mod symbols;

pub use error::ConfigError;
pub use geometry::{Bounds, Point, Polygon};
pub use key::Key;
pub use keyboard::Keyboard;
pub use layout::{Layout, Row, Span};
pub use registry::{Registry, keyboard};
pub use skin::{C64Skin, Plus4Skin, SkinDefinition, SkinFamily};
pub use symbols::{KeySymbol, KeySymbols, KeyboardSymbols};
