//! Pointer-reactive grid animation engine.
//!
//! The engine owns a flat arena of cells laid out over the viewport, tracks a
//! single normalized pointer stream, and advances per-cell animation from a
//! caller-supplied millisecond clock. It has no platform dependencies; the web
//! frontend feeds it input events and animation-frame timestamps and draws the
//! resulting [`visual::Sprite`]s.

pub mod cell;
pub mod color;
pub mod config;
pub mod constants;
pub mod device;
pub mod easing;
pub mod engine;
pub mod error;
pub mod field;
pub mod grid;
pub mod pointer;
pub mod radius;
pub mod release;
pub mod scheduler;
pub mod visual;

pub use cell::{Cell, CellValues, Phase};
pub use color::Rgb;
pub use config::{Variant, VariantConfig};
pub use device::DeviceClass;
pub use engine::Engine;
pub use error::ConfigError;
pub use grid::{Grid, GridLayout, GridSpec, Rounding, Viewport};
pub use pointer::{InputOutcome, PointerInput, PointerState};
pub use radius::{RadiusController, RadiusGrowth};
pub use visual::{Glyph, Sprite};
