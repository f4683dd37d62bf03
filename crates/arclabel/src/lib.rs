//! Curved area-label placement.
//!
//! Given a clearance-annotated skeleton of an elongated shape and the shape's
//! boundary segments, find a circle, angular range and half-height for a
//! label that bends along the shape without crossing its boundary.
//!
//! Pipeline
//! - `skeleton`: candidate paths through the wide parts of the skeleton.
//! - `label`: circle fit per path, wedge ceilings per boundary segment,
//!   interval sweep, scoring and selection.
//!
//! All computation is synchronous and pure; nothing persists between calls.

pub mod api;
pub mod error;
pub mod geom;
pub mod label;
pub mod rand;
pub mod skeleton;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{LabelError, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{LabelError, Result};
    pub use crate::geom::{Circle, GeomCfg, LmCfg, Path, Point, Segment};
    pub use crate::label::{best_placement, place_label, LabelCfg, Placement};
    pub use crate::rand::{corridor, draw_corridor, Corridor, CorridorCfg, ReplayToken};
    pub use crate::skeleton::{GraphEdge, PathCfg, PathMode, SkeletonGraph};
    pub use nalgebra::Vector2 as Vec2;
}
