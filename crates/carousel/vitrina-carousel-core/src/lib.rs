//! Vitrina Carousel Core (renderer-agnostic)
//!
//! A per-frame simulation that maps each row's scroll state (arc-length
//! position + velocity) into 3D poses for items arranged on a concave,
//! IMAX-style circular surface, with hover/selection emphasis, idle
//! snapping, and velocity-based leaning. The host supplies rows of opaque
//! payloads, calls [`Carousel::update`] once per rendered frame, and
//! applies the returned transform records to its own scene objects; the
//! engine fetches, stores, and renders nothing itself.
//!
//! ```
//! use vitrina_carousel_core::{Carousel, CarouselConfig};
//!
//! let mut carousel: Carousel<&str> = Carousel::new(CarouselConfig::default());
//! carousel.rebuild(vec![vec!["a", "b", "c", "d", "e"]]);
//! let outputs = carousel.update(1.0 / 60.0);
//! assert_eq!(outputs.records.len(), 5);
//! ```

pub mod config;
pub mod engine;
pub mod frame_loop;
mod layout;
pub mod math;
pub mod outputs;
pub mod rows_json;
pub mod state;

// Re-exports for consumers (adapters)
pub use config::{CarouselConfig, ConfigPatch, MIN_RADIUS};
pub use engine::Carousel;
pub use frame_loop::{FrameClock, FrameLoop};
pub use math::{approach, wrap_delta};
pub use outputs::{Outputs, RotationDeg, TransformRecord, Vec3};
pub use rows_json::{parse_rows_json, rows_from_value, RowsError};
pub use state::{Mode, SlotRef};
