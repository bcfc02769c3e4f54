//! Output contracts from the carousel engine.
//!
//! `update()` fills a retained [`Outputs`] buffer with one
//! [`TransformRecord`] per item (visible or not), row-major then
//! index-major. Hosts apply the records to their own scene objects; the
//! engine renders nothing itself.

use serde::{Deserialize, Serialize};

/// Position offset in metres. Negative z is closer to the viewer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Euler rotation in degrees. Roll is carried for completeness but always
/// exported as zero.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationDeg {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Per-item transform for one frame.
///
/// Invisible items carry only identity (`row`, `index`, `item`) and
/// `visible: false`; the pose fields are omitted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransformRecord<P> {
    pub row: usize,
    pub index: usize,
    /// The opaque payload supplied at rebuild, echoed back unchanged.
    pub item: P,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Vec3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<RotationDeg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

/// Outputs returned by `Carousel::update()`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Outputs<P> {
    pub records: Vec<TransformRecord<P>>,
}

impl<P> Default for Outputs<P> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<P> Outputs<P> {
    #[inline]
    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[inline]
    pub fn push(&mut self, record: TransformRecord<P>) {
        self.records.push(record);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
