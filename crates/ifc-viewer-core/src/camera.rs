// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Camera poses, bounding volumes and model framing

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Smallest framing distance used for zero-extent models
pub const MIN_FRAME_DISTANCE: f64 = 1.0;

/// Axis-aligned bounding box in world units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    /// Create a bounding box from its two corners
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Build from the flat `[min_x, min_y, min_z, max_x, max_y, max_z]` layout
    /// engines usually hand back
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values {
            [a, b, c, d, e, f] => Some(Self::new(
                Point3::new(*a, *b, *c),
                Point3::new(*d, *e, *f),
            )),
            _ => None,
        }
    }

    /// Center point
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Size along each axis
    pub fn extent(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Largest of the three axis extents
    pub fn max_extent(&self) -> f64 {
        self.extent().max()
    }

    /// A box is usable when all coordinates are finite and min <= max on every axis
    pub fn is_valid(&self) -> bool {
        let finite = self.min.iter().chain(self.max.iter()).all(|v| v.is_finite());
        finite && self.min.iter().zip(self.max.iter()).all(|(lo, hi)| lo <= hi)
    }
}

/// Camera position plus look-at target
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
}

impl CameraPose {
    pub fn new(position: Point3<f64>, target: Point3<f64>) -> Self {
        Self { position, target }
    }

    /// Distance between camera and target
    pub fn distance(&self) -> f64 {
        (self.position - self.target).norm()
    }
}

impl Default for CameraPose {
    /// Isometric pose at (15, 15, 15) looking at the origin
    fn default() -> Self {
        Self::new(Point3::new(15.0, 15.0, 15.0), Point3::origin())
    }
}

/// How a model gets framed by the camera
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Framing {
    /// Multiplier on the largest bounding box extent
    pub distance_factor: f64,
    /// Offset direction from the box center, scaled by the distance
    pub direction: Vector3<f64>,
}

impl Default for Framing {
    fn default() -> Self {
        Self {
            distance_factor: 1.5,
            direction: Vector3::new(1.0, 0.7, 1.0),
        }
    }
}

impl Framing {
    /// Pose that shows the whole box
    ///
    /// The camera sits at `center + distance * direction` and looks at the
    /// center, with `distance = distance_factor * max_extent`. Returns `None`
    /// for boxes that are inverted or contain non-finite values.
    pub fn pose_for(&self, bounds: &BoundingBox) -> Option<CameraPose> {
        if !bounds.is_valid() {
            return None;
        }
        let center = bounds.center();
        let mut distance = self.distance_factor * bounds.max_extent();
        if distance <= 0.0 {
            distance = MIN_FRAME_DISTANCE;
        }
        Some(CameraPose::new(center + self.direction * distance, center))
    }
}
