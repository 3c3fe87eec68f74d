// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reconstructed structural entities
//!
//! All coordinates here are `y`-up viewer-frame positions; the axis swap
//! from the document frame happened during record extraction.

use std::fmt;

use nalgebra::{Point3, Vector3};

/// Whether a linear member runs vertically or horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Vertical member (column)
    Column,
    /// Horizontal or inclined member (beam)
    Beam,
}

impl MemberKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberKind::Column => "column",
            MemberKind::Beam => "beam",
        }
    }
}

impl fmt::Display for MemberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A linear structural member reconstructed from one skeleton edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Stable identifier carried over from the source record (`uuid`).
    pub id: String,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
    /// Owning floor. Columns take the higher endpoint floor (a column
    /// rising from floor 1 to floor 2 belongs to floor 2); beams take
    /// their start point's floor.
    pub floor_level: i64,
    pub kind: MemberKind,
}

impl Edge {
    /// Axis-aligned extent of the member along each axis, for box sizing.
    #[inline]
    pub fn dimensions(&self) -> Vector3<f64> {
        Vector3::new(
            (self.start.x - self.end.x).abs(),
            (self.start.y - self.end.y).abs(),
            (self.start.z - self.end.z).abs(),
        )
    }

    /// Euclidean length of the member.
    #[inline]
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }

    #[inline]
    pub fn is_column(&self) -> bool {
        self.kind == MemberKind::Column
    }
}

/// A slab polygon reconstructed from a single-floor face.
///
/// Points are ordered along the boundary; the loop closes implicitly from
/// the last point back to the first. Always at least three points, with
/// consecutive points distinct.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceLoop {
    /// Stable identifier carried over from the source face (`uuid`).
    pub id: String,
    /// The single floor all of this face's edges lie on.
    pub floor_level: i64,
    pub points: Vec<Point3<f64>>,
}

impl FaceLoop {
    /// Number of boundary points (equals the source face's edge count).
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
