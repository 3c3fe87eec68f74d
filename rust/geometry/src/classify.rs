// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Member classification: vertical vs horizontal, floor ownership, slab
//! detection

use nalgebra::Point3;
use skel_lite_core::skeleton::{EdgeRecord, FaceRecord};

use crate::error::{Error, Result};
use crate::member::{Edge, MemberKind};

/// Thresholds for the vertical-member test.
///
/// The bounds are unit-free and sized to the grid scale of the skeleton
/// schema: a member is vertical when it rises at all and drifts less than
/// one grid unit in plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifyParams {
    /// Minimum height-axis delta for a member to count as rising.
    pub min_rise: f64,
    /// Maximum plan drift (per horizontal axis) for a rising member to
    /// still count as a column.
    pub max_plan_drift: f64,
}

impl Default for ClassifyParams {
    fn default() -> Self {
        Self {
            min_rise: 0.0,
            max_plan_drift: 1.0,
        }
    }
}

/// True when the segment from `start` to `end` is near-vertical: it rises
/// along `y` and stays within plan-drift bounds on `x` and `z`.
pub fn is_vertical(start: &Point3<f64>, end: &Point3<f64>, params: &ClassifyParams) -> bool {
    (start.y - end.y).abs() > params.min_rise
        && (start.x - end.x).abs() < params.max_plan_drift
        && (start.z - end.z).abs() < params.max_plan_drift
}

/// Classifies one raw edge record into a structural member.
///
/// Applies the axis remap, decides column vs beam, and assigns the owning
/// floor. Fails with [`Error::DegenerateEdge`] when the endpoints
/// coincide.
pub fn classify_edge(record: &EdgeRecord, params: &ClassifyParams) -> Result<Edge> {
    let start = Point3::from(record.start.position());
    let end = Point3::from(record.end.position());
    if start == end {
        return Err(Error::DegenerateEdge(record.uuid.clone()));
    }

    let (kind, floor_level) = if is_vertical(&start, &end, params) {
        // A column spanning floors belongs to the floor it rises to.
        (MemberKind::Column, record.start.floor.max(record.end.floor))
    } else {
        if record.start.floor != record.end.floor {
            tracing::debug!(
                edge = %record.uuid,
                start_floor = record.start.floor,
                end_floor = record.end.floor,
                "Beam endpoints disagree on floor, keeping start floor"
            );
        }
        (MemberKind::Beam, record.start.floor)
    };

    Ok(Edge {
        id: record.uuid.clone(),
        start,
        end,
        floor_level,
        kind,
    })
}

/// The floor a face lies on, when it lies on exactly one.
///
/// A face whose edges reference two floors is a vertical face between
/// storeys, not a slab, and yields `None`.
pub fn slab_floor(record: &FaceRecord) -> Option<i64> {
    let floors = record.distinct_floors();
    if floors.len() == 1 {
        Some(floors[0])
    } else {
        None
    }
}
