// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Plate extraction from the output graph
//!
//! Plates are engineering subdivisions of slabs, computed by the analysis
//! run and shipped inside `plateSet` elements. Their boundaries arrive in
//! final display coordinates, so unlike skeleton geometry they get no axis
//! remap.

use skel_lite_geometry::Point3;

use crate::elements::{decode_attrs, Boundary, ElementKind, PlateSetAttrs};
use crate::error::Result;
use crate::graph::OutputGraph;

/// Which boundary variant of a plate to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryKind {
    /// The exact analysis boundary.
    #[default]
    Actual,
    /// The screen-friendly boundary. Falls back to the actual boundary for
    /// plates whose producer emitted no render variant.
    Render,
}

/// An engineering subdivision of a slab.
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    /// The descriptor's `plateId`.
    pub id: String,
    /// Floor of the owning plate set.
    pub floor_level: i64,
    /// Ordered boundary polygon, carried exactly as produced.
    pub boundary: Vec<Point3<f64>>,
}

/// Extracts one [`Plate`] per descriptor from every `plateSet` element, in
/// document order.
pub fn parse_plate_set(graph: &OutputGraph<'_>, boundary: BoundaryKind) -> Result<Vec<Plate>> {
    let mut plates = Vec::new();
    for element in graph.of_kind(ElementKind::PlateSet) {
        let PlateSetAttrs {
            floor,
            plates: descriptors,
        } = decode_attrs(element)?;
        for descriptor in descriptors {
            let polygon = match boundary {
                BoundaryKind::Actual => descriptor.boundary,
                BoundaryKind::Render => descriptor
                    .boundary_for_render
                    .unwrap_or(descriptor.boundary),
            };
            plates.push(Plate {
                id: descriptor.plate_id,
                floor_level: floor,
                boundary: to_points(polygon),
            });
        }
    }
    tracing::debug!(count = plates.len(), "Extracted plates");
    Ok(plates)
}

fn to_points(boundary: Boundary) -> Vec<Point3<f64>> {
    boundary
        .points
        .iter()
        .map(|p| Point3::new(p.x, p.y, p.z))
        .collect()
}
