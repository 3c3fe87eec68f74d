// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Tolerance-aware deduplication of members and slabs
//!
//! Adjacent cells share edges and faces, so the same geometry arrives once
//! per owning cell. Coordinates accumulate floating-point noise upstream,
//! which rules out exact equality: comparison quantizes every coordinate
//! to six decimal places first. Deduplication keeps the first occurrence
//! of every equivalence group and preserves input order.
//!
//! Group sizes are bounded by one building's cell count, so the pairwise
//! linear scan is deliberate; no spatial index is warranted here.

use nalgebra::Point3;

use crate::member::{Edge, FaceLoop};

/// Decimal places kept when comparing coordinates.
pub const DECIMAL_PLACES: u32 = 6;

// 10^DECIMAL_PLACES
const SCALE: f64 = 1_000_000.0;

/// A coordinate triple quantized for tolerance comparison.
type Quantized = [i64; 3];

#[inline]
fn quantize(p: &Point3<f64>) -> Quantized {
    [
        (p.x * SCALE).round() as i64,
        (p.y * SCALE).round() as i64,
        (p.z * SCALE).round() as i64,
    ]
}

/// True when two edges span the same two points within tolerance, in
/// either orientation.
pub fn same_edge(a: &Edge, b: &Edge) -> bool {
    let (a0, a1) = (quantize(&a.start), quantize(&a.end));
    let (b0, b1) = (quantize(&b.start), quantize(&b.end));
    (a0 == b0 && a1 == b1) || (a0 == b1 && a1 == b0)
}

/// Canonical traversal of a loop: rotated to start at the smallest
/// quantized vertex, read in whichever direction compares smaller.
///
/// Two loops tracing the same polygon from different cells normalize
/// identically regardless of starting corner or winding direction, while
/// distinct polygons over the same vertex set stay distinct.
fn canonical_loop(points: &[Point3<f64>]) -> Vec<Quantized> {
    let q: Vec<Quantized> = points.iter().map(quantize).collect();
    let n = q.len();
    if n == 0 {
        return q;
    }
    let start = (0..n).min_by_key(|&i| q[i]).unwrap_or(0);
    let forward: Vec<Quantized> = (0..n).map(|i| q[(start + i) % n]).collect();
    let backward: Vec<Quantized> = (0..n).map(|i| q[(start + n - i) % n]).collect();
    if forward <= backward {
        forward
    } else {
        backward
    }
}

/// True when two loops trace the same polygon within tolerance, possibly
/// from different starting points or in opposite winding.
pub fn same_face(a: &FaceLoop, b: &FaceLoop) -> bool {
    a.points.len() == b.points.len() && canonical_loop(&a.points) == canonical_loop(&b.points)
}

/// Keeps the first occurrence of every edge equivalence group, preserving
/// input order.
pub fn dedup_edges(edges: Vec<Edge>) -> Vec<Edge> {
    let mut kept: Vec<Edge> = Vec::with_capacity(edges.len());
    for edge in edges {
        if !kept.iter().any(|k| same_edge(k, &edge)) {
            kept.push(edge);
        }
    }
    kept
}

/// Keeps the first occurrence of every face equivalence group, preserving
/// input order.
pub fn dedup_faces(faces: Vec<FaceLoop>) -> Vec<FaceLoop> {
    let mut kept: Vec<FaceLoop> = Vec::with_capacity(faces.len());
    let mut canonical: Vec<Vec<Quantized>> = Vec::with_capacity(faces.len());
    for face in faces {
        let c = canonical_loop(&face.points);
        if !canonical.iter().any(|k| *k == c) {
            kept.push(face);
            canonical.push(c);
        }
    }
    kept
}
