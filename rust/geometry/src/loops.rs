// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Loop ordering: turning a face's unordered edge set into a closed
//! polygon
//!
//! Edges of one source face share endpoints bit-for-bit, so chaining uses
//! exact equality; tolerance matching belongs to deduplication, not here.

use nalgebra::Point3;

use crate::error::{Error, Result};

/// Orders an unordered edge set into a closed vertex loop.
///
/// The loop is seeded with the first edge and grown by consuming, at each
/// step, an unconsumed edge that continues from the current end point in
/// either orientation. A well-formed face consumes every edge exactly
/// once and yields as many points as there were edges.
///
/// The chain is bounded by the edge count: if no unconsumed edge continues
/// it, or the final edge does not lead back to the seed point, the face
/// cannot close and [`Error::DisconnectedLoop`] reports where chaining
/// stalled. Zero-length edges are rejected up front with
/// [`Error::ZeroLengthEdge`].
pub fn order_loop(face_id: &str, edges: &[(Point3<f64>, Point3<f64>)]) -> Result<Vec<Point3<f64>>> {
    if edges.len() < 3 {
        return Err(Error::DegenerateFace {
            face_id: face_id.to_string(),
            edge_count: edges.len(),
        });
    }
    // A zero-length edge can never extend the loop, and as seed or closing
    // edge it would smuggle a duplicate point into an accepted loop.
    if let Some(&(at, _)) = edges.iter().find(|&&(start, end)| start == end) {
        return Err(Error::ZeroLengthEdge {
            face_id: face_id.to_string(),
            at,
        });
    }

    let (seed, rest) = (&edges[0], &edges[1..]);
    let mut points = Vec::with_capacity(edges.len());
    points.push(seed.0);
    points.push(seed.1);
    let mut cursor = seed.1;

    // Consumed edges become None; a well-formed face leaves exactly the
    // closing edge unconsumed.
    let mut pool: Vec<Option<(Point3<f64>, Point3<f64>)>> =
        rest.iter().copied().map(Some).collect();

    while points.len() < edges.len() {
        let mut advanced = false;
        for slot in pool.iter_mut() {
            let Some((start, end)) = *slot else { continue };
            let next = if start == cursor {
                end
            } else if end == cursor {
                start
            } else {
                continue;
            };
            points.push(next);
            cursor = next;
            *slot = None;
            advanced = true;
            break;
        }
        if !advanced {
            return Err(Error::DisconnectedLoop {
                face_id: face_id.to_string(),
                stalled_at: cursor,
            });
        }
    }

    let closes = pool.iter().flatten().any(|&(start, end)| {
        (start == cursor && end == points[0]) || (end == cursor && start == points[0])
    });
    if !closes {
        return Err(Error::DisconnectedLoop {
            face_id: face_id.to_string(),
            stalled_at: cursor,
        });
    }

    Ok(points)
}
