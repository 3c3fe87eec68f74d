// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reconstruction entry points: skeleton document in, structural entities
//! out
//!
//! Faces are independent of each other, so slab reconstruction fans out
//! over rayon. Results are collected back in document order, which keeps
//! the first-seen-wins deduplication downstream deterministic.

use nalgebra::Point3;
use rayon::prelude::*;
use skel_lite_core::skeleton::{FaceRecord, SkeletonDocument};

use crate::classify::{classify_edge, slab_floor, ClassifyParams};
use crate::error::{Error, Result};
use crate::loops::order_loop;
use crate::member::{Edge, FaceLoop};

/// Reconstructs every structural member from the skeleton document, with
/// default classification thresholds.
///
/// Returns the full pre-deduplication list in document order; members
/// shared between cells appear once per cell. Pass the result through
/// [`dedup_edges`](crate::dedup::dedup_edges) before display.
pub fn parse_edges(doc: &SkeletonDocument) -> Result<Vec<Edge>> {
    parse_edges_with(doc, &ClassifyParams::default())
}

/// Like [`parse_edges`] with explicit classification thresholds.
pub fn parse_edges_with(doc: &SkeletonDocument, params: &ClassifyParams) -> Result<Vec<Edge>> {
    let records = doc.edge_records()?;
    let edges = records
        .iter()
        .map(|record| classify_edge(record, params))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = edges.len(), "Reconstructed members");
    Ok(edges)
}

/// Reconstructs every slab loop from the skeleton document.
///
/// Only faces lying on exactly one floor become slabs; faces spanning
/// storeys are skipped silently as ordinary vertical geometry. Returns the
/// full pre-deduplication list in document order. Any slab face whose edge
/// set cannot close fails the whole call; use [`parse_faces_partial`] to
/// keep going instead.
pub fn parse_faces(doc: &SkeletonDocument) -> Result<Vec<FaceLoop>> {
    let records = doc.face_records()?;
    let loops = slab_candidates(&records)
        .par_iter()
        .map(|&(floor, record)| reconstruct_face(floor, record))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(count = loops.len(), "Reconstructed slab loops");
    Ok(loops)
}

/// Best-effort variant of [`parse_faces`]: faces that cannot close are
/// skipped and returned as errors alongside the successful loops.
///
/// Document-shape problems still fail the whole call; only per-face
/// reconstruction failures are downgraded.
pub fn parse_faces_partial(doc: &SkeletonDocument) -> Result<(Vec<FaceLoop>, Vec<Error>)> {
    let records = doc.face_records()?;
    let outcomes: Vec<Result<FaceLoop>> = slab_candidates(&records)
        .par_iter()
        .map(|&(floor, record)| reconstruct_face(floor, record))
        .collect();

    let mut loops = Vec::with_capacity(outcomes.len());
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(face_loop) => loops.push(face_loop),
            Err(error) => {
                tracing::warn!(%error, "Skipping face that cannot be reconstructed");
                skipped.push(error);
            }
        }
    }
    Ok((loops, skipped))
}

fn slab_candidates(records: &[FaceRecord]) -> Vec<(i64, &FaceRecord)> {
    records
        .iter()
        .filter_map(|record| slab_floor(record).map(|floor| (floor, record)))
        .collect()
}

fn reconstruct_face(floor: i64, record: &FaceRecord) -> Result<FaceLoop> {
    let endpoints: Vec<(Point3<f64>, Point3<f64>)> = record
        .edges
        .iter()
        .map(|edge| {
            (
                Point3::from(edge.start.position()),
                Point3::from(edge.end.position()),
            )
        })
        .collect();
    let points = order_loop(&record.uuid, &endpoints)?;
    Ok(FaceLoop {
        id: record.uuid.clone(),
        floor_level: floor,
        points,
    })
}
