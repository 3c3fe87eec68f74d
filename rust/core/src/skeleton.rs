// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Skeleton document: the cell complex describing a building's structural
//! frame
//!
//! Shape contract:
//!
//! ```json
//! { "cellComplex": { "cells": [ { "faces": [ {
//!     "uuid": "F1",
//!     "edges": [ { "uuid": "E1",
//!                  "start": { "x": 0, "y": 0, "z": 0, "floor": 1 },
//!                  "end":   { "x": 0, "y": 0, "z": 3, "floor": 2 } } ]
//! } ] } ] } }
//! ```
//!
//! Cells are closed volumes; adjacent cells share faces and edges, so the
//! same geometry appears once per owning cell. Extraction here returns the
//! full record lists; deduplication is a separate, later concern.
//!
//! The producer's frame is `z`-up. Everything downstream works `y`-up, and
//! [`GridPoint::position`] is the single place where the axes swap.

use std::fmt;

use serde_json::Value;
use smallvec::SmallVec;

use crate::document::DocCursor;
use crate::error::Result;

/// A grid point as it appears in the skeleton document, in the producer's
/// `z`-up frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Floor number this point belongs to. Floor 0 is the ground plane;
    /// display layers usually filter it out, extraction never does.
    pub floor: i64,
}

impl GridPoint {
    /// Position with the height axis remapped to `y`.
    ///
    /// The document calls its height axis `z` and its depth axis `y`;
    /// downstream geometry is `y`-up. The swap happens here and nowhere
    /// else.
    #[inline]
    pub fn position(&self) -> [f64; 3] {
        [self.x, self.z, self.y]
    }
}

/// Source location of a record inside the cell complex, as indices into the
/// document arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPath {
    pub cell: usize,
    pub face: usize,
}

impl fmt::Display for CellPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cells[{}].faces[{}]", self.cell, self.face)
    }
}

/// One edge record pulled from the skeleton document, tagged with where it
/// came from so floor annotations can be traced back to their cell.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    /// Stable identifier from the document (`uuid`).
    pub uuid: String,
    pub start: GridPoint,
    pub end: GridPoint,
    pub source: CellPath,
}

/// One face record: the face identifier plus its unordered edge set.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceRecord {
    pub uuid: String,
    pub edges: Vec<EdgeRecord>,
    pub source: CellPath,
}

impl FaceRecord {
    /// The distinct floors referenced by this face's edge endpoints, in
    /// first-seen order. A face lying flat on one floor yields exactly one
    /// entry; a vertical face spanning storeys yields two.
    pub fn distinct_floors(&self) -> SmallVec<[i64; 2]> {
        let mut floors = SmallVec::new();
        for edge in &self.edges {
            for floor in [edge.start.floor, edge.end.floor] {
                if !floors.contains(&floor) {
                    floors.push(floor);
                }
            }
        }
        floors
    }
}

/// A parsed skeleton document.
///
/// The document is kept as parsed JSON and records are pulled out on
/// demand with path-aware accessors, so every shape violation is reported
/// with its exact location.
#[derive(Debug, Clone)]
pub struct SkeletonDocument {
    root: Value,
}

impl SkeletonDocument {
    /// Parses a skeleton document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self { root })
    }

    /// Wraps an already parsed JSON value.
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    /// Every edge record of the cell complex, in document order.
    ///
    /// An edge shared by adjacent cells appears once per cell; the full
    /// list is returned and deduplication is left to the caller.
    pub fn edge_records(&self) -> Result<Vec<EdgeRecord>> {
        let mut records = Vec::new();
        self.walk_faces(|face, source| {
            for edge in face.field("edges")?.items()? {
                records.push(parse_edge(&edge, source)?);
            }
            Ok(())
        })?;
        Ok(records)
    }

    /// Every face record of the cell complex with its unordered edge set,
    /// in document order.
    pub fn face_records(&self) -> Result<Vec<FaceRecord>> {
        let mut records = Vec::new();
        self.walk_faces(|face, source| {
            let uuid = face.field("uuid")?.as_str()?.to_string();
            let mut edges = Vec::new();
            for edge in face.field("edges")?.items()? {
                edges.push(parse_edge(&edge, source)?);
            }
            records.push(FaceRecord { uuid, edges, source });
            Ok(())
        })?;
        Ok(records)
    }

    fn walk_faces<F>(&self, mut visit: F) -> Result<()>
    where
        F: FnMut(&DocCursor<'_>, CellPath) -> Result<()>,
    {
        let cells = DocCursor::root(&self.root)
            .field("cellComplex")?
            .field("cells")?
            .items()?;
        for (ci, cell) in cells.iter().enumerate() {
            for (fi, face) in cell.field("faces")?.items()?.iter().enumerate() {
                visit(face, CellPath { cell: ci, face: fi })?;
            }
        }
        Ok(())
    }
}

fn parse_point(cursor: &DocCursor<'_>) -> Result<GridPoint> {
    Ok(GridPoint {
        x: cursor.field("x")?.as_f64()?,
        y: cursor.field("y")?.as_f64()?,
        z: cursor.field("z")?.as_f64()?,
        floor: cursor.field("floor")?.as_i64()?,
    })
}

fn parse_edge(cursor: &DocCursor<'_>, source: CellPath) -> Result<EdgeRecord> {
    Ok(EdgeRecord {
        uuid: cursor.field("uuid")?.as_str()?.to_string(),
        start: parse_point(&cursor.field("start")?)?,
        end: parse_point(&cursor.field("end")?)?,
        source,
    })
}
