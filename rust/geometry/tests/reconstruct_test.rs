// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end reconstruction over a two-cell skeleton document.
//!
//! Two adjacent rooms share a wall: the shared column edges and the shared
//! ceiling face appear once per cell, the second copy with floating-point
//! noise below the comparison tolerance. After reconstruction and
//! deduplication every shared piece must appear exactly once.

use serde_json::{json, Value};
use skel_lite_core::SkeletonDocument;
use skel_lite_geometry::{dedup_edges, dedup_faces, parse_edges, parse_faces, MemberKind};

fn point(x: f64, y: f64, z: f64, floor: i64) -> Value {
    json!({ "x": x, "y": y, "z": z, "floor": floor })
}

fn edge(id: &str, start: Value, end: Value) -> Value {
    json!({ "uuid": id, "start": start, "end": end })
}

/// A square ceiling face at document height `z`, corners `min` to `max`,
/// with edges wound in the given direction.
fn ceiling(
    id: &str,
    prefix: &str,
    min: (f64, f64),
    max: (f64, f64),
    z: f64,
    reversed: bool,
) -> Value {
    let (x0, y0) = min;
    let (x1, y1) = max;
    let corners = if reversed {
        [(x0, y0), (x0, y1), (x1, y1), (x1, y0)]
    } else {
        [(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
    };
    let edges: Vec<Value> = (0..4)
        .map(|i| {
            let (sx, sy) = corners[i];
            let (ex, ey) = corners[(i + 1) % 4];
            edge(
                &format!("{prefix}{i}"),
                point(sx, sy, z, 1),
                point(ex, ey, z, 1),
            )
        })
        .collect();
    json!({ "uuid": id, "edges": edges })
}

fn two_room_model() -> SkeletonDocument {
    // Room A spans x 0..4, room B spans x 4..8; both are 4 deep and 3
    // high. The wall at x = 4 is shared.
    let noise = 1e-8;
    SkeletonDocument::from_value(json!({
        "cellComplex": { "cells": [
            { "faces": [
                // Room A wall at x = 4 (vertical face, floors 0 and 1).
                { "uuid": "WALL_A", "edges": [
                    edge("CA1", point(4.0, 0.0, 0.0, 0), point(4.0, 0.0, 3.0, 1)),
                    edge("TOP_A", point(4.0, 0.0, 3.0, 1), point(4.0, 4.0, 3.0, 1)),
                    edge("CA2", point(4.0, 4.0, 3.0, 1), point(4.0, 4.0, 0.0, 0)),
                    edge("BOT_A", point(4.0, 4.0, 0.0, 0), point(4.0, 0.0, 0.0, 0)),
                ] },
                ceiling("CEIL_A", "AC", (0.0, 0.0), (4.0, 4.0), 3.0, false),
                ceiling("CEIL_SHARED", "AS", (4.0, 0.0), (8.0, 4.0), 3.0, false),
            ] },
            { "faces": [
                // Room B sees the same wall, reversed winding and noisy
                // coordinates.
                { "uuid": "WALL_B", "edges": [
                    edge("CB1", point(4.0 + noise, 0.0, 0.0, 0), point(4.0, 0.0, 3.0, 1)),
                    edge("TOP_B", point(4.0, 0.0, 3.0, 1), point(4.0, 4.0, 3.0, 1)),
                    edge("CB2", point(4.0, 4.0, 3.0, 1), point(4.0 + noise, 4.0, 0.0, 0)),
                    edge("BOT_B", point(4.0 + noise, 4.0, 0.0, 0), point(4.0 + noise, 0.0, 0.0, 0)),
                ] },
                ceiling("CEIL_SHARED_B", "BS", (4.0 + noise, 0.0), (8.0, 4.0), 3.0, true),
                ceiling("CEIL_B", "BC", (8.0, 0.0), (12.0, 4.0), 3.0, false),
            ] },
        ] }
    }))
}

#[test]
fn shared_members_collapse_after_dedup() {
    let doc = two_room_model();
    let all = parse_edges(&doc).unwrap();
    // 4 wall edges per room plus 4 per ceiling face.
    assert_eq!(all.len(), 4 + 4 + 4 + 4 + 4 + 4);

    let unique = dedup_edges(all);
    // The two shared wall columns and the shared wall top/bottom beams
    // collapsed, as did the four edges of the shared ceiling.
    let columns: Vec<_> = unique.iter().filter(|e| e.is_column()).collect();
    assert_eq!(columns.len(), 2);
    for column in &columns {
        // First-seen copy came from room A.
        assert!(column.id.starts_with("CA"), "kept {}", column.id);
        assert_eq!(column.floor_level, 1);
    }

    let shared_top = unique.iter().filter(|e| e.id.starts_with("TOP")).count();
    assert_eq!(shared_top, 1);

    // 24 raw members minus 4 duplicate wall edges minus 4 duplicate
    // ceiling edges.
    assert_eq!(unique.len(), 16);
}

#[test]
fn shared_ceiling_face_collapses_after_dedup() {
    let doc = two_room_model();
    let all = parse_faces(&doc).unwrap();
    // Wall faces span two floors and are not slabs; four ceilings remain.
    assert_eq!(all.len(), 4);

    let unique = dedup_faces(all);
    assert_eq!(unique.len(), 3);
    let ids: Vec<&str> = unique.iter().map(|f| f.id.as_str()).collect();
    // First seen wins: the room A copy of the shared ceiling survives.
    assert_eq!(ids, vec!["CEIL_A", "CEIL_SHARED", "CEIL_B"]);

    for face in &unique {
        assert_eq!(face.len(), 4);
        assert_eq!(face.floor_level, 1);
        // Document z becomes viewer height y.
        assert!(face.points.iter().all(|p| (p.y - 3.0).abs() < 1e-9));
    }
}

#[test]
fn member_kinds_follow_rise_and_drift() {
    let doc = two_room_model();
    let unique = dedup_edges(parse_edges(&doc).unwrap());
    for member in &unique {
        let rises = (member.start.y - member.end.y).abs() > 0.0;
        assert_eq!(member.kind == MemberKind::Column, rises, "member {}", member.id);
    }
}
