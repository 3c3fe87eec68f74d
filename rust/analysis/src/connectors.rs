// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Connector resolution: joining connector elements of the output graph
//! onto reconstructed geometry
//!
//! Connectors are joints between structural members. They reference their
//! surroundings indirectly (element ids, geometric edge ids, relationship
//! hops), and real documents do contain broken references. Resolution is
//! therefore per connector: a failed join skips that connector with a
//! warning and a recorded reason, never the whole batch.

use rustc_hash::FxHashMap;
use serde_json::Value;
use skel_lite_core::output::OutputElement;
use skel_lite_geometry::{Edge, Point3};

use crate::elements::{
    decode_attrs, expect_kind, BeamAttrs, ColumnAttrs, ColumnColumnConnectorAttrs, ElementKind,
    SlabBeamConnectorAttrs,
};
use crate::error::{Error, Result};
use crate::graph::{OutputGraph, HAS_CONFIGURATION};

/// Read-only id index over reconstructed members.
///
/// Built by the caller once per model and borrowed by the resolvers; the
/// resolvers only ever look up, never insert.
pub struct EdgeIndex<'a> {
    by_id: FxHashMap<&'a str, &'a Edge>,
}

impl<'a> EdgeIndex<'a> {
    /// Indexes members by their stable id. On duplicate ids the first
    /// member wins, consistent with first-seen-wins deduplication.
    pub fn new(edges: &'a [Edge]) -> Self {
        let mut by_id = FxHashMap::default();
        for edge in edges {
            by_id.entry(edge.id.as_str()).or_insert(edge);
        }
        Self { by_id }
    }

    pub fn get(&self, id: &str) -> Option<&'a Edge> {
        self.by_id.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Outcome of a batch resolution: what resolved and what was skipped.
#[derive(Debug)]
pub struct Resolution<T> {
    /// Successfully resolved connectors, in document order.
    pub resolved: Vec<T>,
    /// Connectors excluded from the batch, with the reason each one
    /// failed.
    pub skipped: Vec<Skipped>,
}

impl<T> Default for Resolution<T> {
    fn default() -> Self {
        Self {
            resolved: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// One connector excluded from a resolution batch.
#[derive(Debug)]
pub struct Skipped {
    /// The connector's externalRefId when present, otherwise its id.
    pub connector: String,
    pub reason: Error,
}

/// A column/column joint resolved onto the column member it decorates.
///
/// Carries the geometry of the column above the joint, re-tagged with the
/// connector's own externalRefId so picking the joint resolves connector
/// attributes, not column attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnColumnConnector {
    /// The connector's externalRefId.
    pub id: String,
    /// Geometric edge the joint sits on.
    pub edge_id: String,
    pub floor_level: i64,
    pub start: Point3<f64>,
    pub end: Point3<f64>,
}

/// A slab/beam joint with its resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SlabBeamConnector {
    /// The connector's externalRefId.
    pub id: String,
    /// The slab this resolution was scoped to.
    pub slab_id: String,
    /// Output-graph id of the connected beam element.
    pub beam_id: String,
    /// Geometric edge id of that beam.
    pub beam_edge_id: String,
    /// The connector's `slabBeamConnectorConfiguration` element.
    pub config: OutputElement,
}

/// Resolves every `columnColumnConnector` in the graph onto reconstructed
/// members.
///
/// Join per connector: `attributes.columnAboveId` names a `column`
/// element, whose `edgeId` names a reconstructed member in `edges`.
pub fn column_column_connectors(
    graph: &OutputGraph<'_>,
    edges: &EdgeIndex<'_>,
) -> Resolution<ColumnColumnConnector> {
    let mut resolution = Resolution::default();
    for element in graph.of_kind(ElementKind::ColumnColumnConnector) {
        match resolve_column_column(graph, edges, element) {
            Ok(connector) => resolution.resolved.push(connector),
            Err(reason) => skip(&mut resolution, element, reason),
        }
    }
    resolution
}

fn resolve_column_column(
    graph: &OutputGraph<'_>,
    edges: &EdgeIndex<'_>,
    element: &OutputElement,
) -> Result<ColumnColumnConnector> {
    let id = require_external_ref(element)?;
    let attrs: ColumnColumnConnectorAttrs = decode_attrs(element)?;
    let column = graph
        .by_id(&attrs.column_above_id)
        .ok_or_else(|| Error::UnknownElement(attrs.column_above_id.clone()))?;
    expect_kind(column, ElementKind::Column)?;
    let column_attrs: ColumnAttrs = decode_attrs(column)?;
    let edge = edges
        .get(&column_attrs.edge_id)
        .ok_or_else(|| Error::UnknownEdge(column_attrs.edge_id.clone()))?;
    Ok(ColumnColumnConnector {
        id,
        edge_id: edge.id.clone(),
        floor_level: edge.floor_level,
        start: edge.start,
        end: edge.end,
    })
}

/// Resolves every `slabBeamConnector` attached to one slab.
///
/// Two joins per connector: `connectedBeamId` names a `beam` element with
/// its geometric `edgeId`, and the connector's `hasConfiguration`
/// relationship names its configuration element. A connector whose
/// relationship is missing is skipped on its own; the rest of the slab's
/// connectors still resolve.
pub fn slab_beam_connectors(
    graph: &OutputGraph<'_>,
    slab_id: &str,
) -> Resolution<SlabBeamConnector> {
    let mut resolution = Resolution::default();
    for element in graph.of_kind(ElementKind::SlabBeamConnector) {
        // Scope on the raw attribute before the full typed decode so a
        // malformed connector lands only in its own slab's skip list.
        let connected_slab = element.attributes.get("connectedSlabId").and_then(Value::as_str);
        if connected_slab != Some(slab_id) {
            continue;
        }
        let attrs: SlabBeamConnectorAttrs = match decode_attrs(element) {
            Ok(attrs) => attrs,
            Err(reason) => {
                skip(&mut resolution, element, reason);
                continue;
            }
        };
        match resolve_slab_beam(graph, slab_id, element, attrs) {
            Ok(connector) => resolution.resolved.push(connector),
            Err(reason) => skip(&mut resolution, element, reason),
        }
    }
    resolution
}

fn resolve_slab_beam(
    graph: &OutputGraph<'_>,
    slab_id: &str,
    element: &OutputElement,
    attrs: SlabBeamConnectorAttrs,
) -> Result<SlabBeamConnector> {
    let id = require_external_ref(element)?;
    let beam = graph
        .by_id(&attrs.connected_beam_id)
        .ok_or_else(|| Error::UnknownElement(attrs.connected_beam_id.clone()))?;
    expect_kind(beam, ElementKind::Beam)?;
    let beam_attrs: BeamAttrs = decode_attrs(beam)?;

    let config_ref = graph
        .has_configuration_target(&id)
        .ok_or_else(|| Error::UnresolvedRelationship {
            connector: id.clone(),
            relationship: HAS_CONFIGURATION.to_string(),
        })?;
    let config = graph
        .by_external_ref(config_ref)
        .ok_or_else(|| Error::UnknownExternalRef(config_ref.to_string()))?;
    expect_kind(config, ElementKind::SlabBeamConnectorConfiguration)?;

    Ok(SlabBeamConnector {
        id,
        slab_id: slab_id.to_string(),
        beam_id: beam.id.clone(),
        beam_edge_id: beam_attrs.edge_id,
        config: config.clone(),
    })
}

fn require_external_ref(element: &OutputElement) -> Result<String> {
    element
        .external_ref_id
        .clone()
        .ok_or_else(|| Error::MissingExternalRef(element.id.clone()))
}

fn connector_label(element: &OutputElement) -> &str {
    element.external_ref_id.as_deref().unwrap_or(&element.id)
}

fn skip<T>(resolution: &mut Resolution<T>, element: &OutputElement, reason: Error) {
    tracing::warn!(
        connector = connector_label(element),
        %reason,
        "Skipping connector that does not resolve"
    );
    resolution.skipped.push(Skipped {
        connector: connector_label(element).to_string(),
        reason,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use skel_lite_core::output::OutputDocument;
    use skel_lite_geometry::MemberKind;

    fn member(id: &str) -> Edge {
        Edge {
            id: id.to_string(),
            start: Point3::new(0.0, 0.0, 0.0),
            end: Point3::new(0.0, 3.0, 0.0),
            floor_level: 2,
            kind: MemberKind::Column,
        }
    }

    fn doc() -> OutputDocument {
        OutputDocument::from_value(&json!({
            "data": {
                "elements": [
                    { "id": "col1", "type": "column", "externalRefId": "XC1",
                      "attributes": { "edgeId": "E1" } },
                    { "id": "cc1", "type": "columnColumnConnector", "externalRefId": "JOINT1",
                      "attributes": { "columnAboveId": "col1" } },
                    { "id": "cc2", "type": "columnColumnConnector", "externalRefId": "JOINT2",
                      "attributes": { "columnAboveId": "ghost" } },
                ],
                "relationships": [],
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_connector_takes_its_own_external_ref() {
        let doc = doc();
        let graph = OutputGraph::new(&doc);
        let members = [member("E1")];
        let index = EdgeIndex::new(&members);

        let result = column_column_connectors(&graph, &index);
        assert_eq!(result.resolved.len(), 1);
        let connector = &result.resolved[0];
        // Tagged with the connector's externalRefId, not the edge id.
        assert_eq!(connector.id, "JOINT1");
        assert_eq!(connector.edge_id, "E1");
        assert_eq!(connector.floor_level, 2);
        assert_eq!(connector.end, Point3::new(0.0, 3.0, 0.0));

        // The broken connector was skipped, not fatal.
        assert_eq!(result.skipped.len(), 1);
        assert_eq!(result.skipped[0].connector, "JOINT2");
        assert!(matches!(
            result.skipped[0].reason,
            Error::UnknownElement(_)
        ));
    }

    #[test]
    fn test_wrong_kind_behind_column_above_id_is_rejected() {
        let doc = OutputDocument::from_value(&json!({
            "data": {
                "elements": [
                    { "id": "b1", "type": "beam", "attributes": { "edgeId": "E1" } },
                    { "id": "cc1", "type": "columnColumnConnector", "externalRefId": "J1",
                      "attributes": { "columnAboveId": "b1" } },
                ],
                "relationships": [],
            }
        }))
        .unwrap();
        let graph = OutputGraph::new(&doc);
        let members = [member("E1")];
        let index = EdgeIndex::new(&members);

        let result = column_column_connectors(&graph, &index);
        assert!(result.resolved.is_empty());
        assert!(matches!(
            result.skipped[0].reason,
            Error::UnexpectedKind { .. }
        ));
    }

    #[test]
    fn test_missing_member_is_skipped() {
        let doc = doc();
        let graph = OutputGraph::new(&doc);
        let index = EdgeIndex::new(&[]);
        let result = column_column_connectors(&graph, &index);
        assert!(result.resolved.is_empty());
        assert_eq!(result.skipped.len(), 2);
        assert!(matches!(result.skipped[0].reason, Error::UnknownEdge(_)));
    }

    #[test]
    fn test_malformed_connector_reported_only_for_its_own_slab() {
        let doc = OutputDocument::from_value(&json!({
            "data": {
                "elements": [
                    // Missing connectedBeamId: decodes only once scoped.
                    { "id": "sbx", "type": "slabBeamConnector", "externalRefId": "SBX",
                      "attributes": { "connectedSlabId": "slab_a" } },
                ],
                "relationships": [],
            }
        }))
        .unwrap();
        let graph = OutputGraph::new(&doc);

        let other = slab_beam_connectors(&graph, "slab_b");
        assert!(other.resolved.is_empty());
        assert!(other.skipped.is_empty());

        let own = slab_beam_connectors(&graph, "slab_a");
        assert!(own.resolved.is_empty());
        assert_eq!(own.skipped.len(), 1);
        assert_eq!(own.skipped[0].connector, "SBX");
        assert!(matches!(
            own.skipped[0].reason,
            Error::MalformedAttributes { .. }
        ));
    }

    #[test]
    fn test_edge_index_first_wins_on_duplicate_ids() {
        let mut a = member("E1");
        a.floor_level = 1;
        let b = member("E1");
        let members = [a, b];
        let index = EdgeIndex::new(&members);
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("E1").unwrap().floor_level, 1);
    }
}
