// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Attribute lookup: from geometric identifiers back into the output
//! graph
//!
//! These queries back pick interactions: the user selects a reconstructed
//! entity and the UI shows the analysis attributes attached to it. All
//! queries are read-only scans over one building's elements.

use serde_json::Value;
use skel_lite_core::output::OutputElement;

use crate::elements::{decode_attrs, expect_kind, kind_of, ColumnAttrs, ElementKind};
use crate::error::{Error, Result};
use crate::graph::OutputGraph;

fn attr_is(element: &OutputElement, key: &str, expected: &str) -> bool {
    matches!(element.attributes.get(key), Some(Value::String(s)) if s == expected)
}

/// Elements attached to a geometric entity id: matches on
/// `attributes.edgeId` first, then `attributes.faceId`.
pub fn entity_attributes<'a>(graph: &OutputGraph<'a>, entity_id: &str) -> Vec<&'a OutputElement> {
    let mut found: Vec<&OutputElement> = graph
        .elements()
        .iter()
        .filter(|e| attr_is(e, "edgeId", entity_id))
        .collect();
    found.extend(
        graph
            .elements()
            .iter()
            .filter(|e| attr_is(e, "faceId", entity_id)),
    );
    found
}

/// Elements attached to a slab's plate id.
pub fn plate_attributes<'a>(graph: &OutputGraph<'a>, plate_id: &str) -> Vec<&'a OutputElement> {
    graph
        .elements()
        .iter()
        .filter(|e| attr_is(e, "plateId", plate_id))
        .collect()
}

/// Elements attached to a face id.
pub fn face_attributes<'a>(graph: &OutputGraph<'a>, face_id: &str) -> Vec<&'a OutputElement> {
    graph
        .elements()
        .iter()
        .filter(|e| attr_is(e, "faceId", face_id))
        .collect()
}

/// Elements carrying the given externalRefId. Connector picks resolve
/// through here, since resolved connectors are tagged with their
/// externalRefId.
pub fn connector_attributes<'a>(
    graph: &OutputGraph<'a>,
    external_ref_id: &str,
) -> Vec<&'a OutputElement> {
    graph
        .elements()
        .iter()
        .filter(|e| e.external_ref_id.as_deref() == Some(external_ref_id))
        .collect()
}

/// The `columnConfiguration` element for a column's geometric edge id.
///
/// Two hops: the `column` element whose `edgeId` matches, then its
/// `columnConfigExternalRefId`. Returns `Ok(None)` when the edge belongs
/// to no column or the column has no configuration assigned; a dangling
/// reference or a wrong element kind on the second hop is an error.
pub fn column_configuration<'a>(
    graph: &OutputGraph<'a>,
    edge_id: &str,
) -> Result<Option<&'a OutputElement>> {
    let column = graph
        .elements()
        .iter()
        .find(|e| kind_of(e) == ElementKind::Column && attr_is(e, "edgeId", edge_id));
    let Some(column) = column else {
        return Ok(None);
    };
    let attrs: ColumnAttrs = decode_attrs(column)?;
    let Some(config_ref) = attrs.column_config_external_ref_id else {
        return Ok(None);
    };
    let config = graph
        .by_external_ref(&config_ref)
        .ok_or_else(|| Error::UnknownExternalRef(config_ref))?;
    expect_kind(config, ElementKind::ColumnConfiguration)?;
    Ok(Some(config))
}
