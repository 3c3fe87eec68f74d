// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Typed views over output graph elements
//!
//! Elements arrive with a string `type` discriminator and a free-form
//! attribute map. [`ElementKind`] closes the set of discriminators the
//! resolvers join on; anything else is preserved as
//! [`ElementKind::Other`] so lookups can still return it. Resolvers that
//! need a specific kind reject mismatches explicitly instead of silently
//! matching nothing.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use skel_lite_core::output::OutputElement;

use crate::error::{Error, Result};

/// Element type discriminators known to the resolvers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Column,
    Beam,
    Slab,
    ColumnConfiguration,
    PlateSet,
    ColumnColumnConnector,
    SlabBeamConnector,
    SlabBeamConnectorConfiguration,
    /// A discriminator this crate does not join on, kept verbatim.
    Other(String),
}

impl ElementKind {
    pub fn as_str(&self) -> &str {
        match self {
            ElementKind::Column => "column",
            ElementKind::Beam => "beam",
            ElementKind::Slab => "slab",
            ElementKind::ColumnConfiguration => "columnConfiguration",
            ElementKind::PlateSet => "plateSet",
            ElementKind::ColumnColumnConnector => "columnColumnConnector",
            ElementKind::SlabBeamConnector => "slabBeamConnector",
            ElementKind::SlabBeamConnectorConfiguration => "slabBeamConnectorConfiguration",
            ElementKind::Other(s) => s,
        }
    }
}

impl From<&str> for ElementKind {
    fn from(s: &str) -> Self {
        match s {
            "column" => ElementKind::Column,
            "beam" => ElementKind::Beam,
            "slab" => ElementKind::Slab,
            "columnConfiguration" => ElementKind::ColumnConfiguration,
            "plateSet" => ElementKind::PlateSet,
            "columnColumnConnector" => ElementKind::ColumnColumnConnector,
            "slabBeamConnector" => ElementKind::SlabBeamConnector,
            "slabBeamConnectorConfiguration" => ElementKind::SlabBeamConnectorConfiguration,
            other => ElementKind::Other(other.to_string()),
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of an output element.
pub fn kind_of(element: &OutputElement) -> ElementKind {
    ElementKind::from(element.kind.as_str())
}

/// Requires an element to be of the given kind.
pub fn expect_kind(element: &OutputElement, expected: ElementKind) -> Result<()> {
    let found = kind_of(element);
    if found == expected {
        Ok(())
    } else {
        Err(Error::UnexpectedKind {
            id: element.id.clone(),
            expected,
            found,
        })
    }
}

/// Decodes an element's free-form attribute map into the typed shape its
/// kind requires.
pub fn decode_attrs<T: DeserializeOwned>(element: &OutputElement) -> Result<T> {
    serde_json::from_value(Value::Object(element.attributes.clone())).map_err(|e| {
        Error::MalformedAttributes {
            id: element.id.clone(),
            reason: e.to_string(),
        }
    })
}

/// Attributes of a `column` element.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnAttrs {
    /// Geometric edge this column was reconstructed from.
    pub edge_id: String,
    /// ExternalRefId of the column's configuration element, when one is
    /// assigned.
    #[serde(default)]
    pub column_config_external_ref_id: Option<String>,
}

/// Attributes of a `beam` element, as far as connector joins need them.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeamAttrs {
    /// Geometric edge this beam was reconstructed from.
    pub edge_id: String,
}

/// Attributes of a `columnColumnConnector` element.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnColumnConnectorAttrs {
    /// Id of the column element sitting above the joint.
    pub column_above_id: String,
}

/// Attributes of a `slabBeamConnector` element.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabBeamConnectorAttrs {
    pub connected_slab_id: String,
    pub connected_beam_id: String,
}

/// Attributes of a `plateSet` element.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateSetAttrs {
    /// Floor all plates of this set subdivide.
    pub floor: i64,
    pub plates: Vec<PlateDescriptor>,
}

/// One plate inside a `plateSet` attribute map.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateDescriptor {
    pub plate_id: String,
    pub boundary: Boundary,
    /// Screen-friendly boundary variant; not every producer emits one.
    #[serde(default)]
    pub boundary_for_render: Option<Boundary>,
}

/// An ordered boundary polygon, carried exactly as produced.
#[derive(Debug, Clone, Deserialize)]
pub struct Boundary {
    pub points: Vec<BoundaryPoint>,
}

/// A boundary point in the producer's frame. No axis remap is applied to
/// plate boundaries; they come from the analysis system already shaped for
/// display.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BoundaryPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn element(kind: &str, attributes: Value) -> OutputElement {
        let attributes = match attributes {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        OutputElement {
            id: "el1".to_string(),
            kind: kind.to_string(),
            external_ref_id: None,
            attributes,
        }
    }

    #[test]
    fn test_kind_round_trip() {
        for name in [
            "column",
            "beam",
            "slab",
            "columnConfiguration",
            "plateSet",
            "columnColumnConnector",
            "slabBeamConnector",
            "slabBeamConnectorConfiguration",
        ] {
            assert_eq!(ElementKind::from(name).as_str(), name);
        }
        let unknown = ElementKind::from("loadCase");
        assert_eq!(unknown, ElementKind::Other("loadCase".to_string()));
        assert_eq!(unknown.to_string(), "loadCase");
    }

    #[test]
    fn test_expect_kind_rejects_mismatch() {
        let beam = element("beam", json!({}));
        assert!(expect_kind(&beam, ElementKind::Beam).is_ok());
        let err = expect_kind(&beam, ElementKind::Column).unwrap_err();
        assert!(err.to_string().contains("expected `column`, found `beam`"));
    }

    #[test]
    fn test_decode_column_attrs() {
        let column = element(
            "column",
            json!({ "edgeId": "E1", "columnConfigExternalRefId": "CFG9" }),
        );
        let attrs: ColumnAttrs = decode_attrs(&column).unwrap();
        assert_eq!(attrs.edge_id, "E1");
        assert_eq!(attrs.column_config_external_ref_id.as_deref(), Some("CFG9"));

        let bare = element("column", json!({ "edgeId": "E1" }));
        let attrs: ColumnAttrs = decode_attrs(&bare).unwrap();
        assert!(attrs.column_config_external_ref_id.is_none());
    }

    #[test]
    fn test_decode_reports_missing_required_attribute() {
        let broken = element("columnColumnConnector", json!({}));
        let err = decode_attrs::<ColumnColumnConnectorAttrs>(&broken).unwrap_err();
        match err {
            Error::MalformedAttributes { id, reason } => {
                assert_eq!(id, "el1");
                assert!(reason.contains("columnAboveId"), "got: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_plate_set_with_render_boundary() {
        let plate_set = element(
            "plateSet",
            json!({
                "floor": 2,
                "plates": [
                    { "plateId": "P1",
                      "boundary": { "points": [
                          { "x": 0.0, "y": 0.0, "z": 0.0 },
                          { "x": 1.0, "y": 0.0, "z": 0.0 },
                          { "x": 1.0, "y": 1.0, "z": 0.0 },
                      ] } },
                    { "plateId": "P2",
                      "boundary": { "points": [] },
                      "boundaryForRender": { "points": [
                          { "x": 0.5, "y": 0.5, "z": 0.0 },
                      ] } },
                ],
            }),
        );
        let attrs: PlateSetAttrs = decode_attrs(&plate_set).unwrap();
        assert_eq!(attrs.floor, 2);
        assert_eq!(attrs.plates.len(), 2);
        assert!(attrs.plates[0].boundary_for_render.is_none());
        let render = attrs.plates[1].boundary_for_render.as_ref().unwrap();
        assert_eq!(render.points.len(), 1);
    }
}
