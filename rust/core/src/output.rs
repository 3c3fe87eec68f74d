// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Analysis output document: the element/relationship graph produced by a
//! structural analysis run
//!
//! Shape contract:
//!
//! ```json
//! { "data": {
//!     "elements": [ { "id": "c1", "type": "column",
//!                     "externalRefId": "X9",
//!                     "attributes": { "edgeId": "E1" } } ],
//!     "relationships": [ { "type": "hasConfiguration",
//!                          "sourceExternalRefId": "X9",
//!                          "targetExternalRefId": "CFG1" } ]
//! } }
//! ```
//!
//! Elements carry a string `type` discriminator and a free-form attribute
//! map whose shape depends on that discriminator. The schema of attribute
//! maps is owned by the analysis crate; this module only guarantees the
//! envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::DocCursor;
use crate::error::{Error, Result};

/// A typed, attribute-bearing node in the output graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputElement {
    pub id: String,
    /// Type discriminator, e.g. `column`, `plateSet`, `slabBeamConnector`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Stable cross-document identifier. Not every element carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_ref_id: Option<String>,
    /// Free-form attributes; shape depends on `kind`.
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// A directed, typed relationship between two elements, addressed by their
/// `externalRefId`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    #[serde(rename = "type")]
    pub kind: String,
    pub source_external_ref_id: String,
    pub target_external_ref_id: String,
}

/// A parsed analysis output document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputDocument {
    pub elements: Vec<OutputElement>,
    pub relationships: Vec<Relationship>,
}

impl OutputDocument {
    /// Parses an output document from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_value(&root)
    }

    /// Reads the `data.elements` and `data.relationships` arrays,
    /// reporting the path of any entry that fails to decode.
    pub fn from_value(root: &Value) -> Result<Self> {
        let data = DocCursor::root(root).field("data")?;
        let elements = decode_entries(&data.field("elements")?)?;
        let relationships = decode_entries(&data.field("relationships")?)?;
        Ok(Self {
            elements,
            relationships,
        })
    }
}

fn decode_entries<T: serde::de::DeserializeOwned>(cursor: &DocCursor<'_>) -> Result<Vec<T>> {
    cursor
        .items()?
        .iter()
        .map(|entry| {
            serde_json::from_value(entry.value().clone())
                .map_err(|e| Error::malformed(entry.path(), e.to_string()))
        })
        .collect()
}
