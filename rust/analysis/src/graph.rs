// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indexed, read-only view over one output document
//!
//! The graph is built once per document and only ever queried. Id and
//! externalRefId lookups go through hash indices; attribute scans stay
//! linear, bounded by one building's element count.

use rustc_hash::FxHashMap;
use skel_lite_core::output::{OutputDocument, OutputElement};

use crate::elements::{kind_of, ElementKind};

/// Relationship kind used to attach configurations to connectors.
pub const HAS_CONFIGURATION: &str = "hasConfiguration";

/// A read-only index over an output document's elements and relationships.
pub struct OutputGraph<'a> {
    doc: &'a OutputDocument,
    by_id: FxHashMap<&'a str, &'a OutputElement>,
    by_external_ref: FxHashMap<&'a str, &'a OutputElement>,
}

impl<'a> OutputGraph<'a> {
    /// Indexes a parsed output document. On duplicate ids or
    /// externalRefIds the first element wins, matching document order
    /// everywhere else in reconstruction.
    pub fn new(doc: &'a OutputDocument) -> Self {
        let mut by_id = FxHashMap::default();
        let mut by_external_ref = FxHashMap::default();
        for element in &doc.elements {
            by_id.entry(element.id.as_str()).or_insert(element);
            if let Some(ext) = &element.external_ref_id {
                by_external_ref.entry(ext.as_str()).or_insert(element);
            }
        }
        Self {
            doc,
            by_id,
            by_external_ref,
        }
    }

    /// All elements in document order.
    pub fn elements(&self) -> &'a [OutputElement] {
        &self.doc.elements
    }

    /// Element by id.
    pub fn by_id(&self, id: &str) -> Option<&'a OutputElement> {
        self.by_id.get(id).copied()
    }

    /// Element by externalRefId.
    pub fn by_external_ref(&self, external_ref_id: &str) -> Option<&'a OutputElement> {
        self.by_external_ref.get(external_ref_id).copied()
    }

    /// All elements of one kind, in document order.
    pub fn of_kind<'g>(&'g self, kind: ElementKind) -> impl Iterator<Item = &'a OutputElement> + 'g {
        self.doc
            .elements
            .iter()
            .filter(move |element| kind_of(element) == kind)
    }

    /// Target externalRefId of the `hasConfiguration` relationship whose
    /// source is the given externalRefId, if any.
    pub fn has_configuration_target(&self, source_external_ref_id: &str) -> Option<&'a str> {
        self.relationship_target(HAS_CONFIGURATION, source_external_ref_id)
    }

    fn relationship_target(&self, kind: &str, source_external_ref_id: &str) -> Option<&'a str> {
        self.doc
            .relationships
            .iter()
            .find(|r| r.kind == kind && r.source_external_ref_id == source_external_ref_id)
            .map(|r| r.target_external_ref_id.as_str())
    }
}
