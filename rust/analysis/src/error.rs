// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for output graph resolution

use thiserror::Error;

use crate::elements::ElementKind;

/// Result type for resolution operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving the output graph
#[derive(Error, Debug)]
pub enum Error {
    /// A relationship edge required by a join is missing from the graph.
    /// Recoverable: batch resolvers skip the affected connector and keep
    /// going.
    #[error("connector `{connector}`: no `{relationship}` relationship in the output graph")]
    UnresolvedRelationship {
        connector: String,
        relationship: String,
    },

    /// An element id referenced by an attribute does not exist
    #[error("no element with id `{0}`")]
    UnknownElement(String),

    /// An externalRefId referenced by a relationship or attribute does not
    /// exist
    #[error("no element with externalRefId `{0}`")]
    UnknownExternalRef(String),

    /// A join landed on an element of the wrong kind
    #[error("element `{id}`: expected `{expected}`, found `{found}`")]
    UnexpectedKind {
        id: String,
        expected: ElementKind,
        found: ElementKind,
    },

    /// An element that must be addressable across documents carries no
    /// externalRefId
    #[error("element `{0}` has no externalRefId")]
    MissingExternalRef(String),

    /// An element's attribute map does not decode into the shape its kind
    /// requires
    #[error("element `{id}`: malformed attributes: {reason}")]
    MalformedAttributes { id: String, reason: String },

    /// A geometric edge id referenced by the graph has no reconstructed
    /// member
    #[error("no reconstructed member with edge id `{0}`")]
    UnknownEdge(String),

    /// Document reading error
    #[error("document error: {0}")]
    Core(#[from] skel_lite_core::Error),
}
