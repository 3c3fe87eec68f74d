// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for document reading

use thiserror::Error;

/// Result type for document operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading source documents
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing or has the wrong shape. The path names
    /// the exact location inside the document, e.g.
    /// `cellComplex.cells[2].faces[0].edges[1].start.floor`.
    #[error("malformed input at `{path}`: {reason}")]
    MalformedInput { path: String, reason: String },

    /// The document text is not valid JSON at all
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::MalformedInput`] at a known path.
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
