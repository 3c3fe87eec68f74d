// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Path-aware access into parsed JSON documents
//!
//! Both source documents are schema contracts produced by the structural
//! analysis system. They are held as parsed JSON and walked with accessors
//! that carry the structural path, so a missing or wrongly shaped field is
//! reported as [`Error::MalformedInput`] naming its exact location instead
//! of being defaulted silently.

use serde_json::Value;

use crate::error::{Error, Result};

/// A borrowed location inside a parsed JSON document that remembers the
/// path used to reach it.
///
/// Descending through [`field`](DocCursor::field) and
/// [`items`](DocCursor::items) extends the path (`cellComplex.cells[0]`,
/// ...), and every typed read reports that path on failure.
#[derive(Debug, Clone)]
pub struct DocCursor<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> DocCursor<'a> {
    /// Cursor at the document root.
    pub fn root(value: &'a Value) -> Self {
        Self {
            value,
            path: String::new(),
        }
    }

    /// Path from the document root to this cursor.
    pub fn path(&self) -> &str {
        if self.path.is_empty() {
            "(root)"
        } else {
            &self.path
        }
    }

    /// The raw JSON value at this cursor.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Descends into a required object field.
    pub fn field(&self, name: &str) -> Result<DocCursor<'a>> {
        let path = self.child_path(name);
        match self.value.get(name) {
            Some(value) => Ok(DocCursor { value, path }),
            None => Err(Error::malformed(path, "required field is missing")),
        }
    }

    /// Descends into an optional object field. Returns `None` when the
    /// field is absent or explicitly `null`.
    pub fn field_opt(&self, name: &str) -> Option<DocCursor<'a>> {
        match self.value.get(name) {
            Some(Value::Null) | None => None,
            Some(value) => Some(DocCursor {
                value,
                path: self.child_path(name),
            }),
        }
    }

    /// The elements of a required JSON array, each cursor carrying its
    /// indexed path.
    pub fn items(&self) -> Result<Vec<DocCursor<'a>>> {
        match self.value.as_array() {
            Some(items) => Ok(items
                .iter()
                .enumerate()
                .map(|(i, value)| DocCursor {
                    value,
                    path: format!("{}[{i}]", self.path),
                })
                .collect()),
            None => Err(self.wrong_shape("expected an array")),
        }
    }

    /// Reads this value as a floating-point number.
    pub fn as_f64(&self) -> Result<f64> {
        self.value
            .as_f64()
            .ok_or_else(|| self.wrong_shape("expected a number"))
    }

    /// Reads this value as an integer.
    pub fn as_i64(&self) -> Result<i64> {
        self.value
            .as_i64()
            .ok_or_else(|| self.wrong_shape("expected an integer"))
    }

    /// Reads this value as a string.
    pub fn as_str(&self) -> Result<&'a str> {
        self.value
            .as_str()
            .ok_or_else(|| self.wrong_shape("expected a string"))
    }

    fn child_path(&self, name: &str) -> String {
        if self.path.is_empty() {
            name.to_string()
        } else {
            format!("{}.{name}", self.path)
        }
    }

    fn wrong_shape(&self, reason: &str) -> Error {
        Error::malformed(self.path(), reason)
    }
}
