// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Skel-Lite Core
//!
//! Document layer for structural skeleton models, built on
//! [serde_json](https://docs.rs/serde_json). Reads the two JSON contracts
//! produced by the structural analysis system and hands typed records to
//! the reconstruction crates.
//!
//! ## Overview
//!
//! - **Skeleton document**: the cell complex (cells, faces, edges, grid
//!   points) describing a building's frame
//! - **Output document**: the element/relationship graph of an analysis
//!   run
//! - **Path-aware errors**: every malformed field is reported with its
//!   exact document path, never defaulted silently
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use skel_lite_core::SkeletonDocument;
//!
//! let doc = SkeletonDocument::from_json(&text)?;
//! for edge in doc.edge_records()? {
//!     println!("{} spans floors {}..{}", edge.uuid, edge.start.floor, edge.end.floor);
//! }
//! ```
//!
//! Axis convention: the documents are `z`-up, reconstruction is `y`-up.
//! [`GridPoint::position`] performs the swap exactly once.

pub mod document;
pub mod error;
pub mod output;
pub mod skeleton;

pub use document::DocCursor;
pub use error::{Error, Result};
pub use output::{OutputDocument, OutputElement, Relationship};
pub use skeleton::{CellPath, EdgeRecord, FaceRecord, GridPoint, SkeletonDocument};
