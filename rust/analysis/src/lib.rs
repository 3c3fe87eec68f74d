// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Skel-Lite Analysis
//!
//! Resolves the analysis output graph against reconstructed skeleton
//! geometry: plates, connector joins, and attribute lookup for picks.
//!
//! ```rust,ignore
//! use skel_lite_analysis::{column_column_connectors, EdgeIndex, OutputGraph};
//!
//! let graph = OutputGraph::new(&output_doc);
//! let index = EdgeIndex::new(&members);
//! let joints = column_column_connectors(&graph, &index);
//! for skipped in &joints.skipped {
//!     eprintln!("connector {} skipped: {}", skipped.connector, skipped.reason);
//! }
//! ```
//!
//! Batch resolvers never fail wholesale on one bad connector; they skip
//! it with a recorded reason and resolve the rest.

pub mod connectors;
pub mod elements;
pub mod error;
pub mod graph;
pub mod lookup;
pub mod plates;

pub use connectors::{
    column_column_connectors, slab_beam_connectors, ColumnColumnConnector, EdgeIndex, Resolution,
    SlabBeamConnector, Skipped,
};
pub use elements::{decode_attrs, expect_kind, kind_of, ElementKind};
pub use error::{Error, Result};
pub use graph::{OutputGraph, HAS_CONFIGURATION};
pub use lookup::{
    column_configuration, connector_attributes, entity_attributes, face_attributes,
    plate_attributes,
};
pub use plates::{parse_plate_set, BoundaryKind, Plate};
