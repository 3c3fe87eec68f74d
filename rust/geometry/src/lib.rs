//! Skel-Lite Geometry
//!
//! Reconstructs structural members and slab loops from skeleton documents
//! using nalgebra for positions, with rayon fan-out over independent
//! faces.

pub mod classify;
pub mod dedup;
pub mod error;
pub mod loops;
pub mod member;
pub mod reconstruct;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use classify::{classify_edge, is_vertical, slab_floor, ClassifyParams};
pub use dedup::{dedup_edges, dedup_faces, same_edge, same_face, DECIMAL_PLACES};
pub use error::{Error, Result};
pub use loops::order_loop;
pub use member::{Edge, FaceLoop, MemberKind};
pub use reconstruct::{parse_edges, parse_edges_with, parse_faces, parse_faces_partial};
