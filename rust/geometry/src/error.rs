use nalgebra::Point3;
use thiserror::Error;

/// Result type for reconstruction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during skeleton reconstruction
#[derive(Error, Debug)]
pub enum Error {
    /// Edge chaining stalled before the face polygon closed. Reported per
    /// face; other faces of the same document may still reconstruct.
    #[error("face `{face_id}`: no edge continues the loop from ({}, {}, {})",
        .stalled_at.x, .stalled_at.y, .stalled_at.z)]
    DisconnectedLoop {
        face_id: String,
        stalled_at: Point3<f64>,
    },

    /// A face with fewer than three edges cannot form a polygon
    #[error("face `{face_id}`: {edge_count} edges cannot form a closed loop")]
    DegenerateFace { face_id: String, edge_count: usize },

    /// An edge whose endpoints coincide cannot form a member
    #[error("edge `{0}`: start and end coincide")]
    DegenerateEdge(String),

    /// A face edge whose endpoints coincide cannot take part in a loop
    #[error("face `{face_id}`: zero-length edge at ({}, {}, {})",
        .at.x, .at.y, .at.z)]
    ZeroLengthEdge { face_id: String, at: Point3<f64> },

    /// Document reading error
    #[error("document error: {0}")]
    Core(#[from] skel_lite_core::Error),
}
