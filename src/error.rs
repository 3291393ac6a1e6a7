//! Error type of the momentum assembly
use thiserror::Error;

/// Result alias used throughout this crate
pub type Result<T> = std::result::Result<T, AssemblyError>;

/// Errors raised while assembling momentum coefficients
#[derive(Debug, Error)]
pub enum AssemblyError {
    /// Péclet number requires a nonzero diffusivity
    #[error("zero diffusivity, peclet number is undefined")]
    ZeroDiffusivity,
    /// NaN or infinite value in a numerical quantity
    #[error("non-finite {what}: {value}")]
    NonFinite {
        /// Name of the quantity
        what: &'static str,
        /// Offending value
        value: f64,
    },
    /// Discretization parameter rejected at construction
    #[error("invalid parameter {name} = {value}")]
    InvalidParameter {
        /// Name of the parameter
        name: &'static str,
        /// Offending value
        value: f64,
    },
    /// Unknown or neighbor id outside of its field
    #[error("index {index} out of range for field {field} of length {len}")]
    IndexOutOfRange {
        /// Field which is indexed (u, v or p)
        field: &'static str,
        /// Requested index (negative if it lies before the first row)
        index: isize,
        /// Length of the field
        len: usize,
    },
    /// Wall or ghost unknown passed to the interior stencil
    #[error("unknown {id} (column {column}) is not an interior unknown")]
    NotInterior {
        /// Unknown id
        id: usize,
        /// Column of the unknown within its row
        column: usize,
    },
    /// Face tag which is none of W, E, S, N
    #[error("unknown face tag {0:?}, expected one of W, E, S, N")]
    UnknownFace(String),
    /// Configuration could not be parsed
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}
