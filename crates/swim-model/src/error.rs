//! Error types for the domain model

/// Errors raised by geodesy and shape construction
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// Sector bounds do not span an area
    #[error("degenerate sector: {0}")]
    DegenerateSector(String),

    /// Derived volume has a non-positive extent along an axis
    #[error("zero-volume box: {axis} length is {length}")]
    ZeroVolume { axis: &'static str, length: f64 },

    /// Shape parameter outside its valid domain
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// A reference position was requested from geometry that has none
    #[error("no reference position: {0}")]
    NoReferencePosition(String),

    /// Cartesian point cannot be projected back onto the globe
    #[error("projection failed: {0}")]
    Projection(String),
}

impl GeometryError {
    /// Create degenerate sector error
    pub fn degenerate_sector(message: impl Into<String>) -> Self {
        Self::DegenerateSector(message.into())
    }

    /// Create invalid shape error
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }
}

/// Result type alias for geometry operations
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors raised by the symbol factory
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SymbolError {
    /// Identifier does not follow the symbol identification code layout
    #[error("invalid symbol identifier '{sidc}': {reason}")]
    InvalidIdentifier { sidc: String, reason: String },
}

impl SymbolError {
    /// Create invalid identifier error
    pub fn invalid_identifier(sidc: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            sidc: sidc.into(),
            reason: reason.into(),
        }
    }
}
