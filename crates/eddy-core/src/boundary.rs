//! Boundary-kind tags.

use crate::error::FieldError;

/// Which physical quantity a field carries, passed to the boundary policy.
///
/// The tag is threaded through every kernel so callers can describe their
/// fields, but the current policy (corner averaging) produces the same
/// result for all three kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Density, pressure, divergence (tag 0).
    Scalar,
    /// First-axis velocity component (tag 1).
    VelocityX,
    /// Second-axis velocity component (tag 2).
    VelocityY,
}

impl BoundaryKind {
    /// Numeric tag: 0, 1 or 2.
    pub fn tag(self) -> u8 {
        match self {
            Self::Scalar => 0,
            Self::VelocityX => 1,
            Self::VelocityY => 2,
        }
    }
}

impl TryFrom<u8> for BoundaryKind {
    type Error = FieldError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Self::Scalar),
            1 => Ok(Self::VelocityX),
            2 => Ok(Self::VelocityY),
            _ => Err(FieldError::UnknownBoundaryKind { tag }),
        }
    }
}
