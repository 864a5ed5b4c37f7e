//! Error types for tensor creation and contraction.

use thiserror::Error;

/// Errors raised before any computation begins.
///
/// All variants are precondition violations and are fatal to the call:
/// there is no partial result and no retry path. Arithmetic overflow during
/// accumulation is *not* an error — it is defined `u32` wraparound.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContractionError {
    /// Tensor creation with a base that cannot address digits.
    #[error("invalid dimension: base must be at least 2, got {base}")]
    InvalidDimension { base: u32 },

    /// Bulk value load whose length is not `base^order`.
    #[error("length mismatch: base {base} order {order} needs {expected} values, got {actual}")]
    LengthMismatch {
        base: u32,
        order: u32,
        expected: usize,
        actual: usize,
    },

    /// Contraction operands over different bases.
    #[error("dimension mismatch: operand bases differ ({lhs} vs {rhs})")]
    DimensionMismatch { lhs: u32, rhs: u32 },

    /// `λ + μ` exceeds the order of one of the operands.
    #[error(
        "invalid contraction parameters: lambda {lambda} + mu {mu} exceeds \
         operand orders ({lhs_order}, {rhs_order})"
    )]
    InvalidContractionParameters {
        lambda: u32,
        mu: u32,
        lhs_order: u32,
        rhs_order: u32,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ContractionError>;
