//! Generalized `(λ, μ)` contraction engines.
//!
//! Both engines validate the same preconditions, derive the result order via
//! [`result_order`], and run the same per-cell accumulation; they differ only
//! in how they walk the result index space. Their outputs are bit-identical.

mod parallel;
mod remap;
mod sequential;

use crate::error::{ContractionError, Result};
use crate::tensor::Tensor;

/// Order of the result tensor: `(P_A − λ − μ) + (P_B − λ − μ) + λ`.
///
/// Callers must have checked `λ + μ ≤ min(P_A, P_B)` first; the subtraction
/// is unchecked.
#[inline]
pub fn result_order(lhs_order: u32, rhs_order: u32, lambda: u32, mu: u32) -> u32 {
    (lhs_order - lambda - mu) + (rhs_order - lambda - mu) + lambda
}

/// Sequential contraction of `lhs` and `rhs` under `(λ, μ)`.
///
/// Walks the result tensor in ascending linear order, maintaining live
/// operand coordinate counters incrementally. Accumulation per output cell
/// is wrapping `u32` arithmetic in ascending counter order.
///
/// # Errors
///
/// - [`ContractionError::DimensionMismatch`] if the operand bases differ.
/// - [`ContractionError::InvalidContractionParameters`] if
///   `λ + μ > min(lhs.order, rhs.order)`.
pub fn contract(lhs: &Tensor, rhs: &Tensor, lambda: u32, mu: u32) -> Result<Tensor> {
    validate(lhs, rhs, lambda, mu)?;
    Ok(sequential::run(lhs, rhs, lambda, mu))
}

/// Parallel contraction of `lhs` and `rhs` under `(λ, μ)`.
///
/// Splits the result index range into contiguous chunks, one per available
/// worker, and recomputes operand coordinates per output cell from purely
/// chunk-local buffers. For identical inputs the result is value-for-value
/// identical to [`contract`].
///
/// # Errors
///
/// Same preconditions as [`contract`].
pub fn contract_parallel(lhs: &Tensor, rhs: &Tensor, lambda: u32, mu: u32) -> Result<Tensor> {
    validate(lhs, rhs, lambda, mu)?;
    Ok(parallel::run(lhs, rhs, lambda, mu))
}

fn validate(lhs: &Tensor, rhs: &Tensor, lambda: u32, mu: u32) -> Result<()> {
    if lhs.base() != rhs.base() {
        return Err(ContractionError::DimensionMismatch {
            lhs: lhs.base(),
            rhs: rhs.base(),
        });
    }
    let min_order = lhs.order().min(rhs.order());
    if lambda as u64 + mu as u64 > min_order as u64 {
        return Err(ContractionError::InvalidContractionParameters {
            lambda,
            mu,
            lhs_order: lhs.order(),
            rhs_order: rhs.order(),
        });
    }
    Ok(())
}
