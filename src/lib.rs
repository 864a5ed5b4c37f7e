//! # radix-contract
//!
//! Generalized contraction products over dense fixed-radix tensors.
//!
//! A [`Tensor`] of base `X` and order `P` holds `X^P` unsigned 32-bit entries,
//! addressed by tuples of `P` digits in base `X` (row-major, most significant
//! digit first). Two tensors over the same base are combined by a contraction
//! parameterized by `(λ, μ)`:
//!
//! - **λ** counts *shared* index positions, read identically by both operands
//!   and preserved once in the result (batch-like axes).
//! - **μ** counts *contracted* index positions, present in both operands,
//!   summed over, and absent from the result (reduction axes).
//!
//! The result order is `(P_A − λ − μ) + (P_B − λ − μ) + λ`. With `λ = 0,
//! μ = 1` the operation degenerates to ordinary matrix multiplication; with
//! `λ = μ = 0` it is the full outer product.
//!
//! Entries are `u32` with wraparound-on-overflow semantics. Accumulation
//! order per output cell is fixed, so the sequential and parallel engines
//! produce bit-identical results.
//!
//! ## Quick Start
//!
//! ```rust
//! use radix_contract::{contract, contract_parallel, Tensor};
//!
//! # fn main() -> radix_contract::Result<()> {
//! // Two 3x3 matrices as base-3, order-2 tensors (row-major).
//! let a = Tensor::from_values(3, 2, vec![1, 2, 3, 4, 5, 6, 7, 8, 9])?;
//! let b = a.clone();
//!
//! // λ=0, μ=1 is plain matrix multiplication.
//! let c = contract(&a, &b, 0, 1)?;
//! assert_eq!(c.values(), &[30, 36, 42, 66, 81, 96, 102, 126, 150]);
//!
//! // The parallel engine is value-for-value identical.
//! let d = contract_parallel(&a, &b, 0, 1)?;
//! assert_eq!(c, d);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! contract / contract_parallel          precondition checks, result sizing
//!         │
//!         ▼
//! contract::remap                       result coordinate → operand coordinates
//!         │
//!         ▼
//! radix                                 mixed-radix codec + counter primitives
//! ```
//!
//! The sequential engine walks the result in linear order, advancing the
//! operand coordinates incrementally. The parallel engine splits the result
//! index range into contiguous per-worker chunks (via rayon) and recomputes
//! coordinates from scratch for every output cell, trading arithmetic for
//! the absence of cross-worker state.

pub mod contract;
pub mod error;
pub mod radix;
pub mod tensor;

// Re-exports
pub use contract::{contract, contract_parallel, result_order};
pub use error::{ContractionError, Result};
pub use tensor::Tensor;
