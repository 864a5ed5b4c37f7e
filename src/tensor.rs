//! Dense fixed-radix tensor container.

use crate::error::{ContractionError, Result};
use crate::radix;

/// A dense tensor of `base^order` unsigned 32-bit entries, addressed by
/// tuples of `order` digits in `[0, base)`, stored row-major with the most
/// significant digit first.
///
/// Tensors are created zero-filled (or bulk-loaded) and are read-only for
/// the duration of a contraction call; engines write only into a freshly
/// allocated result tensor.
///
/// # Example
///
/// ```rust
/// use radix_contract::Tensor;
///
/// let t = Tensor::zeros(3, 2).unwrap();
/// assert_eq!(t.len(), 9);
/// assert!(t.values().iter().all(|&v| v == 0));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Tensor {
    base: u32,
    order: u32,
    values: Vec<u32>,
}

impl Tensor {
    /// Create a zero-filled tensor.
    ///
    /// Fails with [`ContractionError::InvalidDimension`] if `base < 2`.
    /// Order 0 is legal and denotes a single scalar entry.
    pub fn zeros(base: u32, order: u32) -> Result<Self> {
        if base < 2 {
            return Err(ContractionError::InvalidDimension { base });
        }
        Ok(Self {
            base,
            order,
            values: vec![0; radix::pow(base, order)],
        })
    }

    /// Create a tensor from a flat row-major value vector.
    ///
    /// Fails with [`ContractionError::LengthMismatch`] unless
    /// `values.len() == base^order`.
    pub fn from_values(base: u32, order: u32, values: Vec<u32>) -> Result<Self> {
        if base < 2 {
            return Err(ContractionError::InvalidDimension { base });
        }
        let expected = radix::pow(base, order);
        if values.len() != expected {
            return Err(ContractionError::LengthMismatch {
                base,
                order,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { base, order, values })
    }

    /// Build from parts the engines have already sized correctly.
    pub(crate) fn from_raw(base: u32, order: u32, values: Vec<u32>) -> Self {
        debug_assert_eq!(values.len(), radix::pow(base, order));
        Self { base, order, values }
    }

    /// The per-digit radix `X`.
    #[inline]
    pub fn base(&self) -> u32 {
        self.base
    }

    /// The number of coordinate digits `P`.
    #[inline]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Total number of entries, `base^order`.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the tensor has no entries. Never true for a valid tensor
    /// (an order-0 tensor still holds one scalar).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Flat row-major view of all entries.
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Mutable flat view, for bulk assignment of input data.
    #[inline]
    pub fn values_mut(&mut self) -> &mut [u32] {
        &mut self.values
    }

    /// Entry at a linear offset.
    #[inline]
    pub fn get(&self, offset: usize) -> u32 {
        self.values[offset]
    }

    /// Entry at a coordinate tuple of length `order`, each digit in
    /// `[0, base)`.
    pub fn get_at(&self, coords: &[u32]) -> u32 {
        debug_assert_eq!(coords.len(), self.order as usize);
        self.values[radix::encode(coords, self.base)]
    }

    /// Sequential contraction with `self` as the left operand.
    ///
    /// See [`crate::contract`].
    pub fn contract(&self, other: &Tensor, lambda: u32, mu: u32) -> Result<Tensor> {
        crate::contract::contract(self, other, lambda, mu)
    }

    /// Parallel contraction with `self` as the left operand.
    ///
    /// See [`crate::contract_parallel`].
    pub fn contract_parallel(&self, other: &Tensor, lambda: u32, mu: u32) -> Result<Tensor> {
        crate::contract::contract_parallel(self, other, lambda, mu)
    }
}

impl std::fmt::Debug for Tensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tensor")
            .field("base", &self.base)
            .field("order", &self.order)
            .field("len", &self.values.len())
            .finish()
    }
}
