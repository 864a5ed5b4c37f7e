//! Result-coordinate to operand-coordinate remapping.

/// Derive the "own" digits of both operand coordinates from a result
/// coordinate under `(λ, μ)`.
///
/// Layout of the result coordinate, by convention:
/// - the leading `lhs.len() − μ` digits are operand-A's own non-contracted
///   digits (the λ shared digits included);
/// - the λ shared digits sit starting at offset `(result.len() − λ) / 2` and
///   are copied into the leading λ positions of `rhs`;
/// - the trailing `rhs.len() − λ − μ` digits are operand-B's own digits,
///   copied backward from the end of `result` into the end of `rhs`.
///
/// The trailing μ positions of `lhs` and the μ positions after the shared
/// span of `rhs` are deliberately left untouched: they are the summed
/// counters, driven by the contraction loop between remaps. This split is
/// what lets the engines sweep the contracted subspace incrementally without
/// redoing the remap per accumulation step.
pub(super) fn map_operand_coords(
    result: &[u32],
    lhs: &mut [u32],
    rhs: &mut [u32],
    lambda: u32,
    mu: u32,
) {
    let lambda = lambda as usize;
    let mu = mu as usize;

    let lhs_own = lhs.len() - mu;
    lhs[..lhs_own].copy_from_slice(&result[..lhs_own]);

    let shared_at = (result.len() - lambda) / 2;
    rhs[..lambda].copy_from_slice(&result[shared_at..shared_at + lambda]);

    if lambda + mu < result.len() {
        // Bound is operand-B's own digit count, not operand-A's: the two
        // differ for asymmetric operand orders (pinned by tests below).
        let rhs_own = rhs.len() - lambda - mu;
        for i in 0..rhs_own {
            rhs[rhs.len() - 1 - i] = result[result.len() - 1 - i];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matmul_mapping() {
        // λ=0, μ=1 over two order-2 operands: result (i, k) reads row i of
        // the lhs and column k of the rhs.
        let mut lhs = vec![9, 9];
        let mut rhs = vec![9, 9];
        map_operand_coords(&[1, 2], &mut lhs, &mut rhs, 0, 1);
        assert_eq!(lhs, vec![1, 9]); // trailing μ slot untouched
        assert_eq!(rhs, vec![9, 2]); // leading μ slot untouched
    }

    #[test]
    fn test_shared_axis_mapping() {
        // λ=1, μ=0 over two order-2 operands: result coordinate (a, s, b),
        // shared digit s in the middle.
        let mut lhs = vec![9, 9];
        let mut rhs = vec![9, 9];
        map_operand_coords(&[0, 1, 2], &mut lhs, &mut rhs, 1, 0);
        assert_eq!(lhs, vec![0, 1]);
        assert_eq!(rhs, vec![1, 2]);
    }

    #[test]
    fn test_fully_contracted_rhs() {
        // λ=1, μ=1 over two order-2 operands: the result is order 1 and the
        // rhs has no own digits left.
        let mut lhs = vec![9, 9];
        let mut rhs = vec![9, 9];
        map_operand_coords(&[2], &mut lhs, &mut rhs, 1, 1);
        assert_eq!(lhs, vec![2, 9]);
        assert_eq!(rhs, vec![2, 9]);
    }

    #[test]
    fn test_asymmetric_orders_rhs_bound() {
        // Regression for the trailing-copy loop bound: with lhs order 3 and
        // rhs order 2 under λ=0, μ=1, the rhs has exactly one own digit. A
        // bound derived from the lhs order would copy two digits and clobber
        // the rhs contracted-counter slot.
        let mut lhs = vec![9, 9, 9];
        let mut rhs = vec![9, 9];
        map_operand_coords(&[1, 2, 3], &mut lhs, &mut rhs, 0, 1);
        assert_eq!(lhs, vec![1, 2, 9]);
        assert_eq!(rhs, vec![9, 3]);
    }

    #[test]
    fn test_rhs_with_no_own_digits() {
        // rhs order equals λ + μ: the trailing copy must not run at all.
        let mut lhs = vec![9, 9];
        let mut rhs = vec![9];
        map_operand_coords(&[1], &mut lhs, &mut rhs, 0, 1);
        assert_eq!(lhs, vec![1, 9]);
        assert_eq!(rhs, vec![9]);
    }
}
