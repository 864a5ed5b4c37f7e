//! Single-threaded contraction engine.

use crate::radix;
use crate::tensor::Tensor;

use super::remap::map_operand_coords;
use super::result_order;

/// Contract `lhs` and `rhs` by walking the result in ascending linear order.
///
/// The operand coordinates are maintained incrementally: the remapper fixes
/// their "own" digits once per output cell, and the μ-cycle loop sweeps the
/// contracted suffixes with the mixed-radix counter primitives, resetting
/// them to zero before the next cell. Preconditions are validated upstream.
pub(super) fn run(lhs: &Tensor, rhs: &Tensor, lambda: u32, mu: u32) -> Tensor {
    let base = lhs.base();
    let out_order = result_order(lhs.order(), rhs.order(), lambda, mu);
    let size = radix::pow(base, out_order);
    let cycle = radix::pow(base, mu);

    let mut out = vec![0u32; size];
    let mut out_coord = vec![0u32; out_order as usize];
    let mut lhs_coord = vec![0u32; lhs.order() as usize];
    let mut rhs_coord = vec![0u32; rhs.order() as usize];

    let lhs_values = lhs.values();
    let rhs_values = rhs.values();

    for (idx, slot) in out.iter_mut().enumerate() {
        let mut acc: u32 = 0;

        if mu > 0 {
            // lhs counter: trailing μ digits; rhs counter: the last μ digits
            // of the leading λ+μ span.
            let last_lhs = lhs_coord.len() - 1;
            let last_rhs = (lambda + mu - 1) as usize;

            for step in 0..cycle {
                acc = acc.wrapping_add(
                    lhs_values[radix::encode(&lhs_coord, base)]
                        .wrapping_mul(rhs_values[radix::encode(&rhs_coord, base)]),
                );
                if step + 1 < cycle {
                    radix::increment_suffix(&mut lhs_coord, last_lhs, base);
                    radix::increment_suffix(&mut rhs_coord, last_rhs, base);
                }
            }

            radix::zero_suffix(&mut lhs_coord, last_lhs, mu as usize);
            radix::zero_suffix(&mut rhs_coord, last_rhs, mu as usize);
        } else {
            acc = lhs_values[radix::encode(&lhs_coord, base)]
                .wrapping_mul(rhs_values[radix::encode(&rhs_coord, base)]);
        }

        *slot = acc;

        if idx + 1 < size {
            let last_out = out_coord.len() - 1;
            radix::increment_suffix(&mut out_coord, last_out, base);
            map_operand_coords(&out_coord, &mut lhs_coord, &mut rhs_coord, lambda, mu);
        }
    }

    Tensor::from_raw(base, out_order, out)
}
