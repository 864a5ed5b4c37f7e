//! Data-parallel chunked contraction engine.

use rayon::prelude::*;

use crate::radix;
use crate::tensor::Tensor;

use super::remap::map_operand_coords;
use super::result_order;

/// Contract `lhs` and `rhs` over contiguous chunks of the result index
/// range, one chunk per available worker.
///
/// Each chunk owns its coordinate scratch buffers and resets them before
/// every cell; the result coordinate is decoded from the linear offset
/// rather than carried incrementally, so chunks share no state. Per-cell
/// accumulation is the same ascending-counter wrapping loop as the
/// sequential engine, which makes the two engines bit-identical.
/// Preconditions are validated upstream.
pub(super) fn run(lhs: &Tensor, rhs: &Tensor, lambda: u32, mu: u32) -> Tensor {
    let base = lhs.base();
    let out_order = result_order(lhs.order(), rhs.order(), lambda, mu);
    let size = radix::pow(base, out_order);
    let cycle = radix::pow(base, mu);

    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    let chunk_len = size.div_ceil(workers).max(1);

    let lhs_values = lhs.values();
    let rhs_values = rhs.values();

    let mut out = vec![0u32; size];
    out.par_chunks_mut(chunk_len)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let start = chunk_idx * chunk_len;
            let mut out_coord = vec![0u32; out_order as usize];
            let mut lhs_coord = vec![0u32; lhs.order() as usize];
            let mut rhs_coord = vec![0u32; rhs.order() as usize];

            for (cell, slot) in chunk.iter_mut().enumerate() {
                // Full reset before each cell; stale counter state from the
                // previous cell must never leak into the remap.
                out_coord.fill(0);
                lhs_coord.fill(0);
                rhs_coord.fill(0);

                radix::decode_into(base, start + cell, &mut out_coord);
                map_operand_coords(&out_coord, &mut lhs_coord, &mut rhs_coord, lambda, mu);

                let mut acc: u32 = 0;
                if mu > 0 {
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
                } else {
                    acc = lhs_values[radix::encode(&lhs_coord, base)]
                        .wrapping_mul(rhs_values[radix::encode(&rhs_coord, base)]);
                }

                *slot = acc;
            }
        });

    Tensor::from_raw(base, out_order, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_3x3() -> Tensor {
        Tensor::from_values(3, 2, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap()
    }

    #[test]
    fn test_plain_matmul() {
        let c = run(&square_3x3(), &square_3x3(), 0, 1);
        assert_eq!(c.values(), &[30, 36, 42, 66, 81, 96, 102, 126, 150]);
    }

    #[test]
    fn test_matches_sequential_across_parameters() {
        let a = square_3x3();
        let b = square_3x3();
        for (lambda, mu) in [(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (0, 2)] {
            let seq = super::super::sequential::run(&a, &b, lambda, mu);
            let par = run(&a, &b, lambda, mu);
            assert_eq!(seq, par, "lambda={lambda} mu={mu}");
        }
    }

    #[test]
    fn test_chunk_boundaries_cover_larger_result() {
        // Result larger than any plausible worker count, so chunk starts
        // land mid-coordinate-space.
        let a = Tensor::from_values(2, 6, (0..64).map(|i| i % 7).collect()).unwrap();
        let b = Tensor::from_values(2, 6, (0..64).map(|i| (i + 3) % 5).collect()).unwrap();
        for (lambda, mu) in [(0, 1), (1, 2), (3, 1), (2, 2)] {
            let seq = super::super::sequential::run(&a, &b, lambda, mu);
            let par = run(&a, &b, lambda, mu);
            assert_eq!(seq, par, "lambda={lambda} mu={mu}");
        }
    }
}
