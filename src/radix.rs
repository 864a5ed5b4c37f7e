//! Mixed-radix index codec.
//!
//! Converts between flat linear offsets and digit-tuple coordinates under a
//! fixed base, and provides the in-place counter primitives the contraction
//! engines drive: increment-with-carry over a trailing span, and resetting a
//! suffix back to zero after a full summation cycle.
//!
//! All arithmetic is exact integer arithmetic. Offsets are `usize`, digits
//! are `u32` in `[0, base)`.

/// Exact integer power `base^exp`.
#[inline]
pub fn pow(base: u32, exp: u32) -> usize {
    (base as usize).pow(exp)
}

/// Encode a digit tuple (most significant digit first) into a linear offset.
///
/// Horner form of `Σ digits[i] · base^(n-1-i)`. An empty tuple encodes to 0,
/// which is what an order-0 (scalar) tensor addresses.
#[inline]
pub fn encode(digits: &[u32], base: u32) -> usize {
    digits
        .iter()
        .fold(0usize, |acc, &d| acc * base as usize + d as usize)
}

/// Decode a linear offset into a freshly allocated digit tuple of length
/// `order`, most significant digit first.
///
/// Agrees with [`decode_into`] for every offset in `[0, base^order)`.
pub fn decode(order: u32, base: u32, offset: usize) -> Vec<u32> {
    let mut digits = vec![0u32; order as usize];
    let mut rem = offset;
    for (idx, digit) in digits.iter_mut().enumerate() {
        let place = pow(base, order - idx as u32 - 1);
        *digit = (rem / place) as u32;
        rem -= *digit as usize * place;
    }
    digits
}

/// Decode a linear offset into a caller-owned buffer, least significant
/// position backward via repeated `%`/`/`.
///
/// This is the canonical decode used by the parallel engine, where each
/// output cell recomputes its coordinate from scratch.
#[inline]
pub fn decode_into(base: u32, offset: usize, out: &mut [u32]) {
    let mut rem = offset;
    for digit in out.iter_mut().rev() {
        *digit = (rem % base as usize) as u32;
        rem /= base as usize;
    }
}

/// Add 1 with carry to the counter `digits[0..=last]`, carrying right-to-left
/// starting at `last`.
///
/// Carrying past index 0 wraps the counter to all zeros; callers bound
/// iteration by the cycle length `base^(last+1)` so that never occurs
/// mid-cycle.
#[inline]
pub fn increment_suffix(digits: &mut [u32], last: usize, base: u32) {
    for idx in (0..=last).rev() {
        if digits[idx] == base - 1 {
            digits[idx] = 0;
        } else {
            digits[idx] += 1;
            return;
        }
    }
}

/// Zero `count` consecutive positions, starting at `start` and walking toward
/// index 0. `count == 0` is a no-op; `count` must not exceed `start + 1`.
#[inline]
pub fn zero_suffix(digits: &mut [u32], start: usize, count: usize) {
    debug_assert!(count <= start + 1);
    for digit in &mut digits[start + 1 - count..=start] {
        *digit = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_positional() {
        // 1*3^1 + 2*3^0 = 5
        assert_eq!(encode(&[1, 2], 3), 5);
        // 1*3^2 + 0*3^1 + 2*3^0 = 11
        assert_eq!(encode(&[1, 0, 2], 3), 11);
        assert_eq!(encode(&[], 3), 0);
    }

    #[test]
    fn test_decode_positional() {
        assert_eq!(decode(2, 3, 5), vec![1, 2]);
        assert_eq!(decode(3, 3, 11), vec![1, 0, 2]);
        assert_eq!(decode(0, 3, 0), Vec::<u32>::new());
    }

    #[test]
    fn test_decode_into_matches_decode() {
        for base in 2u32..=5 {
            for order in 1u32..=4 {
                let mut buf = vec![0u32; order as usize];
                for offset in 0..pow(base, order) {
                    decode_into(base, offset, &mut buf);
                    assert_eq!(buf, decode(order, base, offset), "base={base} order={order} offset={offset}");
                }
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for base in 2u32..=4 {
            for order in 1u32..=4 {
                for offset in 0..pow(base, order) {
                    assert_eq!(encode(&decode(order, base, offset), base), offset);
                }
            }
        }
    }

    #[test]
    fn test_counter_cycle() {
        // X^n - 1 increments of the all-zero tuple reach the maximal tuple.
        let base = 3u32;
        let mut counter = vec![0u32; 3];
        for step in 1..pow(base, 3) {
            increment_suffix(&mut counter, 2, base);
            assert_eq!(encode(&counter, base), step);
        }
        assert_eq!(counter, vec![2, 2, 2]);
    }

    #[test]
    fn test_increment_partial_suffix() {
        // Only digits[0..=1] act as the counter; digits[2] is untouched.
        let mut digits = vec![0, 1, 7];
        increment_suffix(&mut digits, 1, 2);
        assert_eq!(digits, vec![1, 0, 7]);
    }

    #[test]
    fn test_zero_suffix() {
        let mut digits = vec![4, 3, 2, 1];
        zero_suffix(&mut digits, 3, 2);
        assert_eq!(digits, vec![4, 3, 0, 0]);

        // count = 0 leaves everything alone
        let mut digits = vec![4, 3, 2, 1];
        zero_suffix(&mut digits, 3, 0);
        assert_eq!(digits, vec![4, 3, 2, 1]);
    }
}
