//! Constants and lane helpers shared by the Keccak-f[1600] permutation and the sponge built on it.
//!
//! Everything here is `const` data or a pure function over fixed-size arrays, so it can be used
//! from any execution context without synchronization.
#![cfg_attr(not(test), no_std)]

use static_assertions::{const_assert, const_assert_eq};

/// Number of 64-bit lanes in the Keccak-f[1600] state.
pub const WORDS: usize = 25;

/// Size of the state in bytes.
pub const STATE_BYTES: usize = WORDS * 8;

/// Number of rounds of Keccak-f[1600].
pub const ROUNDS: usize = 24;

/// Rate of Keccak-256 in bytes (1088 bits).
pub const RATE_BYTES: usize = 136;

/// Rate of Keccak-256 in lanes.
pub const RATE_LANES: usize = RATE_BYTES / 8;

/// Capacity of Keccak-256 in bytes (512 bits).
pub const CAPACITY_BYTES: usize = 64;

/// Size of a Keccak-256 digest in bytes.
pub const DIGEST_BYTES: usize = 32;

/// Number of lanes squeezed into a digest.
pub const DIGEST_LANES: usize = DIGEST_BYTES / 8;

/// Padding delimiter of the original Keccak submission, used by Ethereum.
pub const KECCAK_DELIM: u8 = 0x01;

/// Padding delimiter of FIPS 202 SHA3.
pub const SHA3_DELIM: u8 = 0x06;

/// Bit set in the last byte of the rate to close the padding.
pub const PAD_END: u8 = 0x80;

const_assert_eq!(RATE_BYTES + CAPACITY_BYTES, STATE_BYTES);
const_assert_eq!(RATE_LANES * 8, RATE_BYTES);
const_assert!(DIGEST_BYTES <= RATE_BYTES);

/// Iota round constants, one per round.
pub const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Linear index of lane `(x, y)`.
#[inline(always)]
pub const fn lane_index(x: usize, y: usize) -> usize {
    x + 5 * y
}

/// Circular left rotation of a lane.
///
/// The permutation only rotates by `1..=63`; other amounts are reduced modulo 64, so `n == 0`
/// returns `v` unchanged instead of shifting by the full word width.
#[inline(always)]
pub const fn rotl64(v: u64, n: u32) -> u64 {
    v.rotate_left(n % 64)
}

/// Reads a little-endian lane from the first eight bytes of `bytes`.
///
/// # Panics
///
/// Panics if `bytes` is shorter than eight bytes.
#[inline(always)]
pub fn load_lane_le(bytes: &[u8]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&bytes[..8]);
    u64::from_le_bytes(word)
}

/// XORs one rate-sized block into lanes `0..RATE_LANES`; the capacity is left untouched.
///
/// `block` must be exactly [`RATE_BYTES`] long.
#[inline]
pub fn xor_block_le(state: &mut [u64; WORDS], block: &[u8]) {
    debug_assert_eq!(block.len(), RATE_BYTES);
    for (lane, chunk) in state[..RATE_LANES].iter_mut().zip(block.chunks_exact(8)) {
        *lane ^= load_lane_le(chunk);
    }
}

/// Serializes lanes `0..DIGEST_LANES` little-endian into `out`.
#[inline]
pub fn store_digest_le(state: &[u64; WORDS], out: &mut [u8; DIGEST_BYTES]) {
    for (chunk, lane) in out.chunks_exact_mut(8).zip(&state[..DIGEST_LANES]) {
        chunk.copy_from_slice(&lane.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    /// Bit `t` of the Keccak round-constant LFSR (x^8 + x^6 + x^5 + x^4 + 1).
    fn lfsr_bit(t: usize) -> bool {
        let mut r: u16 = 1;
        for _ in 0..t % 255 {
            r <<= 1;
            if r & 0x100 != 0 {
                r ^= 0x171;
            }
        }
        r & 1 == 1
    }

    #[test]
    fn round_constants_match_lfsr() {
        for (round, rc) in RC.iter().enumerate() {
            let mut expected = 0u64;
            for j in 0..7 {
                if lfsr_bit(j + 7 * round) {
                    expected |= 1 << ((1 << j) - 1);
                }
            }
            assert_eq!(*rc, expected, "round {round}");
        }
    }

    #[test]
    fn rotl64_matches_shift_formula() {
        let mut rng = rand::thread_rng();
        for _ in 0..64 {
            let v: u64 = rng.gen();
            for n in 1..64u32 {
                assert_eq!(rotl64(v, n), (v << n) | (v >> (64 - n)));
            }
            assert_eq!(rotl64(v, 0), v);
            assert_eq!(rotl64(v, 64), v);
        }
    }

    #[test]
    fn lane_index_is_row_major() {
        assert_eq!(lane_index(0, 0), 0);
        assert_eq!(lane_index(1, 0), 1);
        assert_eq!(lane_index(0, 1), 5);
        assert_eq!(lane_index(4, 4), WORDS - 1);
    }

    #[test]
    fn xor_block_leaves_capacity_untouched() {
        let mut state = [u64::MAX; WORDS];
        let block = [0xffu8; RATE_BYTES];
        xor_block_le(&mut state, &block);
        assert!(state[..RATE_LANES].iter().all(|&lane| lane == 0));
        assert!(state[RATE_LANES..].iter().all(|&lane| lane == u64::MAX));
    }

    #[test]
    fn lanes_are_little_endian() {
        let mut block = [0u8; RATE_BYTES];
        block[0] = 0x01;
        block[RATE_BYTES - 1] = 0x80;
        let mut state = [0u64; WORDS];
        xor_block_le(&mut state, &block);
        assert_eq!(state[0], 1);
        assert_eq!(state[RATE_LANES - 1], 0x8000_0000_0000_0000);

        let mut out = [0u8; DIGEST_BYTES];
        state[1] = 0x0807_0605_0403_0201;
        store_digest_le(&state, &mut out);
        assert_eq!(&out[8..16], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(out[0], 1);
    }
}
