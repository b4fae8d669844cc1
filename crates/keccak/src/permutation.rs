//! The Keccak-f[1600] permutation.

use klane_primitives::{lane_index, rotl64, RC, ROUNDS, WORDS};

/// Number of `u32` limbs in the state.
pub const KECCAK_STATE_U32S: usize = WORDS * 2;

/// Applies the 24 rounds of Keccak-f[1600] to `state` in place.
#[inline]
pub fn keccakf(state: &mut [u64; WORDS]) {
    for rc in RC.iter().take(ROUNDS) {
        round(state, *rc);
    }
}

#[inline(always)]
fn round(a: &mut [u64; WORDS], rc: u64) {
    // Theta
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ rotl64(c[(x + 1) % 5], 1);
        for y in 0..5 {
            a[lane_index(x, y)] ^= d;
        }
    }

    // Rho and pi, walking the lane cycle that starts at (1, 0).
    let (mut x, mut y) = (1usize, 0usize);
    let mut carried = a[lane_index(x, y)];
    for t in 0..24u32 {
        (x, y) = (y, (2 * x + 3 * y) % 5);
        let dst = lane_index(x, y);
        let next = a[dst];
        a[dst] = rotl64(carried, ((t + 1) * (t + 2) / 2) % 64);
        carried = next;
    }

    // Chi
    for y in 0..5 {
        let row: [u64; 5] = core::array::from_fn(|x| a[lane_index(x, y)]);
        for x in 0..5 {
            a[lane_index(x, y)] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }

    // Iota
    a[0] ^= rc;
}

/// Like [`keccakf`], but deals with `u32` limbs instead of `u64` lanes.
///
/// Lane `i` is stored as `state_u32s[2 * i]` (low half) and `state_u32s[2 * i + 1]` (high half),
/// which is the layout 32-bit execution lanes keep the state in.
pub fn keccakf_u32s(state_u32s: &mut [u32; KECCAK_STATE_U32S]) {
    let mut state_u64s: [u64; WORDS] = core::array::from_fn(|i| {
        let lo = state_u32s[i * 2] as u64;
        let hi = state_u32s[i * 2 + 1] as u64;
        lo | (hi << 32)
    });
    keccakf(&mut state_u64s);
    *state_u32s = core::array::from_fn(|i| {
        let u64_limb = state_u64s[i / 2];
        let is_hi = i % 2;
        (u64_limb >> (is_hi * 32)) as u32
    });
}
