//! Fixed-output sponge over Keccak-f[1600]: absorb every block, pad the last one, squeeze once.

use klane_primitives::{
    store_digest_le, xor_block_le, DIGEST_BYTES, KECCAK_DELIM, PAD_END, RATE_BYTES, SHA3_DELIM,
    WORDS,
};

use crate::{error::KeccakError, permutation::keccakf};

/// Absorbs `input` with padding delimiter `DELIM` and writes the first [`DIGEST_BYTES`] of the
/// resulting state to `output`.
///
/// `on_absorb` sees the state right after each block is XORed in and before it is permuted.
#[inline(always)]
pub(crate) fn sponge<const DELIM: u8>(
    input: &[u8],
    output: &mut [u8; DIGEST_BYTES],
    mut on_absorb: impl FnMut(&[u64; WORDS]),
) {
    let mut state = [0u64; WORDS];

    let mut blocks = input.chunks_exact(RATE_BYTES);
    for block in &mut blocks {
        xor_block_le(&mut state, block);
        on_absorb(&state);
        keccakf(&mut state);
    }

    // The final block always runs, even when it carries nothing but padding.
    let tail = blocks.remainder();
    let mut last = [0u8; RATE_BYTES];
    last[..tail.len()].copy_from_slice(tail);
    last[tail.len()] = DELIM;
    last[RATE_BYTES - 1] |= PAD_END;

    xor_block_le(&mut state, &last);
    on_absorb(&state);
    keccakf(&mut state);

    store_digest_le(&state, output);
}

/// Computes the Ethereum Keccak-256 digest of `input` into `output`.
///
/// Never allocates and never fails; every call owns its own state, so it may run concurrently
/// from any number of threads.
#[inline]
pub fn hash_keccak256(input: &[u8], output: &mut [u8; DIGEST_BYTES]) {
    sponge::<KECCAK_DELIM>(input, output, |_| {});
}

/// Returns the Ethereum Keccak-256 digest of `input`.
#[inline]
pub fn keccak256(input: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut output = [0u8; DIGEST_BYTES];
    hash_keccak256(input, &mut output);
    output
}

/// Like [`hash_keccak256`], but for an output buffer whose length is only known at runtime.
pub fn try_hash_keccak256(input: &[u8], output: &mut [u8]) -> Result<(), KeccakError> {
    let len = output.len();
    let output: &mut [u8; DIGEST_BYTES] =
        output.try_into().map_err(|_| KeccakError::OutputLength(len))?;
    hash_keccak256(input, output);
    Ok(())
}

/// Returns the FIPS 202 SHA3-256 digest of `input`.
///
/// SHA3-256 shares the rate and capacity of Keccak-256 and differs only in the padding delimiter.
pub fn sha3_256(input: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut output = [0u8; DIGEST_BYTES];
    sponge::<SHA3_DELIM>(input, &mut output, |_| {});
    output
}
