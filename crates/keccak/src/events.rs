#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

use klane_primitives::{DIGEST_BYTES, KECCAK_DELIM, RATE_BYTES, WORDS};

use crate::{digest::Keccak256Digest, sponge::sponge};

/// Keccak Sponge Event.
///
/// This event records every state a Keccak-256 computation absorbs. It is the diagnostic
/// counterpart of [`crate::hash_keccak256`], which records nothing and never allocates.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpongeEvent {
    /// The length of the input in bytes.
    pub input_len: usize,
    /// The state after each block is XORed in, before it is permuted. The last entry holds the
    /// padded block.
    pub xored_state_list: Vec<[u64; WORDS]>,
    /// The digest.
    pub output: Keccak256Digest,
}

impl SpongeEvent {
    pub fn num_blocks(&self) -> usize {
        self.xored_state_list.len()
    }
}

/// Hashes `input` like [`crate::keccak256`] and returns the full absorption record.
#[instrument(name = "keccak256 sponge", level = "debug", skip_all, fields(input_len = input.len()))]
pub fn trace_keccak256(input: &[u8]) -> SpongeEvent {
    let mut xored_state_list = Vec::with_capacity(input.len() / RATE_BYTES + 1);
    let mut output = [0u8; DIGEST_BYTES];
    sponge::<KECCAK_DELIM>(input, &mut output, |state| {
        trace!(block = xored_state_list.len(), "absorbed");
        xored_state_list.push(*state);
    });
    debug!(blocks = xored_state_list.len(), "squeezed");
    SpongeEvent { input_len: input.len(), xored_state_list, output: output.into() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klane_primitives::{xor_block_le, RATE_LANES};

    use crate::{keccak256, keccakf, utils::setup_logger};

    #[test]
    fn records_one_state_per_block() {
        setup_logger();
        for len in [0, 1, 135, 136, 137, 271, 272, 1000] {
            let event = trace_keccak256(&vec![0x5a; len]);
            assert_eq!(event.input_len, len);
            assert_eq!(event.num_blocks(), len / RATE_BYTES + 1, "length {len}");
        }
    }

    #[test]
    fn output_matches_primitive() {
        let input: Vec<u8> = (0..500u32).map(|i| (i * 7) as u8).collect();
        let event = trace_keccak256(&input);
        assert_eq!(event.output.into_bytes(), keccak256(&input));
    }

    #[test]
    fn states_chain_through_the_permutation() {
        let input: Vec<u8> = (0..3 * RATE_BYTES as u32).map(|i| (i % 253) as u8).collect();
        let event = trace_keccak256(&input);
        assert_eq!(event.num_blocks(), 4);

        let first = &event.xored_state_list[0];
        assert!(first[RATE_LANES..].iter().all(|&lane| lane == 0));

        for (i, block) in input.chunks_exact(RATE_BYTES).enumerate().skip(1) {
            let mut state = event.xored_state_list[i - 1];
            keccakf(&mut state);
            xor_block_le(&mut state, block);
            assert_eq!(state, event.xored_state_list[i], "block {i}");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes() {
        let event = trace_keccak256(b"abc");
        let json = serde_json::to_string(&event).unwrap();
        let back: SpongeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
