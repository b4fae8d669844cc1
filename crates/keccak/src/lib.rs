//! Ethereum Keccak-256 built for brute-force search lanes.
//!
//! [`hash_keccak256`] is a pure, allocation-free function over a caller-owned input and a
//! caller-owned 32-byte output. It keeps its 1600-bit state on the stack and reads nothing shared
//! except the constant round-constant table, so a launcher can call it from as many threads or
//! lanes as it likes.
//!
//! ```
//! let digest = klane_keccak::keccak256(b"abc");
//! assert_eq!(
//!     hex::encode(digest),
//!     "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45"
//! );
//! ```
#![allow(clippy::needless_range_loop)]
#![warn(unused_extern_crates)]

mod digest;
mod error;
pub mod events;
pub mod ffi;
mod permutation;
mod sponge;
pub mod utils;

pub use digest::Keccak256Digest;
pub use error::KeccakError;
pub use events::{trace_keccak256, SpongeEvent};
pub use permutation::{keccakf, keccakf_u32s, KECCAK_STATE_U32S};
pub use sponge::{hash_keccak256, keccak256, sha3_256, try_hash_keccak256};

pub use klane_primitives as primitives;
