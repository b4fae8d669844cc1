//! C ABI for launchers written in other languages.

use klane_primitives::DIGEST_BYTES;

/// Computes the Keccak-256 digest of `length` bytes at `input` into the 32 bytes at `output`.
///
/// A null `output`, or a null `input` with non-zero `length`, is a contract violation; the call
/// returns without writing anything.
///
/// ### Safety
///
/// `input` must be valid for reads of `length` bytes unless `length` is zero, and `output` must be
/// valid for writes of 32 bytes. The two regions must not overlap.
#[no_mangle]
pub unsafe extern "C" fn hash_keccak256(input: *const u8, length: usize, output: *mut u8) {
    if output.is_null() || (input.is_null() && length != 0) {
        return;
    }
    let input = if length == 0 {
        &[][..]
    } else {
        unsafe { core::slice::from_raw_parts(input, length) }
    };
    let output = unsafe { &mut *output.cast::<[u8; DIGEST_BYTES]>() };
    crate::sponge::hash_keccak256(input, output);
}
