//! Stack growth for deep recursion.
//!
//! Parsing and evaluation both recurse once per nesting level of the input.
//! Wrapping each recursive step in [`ensure_sufficient_stack`] lets deeply
//! nested (but finite) expressions run without overflowing the native stack.
//!
//! This does not bound recursion: a closure that calls itself forever keeps
//! growing the stack until the process runs out of memory. The evaluator has
//! no recursion limit and reports no error for that case.
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM version: call directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
