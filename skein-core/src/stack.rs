// skein-core - Stack growth for deep recursion
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Stack safety for non-tail evaluation.
//!
//! Evaluating arguments, `def!` values and protected `try*` bodies recurses
//! into the evaluator. Each such call goes through [`ensure_sufficient_stack`],
//! which grows the stack on demand so that the depth limit in
//! [`crate::eval`], not the native stack size, decides how deep programs may
//! nest.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
