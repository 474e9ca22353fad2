/// Tail-recursive factorial. All the work happens before the recursive call, and its result is
/// returned as-is. Rust doesn't promise to turn this into a loop, so it still grows the stack.
///
/// Returns `x! * progress`. Callers normally start with `progress = 1`.
pub fn factorial_tail(x: u64, progress: u64) -> u64 {
    debug_assert!(x >= 1, "factorial of {x}");
    if x == 1 {
        return progress;
    }
    factorial_tail(x - 1, progress * x)
}
