/// The "normal" recursive factorial. Every frame holds one pending multiplication, which runs
/// after the recursive call returns, so the multiplies happen in order 1, 2, ..., x as the stack
/// unwinds.
pub fn factorial(x: u64) -> u64 {
    debug_assert!(x >= 1, "factorial of {x}");
    if x == 1 {
        return 1;
    }
    factorial(x - 1) * x
}
