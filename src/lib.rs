#[cfg(feature = "certora")]
mod certora;

/// Adds two numbers together.
/// Overflow follows standard Rust i64 behavior (panics in debug, wraps in release).
pub fn add(a: i64, b: i64) -> i64 {
    a + b
}
