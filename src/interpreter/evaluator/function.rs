/// Built-in function implementations.
///
/// Contains the simple mathematical functions available by default, together
/// with their domain guards.
pub mod builtin;
/// The `factorial` function implementation.
///
/// Computes factorials of non-negative integer arguments with an overflow
/// bound.
pub mod factorial;
/// `min`, `max` and `sum` function implementations.
///
/// Variadic aggregates folding one or more arguments.
pub mod min_max;

pub mod core;
