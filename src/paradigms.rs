// 🧮 Paradigm Comparison - Same result, three styles
//
// The demo's opening sections print the sum of a small list computed
// imperatively, declaratively, and functionally. The three functions
// are total and agree on every input; the point is the shape of the
// code, not the arithmetic.

/// Imperative: explicit loop and mutable accumulator.
pub fn imperative_sum(numbers: &[i64]) -> i64 {
    let mut total = 0;
    for n in numbers {
        total += n;
    }
    total
}

/// Declarative: state WHAT is wanted, not the steps.
pub fn declarative_sum(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// Functional: a fold over the slice.
pub fn functional_sum(numbers: &[i64]) -> i64 {
    numbers.iter().fold(0, |acc, n| acc + n)
}

// ============================================================================
// TESTS
// ============================================================================
