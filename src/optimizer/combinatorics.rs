//! Deterministic enumeration of fixed-size leg groups.
//!
//! Both generators walk an index vector in lexicographic order instead of
//! recursing on list tails, so no intermediate sublists are allocated.
//! Pool sizes are capped upstream (at most 15 elements, groups of at most
//! 5), which keeps the output in the low thousands.

/// All size-`k` subsets of `items`, without repetition.
///
/// Chosen elements preserve their relative order in the input. The result
/// contains `C(n, k)` groups; it is empty only when `k > n`. `k == 0`
/// yields a single empty group.
#[must_use]
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let n = items.len();
    if k > n {
        return Vec::new();
    }
    if k == 0 {
        return vec![Vec::new()];
    }

    let mut groups = Vec::new();
    let mut indices: Vec<usize> = (0..k).collect();
    loop {
        groups.push(indices.iter().map(|&i| items[i].clone()).collect());

        // Find the rightmost index that can still advance.
        let mut pos = k;
        while pos > 0 && indices[pos - 1] == n - k + pos - 1 {
            pos -= 1;
        }
        if pos == 0 {
            return groups;
        }
        indices[pos - 1] += 1;
        for i in pos..k {
            indices[i] = indices[i - 1] + 1;
        }
    }
}

/// All size-`k` multisets of `items`, where an element may repeat.
///
/// The result contains `C(n + k - 1, k)` groups; it is empty only when the
/// input is empty and `k > 0`. `k == 0` yields a single empty group.
#[must_use]
pub fn combinations_with_repetition<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    let n = items.len();
    if n == 0 {
        return Vec::new();
    }

    let mut groups = Vec::new();
    let mut indices = vec![0usize; k];
    loop {
        groups.push(indices.iter().map(|&i| items[i].clone()).collect());

        // Find the rightmost index below the last element.
        let mut pos = k;
        while pos > 0 && indices[pos - 1] == n - 1 {
            pos -= 1;
        }
        if pos == 0 {
            return groups;
        }
        let next = indices[pos - 1] + 1;
        for i in pos - 1..k {
            indices[i] = next;
        }
    }
}

/// Binomial coefficient `C(n, k)`.
#[must_use]
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result = 1u64;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}
