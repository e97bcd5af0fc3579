// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early-exit optimizations.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance. If two strings differ
//! in length by more than the threshold, skip the O(nm) DP entirely. Inside the
//! DP, once every cell of a row exceeds the threshold no later row can recover.

/// Edit distance between `a` and `b` if it is at most `max`, else `None`.
///
/// Works on chars, not bytes, so "café" vs "cafe" is one edit.
pub fn levenshtein_distance_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return None;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(dp[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    (dp[b_len] <= max).then_some(dp[b_len])
}

/// Are these strings within `max` edits of each other?
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    levenshtein_distance_within(a, b, max).is_some()
}
