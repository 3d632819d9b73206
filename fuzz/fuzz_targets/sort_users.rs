// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 reporank contributors

#![no_main]

use libfuzzer_sys::fuzz_target;
use reporank_core::{UserRecord, is_sorted_desc, sort_by_public_repos};

fuzz_target!(|data: &[u8]| {
    let mut users: Vec<UserRecord> = data
        .chunks(2)
        .enumerate()
        .map(|(i, chunk)| {
            let repos = chunk.iter().fold(0u32, |acc, b| acc << 8 | u32::from(*b));
            UserRecord::new(format!("u{i}"), i as u64, repos)
        })
        .collect();
    let len = users.len();

    let stats = sort_by_public_repos(&mut users);
    assert!(is_sorted_desc(&users));
    assert_eq!(users.len(), len);
    assert!(stats.comparisons <= len * len.saturating_sub(1) / 2);

    // A ranked list is a fixed point.
    assert_eq!(sort_by_public_repos(&mut users).swaps, 0);
});
