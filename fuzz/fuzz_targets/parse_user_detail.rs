// SPDX-License-Identifier: Apache-2.0
// SPDX-FileCopyrightText: 2026 reporank contributors

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(detail) = serde_json::from_slice::<reporank_core::UserDetail>(data) {
        let _ = detail.into_record();
    }
    let _ = serde_json::from_slice::<Vec<reporank_core::ListedUser>>(data);
});
