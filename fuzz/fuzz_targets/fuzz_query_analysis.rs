#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // The analysis pipeline is total: arbitrary input must never panic, and
    // every hinted keyword snippet the tagger emits for a flat OR run must
    // be removable from the reconstructed query.
    let (query, keywords) = qtrim::analyze(data);
    for keyword in &keywords {
        let _ = query.find(&keyword.removal_text());
    }
});
