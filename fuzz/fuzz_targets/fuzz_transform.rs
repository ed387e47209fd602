#![no_main]

use awk_corpus::transform;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Re-delimiting swaps slashes for backticks one-for-one, so the
    // output must always have the input's exact byte length.
    let out = transform(data);
    assert_eq!(out.len(), data.len());

    // Re-delimiting is not idempotent in general (quote pairings can
    // shift once slashes become backticks), but a second pass must
    // still be total.
    let _ = transform(&out);
});
