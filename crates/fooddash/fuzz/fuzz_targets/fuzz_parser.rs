//! Fuzz target for the delimited-text parser.
//!
//! Arbitrary bytes must never panic the parser, whatever delimiter the
//! detector settles on.

#![no_main]

use fooddash::Parser;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    let _ = Parser::new().parse_reader(data);
});
