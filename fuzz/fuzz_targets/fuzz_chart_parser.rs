#![no_main]

use libfuzzer_sys::fuzz_target;
use notefall::chart::{ChartLoader, ParsePolicy};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let _ = ChartLoader::new(ParsePolicy::Skip).parse(source);
    let _ = ChartLoader::new(ParsePolicy::Abort).parse(source);
});
