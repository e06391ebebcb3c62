#![no_main]

use libfuzzer_sys::fuzz_target;
use notefall::replay::ReplayData;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        let _ = ReplayData::from_json(json);
    }
});
