#![no_main]

use libfuzzer_sys::fuzz_target;
use quickdraw::{Path, PathRecord};

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        if let Ok(record) = PathRecord::from_json(json) {
            let path = Path::deserialize(record.clone());
            assert_eq!(path.serialize(), record);
        }
    }
});
