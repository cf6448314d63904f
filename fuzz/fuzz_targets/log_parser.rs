#![no_main]

use genview::parser::parse_str;
use genview::query::QueryService;
use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Arbitrary input may fail to parse but must never panic.
        if let Ok(run_log) = parse_str(text) {
            let service = QueryService::new(Arc::new(run_log));
            let _ = service.bounds();
            let _ = service.get_chromosome(1, -1);
            let _ = service.get_chromosome(1, 0);
        }
    }
});
