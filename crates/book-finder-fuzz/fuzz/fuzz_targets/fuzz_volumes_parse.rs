#![no_main]

use book_finder::models::VolumesResponse;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parsing may fail, mapping a parsed response must not panic
    if let Ok(response) = serde_json::from_slice::<VolumesResponse>(data) {
        let books = response.summaries();
        assert_eq!(books.len(), response.volumes().len());
    }
});
