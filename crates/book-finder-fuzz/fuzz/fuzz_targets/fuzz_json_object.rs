#![no_main]

use book_finder::models::{BookSummary, Volume, VolumeInfo, VolumesResponse};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First try to parse as valid JSON
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(data) {
        // Then try each model type
        if let Ok(volume) = serde_json::from_value::<Volume>(json.clone()) {
            let _ = BookSummary::from_volume(&volume);
        }
        if let Ok(info) = serde_json::from_value::<VolumeInfo>(json.clone()) {
            let _ = BookSummary::from_info(&info);
        }
        let _ = serde_json::from_value::<VolumesResponse>(json);
    }
});
