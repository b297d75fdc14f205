#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    // Fuzz CSV rating ingestion with arbitrary bytes
    // Targets: header handling, column lookup, score parsing
    if data.is_empty() {
        return;
    }

    let dir = std::env::temp_dir();
    let path = dir.join("fuzz_csv_ratings.csv");
    if let Ok(mut f) = std::fs::File::create(&path) {
        let _ = f.write_all(data);
        let _ = f.flush();

        // Malformed input must come back as an error, never a panic
        let _ = recomendar::data::CsvLoader::new().load(&path);
    }
    let _ = std::fs::remove_file(&path);
});
