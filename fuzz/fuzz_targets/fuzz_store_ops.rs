#![no_main]

use libfuzzer_sys::fuzz_target;
use recomendar::eval::evaluate;
use recomendar::ratings::RatingStore;

fuzz_target!(|data: &[u8]| {
    // Fuzz the store and a full evaluation round with derived rating rows
    // Targets: withhold/restore bookkeeping, similarity degeneracies,
    // prediction accumulation
    if data.len() < 3 {
        return;
    }

    let mut store = RatingStore::new();
    for chunk in data.chunks_exact(3) {
        let item = chunk[0] % 16;
        let user = chunk[1] % 16;
        let score = f32::from(chunk[2] % 50) / 10.0;
        store.insert(format!("u{user}"), format!("i{item}"), score);
    }
    if store.is_empty() {
        return;
    }

    // Evaluating every item must never panic, whatever the shape of the data
    let sample: Vec<String> = store.item_ids().map(str::to_string).collect();
    let before = store.clone();
    if let Ok(report) = evaluate(&mut store, &sample) {
        assert!(report.rmse.is_finite());
        assert!(report.mae.is_finite());
    }
    assert_eq!(store, before);
});
