#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<(String, i32)>, String)| {
    let mut router = pathmux::Router::new();

    for (key, item) in data.0 {
        let _ = router.insert(key, item);
    }

    let normalized = pathmux::normalize(&data.1);
    assert_eq!(pathmux::normalize(&normalized), normalized);

    if let Ok(matched) = router.at(&data.1) {
        for (key, _) in matched.params.iter() {
            assert_eq!(matched.params.iter().filter(|(k, _)| *k == key).count(), 1);
        }
    }
});
