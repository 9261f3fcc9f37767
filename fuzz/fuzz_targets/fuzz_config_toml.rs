#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<llmake::Config>(content) {
            let _ = config.generator_or(|| std::path::PathBuf::from("llmake"));
        }
    }
});
