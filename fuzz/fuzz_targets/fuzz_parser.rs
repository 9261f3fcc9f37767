#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Parse errors are expected; panics are not.
        let Ok(entries) = llmake::parse_entries(source) else {
            return;
        };

        // Anything that parses must survive graph checks and emission too.
        let Ok(mut prompts) = llmake::PromptSet::from_entries(entries) else {
            return;
        };
        if llmake::validate(&prompts).is_err() || llmake::resolve(&mut prompts).is_err() {
            return;
        }
        let _ = llmake::MakefileEmitter::new("llmake").emit(&prompts, std::path::Path::new("fuzz.llm"));
    }
});
