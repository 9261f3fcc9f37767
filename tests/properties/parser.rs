//! Property tests for tokenizing and parsing prompt documents.

use proptest::prelude::*;

use llmake::parse_entries;
use llmake::parser::tokenize;

fn entry_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_]{0,8}").unwrap()
}

fn entry_text() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ,.!?]{0,40}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the lexer never panics and always terminates the stream.
    #[test]
    fn property_tokenize_never_panics(source in "(?s).{0,256}") {
        if let Ok(tokens) = tokenize(&source) {
            prop_assert_eq!(tokens.last().map(|t| t.kind.as_str()), Some("END"));
        }
    }

    /// PROPERTY: the parser never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(source in "(?s).{0,256}") {
        let _ = parse_entries(&source);
    }

    /// PROPERTY: the parser never panics on input built from the document's own
    /// vocabulary, where it gets much further than on random text.
    #[test]
    fn property_parse_never_panics_on_token_soup(
        pieces in proptest::collection::vec(
            prop_oneof![
                Just("a"), Just("text"), Just("command"), Just("validator"),
                Just("retry"), Just("auto_retry"), Just(":"), Just(","), Just("."),
                Just("\"s\""), Just("3"), Just("\n"), Just("\n    "), Just(" "),
            ],
            0..48,
        )
    ) {
        let _ = parse_entries(&pieces.concat());
    }

    /// PROPERTY: well-formed documents keep every entry, in declaration order,
    /// with its text unquoted.
    #[test]
    fn property_well_formed_documents_parse(
        entries in proptest::collection::hash_map(entry_name(), entry_text(), 1..8)
    ) {
        let entries: Vec<(String, String)> = entries.into_iter().collect();
        let source: String = entries
            .iter()
            .map(|(name, text)| format!("{}:\n    \"{}\"\n\n", name, text))
            .collect();

        let parsed = parse_entries(&source).unwrap();

        prop_assert_eq!(parsed.len(), entries.len());
        for (entry, (name, text)) in parsed.iter().zip(&entries) {
            prop_assert_eq!(&entry.name, name);
            prop_assert_eq!(&entry.text, text);
        }
    }
}
