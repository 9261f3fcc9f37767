use super::*;
use crate::domain::entities::Entry;
use crate::domain::ports::MockFileSystem;

fn prompts(entries: Vec<Entry>) -> PromptSet {
    PromptSet::from_entries(entries).unwrap()
}

#[test]
fn single_entry_yields_its_text() {
    let set = prompts(vec![Entry::new("landscape", "Describe a landscape")]);
    let fs = MockFileSystem::new();

    let blocks = PromptAssembler::new(&set, &fs).assemble("landscape").unwrap();

    assert_eq!(blocks, vec!["Describe a landscape"]);
    assert!(fs.read_paths().is_empty());
}

#[test]
fn macro_text_is_inlined_before_child() {
    let set = prompts(vec![
        Entry::new("_global", "A"),
        Entry::new("child", "B").with_dependencies(["_global"]),
    ]);
    let fs = MockFileSystem::new();

    let blocks = PromptAssembler::new(&set, &fs).assemble("child").unwrap();

    assert_eq!(blocks, vec!["A", "B"]);
    assert!(fs.read_paths().is_empty());
}

#[test]
fn artifact_parent_is_read_from_its_output_file() {
    let set = prompts(vec![
        Entry::new("parent", "P"),
        Entry::new("child", "C").with_dependencies(["parent"]),
    ]);
    let fs = MockFileSystem::new().with_file("parent.txt", "generated parent");

    let blocks = PromptAssembler::new(&set, &fs).assemble("child").unwrap();

    assert_eq!(blocks, vec!["parent:", "generated parent", "C"]);
    assert!(!blocks.contains(&"P".to_string()));
}

#[test]
fn missing_artifact_is_an_error() {
    let set = prompts(vec![
        Entry::new("parent", "P"),
        Entry::new("child", "C").with_dependencies(["parent"]),
    ]);
    let fs = MockFileSystem::new();

    let err = PromptAssembler::new(&set, &fs).assemble("child").unwrap_err();

    assert!(matches!(
        err,
        AssemblyError::MissingArtifact { ref reference, ref path, .. }
            if reference == "parent" && path == Path::new("parent.txt")
    ));
    assert_eq!(fs.read_paths(), vec![PathBuf::from("parent.txt")]);
}

#[test]
fn file_reference_is_read_verbatim() {
    let set = prompts(vec![
        Entry::new("summary", "Summarize").with_dependencies(["notes.md"]),
    ]);
    let fs = MockFileSystem::new().with_file("docs/notes.md", "line one\nline two\n");

    let blocks = PromptAssembler::new(&set, &fs)
        .with_base_dir("docs")
        .assemble("summary")
        .unwrap();

    assert_eq!(blocks, vec!["notes.md:", "line one\nline two\n", "Summarize"]);
}

#[test]
fn shared_dependency_is_emitted_once() {
    let set = prompts(vec![
        Entry::new("_style", "S"),
        Entry::new("_tone", "T").with_dependencies(["_style"]),
        Entry::new("child", "C").with_dependencies(["_style", "_tone"]),
    ]);
    let fs = MockFileSystem::new();

    let blocks = PromptAssembler::new(&set, &fs).assemble("child").unwrap();

    assert_eq!(blocks, vec!["T", "S", "C"]);
}

#[test]
fn file_reached_through_two_macros_is_read_each_time() {
    let set = prompts(vec![
        Entry::new("_a", "A").with_dependencies(["notes.md"]),
        Entry::new("_b", "B").with_dependencies(["notes.md"]),
        Entry::new("c", "C").with_dependencies(["_a", "_b"]),
    ]);
    let fs = MockFileSystem::new().with_file("notes.md", "N");

    let blocks = PromptAssembler::new(&set, &fs).assemble("c").unwrap();

    assert_eq!(
        blocks,
        vec!["notes.md:", "N", "notes.md:", "N", "B", "A", "C"]
    );
    assert_eq!(
        fs.read_paths(),
        vec![PathBuf::from("notes.md"), PathBuf::from("notes.md")]
    );
}

#[test]
fn dependencies_of_artifacts_are_followed() {
    let set = prompts(vec![
        Entry::new("_global", "G"),
        Entry::new("landscape", "L").with_dependencies(["_global"]),
        Entry::new("city", "C").with_dependencies(["landscape"]),
    ]);
    let fs = MockFileSystem::new().with_file("landscape.txt", "a valley");

    let blocks = PromptAssembler::new(&set, &fs).assemble("city").unwrap();

    assert_eq!(blocks, vec!["G", "landscape:", "a valley", "C"]);
}

#[test]
fn unknown_requested_prompt() {
    let set = prompts(vec![Entry::new("a", "A")]);
    let fs = MockFileSystem::new();
    let assembler = PromptAssembler::new(&set, &fs);

    assert!(matches!(
        assembler.assemble("b").unwrap_err(),
        AssemblyError::UnknownPrompt { ref name } if name == "b"
    ));
    assert!(matches!(
        assembler.assemble("a.txt").unwrap_err(),
        AssemblyError::UnknownPrompt { .. }
    ));
}

#[test]
fn unknown_dependency_during_traversal() {
    let set = prompts(vec![Entry::new("a", "A").with_dependencies(["_ghost"])]);
    let fs = MockFileSystem::new();

    assert!(matches!(
        PromptAssembler::new(&set, &fs).assemble("a").unwrap_err(),
        AssemblyError::UnknownPrompt { ref name } if name == "_ghost"
    ));
}

#[test]
fn render_joins_with_blank_line() {
    let set = prompts(vec![
        Entry::new("_global", "A"),
        Entry::new("child", "B").with_dependencies(["_global"]),
    ]);
    let fs = MockFileSystem::new();

    let text = PromptAssembler::new(&set, &fs).render("child").unwrap();

    assert_eq!(text, "A\n\nB");
}
