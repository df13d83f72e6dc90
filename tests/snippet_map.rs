use snipmap::core::{Snippet, SnippetError, SnippetMap};
use std::path::{Path, PathBuf};

fn snippet(name: &str, file: &str, content: &str) -> Snippet {
    Snippet::new(name.to_string(), PathBuf::from(file), content.to_string())
}

#[test]
fn insert_and_lookup() {
    let mut map = SnippetMap::new();
    assert!(map.is_empty());

    map.insert(snippet("b", "docs/b.py", "two")).unwrap();
    map.insert(snippet("a", "docs/a.py", "one")).unwrap();

    assert_eq!(map.len(), 2);
    assert!(map.contains("a"));
    assert_eq!(map.get("b").map(|s| s.content.as_str()), Some("two"));
    assert_eq!(map.names().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn duplicate_name_is_rejected_and_names_both_files() {
    let mut map = SnippetMap::new();
    map.insert(snippet("dup", "first.py", "one")).unwrap();

    let err = map.insert(snippet("dup", "second.py", "two")).unwrap_err();
    match &err {
        SnippetError::DuplicateSnippetName {
            name,
            file,
            first_defined_in,
        } => {
            assert_eq!(name, "dup");
            assert_eq!(file, &PathBuf::from("second.py"));
            assert_eq!(first_defined_in, &PathBuf::from("first.py"));
        }
        other => panic!("expected DuplicateSnippetName, got {other:?}"),
    }
    assert_eq!(err.file(), Some(&PathBuf::from("second.py")));
    assert!(err.to_string().contains("duplicate snippet name 'dup'"));

    // The first definition is kept.
    assert_eq!(map.get("dup").map(|s| s.content.as_str()), Some("one"));
}

#[test]
fn snippets_from_one_file() {
    let mut map = SnippetMap::new();
    map.insert(snippet("a", "x.py", "1")).unwrap();
    map.insert(snippet("b", "y.py", "2")).unwrap();
    map.insert(snippet("c", "x.py", "3")).unwrap();

    let names: Vec<_> = map
        .from_file(Path::new("x.py"))
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "c"]);
}
