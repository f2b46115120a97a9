//! Behavioral tests for VariableStore against real files

use exvar::VariableStore;
use std::fs;
use tempfile::tempdir;

const SAMPLES: &[(&str, &str)] = &[
    ("FOO", "bar"),
    ("PATH", "/usr/local/bin:/usr/bin"),
    ("_UNDERSCORE", "with spaces"),
    ("X1", "'single quoted'"),
    ("EMPTYISH", " "),
    ("UNICODE", "héllo wörld"),
];

const SURROUNDINGS: &str = "# ~/.bashrc\n\nalias ll='ls -la'\nif [ -f ~/.local ]; then\n  . ~/.local\nfi\n";

#[test]
fn test_upsert_lookup_delete_cycle() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".bashrc");
    fs::write(&path, SURROUNDINGS).unwrap();
    let store = VariableStore::open(&path).unwrap();

    for (name, value) in SAMPLES {
        store.upsert(name, value).unwrap();
        assert_eq!(store.lookup(name).unwrap().unwrap().value, *value);

        store.upsert(name, value).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let expected = format!("export {}=\"{}\"", name, value);
        assert_eq!(content.lines().filter(|l| *l == expected).count(), 1);
    }

    for (name, _) in SAMPLES {
        store.delete(name).unwrap();
        assert_eq!(store.lookup(name).unwrap(), None);
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), SURROUNDINGS);
}

#[test]
fn test_hand_edited_duplicates() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".bashrc");
    fs::write(
        &path,
        "export EDITOR=vim\necho between\nexport EDITOR=\"nano\"\n",
    )
    .unwrap();
    let store = VariableStore::open(&path).unwrap();

    assert_eq!(store.lookup("EDITOR").unwrap().unwrap().value, "vim");
    assert!(store.delete("EDITOR").unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "echo between\n");
}

#[test]
fn test_quote_in_value_is_written_verbatim() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".bashrc");
    let store = VariableStore::open(&path).unwrap();

    store.upsert("MSG", "say \"hi\"").unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "export MSG=\"say \"hi\"\"\n"
    );
    // One outer pair is stripped, the inner quotes stay
    assert_eq!(store.lookup("MSG").unwrap().unwrap().value, "say \"hi\"");
}
