use std::fs;

use arc_solvers::perception::task::{load_dir, load_task, Split};

const ROTATE_TASK: &str = r#"{
    "train": [
        {"input": [[1, 2], [3, 4]], "output": [[4, 3], [2, 1]]},
        {"input": [[0, 5, 0]], "output": [[0, 5, 0]]}
    ],
    "test": [{"input": [[7, 8]]}],
    "arc-gen": [{"input": [[1, 0]], "output": [[0, 1]]}]
}"#;

#[test]
fn id_comes_from_file_stem() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("3c9b0459.json");
    fs::write(&path, ROTATE_TASK).expect("write");

    let task = load_task(&path).expect("load");
    assert_eq!(task.id, "3c9b0459");
    assert_eq!(task.pairs(Split::Train).len(), 2);
    assert_eq!(task.split(Split::Test)[0].output, None);
    assert_eq!(task.split(Split::ArcGen).len(), 1);
}

#[test]
fn directory_sorted_and_bad_files_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("b.json"), ROTATE_TASK).expect("write");
    fs::write(dir.path().join("a.json"), ROTATE_TASK).expect("write");
    fs::write(dir.path().join("broken.json"), "{\"train\": [").expect("write");
    fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

    let tasks = load_dir(dir.path()).expect("load dir");
    let ids: Vec<_> = tasks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_task(&dir.path().join("nope.json")).unwrap_err();
    assert!(format!("{:#}", err).contains("nope.json"));
}
