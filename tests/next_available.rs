use std::fs;
use tempfile::tempdir;

use filekit::next_available_name;

#[test]
fn absent_path_is_returned_unchanged() {
    let td = tempdir().unwrap();
    let p = td.path().join("free.txt");
    assert_eq!(next_available_name(&p), p);
}

#[test]
fn first_collision_gets_counter_two() {
    let td = tempdir().unwrap();
    let p = td.path().join("Test1.txt");
    fs::write(&p, b"x").unwrap();

    assert_eq!(next_available_name(&p), td.path().join("Test1 (2).txt"));
}

#[test]
fn existing_counters_are_skipped() {
    let td = tempdir().unwrap();
    let p = td.path().join("Test1.txt");
    fs::write(&p, b"x").unwrap();
    fs::write(td.path().join("Test1 (2).txt"), b"x").unwrap();

    assert_eq!(next_available_name(&p), td.path().join("Test1 (3).txt"));
}

#[test]
fn gap_before_a_higher_counter_is_used() {
    let td = tempdir().unwrap();
    let p = td.path().join("Test.txt");
    fs::write(&p, b"x").unwrap();
    fs::write(td.path().join("Test (3).txt"), b"x").unwrap();

    assert_eq!(next_available_name(&p), td.path().join("Test (2).txt"));
}

#[test]
fn zero_counter_continues_at_one() {
    let td = tempdir().unwrap();
    let p = td.path().join("Test (0).txt");
    fs::write(&p, b"x").unwrap();

    assert_eq!(next_available_name(&p), td.path().join("Test (1).txt"));
}

#[test]
fn existing_counter_continues_counting() {
    let td = tempdir().unwrap();
    let p = td.path().join("Test (2).txt");
    fs::write(&p, b"x").unwrap();

    assert_eq!(next_available_name(&p), td.path().join("Test (3).txt"));
}

#[test]
fn bracket_without_space_is_kept_verbatim() {
    let td = tempdir().unwrap();
    let p = td.path().join("Test(1).txt");
    fs::write(&p, b"x").unwrap();

    assert_eq!(next_available_name(&p), td.path().join("Test(1) (2).txt"));
}

#[test]
fn extensionless_names_get_a_counter_too() {
    let td = tempdir().unwrap();
    let p = td.path().join("Test");
    fs::write(&p, b"x").unwrap();

    assert_eq!(next_available_name(&p), td.path().join("Test (2)"));
}

#[test]
fn probing_never_mutates_the_filesystem() {
    let td = tempdir().unwrap();
    let p = td.path().join("Test.txt");
    fs::write(&p, b"x").unwrap();

    let _ = next_available_name(&p);

    let entries: Vec<_> = fs::read_dir(td.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("Test.txt")]);
}
