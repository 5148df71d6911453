use std::fs;
use tempfile::tempdir;

use filekit::{FileKitError, swap_names};

#[test]
fn swap_exchanges_contents() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&a, b"alpha").unwrap();
    fs::write(&b, b"beta").unwrap();

    swap_names(&a, &b).unwrap();

    assert_eq!(fs::read(&a).unwrap(), b"beta");
    assert_eq!(fs::read(&b).unwrap(), b"alpha");
}

#[test]
fn swap_leaves_no_temporary_residue() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&a, b"1").unwrap();
    fs::write(&b, b"2").unwrap();

    swap_names(&a, &b).unwrap();

    let entries: Vec<_> = fs::read_dir(td.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries.len(), 2, "unexpected files after swap: {entries:?}");
}

#[test]
fn swap_works_across_directories() {
    let td = tempdir().unwrap();
    let dir_a = td.path().join("one");
    let dir_b = td.path().join("two");
    fs::create_dir_all(&dir_a).unwrap();
    fs::create_dir_all(&dir_b).unwrap();
    let a = dir_a.join("f.txt");
    let b = dir_b.join("f.txt");
    fs::write(&a, b"from one").unwrap();
    fs::write(&b, b"from two").unwrap();

    swap_names(&a, &b).unwrap();

    assert_eq!(fs::read(&a).unwrap(), b"from two");
    assert_eq!(fs::read(&b).unwrap(), b"from one");
}

#[test]
fn swap_survives_a_stale_temporary_sibling() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&a, b"alpha").unwrap();
    fs::write(&b, b"beta").unwrap();
    // Occupy the first temporary candidate; the name probe must step past it.
    fs::write(td.path().join("a.txt.swap"), b"stale").unwrap();

    swap_names(&a, &b).unwrap();

    assert_eq!(fs::read(&a).unwrap(), b"beta");
    assert_eq!(fs::read(&b).unwrap(), b"alpha");
    assert_eq!(fs::read(td.path().join("a.txt.swap")).unwrap(), b"stale");
}

#[test]
fn missing_first_file_fails_with_not_found() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&b, b"beta").unwrap();

    let err = swap_names(&a, &b).unwrap_err();

    assert!(matches!(err, FileKitError::NotFound(p) if p == a));
    assert_eq!(fs::read(&b).unwrap(), b"beta");
}

#[test]
fn missing_second_file_fails_with_not_found() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&a, b"alpha").unwrap();

    let err = swap_names(&a, &b).unwrap_err();

    assert!(matches!(err, FileKitError::NotFound(p) if p == b));
    assert_eq!(fs::read(&a).unwrap(), b"alpha");
}
