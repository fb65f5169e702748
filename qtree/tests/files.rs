use std::fs;

use qtree::{test_raster, QTree, QTreeError};

#[test]
fn compress_write_uncompress() {
    let dir = tempfile::tempdir().expect("temp dir");
    let raw = dir.path().join("image.raw");
    let rit = dir.path().join("image.rit");
    let out = dir.path().join("image.out.raw");

    let raster = test_raster! {"
        0 0 0 0 9 9 9 9
        0 0 0 0 9 9 9 9
        0 0 0 0 9 9 9 9
        0 0 0 0 9 9 9 9
        1 2 3 3 7 7 7 7
        4 5 3 3 7 7 7 7
        6 6 8 8 7 7 7 7
        6 6 8 8 7 7 7 7
    "};
    fs::write(&raw, raster.write_raw_to_string()).expect("write raw");

    let mut tree = QTree::new();
    tree.compress(&raw).expect("compress");
    assert_eq!(8, tree.dim());
    assert_eq!(64, tree.raw_size());
    assert_eq!(
        "QTree: -1 0 9 -1 -1 1 2 4 5 3 6 8 7",
        tree.to_string()
    );
    assert_eq!(13, tree.compressed_size());
    tree.write(&rit).expect("write compressed");

    let written = fs::read_to_string(&rit).expect("read compressed");
    assert_eq!(14, written.lines().count());
    assert_eq!(Some("64"), written.lines().next());

    let mut restored = QTree::new();
    restored.uncompress(&rit).expect("uncompress");
    assert_eq!(Some(&raster), restored.raster());
    restored.write_raw(&out).expect("write raw");
    assert_eq!(
        fs::read_to_string(&raw).expect("read raw"),
        fs::read_to_string(&out).expect("read output")
    );
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let mut tree = QTree::new();
    assert!(matches!(
        tree.compress(dir.path().join("missing.raw")),
        Err(QTreeError::Io(_))
    ));
    assert!(matches!(
        tree.uncompress(dir.path().join("missing.rit")),
        Err(QTreeError::Io(_))
    ));
    assert!(tree.is_empty());
}

#[test]
fn write_empty_creates_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("never.rit");
    assert!(matches!(QTree::new().write(&path), Err(QTreeError::Empty)));
    assert!(!path.exists());
}
