use super::*;

#[test]
fn missing_paths_fall_back_to_system() {
    let src = FontSource::probe_paths(["target/no-such-font-a.ttf", "target/no-such-font-b.ttf"]);
    assert!(matches!(src, FontSource::SystemDefault));
    assert_eq!(src.describe(), "system sans-serif");
}

#[test]
fn first_existing_file_wins() {
    let dir = PathBuf::from("target").join("font_probe");
    std::fs::create_dir_all(&dir).unwrap();
    let empty = dir.join("empty.ttf");
    let first = dir.join("first.ttf");
    let second = dir.join("second.ttf");
    std::fs::write(&empty, b"").unwrap();
    std::fs::write(&first, b"first").unwrap();
    std::fs::write(&second, b"second").unwrap();

    let src = FontSource::probe_paths([dir.join("missing.ttf"), empty, first.clone(), second]);
    let FontSource::File { path, bytes } = src else {
        panic!("expected a font file");
    };
    assert_eq!(path, first);
    assert_eq!(bytes.as_slice(), b"first");
}

#[test]
fn directories_are_skipped() {
    let src = FontSource::probe_paths(["target"]);
    assert!(matches!(src, FontSource::SystemDefault));
}
