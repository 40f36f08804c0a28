use std::fs;
use tempfile::tempdir;

use printgrid_cli::commands::encode;
use printgrid_core::{decode_grid, parse_grid};

#[test]
fn encode_file_to_sheet() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("secret.bin");
    let out_path = td.path().join("sheet.txt");

    let data: Vec<u8> = (0..=255u8).collect();
    fs::write(&in_path, &data).unwrap();

    encode::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        /*max_columns*/ 32,
    )
    .unwrap();

    let sheet = fs::read_to_string(&out_path).unwrap();
    assert!(sheet.starts_with("## 01 02"));
    assert!(sheet.ends_with('\n'));
    assert_eq!(decode_grid(&sheet).unwrap().as_ref(), &data[..]);
}

#[test]
fn encode_respects_max_columns() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.txt");
    let out_path = td.path().join("narrow.txt");

    fs::write(&in_path, "a fairly long line of text that would normally be laid out wide".repeat(20)).unwrap();

    encode::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        /*max_columns*/ 4,
    )
    .unwrap();

    let sheet = fs::read_to_string(&out_path).unwrap();
    let grid = parse_grid(&sheet).unwrap();
    assert_eq!(grid.dimensions().columns, 4);
}

#[test]
fn encode_rejects_zero_columns() {
    let td = tempdir().unwrap();
    let in_path = td.path().join("in.txt");
    let out_path = td.path().join("out.txt");
    fs::write(&in_path, "data").unwrap();

    let result = encode::execute(
        in_path.to_str().unwrap(),
        Some(out_path.to_str().unwrap()),
        0,
    );
    assert!(result.is_err());
    assert!(!out_path.exists());
}

#[test]
fn encode_missing_input_fails() {
    let td = tempdir().unwrap();
    let missing = td.path().join("nope.bin");
    let result = encode::execute(missing.to_str().unwrap(), None, 32);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Failed to read input file"));
}
