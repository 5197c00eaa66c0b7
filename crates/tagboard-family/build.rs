//! Generates `builtins.rs` from `data/*_CODES.json`.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Deserialize;

#[derive(Deserialize)]
struct CodesFile {
    name: String,
    marker_size: usize,
    max_correction_bits: u8,
    codes: Vec<u64>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR"));
    let data_dir = manifest_dir.join("data");
    println!("cargo:rerun-if-changed={}", data_dir.display());

    let mut files: Vec<PathBuf> = fs::read_dir(&data_dir)
        .expect("read data dir")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with("_CODES.json"))
        })
        .collect();
    files.sort();

    let mut out = String::new();
    let mut idents = Vec::new();
    for path in &files {
        println!("cargo:rerun-if-changed={}", path.display());
        let ident = const_ident(path);
        let raw = fs::read_to_string(path).expect("read codes file");
        let parsed: CodesFile = serde_json::from_str(&raw).expect("parse codes file");
        assert!(
            (1..=8).contains(&parsed.marker_size),
            "{}: marker_size {} does not fit a u64 code",
            path.display(),
            parsed.marker_size
        );
        assert!(!parsed.codes.is_empty(), "{}: empty code table", path.display());

        // Data files number the bits row-major from the upright top-left cell.
        // The stored tables start from the opposite corner, which is the
        // order `BitMatrix::decode` undoes with its 180 degree turn.
        let bits = parsed.marker_size * parsed.marker_size;
        assert!(
            parsed.codes.iter().all(|&c| bits == 64 || c >> bits == 0),
            "{}: code wider than {bits} bits",
            path.display()
        );
        let codes: Vec<u64> = parsed
            .codes
            .iter()
            .map(|&c| reverse_low_bits(c, bits))
            .collect();

        writeln!(out, "const {ident}_CODES: [u64; {}] = [", codes.len()).unwrap();
        for chunk in codes.chunks(4) {
            let row: Vec<String> = chunk.iter().map(|c| format!("0x{c:012x}")).collect();
            writeln!(out, "    {},", row.join(", ")).unwrap();
        }
        writeln!(out, "];\n").unwrap();
        writeln!(
            out,
            "/// Built-in `{name}` family ({count} codes).\n\
             pub const {ident}: Dictionary = Dictionary {{\n    \
             name: {name:?},\n    \
             marker_size: {size},\n    \
             max_correction_bits: {corr},\n    \
             codes: &{ident}_CODES,\n\
             }};\n",
            name = parsed.name,
            count = parsed.codes.len(),
            size = parsed.marker_size,
            corr = parsed.max_correction_bits,
        )
        .unwrap();
        idents.push(ident);
    }

    writeln!(
        out,
        "/// Every embedded family, ordered by data file name.\n\
         pub const BUILTINS: &[Dictionary] = &[{}];",
        idents.join(", ")
    )
    .unwrap();

    fs::write(out_dir.join("builtins.rs"), out).expect("write builtins.rs");
}

fn reverse_low_bits(code: u64, bits: usize) -> u64 {
    (0..bits).fold(0, |acc, k| acc | (((code >> k) & 1) << (bits - 1 - k)))
}

fn const_ident(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .expect("utf-8 file name");
    stem.trim_end_matches("_CODES").to_ascii_uppercase()
}
