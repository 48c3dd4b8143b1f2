//! Fixtures shared by the unit tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const DLL_CONTENT: &[u8] = b"MZ fake js-client-v2 module";
pub const PDB_CONTENT: &[u8] = b"Microsoft C/C++ MSF 7.00 fake symbols";

/// Builds an in-memory zip from `(name, content)` pairs.
pub fn build_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, content) in files {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Archive laid out like a real client release.
pub fn release_zip() -> Vec<u8> {
    build_zip(&[
        ("dist-client-windows/modules/js-client-v2.dll", DLL_CONTENT),
        ("dist-client-windows/modules/js-client-v2.pdb", PDB_CONTENT),
        ("dist-client-windows/types/index.d.ts", b"export {};"),
    ])
}
