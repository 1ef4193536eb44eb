#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

use nanolab::parsers::{parse_formula, EdxTable, ImpurityTable, TargetFileName};

fuzz_target!(|data: &[u8]| {
    // Uploaded raw files are arbitrary bytes; parsers must reject, never panic
    let _ = ImpurityTable::from_reader(Cursor::new(data));

    if let Ok(table) = EdxTable::from_reader(Cursor::new(data)) {
        let _ = table.averages();
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_formula(text);
        let _ = TargetFileName::parse(text);
    }
});
