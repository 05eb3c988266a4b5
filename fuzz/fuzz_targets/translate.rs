#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate huffcode;
use huffcode::{build, count_bytes, translate, BitReader};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // first half picks the code, second half is decoded with it
    let (table_bytes, bits) = data.split_at(data.len() / 2);
    let root = build(&count_bytes(table_bytes)).unwrap();
    let mut decoded = 0;
    for symbol in translate(&root, BitReader::new(bits)) {
        if symbol.is_err() {
            break;
        }
        decoded += 1;
    }
    // every symbol takes at least one bit
    assert!(decoded <= bits.len() * 8);
});
