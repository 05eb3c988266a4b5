#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate huffcode;
use huffcode::code_table;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        /* errors are fine, it just should never panic on invalid input */
        if let Ok(root) = code_table::from_text(text) {
            // whatever loads has to survive being saved and loaded again
            let saved = code_table::to_text(&root);
            let reloaded = code_table::from_text(&saved).unwrap();
            assert_eq!(code_table::serialize(&root), code_table::serialize(&reloaded));
        }
    }
});
