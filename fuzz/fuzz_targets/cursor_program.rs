#![no_main]

use bytecursor_fuzzing::oracles;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    oracles::cursor_program(data);
});
