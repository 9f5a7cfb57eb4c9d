#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decoder must not panic on arbitrary inputs
    let _ = passbook::core::store::decode(data);
});
