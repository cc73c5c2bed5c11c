#![no_main]

use libfuzzer_sys::fuzz_target;
use unftp_reptype::controlchan::line_parser;

fuzz_target!(|data: &[u8]| {
    // Whatever parses must encode back into the same command
    if let Ok(cmd) = line_parser::parse(data.to_vec()) {
        if cmd.validate().is_ok() {
            let line = format!("{}\r\n", cmd);
            assert_eq!(line_parser::parse(line), Ok(cmd));
        }
    }
});
