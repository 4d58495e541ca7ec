//! Fuzz target for config.toml parsing.

#![no_main]

use libfuzzer_sys::fuzz_target;
use tb_cli::config::TransbenchConfig;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Should never panic, only return an error
        if let Ok(config) = TransbenchConfig::from_toml(text) {
            let _ = config.report.validate();
        }
    }
});
