#![no_main]

use benchsift::config::{Config, OutputFormat};
use benchsift::{input, report};
use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Parsing and the whole pipeline must not panic on arbitrary tables
        if let Ok(tables) = input::parse_tables(text, Path::new("fuzz.json")) {
            for format in [
                OutputFormat::Text,
                OutputFormat::Csv,
                OutputFormat::Html,
                OutputFormat::Markdown,
            ] {
                let config = Config {
                    format,
                    threshold: 5.0,
                    add_geomean: true,
                    ..Config::default()
                };
                let _ = report::run(tables.clone(), &config);
            }
        }
    }
});
