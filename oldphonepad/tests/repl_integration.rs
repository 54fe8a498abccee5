// oldphonepad/tests/repl_integration.rs
//
// Line-oriented decoding through `run_repl`, driven by in-memory buffers.

use std::io::Cursor;

use oldphonepad::{run_repl, Config, Decoder};

fn repl(input: &str, config: &Config, interactive: bool) -> (String, usize) {
    let mut out = Vec::new();
    let count = run_repl(
        &Decoder::new(),
        config,
        Cursor::new(input.as_bytes()),
        &mut out,
        interactive,
    )
    .unwrap();
    (String::from_utf8(out).unwrap(), count)
}

#[test]
fn decodes_each_line() {
    let (out, count) = repl("33#\n4433555 555666#\n8 88777444666*664#\n", &Config::default(), false);
    assert_eq!(out, "E\nHELLO\nTURING\n");
    assert_eq!(count, 3);
}

#[test]
fn skips_blank_lines() {
    let (out, count) = repl("\n2#\n\n", &Config::default(), false);
    assert_eq!(out, "A\n");
    assert_eq!(count, 1);
}

#[test]
fn keeps_leading_separator_and_strips_crlf() {
    let (out, _) = repl(" 22 2#\r\n", &Config::default(), false);
    assert_eq!(out, "BA\n");
}

#[test]
fn line_without_terminator_still_decodes() {
    let (out, _) = repl("222 2 22", &Config::default(), false);
    assert_eq!(out, "CAB\n");
}

#[test]
fn echo_and_quote_options() {
    let config = Config {
        echo_input: true,
        quote_output: true,
        ..Config::default()
    };
    let (out, _) = repl("0#\n", &config, false);
    assert_eq!(out, "0# => \" \"\n");
}

#[test]
fn interactive_prints_prompt() {
    let config = Config {
        prompt: "pad> ".to_string(),
        ..Config::default()
    };
    let (out, _) = repl("2#\n", &config, true);
    assert_eq!(out, "pad> A\npad> ");
}

#[test]
fn config_file_drives_repl() {
    let config = Config::from_toml_str("echo_input = true\n").unwrap();
    let (out, _) = repl("7777#\n", &config, false);
    assert_eq!(out, "7777# => S\n");
}
