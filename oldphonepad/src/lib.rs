//! oldphonepad crate root
//!
//! Re-exports the decoder from `oldphonepad-core` and provides the
//! rendering and REPL helpers used by the `oldphonepad` binary.
//!
//! Public API exported here:
//! - everything callers need from `oldphonepad_core` (`decode`, `Decoder`, ...)
//! - `format_output`, `render_trace`, `render_keymap` for display
//! - `run_repl` for line-oriented decoding over any reader/writer pair

use std::io::{BufRead, Write};

pub use oldphonepad_core::{
    decode, try_decode, CommitOutcome, Config, ConfigError, DecodeError, DecodeState,
    DecodeTrace, Decoder, KeyEvent, KeyMap, Step, TraceFormat,
};

/// Apply the output options from `config` to decoded text.
pub fn format_output(text: &str, config: &Config) -> String {
    if config.quote_output {
        format!("\"{}\"", text)
    } else {
        text.to_string()
    }
}

/// Render a trace in the requested format.
pub fn render_trace(
    trace: &DecodeTrace,
    format: TraceFormat,
    config: &Config,
) -> Result<String, serde_json::Error> {
    match format {
        TraceFormat::Json => trace.to_json(),
        TraceFormat::Text => {
            let mut lines = Vec::with_capacity(trace.steps.len() + 1);
            for step in &trace.steps {
                lines.push(describe_step(step));
            }
            if !trace.terminated {
                lines.push("(no terminator)".to_string());
            }
            lines.push(format!("= {}", format_output(&trace.output, config)));
            Ok(lines.join("\n"))
        }
    }
}

fn describe_step(step: &Step) -> String {
    match step {
        Step::Commit {
            key,
            presses,
            letter,
        } => format!("{} x{} -> {:?}", key, presses, letter),
        Step::Discard { key, presses } => format!("{} x{} -> (unmapped, dropped)", key, presses),
        Step::Erase { letter: Some(letter) } => format!("* erase {:?}", letter),
        Step::Erase { letter: None } => "* nothing to erase".to_string(),
        Step::Ignore { ch } => format!("skip {:?}", ch),
        Step::Terminate { offset } => format!("# end at {}", offset),
        Step::Flush => "flush open group".to_string(),
    }
}

/// Render the keypad table, one key per line.
pub fn render_keymap(map: &KeyMap) -> String {
    map.keys()
        .into_iter()
        .map(|key| {
            let letters: String = map.letters(key).unwrap_or_default().iter().collect();
            format!("{}  {:?}", key, letters)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decode each non-empty line from `input`, writing results to `output`.
///
/// Returns the number of lines decoded.
pub fn run_repl<R: BufRead, W: Write>(
    decoder: &Decoder,
    config: &Config,
    input: R,
    mut output: W,
    interactive: bool,
) -> std::io::Result<usize> {
    let mut decoded = 0;
    if interactive {
        write!(output, "{}", config.prompt)?;
        output.flush()?;
    }
    for line in input.lines() {
        let line = line?;
        // Only line endings are stripped; spaces are keypad separators.
        let raw = line.trim_end_matches('\r');
        if !raw.is_empty() {
            let text = decoder.decode(raw);
            if config.echo_input {
                writeln!(output, "{} => {}", raw, format_output(&text, config))?;
            } else {
                writeln!(output, "{}", format_output(&text, config))?;
            }
            decoded += 1;
        }
        if interactive {
            write!(output, "{}", config.prompt)?;
            output.flush()?;
        }
    }
    tracing::debug!(decoded, "repl input closed");
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_output_quotes_when_asked() {
        let mut config = Config::default();
        assert_eq!(format_output(" ", &config), " ");
        config.quote_output = true;
        assert_eq!(format_output(" ", &config), "\" \"");
    }

    #[test]
    fn test_render_trace_text() {
        let config = Config::default();
        let trace = Decoder::new().trace("227*#");
        let text = render_trace(&trace, TraceFormat::Text, &config).unwrap();
        assert_eq!(
            text,
            "2 x2 -> 'B'\n7 x1 -> 'P'\n* erase 'P'\n# end at 4\n= B"
        );
    }

    #[test]
    fn test_render_trace_marks_missing_terminator() {
        let config = Config::default();
        let trace = Decoder::new().trace("33");
        let text = render_trace(&trace, TraceFormat::Text, &config).unwrap();
        assert!(text.contains("flush open group"));
        assert!(text.contains("(no terminator)"));
        assert!(text.ends_with("= E"));
    }

    #[test]
    fn test_render_trace_json() {
        let config = Config::default();
        let trace = Decoder::new().trace("33#");
        let json = render_trace(&trace, TraceFormat::Json, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["output"], "E");
    }

    #[test]
    fn test_render_keymap() {
        let rendered = render_keymap(&KeyMap::canonical());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "0  \" \"");
        assert_eq!(lines[7], "7  \"PQRS\"");
    }
}
