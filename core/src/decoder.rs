//! Multi-tap decoder.
//!
//! `Decoder` walks the input once, left to right, feeding each character to a
//! `DecodeState`. Plain decoding and step tracing share the same walk; the
//! trace only records what the walk did.

use serde::Serialize;

use crate::error::DecodeError;
use crate::key::KeyEvent;
use crate::keymap::KeyMap;
use crate::state::{CommitOutcome, DecodeState};

/// One observable action taken while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// A group closed and its letter was appended.
    Commit { key: char, presses: usize, letter: char },
    /// A group closed on a key with no letters and was dropped.
    Discard { key: char, presses: usize },
    /// Backspace removed `letter` (or nothing, on empty output).
    Erase { letter: Option<char> },
    /// A character outside the keypad alphabet was skipped.
    Ignore { ch: char },
    /// The terminator was reached at char `offset`; the rest is not read.
    Terminate { offset: usize },
    /// Input ended without a terminator and the open group was flushed.
    Flush,
}

/// Result of a traced decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeTrace {
    pub output: String,
    pub steps: Vec<Step>,
    /// Whether a terminator was seen.
    pub terminated: bool,
}

impl DecodeTrace {
    /// Pretty JSON rendering of the trace.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Keypad decoder over a fixed key table.
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoder {
    map: KeyMap,
}

impl Decoder {
    /// Decoder over the standard keypad.
    pub fn new() -> Self {
        Self {
            map: KeyMap::canonical(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_keymap(map: KeyMap) -> Self {
        Self { map }
    }

    pub fn keymap(&self) -> KeyMap {
        self.map
    }

    /// Decode a keypad sequence into text.
    ///
    /// Never fails: unknown characters are skipped, a missing terminator
    /// still flushes the last group.
    pub fn decode(&self, input: &str) -> String {
        self.run(input, |_| {}).0
    }

    /// Boundary form of [`Decoder::decode`] for callers that may not hold an
    /// input at all.
    pub fn try_decode(&self, input: Option<&str>) -> Result<String, DecodeError> {
        let input = input.ok_or(DecodeError::MissingInput)?;
        Ok(self.decode(input))
    }

    /// Decode and record every step taken.
    pub fn trace(&self, input: &str) -> DecodeTrace {
        let mut steps = Vec::new();
        let (output, terminated) = self.run(input, |step| steps.push(step));
        DecodeTrace {
            output,
            steps,
            terminated,
        }
    }

    fn run(&self, input: &str, mut on_step: impl FnMut(Step)) -> (String, bool) {
        let mut state = DecodeState::new(self.map);
        let mut terminated = false;

        for (offset, ch) in input.chars().enumerate() {
            match KeyEvent::from_char(ch) {
                KeyEvent::Terminator => {
                    emit_commit(state.commit(), &mut on_step);
                    on_step(Step::Terminate { offset });
                    terminated = true;
                    break;
                }
                KeyEvent::Backspace => {
                    let (outcome, erased) = state.backspace();
                    emit_commit(outcome, &mut on_step);
                    on_step(Step::Erase { letter: erased });
                }
                KeyEvent::Separator => emit_commit(state.commit(), &mut on_step),
                KeyEvent::Press(key) => emit_commit(state.press(key), &mut on_step),
                KeyEvent::Ignored(other) => on_step(Step::Ignore { ch: other }),
            }
        }

        if !terminated && state.pending().is_some() {
            tracing::debug!("input ended without terminator, flushing open group");
            emit_commit(state.commit(), &mut on_step);
            on_step(Step::Flush);
        }

        let output = state.finish();
        tracing::debug!(
            input_chars = input.chars().count(),
            output_chars = output.chars().count(),
            terminated,
            "decoded"
        );
        (output, terminated)
    }
}

fn emit_commit(outcome: CommitOutcome, on_step: &mut impl FnMut(Step)) {
    match outcome {
        CommitOutcome::Idle => {}
        CommitOutcome::Appended { key, presses, letter } => {
            on_step(Step::Commit { key, presses, letter })
        }
        CommitOutcome::Discarded { key, presses } => on_step(Step::Discard { key, presses }),
    }
}

/// Decode with the standard keypad.
pub fn decode(input: &str) -> String {
    Decoder::new().decode(input)
}

/// Decode with the standard keypad, rejecting an absent input.
pub fn try_decode(input: Option<&str>) -> Result<String, DecodeError> {
    Decoder::new().try_decode(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_basic() {
        assert_eq!(decode("33#"), "E");
        assert_eq!(decode("0#"), " ");
    }

    #[test]
    fn test_try_decode_missing_input() {
        assert!(matches!(try_decode(None), Err(DecodeError::MissingInput)));
        assert_eq!(try_decode(Some("")).unwrap(), "");
        assert_eq!(try_decode(Some("227*#")).unwrap(), "B");
    }

    #[test]
    fn test_trace_records_steps() {
        let trace = Decoder::new().trace("22x*3#99");
        assert_eq!(trace.output, "D");
        assert!(trace.terminated);
        assert_eq!(
            trace.steps,
            vec![
                Step::Ignore { ch: 'x' },
                Step::Commit { key: '2', presses: 2, letter: 'B' },
                Step::Erase { letter: Some('B') },
                Step::Commit { key: '3', presses: 1, letter: 'D' },
                Step::Terminate { offset: 5 },
            ]
        );
    }

    #[test]
    fn test_trace_flush_on_missing_terminator() {
        let trace = Decoder::new().trace("44 4");
        assert_eq!(trace.output, "HG");
        assert!(!trace.terminated);
        assert_eq!(trace.steps.last(), Some(&Step::Flush));
    }

    #[test]
    fn test_trace_no_flush_when_nothing_open() {
        let trace = Decoder::new().trace("2 ");
        assert_eq!(trace.output, "A");
        assert!(!trace.steps.contains(&Step::Flush));
    }

    #[test]
    fn test_erase_on_empty_output() {
        let trace = Decoder::new().trace("*#");
        assert_eq!(
            trace.steps,
            vec![Step::Erase { letter: None }, Step::Terminate { offset: 1 }]
        );
    }

    static DIGITS_ONLY_2: phf::Map<char, &'static [char]> = phf::phf_map! {
        '2' => &['A', 'B', 'C'],
        '3' => &[] as &[char],
    };

    #[test]
    fn test_unmapped_and_empty_keys_are_discarded() {
        let decoder = Decoder::with_keymap(KeyMap::from_table(&DIGITS_ONLY_2));
        assert_eq!(decoder.decode("2 33 5 22#"), "AB");
        let trace = decoder.trace("33 2#");
        assert_eq!(trace.steps[0], Step::Discard { key: '3', presses: 2 });
        assert_eq!(trace.output, "A");
    }

    #[test]
    fn test_trace_json_shape() {
        let json = Decoder::new().trace("2#").to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["output"], "A");
        assert_eq!(value["terminated"], true);
        assert_eq!(value["steps"][0]["step"], "commit");
        assert_eq!(value["steps"][0]["letter"], "A");
        assert_eq!(value["steps"][1]["offset"], 1);
    }
}
