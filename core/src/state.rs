//! Per-call decode state: the open press group and the text built so far.
//!
//! A group is open exactly when `pending` is `Some`; its press count is
//! always at least one.

use crate::keymap::KeyMap;

/// What closing a group produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// No group was open.
    Idle,
    /// The group resolved to `letter`, which was appended.
    Appended { key: char, presses: usize, letter: char },
    /// The key had no letters; the group was dropped.
    Discarded { key: char, presses: usize },
}

/// Transient state for one decode call.
#[derive(Debug, Clone)]
pub struct DecodeState {
    map: KeyMap,
    pending: Option<(char, usize)>,
    output: String,
}

impl DecodeState {
    pub fn new(map: KeyMap) -> Self {
        Self {
            map,
            pending: None,
            output: String::new(),
        }
    }

    /// Key and press count of the open group, if any.
    pub fn pending(&self) -> Option<(char, usize)> {
        self.pending
    }

    /// Text decoded so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Register a digit press.
    ///
    /// Same key extends the open group. A different key closes it first and
    /// the outcome of that close is returned.
    pub fn press(&mut self, key: char) -> CommitOutcome {
        if let Some((open, presses)) = self.pending.as_mut() {
            if *open == key {
                *presses += 1;
                return CommitOutcome::Idle;
            }
        }
        let outcome = self.commit();
        self.pending = Some((key, 1));
        outcome
    }

    /// Close the open group, appending its letter when the key is mapped.
    /// The group is cleared on every path.
    pub fn commit(&mut self) -> CommitOutcome {
        let Some((key, presses)) = self.pending.take() else {
            return CommitOutcome::Idle;
        };
        match self.map.letter_for(key, presses) {
            Some(letter) => {
                self.output.push(letter);
                tracing::trace!(%key, presses, %letter, "commit");
                CommitOutcome::Appended { key, presses, letter }
            }
            None => {
                tracing::trace!(%key, presses, "discard unmapped group");
                CommitOutcome::Discarded { key, presses }
            }
        }
    }

    /// Commit the open group, then remove the last letter of the output.
    /// Returns the commit outcome and the removed letter, if there was one.
    pub fn backspace(&mut self) -> (CommitOutcome, Option<char>) {
        let outcome = self.commit();
        let erased = self.output.pop();
        tracing::trace!(?erased, "backspace");
        (outcome, erased)
    }

    /// Flush any open group and hand back the decoded text.
    pub fn finish(mut self) -> String {
        self.commit();
        self.output
    }
}
