//! oldphonepad-core
//!
//! Keypad table, multi-tap state machine and decoder shared by the
//! `oldphonepad` front-ends.
//!
//! Input is a run of digit presses. Consecutive presses of one key form a
//! group that resolves to a single letter; a space closes a group early,
//! `*` deletes the last letter and `#` ends the message.
//!
//! ```rust
//! assert_eq!(oldphonepad_core::decode("4433555 555666#"), "HELLO");
//! ```
//!
//! Public API:
//! - `decode` / `try_decode` - one-shot decoding with the standard keypad
//! - `Decoder` - the decoder, with step tracing
//! - `KeyMap` - digit to letters table
//! - `KeyEvent` - classification of raw input characters
//! - `DecodeState` - the per-call state machine
//! - `Config` - front-end options

pub mod config;
pub use config::{Config, TraceFormat};

pub mod decoder;
pub use decoder::{decode, try_decode, DecodeTrace, Decoder, Step};

pub mod error;
pub use error::{ConfigError, DecodeError};

pub mod key;
pub use key::{KeyEvent, BACKSPACE, SEPARATOR, TERMINATOR};

pub mod keymap;
pub use keymap::KeyMap;

pub mod state;
pub use state::{CommitOutcome, DecodeState};
