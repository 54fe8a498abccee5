//! Keypad table mapping each digit key to the letters it cycles through.
//!
//! The table is a compile-time perfect hash (`phf`) so it is built once,
//! lives in read-only memory and can be shared by any number of callers.

use phf::phf_map;

/// Classic phone keypad. The Nth press of a key selects the letter at
/// `(N - 1) % len`.
static CANONICAL: phf::Map<char, &'static [char]> = phf_map! {
    '0' => &[' '],
    '1' => &['&', '\'', '('],
    '2' => &['A', 'B', 'C'],
    '3' => &['D', 'E', 'F'],
    '4' => &['G', 'H', 'I'],
    '5' => &['J', 'K', 'L'],
    '6' => &['M', 'N', 'O'],
    '7' => &['P', 'Q', 'R', 'S'],
    '8' => &['T', 'U', 'V'],
    '9' => &['W', 'X', 'Y', 'Z'],
};

/// Read-only handle over a static keypad table.
#[derive(Debug, Clone, Copy)]
pub struct KeyMap {
    table: &'static phf::Map<char, &'static [char]>,
}

impl KeyMap {
    /// The standard 10-key layout.
    pub fn canonical() -> Self {
        Self { table: &CANONICAL }
    }

    /// Wrap another static table. Only tests need a non-canonical layout.
    #[cfg(test)]
    pub(crate) fn from_table(table: &'static phf::Map<char, &'static [char]>) -> Self {
        Self { table }
    }

    /// Letters mapped to `key`, in press order.
    pub fn letters(&self, key: char) -> Option<&'static [char]> {
        self.table.get(&key).copied()
    }

    /// Letter selected by pressing `key` `presses` times in a row.
    ///
    /// Presses past the end of the sequence wrap around to the first letter.
    /// Returns `None` for zero presses, an unmapped key, or a key mapped to
    /// an empty sequence.
    pub fn letter_for(&self, key: char, presses: usize) -> Option<char> {
        if presses == 0 {
            return None;
        }
        let letters = self.letters(key)?;
        if letters.is_empty() {
            return None;
        }
        Some(letters[(presses - 1) % letters.len()])
    }

    /// Mapped keys in ascending order.
    pub fn keys(&self) -> Vec<char> {
        let mut keys: Vec<char> = self.table.keys().copied().collect();
        keys.sort_unstable();
        keys
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::canonical()
    }
}
