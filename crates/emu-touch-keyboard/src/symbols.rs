//! Printable symbols for keys, used to label key-press feedback.
//!
//! Each machine family has one base table, built once and cloned into
//! every keyboard that uses it. Skins then override individual entries
//! (the Japanese machines print a yen sign where others have a pound).

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::key::Key;

/// What is printed on a key cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum KeySymbol {
    Char(char),
    Label(&'static str),
}

/// Symbols for one key: the unshifted legend and, where the machine prints
/// one, the shifted legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeySymbols {
    pub normal: KeySymbol,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shifted: Option<KeySymbol>,
}

impl KeySymbols {
    #[must_use]
    pub const fn char(normal: char) -> Self {
        Self {
            normal: KeySymbol::Char(normal),
            shifted: None,
        }
    }

    #[must_use]
    pub const fn chars(normal: char, shifted: char) -> Self {
        Self {
            normal: KeySymbol::Char(normal),
            shifted: Some(KeySymbol::Char(shifted)),
        }
    }

    #[must_use]
    pub const fn label(normal: &'static str) -> Self {
        Self {
            normal: KeySymbol::Label(normal),
            shifted: None,
        }
    }

    #[must_use]
    pub const fn labels(normal: &'static str, shifted: &'static str) -> Self {
        Self {
            normal: KeySymbol::Label(normal),
            shifted: Some(KeySymbol::Label(shifted)),
        }
    }
}

/// Key → symbol table of one keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyboardSymbols {
    key_map: HashMap<Key, KeySymbols>,
}

impl KeyboardSymbols {
    /// Copy of the shared C64 family table.
    #[must_use]
    pub fn c64() -> Self {
        static BASE: OnceLock<KeyboardSymbols> = OnceLock::new();
        BASE.get_or_init(build_c64).clone()
    }

    /// Copy of the shared Plus/4 table.
    #[must_use]
    pub fn plus4() -> Self {
        static BASE: OnceLock<KeyboardSymbols> = OnceLock::new();
        BASE.get_or_init(build_plus4).clone()
    }

    #[must_use]
    pub fn get(&self, key: Key) -> Option<&KeySymbols> {
        self.key_map.get(&key)
    }

    /// Replace the symbols of `key`.
    pub fn set(&mut self, key: Key, symbols: KeySymbols) {
        self.key_map.insert(key, symbols);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.key_map.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.key_map.is_empty()
    }
}

/// Digits and punctuation shared by both families.
const SHIFTED_DIGITS: [(char, char); 9] = [
    ('1', '!'),
    ('2', '"'),
    ('3', '#'),
    ('4', '$'),
    ('5', '%'),
    ('6', '&'),
    ('7', '\''),
    ('8', '('),
    ('9', ')'),
];

const SHIFTED_PUNCTUATION: [(char, char); 5] = [
    (':', '['),
    (';', ']'),
    (',', '<'),
    ('.', '>'),
    ('/', '?'),
];

fn common_table() -> KeyboardSymbols {
    let mut table = KeyboardSymbols::default();

    for letter in 'a'..='z' {
        table.set(Key::Char(letter), KeySymbols::char(letter.to_ascii_uppercase()));
    }
    for (normal, shifted) in SHIFTED_DIGITS.into_iter().chain(SHIFTED_PUNCTUATION) {
        table.set(Key::Char(normal), KeySymbols::chars(normal, shifted));
    }
    for plain in ['0', '+', '-', '=', '@', '*', '£'] {
        table.set(Key::Char(plain), KeySymbols::char(plain));
    }
    table.set(Key::Char(' '), KeySymbols::label("SPACE"));

    table.set(Key::Control, KeySymbols::label("CTRL"));
    table.set(Key::Commodore, KeySymbols::label("C="));
    table.set(Key::ShiftLock, KeySymbols::label("SHIFT LOCK"));
    table.set(Key::Return, KeySymbols::label("RETURN"));
    table.set(Key::RunStop, KeySymbols::labels("RUN/STOP", "RUN"));
    table.set(Key::ClearHome, KeySymbols::labels("HOME", "CLR"));
    table.set(Key::InsertDelete, KeySymbols::labels("DEL", "INST"));

    table
}

fn build_c64() -> KeyboardSymbols {
    let mut table = common_table();

    table.set(Key::ShiftLeft, KeySymbols::label("SHIFT"));
    table.set(Key::ShiftRight, KeySymbols::label("SHIFT"));
    table.set(Key::CommodoreLock, KeySymbols::label("C= LOCK"));
    table.set(Key::Restore, KeySymbols::label("RESTORE"));
    table.set(Key::ArrowLeft, KeySymbols::char('←'));
    table.set(Key::ArrowUp, KeySymbols::chars('↑', 'π'));
    table.set(Key::CursorUpDown, KeySymbols::chars('↓', '↑'));
    table.set(Key::CursorLeftRight, KeySymbols::chars('→', '←'));
    table.set(Key::F1, KeySymbols::labels("f1", "f2"));
    table.set(Key::F3, KeySymbols::labels("f3", "f4"));
    table.set(Key::F5, KeySymbols::labels("f5", "f6"));
    table.set(Key::F7, KeySymbols::labels("f7", "f8"));

    table
}

fn build_plus4() -> KeyboardSymbols {
    let mut table = common_table();

    table.set(Key::Shift, KeySymbols::label("SHIFT"));
    table.set(Key::Escape, KeySymbols::label("ESC"));
    table.set(Key::CursorUp, KeySymbols::char('↑'));
    table.set(Key::CursorDown, KeySymbols::char('↓'));
    table.set(Key::CursorLeft, KeySymbols::char('←'));
    table.set(Key::CursorRight, KeySymbols::char('→'));
    table.set(Key::F1, KeySymbols::labels("F1", "F4"));
    table.set(Key::F2, KeySymbols::labels("F2", "F5"));
    table.set(Key::F3, KeySymbols::labels("F3", "F6"));
    table.set(Key::Help, KeySymbols::labels("HELP", "F7"));

    table
}
