use serde::{Deserialize, Serialize};

use crate::accent::{AccentCommand, Modifier};
use crate::table;

/// Keyboard convention used to type diacritics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMethod {
    /// Letters as marks: `s f r x j` tones, `aa ee oo w` modifiers, `dd`, `z` removes.
    #[default]
    Telex,
    /// Digits as marks: `1`-`5` tones, `6 7 8` modifiers, `9` stroke, `0` removes.
    Vni,
    /// Punctuation as marks: `' ` ? ~ .` tones, `^ + * (` modifiers, `-` removes.
    Viqr,
    /// Telex letters, VNI digits and VIQR punctuation at once.
    Auto,
}

type ResolverFn = fn(&Mode, char, &str) -> AccentCommand;

/// Static description of one input convention: which keys carry which
/// accent code, and how ambiguous keys are settled against the word.
pub struct Mode {
    pub keys: &'static [u8; 256],
    pub resolver: ResolverFn,
}

impl Mode {
    /// VNI digit code carried by `key`, if any.
    #[inline(always)]
    pub fn code(&self, key: char) -> Option<u8> {
        if !key.is_ascii() {
            return None;
        }
        match self.keys[key as usize] {
            NO_ACCENT => None,
            code => Some(code),
        }
    }
}

pub fn mode_for(method: InputMethod) -> &'static Mode {
    match method {
        InputMethod::Telex => &TELEX_MODE,
        InputMethod::Vni => &VNI_MODE,
        InputMethod::Viqr => &VIQR_MODE,
        InputMethod::Auto => &AUTO_MODE,
    }
}

/// Maps a keystroke to the accent command it stands for under `method`.
pub fn resolve_accent(method: InputMethod, key: char, word: &str) -> AccentCommand {
    let mode = mode_for(method);
    (mode.resolver)(mode, key, word)
}

const NO_ACCENT: u8 = u8::MAX;

/// Shared-key codes that still need the word to decide between modifiers.
const CODE_CIRCUMFLEX: u8 = 6;
const CODE_HORN: u8 = 7;

const TELEX_MODE: Mode = Mode {
    keys: &KEYS_TELEX,
    resolver: resolve_telex,
};

const VNI_MODE: Mode = Mode {
    keys: &KEYS_VNI,
    resolver: resolve_direct,
};

const VIQR_MODE: Mode = Mode {
    keys: &KEYS_VIQR,
    resolver: resolve_direct,
};

const AUTO_MODE: Mode = Mode {
    keys: &KEYS_AUTO,
    resolver: resolve_telex,
};

const fn set_case_pair(t: &mut [u8; 256], lower: u8, code: u8) {
    t[lower as usize] = code;
    t[lower.to_ascii_uppercase() as usize] = code;
}

const fn fill_digits(t: &mut [u8; 256]) {
    let mut d = 0u8;
    while d <= 9 {
        t[(b'0' + d) as usize] = d;
        d += 1;
    }
}

const fn fill_telex(t: &mut [u8; 256]) {
    set_case_pair(t, b's', 1);
    set_case_pair(t, b'f', 2);
    set_case_pair(t, b'r', 3);
    set_case_pair(t, b'x', 4);
    set_case_pair(t, b'j', 5);
    set_case_pair(t, b'a', CODE_CIRCUMFLEX);
    set_case_pair(t, b'e', CODE_CIRCUMFLEX);
    set_case_pair(t, b'o', CODE_CIRCUMFLEX);
    set_case_pair(t, b'w', CODE_HORN);
    set_case_pair(t, b'd', 9);
    set_case_pair(t, b'z', 0);
}

const fn fill_viqr_marks(t: &mut [u8; 256]) {
    t[b'\'' as usize] = 1;
    t[b'`' as usize] = 2;
    t[b'?' as usize] = 3;
    t[b'~' as usize] = 4;
    t[b'.' as usize] = 5;
    t[b'^' as usize] = 6;
    t[b'*' as usize] = 7;
    t[b'+' as usize] = 7;
    t[b'(' as usize] = 8;
    t[b'-' as usize] = 0;
}

pub const KEYS_TELEX: [u8; 256] = {
    let mut t = [NO_ACCENT; 256];
    fill_telex(&mut t);
    t
};

pub const KEYS_VNI: [u8; 256] = {
    let mut t = [NO_ACCENT; 256];
    fill_digits(&mut t);
    t
};

pub const KEYS_VIQR: [u8; 256] = {
    let mut t = [NO_ACCENT; 256];
    fill_viqr_marks(&mut t);
    set_case_pair(&mut t, b'd', 9);
    t
};

pub const KEYS_AUTO: [u8; 256] = {
    let mut t = [NO_ACCENT; 256];
    fill_digits(&mut t);
    fill_viqr_marks(&mut t);
    fill_telex(&mut t);
    t
};

fn resolve_direct(mode: &Mode, key: char, _word: &str) -> AccentCommand {
    mode.code(key).map_or(AccentCommand::None, AccentCommand::from_digit)
}

fn resolve_telex(mode: &Mode, key: char, word: &str) -> AccentCommand {
    // Only letters are shared; Auto's digits and punctuation are explicit.
    match mode.code(key) {
        Some(CODE_CIRCUMFLEX) if key.is_ascii_alphabetic() => {
            resolve_shared_key(word, key, Modifier::Circumflex)
        }
        Some(CODE_HORN) if key.is_ascii_alphabetic() => {
            resolve_shared_key(word, key, Modifier::Horn)
        }
        Some(code) => AccentCommand::from_digit(code),
        None => AccentCommand::None,
    }
}

/// Settles the Telex keys that double as letters (`a e o`) or name more than
/// one modifier (`w`) by scanning the word for the vowel they would modify.
///
/// `w` gives a breve when the word holds an `a`-family letter and a horn
/// otherwise. `a`, `e` and `o` only ask for a circumflex when a letter of
/// their own family is present; otherwise they are plain letters.
pub fn resolve_shared_key(word: &str, key: char, requested: Modifier) -> AccentCommand {
    let horn = requested == Modifier::Horn;
    let family: fn(char) -> bool = match table::lower(key) {
        _ if horn => table::in_a_group,
        'a' => table::in_a_group,
        'o' => table::in_o_group,
        _ => table::in_e_group,
    };
    let found = word.chars().any(family);

    match (horn, found) {
        (true, true) => AccentCommand::Modifier(Modifier::Breve),
        (true, false) => AccentCommand::Modifier(Modifier::Horn),
        (false, true) => AccentCommand::Modifier(Modifier::Circumflex),
        (false, false) => AccentCommand::None,
    }
}
