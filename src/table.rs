//! Compiled-in map of every Vietnamese letter the engine can address.
//!
//! The table is indexed by `(row, col)`: the row is the tone (0 for none,
//! then acute, grave, hook, tilde, dot) and the column is the letter shape,
//! twelve lower-case vowel shapes followed by the same twelve in upper case
//! and finally `d`/`D`. Only rows 0 and 1 use the `d` columns, where row 1
//! holds the stroked `đ`/`Đ`; the remaining rows leave them as holes.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::decompose_canonical;

pub const ROWS: usize = 6;
pub const COLUMNS: usize = 26;

pub const COL_A_CIRC: usize = 0;
pub const COL_A: usize = 1;
pub const COL_A_BREVE: usize = 2;
pub const COL_E_CIRC: usize = 3;
pub const COL_E: usize = 4;
pub const COL_I: usize = 5;
pub const COL_O_CIRC: usize = 6;
pub const COL_O: usize = 7;
pub const COL_O_HORN: usize = 8;
pub const COL_U: usize = 9;
pub const COL_U_HORN: usize = 10;
pub const COL_Y: usize = 11;
/// Offset from a lower-case vowel column to its upper-case twin.
pub const UPPER: usize = 12;
pub const COL_D: usize = 24;
pub const COL_D_UPPER: usize = 25;

const HOLE: char = '\0';

#[rustfmt::skip]
pub static UNI_DATA: [[char; COLUMNS]; ROWS] = [
    ['â', 'a', 'ă', 'ê', 'e', 'i', 'ô', 'o', 'ơ', 'u', 'ư', 'y', 'Â', 'A', 'Ă', 'Ê', 'E', 'I', 'Ô', 'O', 'Ơ', 'U', 'Ư', 'Y', 'd', 'D'],
    ['ấ', 'á', 'ắ', 'ế', 'é', 'í', 'ố', 'ó', 'ớ', 'ú', 'ứ', 'ý', 'Ấ', 'Á', 'Ắ', 'Ế', 'É', 'Í', 'Ố', 'Ó', 'Ớ', 'Ú', 'Ứ', 'Ý', 'đ', 'Đ'],
    ['ầ', 'à', 'ằ', 'ề', 'è', 'ì', 'ồ', 'ò', 'ờ', 'ù', 'ừ', 'ỳ', 'Ầ', 'À', 'Ằ', 'Ề', 'È', 'Ì', 'Ồ', 'Ò', 'Ờ', 'Ù', 'Ừ', 'Ỳ', HOLE, HOLE],
    ['ẩ', 'ả', 'ẳ', 'ể', 'ẻ', 'ỉ', 'ổ', 'ỏ', 'ở', 'ủ', 'ử', 'ỷ', 'Ẩ', 'Ả', 'Ẳ', 'Ể', 'Ẻ', 'Ỉ', 'Ổ', 'Ỏ', 'Ở', 'Ủ', 'Ử', 'Ỷ', HOLE, HOLE],
    ['ẫ', 'ã', 'ẵ', 'ễ', 'ẽ', 'ĩ', 'ỗ', 'õ', 'ỡ', 'ũ', 'ữ', 'ỹ', 'Ẫ', 'Ã', 'Ẵ', 'Ễ', 'Ẽ', 'Ĩ', 'Ỗ', 'Õ', 'Ỡ', 'Ũ', 'Ữ', 'Ỹ', HOLE, HOLE],
    ['ậ', 'ạ', 'ặ', 'ệ', 'ẹ', 'ị', 'ộ', 'ọ', 'ợ', 'ụ', 'ự', 'ỵ', 'Ậ', 'Ạ', 'Ặ', 'Ệ', 'Ẹ', 'Ị', 'Ộ', 'Ọ', 'Ợ', 'Ụ', 'Ự', 'Ỵ', HOLE, HOLE],
];

/// Position of a letter in [`UNI_DATA`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub row: usize,
    pub col: usize,
}

impl Slot {
    #[inline(always)]
    pub fn is_d(self) -> bool {
        self.col >= COL_D
    }

    /// Column with the case offset removed; `d` columns are returned as is.
    #[inline(always)]
    pub fn shape(self) -> usize {
        if self.is_d() { self.col } else { self.col % UPPER }
    }

    #[inline(always)]
    pub fn case_offset(self) -> usize {
        if self.is_d() { 0 } else { self.col - self.col % UPPER }
    }
}

pub fn locate(ch: char) -> Option<Slot> {
    if ch == HOLE {
        return None;
    }
    for (row, letters) in UNI_DATA.iter().enumerate() {
        if let Some(col) = letters.iter().position(|&c| c == ch) {
            return Some(Slot { row, col });
        }
    }
    None
}

#[inline(always)]
pub fn at(row: usize, col: usize) -> char {
    UNI_DATA[row][col]
}

/// Tone row carried by `ch`, or 0. `đ` reports 0: its row 1 is the stroke.
pub fn tone_row(ch: char) -> usize {
    match locate(ch) {
        Some(slot) if !slot.is_d() => slot.row,
        _ => 0,
    }
}

/// Removes the tone and keeps the letter shape.
pub fn strip_tone(ch: char) -> char {
    match locate(ch) {
        Some(slot) if !slot.is_d() => at(0, slot.col),
        _ => ch,
    }
}

/// Gives a vowel the tone of `row`, replacing whatever tone it had.
/// `None` for letters that cannot carry a tone.
pub fn with_tone_row(ch: char, row: usize) -> Option<char> {
    match locate(ch) {
        Some(slot) if !slot.is_d() && row < ROWS => Some(at(row, slot.col)),
        _ => None,
    }
}

/// The unmarked letter: tone, modifier and stroke removed. Characters outside
/// the table fall back to canonical decomposition.
pub fn bare(ch: char) -> char {
    let Some(slot) = locate(ch) else {
        return base_char(ch);
    };
    if slot.is_d() {
        return at(0, slot.col);
    }
    let plain = match slot.shape() {
        COL_A_CIRC | COL_A | COL_A_BREVE => COL_A,
        COL_E_CIRC | COL_E => COL_E,
        COL_O_CIRC | COL_O | COL_O_HORN => COL_O,
        COL_U | COL_U_HORN => COL_U,
        shape => shape,
    };
    at(0, slot.case_offset() + plain)
}

fn shape_in(ch: char, shapes: &[usize]) -> bool {
    locate(ch).is_some_and(|slot| !slot.is_d() && shapes.contains(&slot.shape()))
}

/// u or ư in either case, with or without tone.
pub fn is_u_family(ch: char) -> bool {
    shape_in(ch, &[COL_U, COL_U_HORN])
}

pub fn is_plain_u(ch: char) -> bool {
    shape_in(ch, &[COL_U])
}

pub fn is_horned_u(ch: char) -> bool {
    shape_in(ch, &[COL_U_HORN])
}

/// o without circumflex or horn, any tone.
pub fn is_plain_o(ch: char) -> bool {
    shape_in(ch, &[COL_O])
}

pub fn is_horned_o(ch: char) -> bool {
    shape_in(ch, &[COL_O_HORN])
}

pub fn in_a_group(ch: char) -> bool {
    shape_in(ch, &[COL_A_CIRC, COL_A, COL_A_BREVE])
}

pub fn in_e_group(ch: char) -> bool {
    shape_in(ch, &[COL_E_CIRC, COL_E])
}

pub fn in_o_group(ch: char) -> bool {
    shape_in(ch, &[COL_O_CIRC, COL_O, COL_O_HORN])
}

pub fn is_d_letter(ch: char) -> bool {
    matches!(ch, 'd' | 'D' | 'đ' | 'Đ')
}

/// First code point of the canonical decomposition: `ứ` -> `u`, `ü` -> `u`.
pub fn base_char(ch: char) -> char {
    let mut base = None;
    decompose_canonical(ch, |c| {
        base.get_or_insert(c);
    });
    base.unwrap_or(ch)
}

#[inline(always)]
fn is_combining_diacritic(ch: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&ch)
}

/// Decomposes `word` and drops every combining diacritical mark.
/// `đ` has no decomposition and is kept.
pub fn strip_marks(word: &str) -> String {
    word.nfd().filter(|&c| !is_combining_diacritic(c)).collect()
}

#[inline(always)]
pub fn lower(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}
