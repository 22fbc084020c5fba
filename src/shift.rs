//! Moves an already placed tone to the vowel the next keystroke makes correct,
//! e.g. `tòa` followed by `n` becomes `toàn`.

use crate::table::{self, COL_I, COL_O, COL_U, COL_U_HORN, COL_Y, lower};

/// Consonants that close a syllable and pull the tone onto the later vowel.
pub const SHIFTING_CONSONANTS: &str = "cmnpt";

const FRONT_TRIGGERS: &str = "eiouy";
const OPEN_ENDINGS: &str = "aeoy";

/// Returns `word` with the tone on its second-to-last letter moved to the
/// last letter when `trigger` calls for it, or `word` unchanged.
///
/// `trigger` is the key about to be typed; the digits `6` and `8` stand for
/// circumflex and breve requests coming from word placement.
pub fn shift_accent(word: &str, trigger: char) -> String {
    let mut cp: Vec<char> = word.chars().collect();
    let wl = cp.len();
    if wl < 2 {
        return word.to_string();
    }

    let last = lower(cp[wl - 1]);
    let key = lower(trigger);

    let movable: &[usize] = if wl == 3 && is_qu_gi_stem(&cp) {
        &[COL_I, COL_U]
    } else if FRONT_TRIGGERS.contains(key) {
        let opens = matches!(last, 'a' | 'o' | 'ơ')
            || matches!(key, 'e' | 'u')
            || (last == 'e' && key == 'o');
        if !opens {
            return word.to_string();
        }
        &[COL_I, COL_O, COL_U, COL_U_HORN, COL_Y]
    } else if SHIFTING_CONSONANTS.contains(key) || matches!(trigger, '6' | '8') {
        if !OPEN_ENDINGS.contains(last) {
            return word.to_string();
        }
        &[COL_I, COL_O, COL_U, COL_Y]
    } else {
        return word.to_string();
    };

    let Some(slot) = table::locate(lower(cp[wl - 2])) else {
        return word.to_string();
    };
    if slot.row == 0 || slot.is_d() || !movable.contains(&slot.col) {
        return word.to_string();
    }
    let Some(target) = table::with_tone_row(cp[wl - 1], slot.row) else {
        return word.to_string();
    };

    cp[wl - 2] = table::strip_tone(cp[wl - 2]);
    cp[wl - 1] = target;
    cp.into_iter().collect()
}

/// `qu` and `gi` act as onsets: the vowel after them takes the tone.
pub(crate) fn is_qu_gi_stem(cp: &[char]) -> bool {
    match cp {
        [first, second, ..] => {
            let second = lower(table::base_char(*second));
            matches!((lower(*first), second), ('q', 'u') | ('g', 'i'))
        }
        _ => false,
    }
}
