//! Word-level placement: finds the letter of the syllable an accent command
//! belongs to and composes it there.
//!
//! Vietnamese puts tone marks on the vowel nucleus, not on whatever vowel the
//! caret follows, so the rules below look at the last one to four letters and
//! pick the target by structure. Rules are tried in priority order; the first
//! that matches decides.

use crate::accent::{AccentCommand, Modifier};
use crate::compose::Composer;
use crate::shift::{SHIFTING_CONSONANTS, is_qu_gi_stem, shift_accent};
use crate::table::{self, lower};

/// Longest word that can still be a single syllable.
const MAX_SYLLABLE_LEN: usize = 7;

const CIRCUMFLEX: AccentCommand = AccentCommand::Modifier(Modifier::Circumflex);
const HORN: AccentCommand = AccentCommand::Modifier(Modifier::Horn);

impl Composer {
    /// Applies `command` to the letter of `word` it orthographically belongs to.
    ///
    /// `classic` selects the older tone position for a trailing `oa`, `oe` or
    /// `uy` (`hòa` rather than `hoà`). Words the rules do not recognise come
    /// back unchanged.
    pub fn place(&mut self, word: &str, command: AccentCommand, classic: bool) -> String {
        self.removed_by_repeat = false;

        let mut cp: Vec<char> = word.chars().collect();
        let wl = cp.len();
        if wl == 0 || !command.is_combining() {
            return word.to_string();
        }

        if command == AccentCommand::Stroke && table::is_d_letter(cp[0]) {
            cp[0] = self.compose_char(cp[0], command);
            return cp.into_iter().collect();
        }

        if wl > MAX_SYLLABLE_LEN || !cp[wl - 1].is_alphanumeric() {
            return word.to_string();
        }

        if self.place_by_structure(word, &mut cp, command) {
            return finish(word, cp.into_iter().collect(), command);
        }
        if self.place_trailing_uo(&mut cp, command) {
            return cp.into_iter().collect();
        }
        if self.place_general(word, &mut cp, command, classic) {
            return finish(word, cp.into_iter().collect(), command);
        }
        word.to_string()
    }

    /// Codas, `qu`/`gi` stems and circumflex after a glide.
    fn place_by_structure(
        &mut self,
        word: &str,
        cp: &mut Vec<char>,
        command: AccentCommand,
    ) -> bool {
        let wl = cp.len();
        let last = lower(cp[wl - 1]);

        // Two-letter codas: ng, nh, ch.
        if wl > 2 && matches!(last, 'h' | 'g') {
            if wl > 3 {
                self.pair_uo(cp, wl - 4, command);
            } else {
                cp[0] = self.compose_char(cp[0], command);
            }
            return true;
        }

        if wl >= 3
            && (SHIFTING_CONSONANTS.contains(last)
                || (matches!(last, 'i' | 'u') && matches!(lower(cp[wl - 3]), 'u' | 'ư')))
        {
            self.pair_uo(cp, wl - 3, command);
            return true;
        }

        if wl == 3 && is_qu_gi_stem(cp) {
            cp[2] = self.compose_char(cp[2], command);
            return true;
        }

        if wl > 1
            && command == CIRCUMFLEX
            && matches!(lower(table::base_char(cp[wl - 2])), 'u' | 'i' | 'y')
        {
            *cp = shift_accent(word, '6').chars().collect();
            cp[wl - 1] = self.compose_char(cp[wl - 1], command);
            return true;
        }

        false
    }

    /// A word ending in u/ư + o: the command lands on the o, and a tone
    /// typed early on the u travels with it (`trúo` + horn -> `truớ`).
    fn place_trailing_uo(&mut self, cp: &mut [char], command: AccentCommand) -> bool {
        let wl = cp.len();
        if wl < 2 || !table::is_u_family(cp[wl - 2]) || lower(cp[wl - 1]) != 'o' {
            return false;
        }

        let carried = table::tone_row(cp[wl - 2]);
        cp[wl - 1] = self.compose_char(cp[wl - 1], command);
        if carried != 0 {
            if let Some(toned) = table::with_tone_row(cp[wl - 1], carried) {
                cp[wl - 2] = table::strip_tone(cp[wl - 2]);
                cp[wl - 1] = toned;
                self.removed_by_repeat = false;
            }
        }
        true
    }

    fn place_general(
        &mut self,
        word: &str,
        cp: &mut Vec<char>,
        command: AccentCommand,
        classic: bool,
    ) -> bool {
        let wl = cp.len();

        let open_pair = wl > 1
            && !table::is_d_letter(cp[wl - 2])
            && !is_consonant_or_digit(cp[wl - 2])
            && cp[wl - 1].is_ascii_alphabetic();

        if !open_pair {
            if is_hard_consonant(cp[wl - 1]) {
                return false;
            }
            cp[wl - 1] = self.compose_char(cp[wl - 1], command);
            return true;
        }

        match command {
            AccentCommand::Modifier(Modifier::Horn) if wl > 2 && lower(cp[wl - 3]) == 'u' => {
                cp[wl - 3] = self.compose_char(cp[wl - 3], command);
                cp[wl - 2] = self.compose_char(cp[wl - 2], command);
            }
            AccentCommand::Modifier(Modifier::Circumflex)
                if wl > 2 && lower(table::base_char(cp[wl - 3])) == 'u' =>
            {
                cp[wl - 3] = match cp[wl - 3] {
                    'ư' => 'u',
                    'Ư' => 'U',
                    other => other,
                };
                cp[wl - 2] = self.compose_char(cp[wl - 2], command);
            }
            AccentCommand::Modifier(Modifier::Circumflex | Modifier::Horn)
                if matches!(lower(cp[wl - 2]), 'i' | 'y') =>
            {
                cp[wl - 1] = self.compose_char(cp[wl - 1], command);
            }
            AccentCommand::Modifier(Modifier::Breve) if !is_consonant_or_digit(cp[wl - 1]) => {
                if matches!(lower(table::base_char(cp[wl - 2])), 'i' | 'u' | 'o') {
                    *cp = shift_accent(word, '8').chars().collect();
                }
                cp[wl - 1] = self.compose_char(cp[wl - 1], command);
            }
            _ => {
                let later = !classic && ends_with_tone_shifting_pair(word);
                // Only a new tone or a removal may take the old tone away.
                let retone = matches!(
                    command,
                    AccentCommand::Tone(_) | AccentCommand::RemoveDiacritics
                );
                if retone && wl > 2 {
                    cp[wl - 3] = table::strip_tone(cp[wl - 3]);
                }
                if later {
                    if retone {
                        cp[wl - 2] = table::strip_tone(cp[wl - 2]);
                    }
                    cp[wl - 1] = self.compose_char(cp[wl - 1], command);
                } else {
                    cp[wl - 2] = self.compose_char(cp[wl - 2], command);
                }
            }
        }
        true
    }

    /// Applies `command` to the vowel pair starting at `first`, keeping the
    /// two halves of `ươ` in step.
    fn pair_uo(&mut self, cp: &mut [char], first: usize, command: AccentCommand) {
        let second = first + 1;
        match command {
            AccentCommand::Modifier(Modifier::Horn) if lower(table::base_char(cp[first])) == 'u' => {
                cp[second] = self.compose_char(cp[second], command);
                cp[first] = self.compose_char(cp[first], command);

                // One half toggled on while the other toggled off: horn both.
                if table::is_plain_o(cp[second]) && table::is_horned_u(cp[first]) {
                    cp[second] = self.compose_char(cp[second], command);
                    self.removed_by_repeat = false;
                } else if table::is_horned_o(cp[second]) && table::is_plain_u(cp[first]) {
                    cp[first] = self.compose_char(cp[first], command);
                    self.removed_by_repeat = false;
                }
            }
            AccentCommand::Modifier(Modifier::Circumflex) => {
                cp[second] = self.compose_char(cp[second], command);
                if matches!(cp[first], 'ư' | 'Ư') {
                    cp[first] = self.compose_char(cp[first], HORN);
                    self.removed_by_repeat = false;
                }
            }
            _ => {
                if command == AccentCommand::RemoveDiacritics
                    && matches!(lower(table::strip_tone(cp[second])), 'o' | 'ơ')
                {
                    cp[first] = self.compose_char(cp[first], command);
                }
                cp[second] = self.compose_char(cp[second], command);
            }
        }
    }
}

/// A word-wide removal that changed nothing strips marks the table does not
/// know about as well.
fn finish(word: &str, placed: String, command: AccentCommand) -> String {
    if command == AccentCommand::RemoveDiacritics && placed == word {
        return table::strip_marks(word)
            .chars()
            .map(|c| match c {
                'đ' => 'd',
                'Đ' => 'D',
                other => other,
            })
            .collect();
    }
    placed
}

/// Trailing `oa`, `oe`, `uy`: the clusters whose tone position differs
/// between the classic and modern conventions.
fn ends_with_tone_shifting_pair(word: &str) -> bool {
    let plain = table::strip_marks(word).to_lowercase();
    plain.ends_with("oa") || plain.ends_with("oe") || plain.ends_with("uy")
}

/// ASCII consonants other than `d` and `y`, plus digits. These never carry a mark.
#[inline(always)]
fn is_hard_consonant(ch: char) -> bool {
    ch.is_ascii_digit()
        || matches!(
            ch.to_ascii_lowercase(),
            'b' | 'c' | 'f' | 'g' | 'h' | 'j' | 'k' | 'l' | 'm' | 'n' | 'p' | 'q' | 'r' | 's' | 't'
                | 'v' | 'w' | 'x' | 'z'
        )
}

#[inline(always)]
fn is_consonant_or_digit(ch: char) -> bool {
    is_hard_consonant(ch) || matches!(ch, 'd' | 'D' | 'y' | 'Y')
}
