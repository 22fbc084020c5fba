use crate::accent::{AccentCommand, Modifier};
use crate::table::{
    self, COL_A, COL_A_BREVE, COL_A_CIRC, COL_E, COL_E_CIRC, COL_O, COL_O_CIRC, COL_O_HORN, COL_U,
    COL_U_HORN, Slot,
};

/// Applies accent commands to single letters.
///
/// The composer is the only stateful piece below the engine: it remembers
/// whether the most recent composition removed a mark because the same
/// command was repeated (`á` + acute -> `a`), as opposed to an explicit
/// remove-diacritics key. Every `compose_char` call resets that flag first,
/// so it always describes the last letter touched.
#[derive(Debug, Default, Clone)]
pub struct Composer {
    pub(crate) removed_by_repeat: bool,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn removed_by_repeat(&self) -> bool {
        self.removed_by_repeat
    }

    pub fn reset(&mut self) {
        self.removed_by_repeat = false;
    }

    /// Returns `ch` with `command` applied. Letters the command cannot apply
    /// to come back unchanged.
    pub fn compose_char(&mut self, ch: char, command: AccentCommand) -> char {
        self.removed_by_repeat = false;

        let Some(slot) = table::locate(ch) else {
            return match command {
                AccentCommand::RemoveDiacritics => table::base_char(ch),
                _ => ch,
            };
        };

        match command {
            AccentCommand::None => ch,
            AccentCommand::Tone(tone) => {
                if slot.is_d() {
                    return ch;
                }
                if slot.row == tone.row() {
                    self.removed_by_repeat = true;
                    table::at(0, slot.col)
                } else {
                    table::at(tone.row(), slot.col)
                }
            }
            AccentCommand::Modifier(modifier) => {
                if slot.is_d() {
                    return ch;
                }
                let target = modified_col(slot, modifier);
                if target != slot.col {
                    return table::at(slot.row, target);
                }
                // Either the letter already carries the modifier or cannot take it.
                match unmodified_col(slot, modifier) {
                    Some(plain) => {
                        self.removed_by_repeat = true;
                        table::at(slot.row, plain)
                    }
                    None => ch,
                }
            }
            AccentCommand::Stroke => {
                if !slot.is_d() {
                    return ch;
                }
                if slot.row == 1 {
                    self.removed_by_repeat = true;
                    table::at(0, slot.col)
                } else {
                    table::at(1, slot.col)
                }
            }
            AccentCommand::RemoveDiacritics => {
                let plain = table::bare(ch);
                if plain != ch { plain } else { table::base_char(ch) }
            }
        }
    }
}

fn modified_col(slot: Slot, modifier: Modifier) -> usize {
    let shape = match (modifier, slot.shape()) {
        (Modifier::Circumflex, COL_A | COL_A_BREVE) => COL_A_CIRC,
        (Modifier::Circumflex, COL_E) => COL_E_CIRC,
        (Modifier::Circumflex, COL_O | COL_O_HORN) => COL_O_CIRC,
        (Modifier::Horn, COL_O | COL_O_CIRC) => COL_O_HORN,
        (Modifier::Horn, COL_U) => COL_U_HORN,
        (Modifier::Breve, COL_A | COL_A_CIRC) => COL_A_BREVE,
        (_, shape) => shape,
    };
    slot.case_offset() + shape
}

fn unmodified_col(slot: Slot, modifier: Modifier) -> Option<usize> {
    let shape = match (modifier, slot.shape()) {
        (Modifier::Circumflex, COL_A_CIRC) => COL_A,
        (Modifier::Circumflex, COL_E_CIRC) => COL_E,
        (Modifier::Circumflex, COL_O_CIRC) => COL_O,
        (Modifier::Horn, COL_O_HORN) => COL_O,
        (Modifier::Horn, COL_U_HORN) => COL_U,
        (Modifier::Breve, COL_A_BREVE) => COL_A,
        _ => return None,
    };
    Some(slot.case_offset() + shape)
}
