/// Pitch-contour mark placed on the vowel nucleus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Acute,
    Grave,
    Hook,
    Tilde,
    Dot,
}

impl Tone {
    pub const ALL: [Tone; 5] = [Tone::Acute, Tone::Grave, Tone::Hook, Tone::Tilde, Tone::Dot];

    /// Row of the diacritic table holding letters with this tone.
    #[inline(always)]
    pub fn row(self) -> usize {
        match self {
            Tone::Acute => 1,
            Tone::Grave => 2,
            Tone::Hook => 3,
            Tone::Tilde => 4,
            Tone::Dot => 5,
        }
    }

    pub fn from_row(row: usize) -> Option<Tone> {
        match row {
            1 => Some(Tone::Acute),
            2 => Some(Tone::Grave),
            3 => Some(Tone::Hook),
            4 => Some(Tone::Tilde),
            5 => Some(Tone::Dot),
            _ => None,
        }
    }
}

/// Letter-shape mark that turns one vowel letter into another (a -> â, o -> ơ ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    Circumflex,
    Horn,
    Breve,
}

/// What a keystroke asks the engine to do to the word being typed.
///
/// Every input convention lowers its keys to this type. The digit codes follow
/// the VNI layout, which the other conventions are defined against:
///
/// ```text
/// 1 acute  2 grave  3 hook  4 tilde  5 dot
/// 6 circumflex  7 horn  8 breve  9 stroke  0 remove diacritics
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccentCommand {
    Tone(Tone),
    Modifier(Modifier),
    /// d -> đ
    Stroke,
    RemoveDiacritics,
    /// The key does not combine; the host inserts it as typed.
    #[default]
    None,
}

impl AccentCommand {
    pub fn from_digit(digit: u8) -> AccentCommand {
        match digit {
            0 => AccentCommand::RemoveDiacritics,
            1..=5 => Tone::from_row(digit as usize).map_or(AccentCommand::None, AccentCommand::Tone),
            6 => AccentCommand::Modifier(Modifier::Circumflex),
            7 => AccentCommand::Modifier(Modifier::Horn),
            8 => AccentCommand::Modifier(Modifier::Breve),
            9 => AccentCommand::Stroke,
            _ => AccentCommand::None,
        }
    }

    pub fn digit(self) -> Option<u8> {
        match self {
            AccentCommand::Tone(tone) => Some(tone.row() as u8),
            AccentCommand::Modifier(Modifier::Circumflex) => Some(6),
            AccentCommand::Modifier(Modifier::Horn) => Some(7),
            AccentCommand::Modifier(Modifier::Breve) => Some(8),
            AccentCommand::Stroke => Some(9),
            AccentCommand::RemoveDiacritics => Some(0),
            AccentCommand::None => None,
        }
    }

    #[inline(always)]
    pub fn is_combining(self) -> bool {
        self != AccentCommand::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_cover_all_ten_commands() {
        for digit in 0..=9u8 {
            let command = AccentCommand::from_digit(digit);
            assert!(command.is_combining());
            assert_eq!(command.digit(), Some(digit));
        }
        assert_eq!(AccentCommand::from_digit(10), AccentCommand::None);
        assert_eq!(AccentCommand::None.digit(), None);
    }

    #[test]
    fn tone_rows_start_after_toneless_row() {
        assert_eq!(Tone::ALL.map(Tone::row), [1, 2, 3, 4, 5]);
        assert_eq!(Tone::from_row(0), None);
    }
}
