use tracing::{debug, trace};

use crate::compose::Composer;
use crate::config::EngineConfig;
use crate::modes::{InputMethod, resolve_accent};
use crate::shift::{SHIFTING_CONSONANTS, shift_accent};
use crate::table::lower;

/// Caret character meaning "insert the next key literally".
pub const ESCAPE_CHAR: char = '\\';

const VOWELS: &str = "aeiouy";
/// Punctuation that never carries a mark in any convention.
const NON_ACCENTS: &str = "!@#$%&)_={}[]|:;/>,";
pub(crate) const BACKSPACE: char = '\u{8}';

/// What the host should do with the key it just received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Insert the key as typed.
    Verbatim,
    /// Replace the current word with this text; the key is consumed.
    ReplaceWord(String),
    /// Replace the character before the caret; the key is consumed.
    ReplaceChar(char),
}

/// Per-keystroke driver. Hold one engine per editable buffer.
#[derive(Debug, Default, Clone)]
pub struct VietEngine {
    config: EngineConfig,
    composer: Composer,
}

impl VietEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            composer: Composer::new(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        self.config = config;
    }

    pub fn input_method(&self) -> InputMethod {
        self.config.input_method
    }

    pub fn set_input_method(&mut self, method: InputMethod) {
        self.config.input_method = method;
    }

    pub fn set_vietnamese_mode(&mut self, enabled: bool) {
        self.config.vietnamese_mode = enabled;
    }

    pub fn set_smart_mark(&mut self, enabled: bool) {
        self.config.smart_mark = enabled;
    }

    pub fn set_classic_position(&mut self, classic: bool) {
        self.config.classic_position = classic;
    }

    pub fn set_repeat_key_removes_mark(&mut self, enabled: bool) {
        self.config.repeat_key_removes_mark = enabled;
    }

    /// Whether the last key removed a mark by repeating its accent key,
    /// as opposed to an explicit remove-diacritics key.
    pub fn removed_by_repeat(&self) -> bool {
        self.composer.removed_by_repeat()
    }

    /// `removed_by_repeat`, reported only when the host asked for it.
    pub fn consumes_repeat_key(&self) -> bool {
        self.config.repeat_key_removes_mark && self.composer.removed_by_repeat()
    }

    /// Decides what `key` does to `word`.
    ///
    /// `caret` is the character just before the caret and `word` the token
    /// ending there. Nothing here fails: input the engine cannot work with
    /// yields [`KeyOutcome::Verbatim`].
    pub fn process_key(&mut self, key: char, caret: char, word: &str) -> KeyOutcome {
        self.composer.reset();

        if !self.config.vietnamese_mode {
            return KeyOutcome::Verbatim;
        }
        if caret != ESCAPE_CHAR && !caret.is_alphabetic() {
            trace!(caret = %caret, "caret is not a letter");
            return KeyOutcome::Verbatim;
        }
        if key.is_whitespace() || key == BACKSPACE || NON_ACCENTS.contains(key) {
            return KeyOutcome::Verbatim;
        }

        let mut current = word.to_string();
        if self.config.smart_mark && triggers_shift(key) && word.chars().count() >= 2 {
            if let Some(stem) = shift_qu_gi_stem(word, key) {
                debug!(word, replacement = %stem, "accent moved past qu/gi");
                return KeyOutcome::ReplaceWord(stem);
            }
            current = shift_accent(word, key);
            if current != word {
                debug!(word, shifted = %current, "accent shifted");
            }
        }

        let command = resolve_accent(self.config.input_method, key, &current);
        if !command.is_combining() {
            return unchanged(word, current, key);
        }

        if caret == ESCAPE_CHAR {
            return KeyOutcome::ReplaceChar(key);
        }

        if self.config.smart_mark {
            let placed = self.composer.place(&current, command, self.config.classic_position);
            if placed != current {
                debug!(word = %current, ?command, replacement = %placed, "accent placed");
                self.note_repeat_removal();
                return KeyOutcome::ReplaceWord(placed);
            }
        } else {
            let composed = self.composer.compose_char(caret, command);
            if composed != caret {
                debug!(caret = %caret, ?command, replacement = %composed, "accent composed");
                self.note_repeat_removal();
                return KeyOutcome::ReplaceChar(composed);
            }
        }

        unchanged(word, current, key)
    }

    fn note_repeat_removal(&self) {
        if self.consumes_repeat_key() {
            debug!("mark removed by repeated key");
        }
    }
}

#[inline(always)]
fn triggers_shift(key: char) -> bool {
    let key = lower(key);
    SHIFTING_CONSONANTS.contains(key) || VOWELS.contains(key)
}

/// A two-letter `q`/`g` word followed by a vowel: `qú` + `a` -> `quá`.
fn shift_qu_gi_stem(word: &str, key: char) -> Option<String> {
    let mut chars = word.chars();
    let first = lower(chars.next()?);
    if chars.count() != 1 || !matches!(first, 'q' | 'g') || !VOWELS.contains(lower(key)) {
        return None;
    }
    let mut extended = word.to_string();
    extended.push(key);
    let shifted = shift_accent(&extended, key);
    (shifted != extended).then_some(shifted)
}

/// No mark applied: the key goes in as typed, after any accent shift.
fn unchanged(word: &str, current: String, key: char) -> KeyOutcome {
    if current == word {
        KeyOutcome::Verbatim
    } else {
        let mut replacement = current;
        replacement.push(key);
        KeyOutcome::ReplaceWord(replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn replace(text: &str) -> KeyOutcome {
        KeyOutcome::ReplaceWord(text.to_string())
    }

    #[test]
    fn vni_and_telex_agree() {
        let mut telex = VietEngine::new();
        let mut vni = VietEngine::new();
        vni.set_input_method(InputMethod::Vni);
        assert_eq!(telex.process_key('s', 'a', "ba"), replace("bá"));
        assert_eq!(vni.process_key('1', 'a', "ba"), replace("bá"));
    }

    #[test]
    fn repeated_key_removes_mark_and_reports_it() {
        let mut e = VietEngine::new();
        assert_eq!(e.process_key('s', 'á', "má"), replace("ma"));
        assert!(e.removed_by_repeat());
        assert!(!e.consumes_repeat_key());

        e.set_repeat_key_removes_mark(true);
        assert_eq!(e.process_key('s', 'á', "má"), replace("ma"));
        assert!(e.consumes_repeat_key());

        assert_eq!(e.process_key('z', 'á', "má"), replace("ma"));
        assert!(!e.removed_by_repeat());
        assert!(!e.consumes_repeat_key());
    }

    #[test]
    fn flag_is_cleared_by_the_next_key() {
        let mut e = VietEngine::new();
        e.process_key('s', 'á', "má");
        assert!(e.removed_by_repeat());
        e.process_key(' ', 'a', "ma");
        assert!(!e.removed_by_repeat());
    }

    #[test]
    fn vietnamese_mode_off_passes_everything_through() {
        for method in [InputMethod::Telex, InputMethod::Vni, InputMethod::Viqr, InputMethod::Auto] {
            let mut e = VietEngine::new();
            e.set_input_method(method);
            e.set_vietnamese_mode(false);
            for key in ['s', '1', '\'', 'w', 'd', 'n'] {
                assert_eq!(e.process_key(key, 'a', "ba"), KeyOutcome::Verbatim);
            }
        }
    }

    #[test]
    fn gates_on_caret_and_key() {
        let mut e = VietEngine::new();
        assert_eq!(e.process_key('s', ' ', ""), KeyOutcome::Verbatim);
        assert_eq!(e.process_key('s', '1', "a1"), KeyOutcome::Verbatim);
        assert_eq!(e.process_key(' ', 'a', "ba"), KeyOutcome::Verbatim);
        assert_eq!(e.process_key(BACKSPACE, 'a', "ba"), KeyOutcome::Verbatim);
        assert_eq!(e.process_key(',', 'a', "ba"), KeyOutcome::Verbatim);
    }

    #[test]
    fn non_combining_key_is_verbatim() {
        let mut e = VietEngine::new();
        assert_eq!(e.process_key('b', 'a', "ba"), KeyOutcome::Verbatim);
        assert_eq!(e.process_key('a', 'u', "cu"), KeyOutcome::Verbatim);
    }

    #[test]
    fn unusable_modifier_leaves_classic_word_alone() {
        let mut e = VietEngine::new();
        assert_eq!(e.process_key('w', 'y', "thúy"), KeyOutcome::Verbatim);
        assert_eq!(e.process_key('w', 'y', "rũy"), KeyOutcome::Verbatim);
    }

    #[test]
    fn shift_without_accent_appends_key() {
        let mut e = VietEngine::new();
        e.set_classic_position(true);
        assert_eq!(e.process_key('n', 'a', "tóa"), replace("toán"));
    }

    #[test]
    fn qu_stem_with_early_tone() {
        let mut e = VietEngine::new();
        assert_eq!(e.process_key('s', 'u', "qu"), replace("qú"));
        assert_eq!(e.process_key('a', 'ú', "qú"), replace("quá"));
        assert_eq!(e.process_key('s', 'a', "qua"), replace("quá"));
    }

    #[test]
    fn smart_mark_off_composes_caret_char() {
        let mut e = VietEngine::new();
        e.set_smart_mark(false);
        assert_eq!(e.process_key('s', 'o', "ho"), KeyOutcome::ReplaceChar('ó'));
        assert_eq!(e.process_key('s', 'a', "hoa"), KeyOutcome::ReplaceChar('á'));
        assert_eq!(e.process_key('n', 'a', "tóa"), KeyOutcome::Verbatim);
        assert_eq!(e.process_key('s', 'n', "an"), KeyOutcome::Verbatim);
    }

    #[test]
    fn escape_makes_accent_key_literal() {
        let mut e = VietEngine::new();
        assert_eq!(e.process_key('s', ESCAPE_CHAR, "ba\\"), KeyOutcome::ReplaceChar('s'));
        assert_eq!(e.process_key('b', ESCAPE_CHAR, "ba\\"), KeyOutcome::Verbatim);
    }

    #[test]
    fn setters_update_config() {
        let mut e = VietEngine::new();
        assert_eq!(e.input_method(), InputMethod::Telex);
        e.set_input_method(InputMethod::Viqr);
        e.set_classic_position(true);
        assert_eq!(e.input_method(), InputMethod::Viqr);
        assert!(e.config().classic_position);

        e.set_config(EngineConfig::default());
        assert_eq!(e.config(), &EngineConfig::default());
    }

    #[traced_test]
    #[test]
    fn placement_is_logged() {
        let mut e = VietEngine::new();
        e.process_key('j', 'a', "hoa");
        assert!(logs_contain("accent placed"));
    }
}
