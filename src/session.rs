use crate::config::EngineConfig;
use crate::engine::{BACKSPACE, KeyOutcome, VietEngine};

/// A minimal host: keeps the word being typed and applies every
/// [`KeyOutcome`] to it.
#[derive(Debug, Default, Clone)]
pub struct InputSession {
    engine: VietEngine,
    word: String,
    out: String,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            engine: VietEngine::with_config(config),
            word: String::with_capacity(16),
            out: String::with_capacity(16),
        }
    }

    pub fn clear(&mut self) {
        self.word.clear();
        self.out.clear();
    }

    /// The word currently being composed.
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn engine(&self) -> &VietEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut VietEngine {
        &mut self.engine
    }

    /// Types one key. Returns the current word, or the finished word plus
    /// the whitespace when `key` ends it.
    pub fn feed(&mut self, key: char) -> &str {
        self.out.clear();

        if key.is_whitespace() {
            self.out.push_str(&self.word);
            self.out.push(key);
            self.word.clear();
            return &self.out;
        }
        if key == BACKSPACE {
            self.word.pop();
            self.out.push_str(&self.word);
            return &self.out;
        }

        let caret = self.word.chars().last().unwrap_or(' ');
        match self.engine.process_key(key, caret, &self.word) {
            KeyOutcome::Verbatim => self.word.push(key),
            KeyOutcome::ReplaceWord(word) => self.word = word,
            KeyOutcome::ReplaceChar(ch) => {
                self.word.pop();
                self.word.push(ch);
            }
        }
        self.out.push_str(&self.word);
        &self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_commits_word() {
        let mut s = InputSession::new();
        for key in "vieejt".chars() {
            s.feed(key);
        }
        assert_eq!(s.word(), "việt");
        assert_eq!(s.feed(' '), "việt ");
        assert_eq!(s.word(), "");
        assert_eq!(s.feed('a'), "a");
    }

    #[test]
    fn backspace_drops_last_char() {
        let mut s = InputSession::new();
        for key in "tos".chars() {
            s.feed(key);
        }
        assert_eq!(s.feed(BACKSPACE), "t");
        assert_eq!(s.feed(BACKSPACE), "");
        assert_eq!(s.feed(BACKSPACE), "");
    }

    #[test]
    fn clear_forgets_word() {
        let mut s = InputSession::new();
        s.feed('a');
        s.feed('a');
        s.clear();
        assert_eq!(s.word(), "");
        assert_eq!(s.feed('s'), "s");
    }

    #[test]
    fn engine_is_reconfigurable() {
        let mut s = InputSession::new();
        s.engine_mut().set_input_method(crate::InputMethod::Vni);
        s.feed('a');
        assert_eq!(s.feed('1'), "á");
        assert_eq!(s.engine().input_method(), crate::InputMethod::Vni);
    }
}
