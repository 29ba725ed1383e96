//! Prefix-matching state for the current typing target.
//!
//! Pure `(target_word, typed_prefix)` state machine, no ECS dependency.
//! The arcade rule applies: any wrong character resets the whole prefix.
//! Backspace is the one editing exception.

use wordstorm_core::enums::LetterState;

/// Result of feeding one character to the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Correct next character; prefix grew.
    Advanced,
    /// Correct final character; the word is complete.
    Completed,
    /// Wrong character; prefix reset to empty.
    Rejected,
    /// No target word is set; input ignored.
    NoTarget,
}

/// Typing progress against the current target's word.
#[derive(Debug, Clone, Default)]
pub struct TypingMatcher {
    target_word: Option<String>,
    typed: String,
}

impl TypingMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the matcher at a new word, dropping any prior progress.
    pub fn retarget(&mut self, word: &str) {
        self.target_word = Some(word.to_string());
        self.typed.clear();
    }

    /// Drop the target entirely (e.g. the enemy was released underneath us).
    pub fn clear_target(&mut self) {
        self.target_word = None;
        self.typed.clear();
    }

    pub fn target_word(&self) -> Option<&str> {
        self.target_word.as_deref()
    }

    /// Feed one typed character.
    pub fn on_char(&mut self, ch: char) -> KeyOutcome {
        let Some(word) = &self.target_word else {
            return KeyOutcome::NoTarget;
        };
        let expected = word.chars().nth(self.typed.chars().count());
        match expected {
            Some(next) if next == ch => {
                self.typed.push(ch);
                if self.typed == *word {
                    KeyOutcome::Completed
                } else {
                    KeyOutcome::Advanced
                }
            }
            // Wrong char, or extra input past a completed word: full reset.
            _ => {
                self.typed.clear();
                KeyOutcome::Rejected
            }
        }
    }

    /// Remove the last typed character, if any.
    pub fn backspace(&mut self) {
        let _ = self.typed.pop();
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn typed_len(&self) -> usize {
        self.typed.chars().count()
    }

    /// Per-letter color states for the renderer.
    pub fn letter_states(&self) -> Vec<LetterState> {
        let Some(word) = &self.target_word else {
            return Vec::new();
        };
        let typed = self.typed_len();
        word.chars()
            .enumerate()
            .map(|(i, _)| {
                if i < typed {
                    LetterState::Typed
                } else {
                    LetterState::Untyped
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_word_completes_exactly_once_on_the_last_char() {
        let mut matcher = TypingMatcher::new();
        matcher.retarget("wizard");
        let mut completions = 0;
        for (i, ch) in "wizard".chars().enumerate() {
            match matcher.on_char(ch) {
                KeyOutcome::Completed => {
                    completions += 1;
                    assert_eq!(i, 5, "completion must fire on the 6th character");
                }
                KeyOutcome::Advanced => assert!(i < 5),
                other => panic!("unexpected outcome {other:?} at char {i}"),
            }
        }
        assert_eq!(completions, 1);
    }

    #[test]
    fn wrong_char_resets_the_whole_prefix() {
        let mut matcher = TypingMatcher::new();
        matcher.retarget("magic");
        assert_eq!(matcher.on_char('m'), KeyOutcome::Advanced);
        assert_eq!(matcher.on_char('x'), KeyOutcome::Rejected);
        assert_eq!(matcher.typed(), "", "reset must be immediate and full");
    }

    #[test]
    fn backspace_pops_one_char() {
        let mut matcher = TypingMatcher::new();
        matcher.retarget("ghost");
        let _ = matcher.on_char('g');
        let _ = matcher.on_char('h');
        matcher.backspace();
        assert_eq!(matcher.typed(), "g");
        // Progress resumes from the shortened prefix.
        assert_eq!(matcher.on_char('h'), KeyOutcome::Advanced);
    }

    #[test]
    fn backspace_on_empty_is_harmless() {
        let mut matcher = TypingMatcher::new();
        matcher.retarget("bat");
        matcher.backspace();
        assert_eq!(matcher.typed(), "");
    }

    #[test]
    fn retarget_discards_progress_unconditionally() {
        let mut matcher = TypingMatcher::new();
        matcher.retarget("phantom");
        let _ = matcher.on_char('p');
        let _ = matcher.on_char('h');
        matcher.retarget("raven");
        assert_eq!(matcher.typed(), "");
        assert_eq!(matcher.target_word(), Some("raven"));
    }

    #[test]
    fn input_without_target_is_ignored() {
        let mut matcher = TypingMatcher::new();
        assert_eq!(matcher.on_char('a'), KeyOutcome::NoTarget);
        assert_eq!(matcher.typed(), "");
    }

    #[test]
    fn letter_states_track_progress() {
        let mut matcher = TypingMatcher::new();
        matcher.retarget("orb");
        let _ = matcher.on_char('o');
        assert_eq!(
            matcher.letter_states(),
            vec![LetterState::Typed, LetterState::Untyped, LetterState::Untyped]
        );
    }

    #[test]
    fn single_char_word_completes_immediately() {
        let mut matcher = TypingMatcher::new();
        matcher.retarget("x");
        assert_eq!(matcher.on_char('x'), KeyOutcome::Completed);
    }
}
