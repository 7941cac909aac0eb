use crate::animation::FeedbackAnimation;
use crate::models::{QuizState, SpellItem, Verdict};
use crate::word_bank::WordBank;
use rand::Rng;

/// Compares a spelling attempt against the canonical lower-case word.
/// The attempt is case-folded but otherwise taken as typed.
pub fn check_spelling(input: &str, word: &str) -> Verdict {
    if input.to_lowercase() == word {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}

impl QuizState {
    pub fn new<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R) -> Self {
        Self::with_item(bank.random_item(rng).clone())
    }

    pub fn with_item(item: SpellItem) -> Self {
        Self {
            current_item: item,
            input_text: String::new(),
            cursor_position: 0,
            verdict: Verdict::Unchecked,
            animation: None,
            status_message: None,
        }
    }

    /// Checks the current input. Only the first call per question counts;
    /// later calls return the verdict already reached.
    pub fn submit_answer(&mut self) -> Verdict {
        if self.verdict.is_checked() {
            return self.verdict;
        }

        self.verdict = check_spelling(&self.input_text, self.current_item.word());
        self.animation = Some(FeedbackAnimation::new(self.verdict == Verdict::Correct));
        self.verdict
    }

    pub fn next_question<R: Rng + ?Sized>(&mut self, bank: &WordBank, rng: &mut R) {
        self.current_item = bank.random_item(rng).clone();
        self.input_text.clear();
        self.cursor_position = 0;
        self.verdict = Verdict::Unchecked;
        self.animation = None;
        self.status_message = None;
    }

    pub fn reveal_text(&self) -> Option<String> {
        match self.verdict {
            Verdict::Incorrect => Some(format!("Answer: {}", self.current_item.word())),
            _ => None,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.verdict.is_checked() {
            return;
        }
        let byte_idx = self.cursor_byte_index();
        self.input_text.insert(byte_idx, c);
        self.cursor_position += 1;
    }

    pub fn delete_char_before_cursor(&mut self) {
        if self.verdict.is_checked() || self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let byte_idx = self.cursor_byte_index();
        self.input_text.remove(byte_idx);
    }

    pub fn move_cursor_left(&mut self) {
        if !self.verdict.is_checked() {
            self.cursor_position = self.cursor_position.saturating_sub(1);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if !self.verdict.is_checked() {
            self.cursor_position = (self.cursor_position + 1).min(self.input_text.chars().count());
        }
    }

    pub fn move_cursor_home(&mut self) {
        if !self.verdict.is_checked() {
            self.cursor_position = 0;
        }
    }

    pub fn move_cursor_end(&mut self) {
        if !self.verdict.is_checked() {
            self.cursor_position = self.input_text.chars().count();
        }
    }

    /// Cursor positions count chars; `String::insert`/`remove` need bytes.
    fn cursor_byte_index(&self) -> usize {
        self.input_text
            .char_indices()
            .nth(self.cursor_position)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input_text.len())
    }
}
