use crate::animation::FeedbackAnimation;

/// A single quiz entry: the word to spell and the picture shown for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellItem {
    word: String,
    image: String,
}

impl SpellItem {
    /// The word is stored lower-cased so answers can be compared after a
    /// single case fold on the input side.
    pub fn new(word: &str, image: &str) -> Self {
        Self {
            word: word.to_lowercase(),
            image: image.to_string(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn image(&self) -> &str {
        &self.image
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    #[default]
    Unchecked,
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn is_checked(self) -> bool {
        self != Verdict::Unchecked
    }
}

#[derive(Debug, Clone)]
pub struct QuizState {
    pub current_item: SpellItem,
    pub input_text: String,
    pub cursor_position: usize,
    pub verdict: Verdict,
    pub animation: Option<FeedbackAnimation>,
    pub status_message: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Quiz,
    QuitConfirm,
    Exit,
}
