pub mod animation;
pub mod csv;
pub mod logger;
pub mod models;
pub mod quiz;
pub mod session;
pub mod speech;
pub mod ui;
pub mod utils;
pub mod word_bank;


// Re-exports for convenience
pub use animation::{FeedbackAnimation, TICK_RATE};
pub use csv::load_word_bank;
pub use models::{AppState, QuizState, SpellItem, Verdict};
pub use quiz::check_spelling;
pub use session::{handle_quit_confirm_input, handle_quiz_input, tick};
#[cfg(not(target_os = "linux"))]
pub use speech::TtsSpeaker;
pub use speech::{EspeakSpeaker, SilentSpeaker, Speaker, Utterance};
pub use ui::{draw_quit_confirmation, draw_quiz};
pub use word_bank::WordBank;
