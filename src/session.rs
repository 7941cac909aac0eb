use crate::logger;
use crate::models::{AppState, QuizState, Verdict};
use crate::speech::{Speaker, Utterance};
use crate::word_bank::WordBank;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

pub const SPEECH_UNAVAILABLE: &str = "Speech unavailable (is espeak-ng installed?)";

pub fn handle_quiz_input<R: Rng + ?Sized>(
    state: &mut QuizState,
    key: KeyEvent,
    app_state: &mut AppState,
    bank: &WordBank,
    rng: &mut R,
    speaker: &dyn Speaker,
) {
    // AltGr arrives as Ctrl+Alt on Windows and still types a character.
    if key.modifiers.contains(KeyModifiers::CONTROL) && !key.modifiers.contains(KeyModifiers::ALT)
    {
        if key.code == KeyCode::Char('c') {
            *app_state = AppState::Exit;
        }
        return;
    }

    match key.code {
        KeyCode::Esc => *app_state = AppState::QuitConfirm,
        KeyCode::Tab => speak_current_word(state, speaker),
        KeyCode::Enter => {
            if state.verdict.is_checked() {
                state.next_question(bank, rng);
            } else {
                let verdict = state.submit_answer();
                logger::log(&format!(
                    "Checked {:?} against '{}': {:?}",
                    state.input_text,
                    state.current_item.word(),
                    verdict
                ));
            }
        }
        KeyCode::Left => state.move_cursor_left(),
        KeyCode::Right => state.move_cursor_right(),
        KeyCode::Home => state.move_cursor_home(),
        KeyCode::End => state.move_cursor_end(),
        KeyCode::Backspace => state.delete_char_before_cursor(),
        KeyCode::Char(c) => state.insert_char(c),
        _ => {}
    }
}

pub fn handle_quit_confirm_input(key: KeyEvent, app_state: &mut AppState) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => *app_state = AppState::Exit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            *app_state = AppState::Exit
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => *app_state = AppState::Quiz,
        _ => {}
    }
}

/// Advances the feedback animation. Returns true when a redraw is needed.
pub fn tick(state: &mut QuizState) -> bool {
    match state.animation.as_mut() {
        Some(animation) if state.verdict != Verdict::Unchecked => animation.tick(),
        _ => false,
    }
}

fn speak_current_word(state: &mut QuizState, speaker: &dyn Speaker) {
    let utterance = Utterance::new(state.current_item.word());
    logger::log(&format!("Speaking '{}'", utterance.text));

    match speaker.speak(&utterance) {
        Ok(()) => state.status_message = None,
        Err(e) => {
            logger::log(&format!("Speech error: {}", e));
            state.status_message = Some(SPEECH_UNAVAILABLE.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SpellItem;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSpeaker {
        spoken: RefCell<Vec<Utterance>>,
        fail: bool,
    }

    impl Speaker for RecordingSpeaker {
        fn speak(&self, utterance: &Utterance) -> Result<(), String> {
            if self.fail {
                return Err("no engine".to_string());
            }
            self.spoken.borrow_mut().push(utterance.clone());
            Ok(())
        }
    }

    struct Harness {
        state: QuizState,
        app_state: AppState,
        bank: WordBank,
        rng: StdRng,
        speaker: RecordingSpeaker,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: QuizState::with_item(SpellItem::new("cat", "cat")),
                app_state: AppState::Quiz,
                bank: WordBank::new(vec![
                    SpellItem::new("cat", "cat"),
                    SpellItem::new("dog", "dog"),
                ])
                .unwrap(),
                rng: StdRng::seed_from_u64(9),
                speaker: RecordingSpeaker::default(),
            }
        }

        fn press(&mut self, code: KeyCode) {
            self.press_with(code, KeyModifiers::NONE);
        }

        fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
            handle_quiz_input(
                &mut self.state,
                KeyEvent::new(code, modifiers),
                &mut self.app_state,
                &self.bank,
                &mut self.rng,
                &self.speaker,
            );
        }

        fn type_text(&mut self, text: &str) {
            for c in text.chars() {
                self.press(KeyCode::Char(c));
            }
        }
    }

    #[test]
    fn test_typing_and_enter_checks_answer() {
        let mut h = Harness::new();
        h.type_text("CAT");
        assert_eq!(h.state.input_text, "CAT");
        h.press(KeyCode::Enter);
        assert_eq!(h.state.verdict, Verdict::Correct);
    }

    #[test]
    fn test_second_enter_moves_to_next_question() {
        let mut h = Harness::new();
        h.type_text("dog");
        h.press(KeyCode::Enter);
        assert_eq!(h.state.verdict, Verdict::Incorrect);
        assert_eq!(h.state.reveal_text().as_deref(), Some("Answer: cat"));

        h.press(KeyCode::Enter);
        assert_eq!(h.state.verdict, Verdict::Unchecked);
        assert!(h.state.input_text.is_empty());
    }

    #[test]
    fn test_empty_enter_is_an_attempt() {
        let mut h = Harness::new();
        h.press(KeyCode::Enter);
        assert_eq!(h.state.verdict, Verdict::Incorrect);
    }

    #[test]
    fn test_typing_ignored_after_check() {
        let mut h = Harness::new();
        h.type_text("ca");
        h.press(KeyCode::Enter);
        h.type_text("t");
        h.press(KeyCode::Backspace);
        assert_eq!(h.state.input_text, "ca");
    }

    #[test]
    fn test_tab_speaks_current_word() {
        let mut h = Harness::new();
        h.press(KeyCode::Tab);
        h.press(KeyCode::Enter);
        h.press(KeyCode::Tab);

        let spoken = h.speaker.spoken.borrow();
        assert_eq!(spoken.len(), 2);
        assert_eq!(spoken[0], Utterance::new("cat"));
        assert_eq!(spoken[0].locale, "en-GB");
        assert_eq!(spoken[0].rate, 0.5);
        assert!(h.state.input_text.is_empty());
    }

    #[test]
    fn test_speech_failure_sets_status_message() {
        let mut h = Harness::new();
        h.speaker.fail = true;
        h.press(KeyCode::Tab);
        assert_eq!(h.state.status_message.as_deref(), Some(SPEECH_UNAVAILABLE));
        assert_eq!(h.app_state, AppState::Quiz);
    }

    #[test]
    fn test_escape_opens_quit_confirmation() {
        let mut h = Harness::new();
        h.press(KeyCode::Esc);
        assert_eq!(h.app_state, AppState::QuitConfirm);

        handle_quit_confirm_input(KeyEvent::from(KeyCode::Char('n')), &mut h.app_state);
        assert_eq!(h.app_state, AppState::Quiz);

        h.press(KeyCode::Esc);
        handle_quit_confirm_input(KeyEvent::from(KeyCode::Char('y')), &mut h.app_state);
        assert_eq!(h.app_state, AppState::Exit);
    }

    #[test]
    fn test_ctrl_c_exits_without_typing() {
        let mut h = Harness::new();
        h.press_with(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(h.app_state, AppState::Exit);
        assert!(h.state.input_text.is_empty());
    }

    #[test]
    fn test_shifted_letters_are_typed() {
        let mut h = Harness::new();
        h.press_with(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(h.state.input_text, "C");
    }

    #[test]
    fn test_altgr_letters_are_typed() {
        let mut h = Harness::new();
        h.press_with(
            KeyCode::Char('ą'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        );
        h.press_with(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        );
        assert_eq!(h.state.input_text, "ą@");
        assert_eq!(h.app_state, AppState::Quiz);
    }

    #[test]
    fn test_other_ctrl_keys_are_ignored() {
        let mut h = Harness::new();
        h.press_with(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert!(h.state.input_text.is_empty());
        assert_eq!(h.app_state, AppState::Quiz);
    }

    #[test]
    fn test_tick_only_runs_after_check() {
        let mut h = Harness::new();
        assert!(!tick(&mut h.state));
        h.press(KeyCode::Enter);
        assert!(tick(&mut h.state));
    }
}
