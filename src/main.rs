use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use spelling_bee::{
    AppState, EspeakSpeaker, QuizState, SilentSpeaker, Speaker, TICK_RATE, WordBank,
    draw_quit_confirmation, draw_quiz, handle_quit_confirm_input, handle_quiz_input,
    load_word_bank, logger, tick,
};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "Usage: spelling-bee [--mute] [WORDS.csv]";

#[derive(Debug, Default, PartialEq)]
struct Options {
    mute: bool,
    words_path: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options, String> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "--mute" => options.mute = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}", flag)),
            path => {
                if options.words_path.is_some() {
                    return Err(format!("Unexpected argument: {}", path));
                }
                options.words_path = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

fn main() -> ExitCode {
    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    logger::init();

    let bank = match &options.words_path {
        Some(path) => match load_word_bank(path) {
            Ok(bank) => {
                logger::log(&format!(
                    "Loaded {} words from {}",
                    bank.len(),
                    path.display()
                ));
                bank
            }
            Err(e) => {
                eprintln!("Failed to load {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let bank = WordBank::builtin();
            logger::log(&format!("Using built-in word bank ({} words)", bank.len()));
            bank
        }
    };

    let speaker = select_speaker(options.mute);

    match run(&bank, speaker.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log(&format!("Terminal error: {}", e));
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(not(target_os = "linux"))]
fn select_speaker(mute: bool) -> Box<dyn Speaker> {
    if mute {
        return Box::new(SilentSpeaker);
    }
    match spelling_bee::TtsSpeaker::new() {
        Ok(speaker) => Box::new(speaker),
        Err(e) => {
            logger::log(&format!(
                "{}, falling back to {}",
                e,
                spelling_bee::speech::SPEECH_COMMAND
            ));
            Box::new(EspeakSpeaker::default())
        }
    }
}

#[cfg(target_os = "linux")]
fn select_speaker(mute: bool) -> Box<dyn Speaker> {
    if mute {
        Box::new(SilentSpeaker)
    } else {
        Box::new(EspeakSpeaker::default())
    }
}

/// Leaves raw mode and the alternate screen. Each step runs even when an
/// earlier one fails.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = execute!(io::stdout(), Show);
}

/// Restores the terminal when dropped, whichever way `run` exits.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));
}

fn run(bank: &WordBank, speaker: &dyn Speaker) -> io::Result<()> {
    install_panic_hook();
    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    event_loop(&mut terminal, bank, speaker)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    bank: &WordBank,
    speaker: &dyn Speaker,
) -> io::Result<()> {
    let mut rng = rand::thread_rng();
    let mut app_state = AppState::Quiz;
    let mut state = QuizState::new(bank, &mut rng);
    let mut needs_redraw = true;

    while app_state != AppState::Exit {
        if needs_redraw {
            terminal.draw(|f| {
                draw_quiz(f, &state, bank.len());
                if app_state == AppState::QuitConfirm {
                    draw_quit_confirmation(f);
                }
            })?;
            needs_redraw = false;
        }

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match app_state {
                        AppState::Quiz => handle_quiz_input(
                            &mut state,
                            key,
                            &mut app_state,
                            bank,
                            &mut rng,
                            speaker,
                        ),
                        AppState::QuitConfirm => handle_quit_confirm_input(key, &mut app_state),
                        AppState::Exit => {}
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => needs_redraw = true,
                _ => {}
            }
        } else if tick(&mut state) {
            needs_redraw = true;
        }
    }

    logger::log("Exiting");
    Ok(())
}
