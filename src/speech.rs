use crate::logger;
use std::process::{Command, Stdio};
use std::thread;

pub const DEFAULT_LOCALE: &str = "en-GB";
pub const DEFAULT_RATE: f32 = 0.5;
pub const SPEECH_COMMAND: &str = "espeak-ng";

/// espeak-ng speaks 175 words per minute by default, which is what a
/// rate of 0.5 means on the normalised scale.
const MAX_WORDS_PER_MINUTE: f32 = 350.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
    pub rate: f32,
}

impl Utterance {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            rate: DEFAULT_RATE,
        }
    }
}

/// Fire-and-forget speech output. Implementations must return promptly.
pub trait Speaker {
    fn speak(&self, utterance: &Utterance) -> Result<(), String>;
}

#[derive(Debug, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, _utterance: &Utterance) -> Result<(), String> {
        Ok(())
    }
}

/// Maps the normalised 0.0-1.0 rate onto an engine's own range, with 0.5
/// landing on the engine's normal speed.
pub fn engine_rate(rate: f32, min: f32, normal: f32, max: f32) -> f32 {
    let rate = rate.clamp(0.0, 1.0);
    if rate <= DEFAULT_RATE {
        min + (normal - min) * (rate / DEFAULT_RATE)
    } else {
        normal + (max - normal) * ((rate - DEFAULT_RATE) / DEFAULT_RATE)
    }
}

/// `en-GB`, `en_gb` and `EN-gb` all name the same voice language.
pub fn locale_matches(language: &str, locale: &str) -> bool {
    language.replace('_', "-").eq_ignore_ascii_case(&locale.replace('_', "-"))
}

/// Platform synthesizer (AVSpeechSynthesizer, WinRT/SAPI) through the `tts`
/// crate. On Linux that crate needs libspeechd, so espeak-ng is used there.
#[cfg(not(target_os = "linux"))]
pub struct TtsSpeaker {
    tts: tts::Tts,
}

#[cfg(not(target_os = "linux"))]
impl TtsSpeaker {
    pub fn new() -> Result<Self, String> {
        let tts =
            tts::Tts::default().map_err(|e| format!("Failed to start speech engine: {}", e))?;
        Ok(Self { tts })
    }

    fn select_voice(tts: &mut tts::Tts, locale: &str) -> Result<(), String> {
        if !tts.supported_features().voice {
            return Ok(());
        }
        let voices = tts
            .voices()
            .map_err(|e| format!("Failed to list voices: {}", e))?;
        match voices
            .iter()
            .find(|voice| locale_matches(&voice.language().to_string(), locale))
        {
            Some(voice) => tts
                .set_voice(voice)
                .map_err(|e| format!("Failed to select voice {}: {}", voice.name(), e)),
            None => {
                logger::log(&format!("No {} voice installed, using default", locale));
                Ok(())
            }
        }
    }
}

#[cfg(not(target_os = "linux"))]
impl Speaker for TtsSpeaker {
    fn speak(&self, utterance: &Utterance) -> Result<(), String> {
        let mut tts = self.tts.clone();
        Self::select_voice(&mut tts, &utterance.locale)?;

        if tts.supported_features().rate {
            let rate = engine_rate(
                utterance.rate,
                tts.min_rate(),
                tts.normal_rate(),
                tts.max_rate(),
            );
            tts.set_rate(rate)
                .map_err(|e| format!("Failed to set speech rate: {}", e))?;
        }

        tts.speak(utterance.text.as_str(), true)
            .map(|_| ())
            .map_err(|e| format!("Speech engine error: {}", e))
    }
}

#[derive(Debug)]
pub struct EspeakSpeaker {
    program: String,
}

impl Default for EspeakSpeaker {
    fn default() -> Self {
        Self::new(SPEECH_COMMAND)
    }
}

impl EspeakSpeaker {
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }

    pub fn words_per_minute(rate: f32) -> u32 {
        (rate.clamp(0.0, 1.0) * MAX_WORDS_PER_MINUTE).round().max(80.0) as u32
    }

    /// espeak voice names are lower-case (`en-gb`).
    pub fn voice_name(locale: &str) -> String {
        locale.to_lowercase().replace('_', "-")
    }

    pub fn build_command(&self, utterance: &Utterance) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg("-v")
            .arg(Self::voice_name(&utterance.locale))
            .arg("-s")
            .arg(Self::words_per_minute(utterance.rate).to_string())
            .arg("--")
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }
}

impl Speaker for EspeakSpeaker {
    fn speak(&self, utterance: &Utterance) -> Result<(), String> {
        let mut child = self
            .build_command(utterance)
            .spawn()
            .map_err(|e| format!("Failed to start {}: {}", self.program, e))?;

        // Reap the child in the background so the UI thread never waits.
        thread::Builder::new()
            .name("spelling-bee::speech".to_string())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    logger::log(&format!("Speech process exited with {}", status));
                }
                Ok(_) => {}
                Err(e) => logger::log(&format!("Failed to wait for speech process: {}", e)),
            })
            .map(|_| ())
            .map_err(|e| format!("Failed to spawn speech thread: {}", e))
    }
}
