//! Phase-completion alarm.
//!
//! Playback is fire-and-forget on a dedicated thread holding the non-Send
//! rodio objects. Failures (no output device, unreadable sound file) are
//! logged and swallowed; an alarm that cannot sound must never fail a tick.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{Decoder, OutputStream, Sink};

/// Play the completion alarm without blocking the caller.
///
/// With `custom_sound` set, that file is decoded and played; otherwise a
/// short synthesized double beep is used.
pub fn play(custom_sound: Option<PathBuf>) {
    let result = thread::Builder::new().name("alarm".to_string()).spawn(move || {
        if let Err(e) = play_blocking(custom_sound.as_deref()) {
            tracing::warn!(error = %e, "alarm playback failed");
        }
    });
    if let Err(e) = result {
        tracing::warn!(error = %e, "failed to spawn alarm thread");
    }
}

fn play_blocking(custom_sound: Option<&Path>) -> Result<(), String> {
    let (_stream, handle) =
        OutputStream::try_default().map_err(|e| format!("no audio output: {e}"))?;
    let sink = Sink::try_new(&handle).map_err(|e| format!("cannot create sink: {e}"))?;

    match custom_sound {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("cannot open {}: {e}", path.display()))?;
            let source = Decoder::new(BufReader::new(file))
                .map_err(|e| format!("cannot decode {}: {e}", path.display()))?;
            sink.append(source);
        }
        None => {
            sink.append(beep());
            sink.append(silence(Duration::from_millis(80)));
            sink.append(beep());
        }
    }

    sink.sleep_until_end();
    Ok(())
}

fn beep() -> impl Source<Item = f32> {
    SineWave::new(880.0)
        .take_duration(Duration::from_millis(180))
        .amplify(0.4)
}

fn silence(duration: Duration) -> impl Source<Item = f32> {
    SineWave::new(0.0).take_duration(duration).amplify(0.0)
}
