//! Alarm playback.
//!
//! The alarm asset is read and decode-checked once at startup; a missing or
//! undecodable file is a fatal startup error, there is no degraded mode. Each
//! ring decodes from the in-memory copy and loops indefinitely on a fresh
//! rodio sink until the user acknowledges the notification.

use crate::error::{PomoglowError, Result};
use log::info;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// Default alarm asset path, relative to the working directory.
pub const DEFAULT_ALARM_PATH: &str = "alarm.mp3";

/// A looping alarm bound to the default audio output device.
pub struct Alarm {
    // Keep the stream alive for as long as playback may happen.
    _stream: OutputStream,
    handle: OutputStreamHandle,
    data: Vec<u8>,
    sink: Option<Sink>,
}

impl std::fmt::Debug for Alarm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alarm")
            .field("data_len", &self.data.len())
            .field("ringing", &self.is_ringing())
            .finish_non_exhaustive()
    }
}

impl Alarm {
    /// Load and decode-check the alarm asset, then open the output device.
    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .map_err(|e| PomoglowError::AlarmAsset(format!("{}: {}", path.display(), e)))?;

        // Fail at startup rather than at first ring.
        Decoder::new(Cursor::new(data.clone()))
            .map_err(|e| PomoglowError::AlarmAsset(format!("{}: {}", path.display(), e)))?;

        let (stream, handle) = OutputStream::try_default()
            .map_err(|e| PomoglowError::AudioDevice(e.to_string()))?;

        info!("Alarm asset loaded from {}", path.display());
        Ok(Self {
            _stream: stream,
            handle,
            data,
            sink: None,
        })
    }

    /// Start the looping alarm. Ringing again while already ringing is a no-op.
    pub fn ring(&mut self) -> Result<()> {
        if self.is_ringing() {
            return Ok(());
        }

        let source = Decoder::new(Cursor::new(self.data.clone()))
            .map_err(|e| PomoglowError::AlarmAsset(e.to_string()))?
            .repeat_infinite();
        let sink = Sink::try_new(&self.handle)
            .map_err(|e| PomoglowError::AudioDevice(e.to_string()))?;
        sink.append(source);
        self.sink = Some(sink);
        Ok(())
    }

    /// Stop the alarm if it is ringing.
    pub fn silence(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    /// Whether the alarm is currently looping.
    pub fn is_ringing(&self) -> bool {
        self.sink.as_ref().is_some_and(|sink| !sink.empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Playback needs a real audio device, so tests only cover the fatal
    // load paths, which fail before the device is opened.

    #[test]
    fn test_load_missing_file_is_fatal() {
        let err = Alarm::load(Path::new("/no/such/alarm.mp3")).unwrap_err();
        assert!(matches!(err, PomoglowError::AlarmAsset(_)));
    }

    #[test]
    fn test_load_undecodable_file_is_fatal() {
        let dir = std::env::temp_dir();
        let path = dir.join("pomoglow_not_audio.mp3");
        fs::write(&path, b"definitely not an mp3").unwrap();

        let err = Alarm::load(&path).unwrap_err();
        assert!(matches!(err, PomoglowError::AlarmAsset(_)));

        let _ = fs::remove_file(&path);
    }
}
