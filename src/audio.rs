//! Short sine cues for start, jump, score and crash.
//!
//! Audio is best effort: a missing output device or a failed sink only gets
//! logged, the game never sees it.

use std::time::Duration;

use log::{debug, info, warn};
use rodio::{OutputStream, OutputStreamHandle, Sink, buffer::SamplesBuffer};

pub const SAMPLE_RATE: u32 = 44_100;

const PEAK_GAIN: f32 = 0.3;
const FLOOR_GAIN: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency: f32,
    pub duration: Duration,
}

impl Tone {
    pub const START: Tone = Tone::new(600.0, 200);
    pub const JUMP: Tone = Tone::new(400.0, 100);
    pub const SCORE: Tone = Tone::new(800.0, 100);
    pub const FAIL: Tone = Tone::new(200.0, 300);

    const fn new(frequency: f32, millis: u64) -> Self {
        Self {
            frequency,
            duration: Duration::from_millis(millis),
        }
    }

    /// Renders the tone as mono samples: a sine whose gain falls
    /// exponentially from 0.3 to 0.01 over the tone's duration.
    pub fn synthesize(self, sample_rate: u32) -> Vec<f32> {
        use fundsp::prelude32::*;

        let secs = self.duration.as_secs_f32();
        if secs <= 0.0 || sample_rate == 0 {
            return Vec::new();
        }
        let decay = (FLOOR_GAIN / PEAK_GAIN).ln() / secs;
        let mut node =
            sine_hz(self.frequency) * envelope(move |t: f32| PEAK_GAIN * (decay * t).exp());
        node.set_sample_rate(sample_rate as f64);

        let len = (secs * sample_rate as f32).round() as usize;
        (0..len).map(|_| node.get_mono()).collect()
    }
}

/// Anything that can play a tone.
pub trait ToneSink {
    fn play(&mut self, tone: Tone);
}

/// Used when no output device is available.
pub struct SilentSink;

impl ToneSink for SilentSink {
    fn play(&mut self, _tone: Tone) {}
}

pub struct RodioSink {
    // Dropping the stream stops all playback.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl RodioSink {
    pub fn open() -> Result<Self, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Self {
            _stream: stream,
            handle,
        })
    }
}

impl ToneSink for RodioSink {
    fn play(&mut self, tone: Tone) {
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(err) => {
                debug!("Dropping {} Hz tone: {err}", tone.frequency);
                return;
            }
        };
        sink.append(SamplesBuffer::new(1, SAMPLE_RATE, tone.synthesize(SAMPLE_RATE)));
        sink.detach(); // Play in background
    }
}

/// Opens the default output device, falling back to silence.
pub fn open_default_sink() -> Box<dyn ToneSink> {
    match RodioSink::open() {
        Ok(sink) => {
            info!("Audio output opened");
            Box::new(sink)
        }
        Err(err) => {
            warn!("No audio output, continuing without sound: {err}");
            Box::new(SilentSink)
        }
    }
}

/// A sink plus the player's mute toggle.
pub struct Audio {
    sink: Box<dyn ToneSink>,
    muted: bool,
}

impl Audio {
    pub fn new(sink: Box<dyn ToneSink>, muted: bool) -> Self {
        Self { sink, muted }
    }

    pub fn silent() -> Self {
        Self::new(Box::new(SilentSink), false)
    }

    pub fn play(&mut self, tone: Tone) {
        if !self.muted {
            self.sink.play(tone);
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flips the mute flag and returns the new value.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}
