//! Local preview rendering.
//!
//! The scheduler only produces [`ScheduledTone`]s; a [`ToneSink`] turns them
//! into sound. [`PcmRenderer`] is the built-in sink: it writes square waves,
//! the waveform of the device buzzer, into a 16-bit mono PCM buffer.

use std::io::Write;

use tracing::debug;

use crate::error::Result;
use crate::types::ScheduledTone;

/// Default sample rate for previews.
pub const DEFAULT_SAMPLE_RATE: u32 = 16000;

/// Consumer of scheduled tones.
pub trait ToneSink {
    /// Handles one tone. Tones arrive in timeline order.
    fn emit(&mut self, tone: &ScheduledTone) -> Result<()>;
}

/// Feeds every tone of a schedule to a sink, in order.
pub fn play<I, S>(tones: I, sink: &mut S) -> Result<usize>
where
    I: IntoIterator<Item = ScheduledTone>,
    S: ToneSink + ?Sized,
{
    let mut count = 0;
    for tone in tones {
        sink.emit(&tone)?;
        count += 1;
    }
    Ok(count)
}

/// Rendering options for previews.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Sample rate in Hz (default: 16000)
    pub sample_rate: u32,
    /// Volume 0.0-1.0 (default: 0.3)
    pub volume: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            volume: 0.3,
        }
    }
}

impl RenderOptions {
    /// Creates options with the specified sample rate.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Creates options with the specified volume.
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = volume.clamp(0.0, 1.0);
        self
    }
}

/// Generates a square wave. A zero frequency yields silence.
pub fn generate_square_wave(freq: f64, samples: usize, sample_rate: u32, volume: f64) -> Vec<i16> {
    let mut data = vec![0i16; samples];
    if freq <= 0.0 || sample_rate == 0 {
        return data;
    }

    let amplitude = (volume.clamp(0.0, 1.0) * i16::MAX as f64) as i16;
    for (i, sample) in data.iter_mut().enumerate() {
        let phase = (i as f64 * freq / sample_rate as f64).fract();
        *sample = if phase < 0.5 { amplitude } else { -amplitude };
    }
    data
}

/// Converts i16 samples to raw PCM bytes (little-endian).
pub fn int16_to_bytes(samples: &[i16]) -> Vec<u8> {
    samples.iter().flat_map(|s| s.to_le_bytes()).collect()
}

/// Writes 16-bit mono PCM as a RIFF/WAVE stream.
pub fn write_wav<W: Write>(mut w: W, samples: &[i16], sample_rate: u32) -> Result<()> {
    let num_channels: u16 = 1;
    let bits_per_sample: u16 = 16;
    let block_align = num_channels * (bits_per_sample / 8);
    let byte_rate = sample_rate * block_align as u32;
    let data_size = samples.len() as u32 * 2;

    // RIFF chunk
    w.write_all(b"RIFF")?;
    w.write_all(&(36 + data_size).to_le_bytes())?;
    w.write_all(b"WAVE")?;

    // fmt subchunk
    w.write_all(b"fmt ")?;
    w.write_all(&16u32.to_le_bytes())?;
    w.write_all(&1u16.to_le_bytes())?; // PCM
    w.write_all(&num_channels.to_le_bytes())?;
    w.write_all(&sample_rate.to_le_bytes())?;
    w.write_all(&byte_rate.to_le_bytes())?;
    w.write_all(&block_align.to_le_bytes())?;
    w.write_all(&bits_per_sample.to_le_bytes())?;

    // data subchunk
    w.write_all(b"data")?;
    w.write_all(&data_size.to_le_bytes())?;
    w.write_all(&int16_to_bytes(samples))?;
    w.flush()?;
    Ok(())
}

/// Square-wave sink that renders tones into a PCM buffer.
///
/// Sample positions are measured from `origin`, so a tone starting at
/// `origin + 0.5` lands half a second into the buffer. Silent tones write no
/// samples but still extend the buffer to their stop offset.
#[derive(Debug, Clone)]
pub struct PcmRenderer {
    opts: RenderOptions,
    origin: f64,
    samples: Vec<i16>,
}

impl PcmRenderer {
    /// Creates a renderer for a timeline that starts at `origin` seconds.
    pub fn new(opts: RenderOptions, origin: f64) -> Self {
        Self {
            opts,
            origin,
            samples: Vec::new(),
        }
    }

    fn sample_at(&self, offset: f64) -> usize {
        let seconds = (offset - self.origin).max(0.0);
        (seconds * self.opts.sample_rate as f64).round() as usize
    }

    /// Rendered samples so far.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Rendered length in seconds.
    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.opts.sample_rate as f64
    }

    pub fn sample_rate(&self) -> u32 {
        self.opts.sample_rate
    }

    /// Consumes the renderer and returns its samples.
    pub fn into_samples(self) -> Vec<i16> {
        self.samples
    }

    /// Writes the rendered audio as WAV.
    pub fn write_wav<W: Write>(&self, w: W) -> Result<()> {
        write_wav(w, &self.samples, self.opts.sample_rate)
    }
}

impl ToneSink for PcmRenderer {
    fn emit(&mut self, tone: &ScheduledTone) -> Result<()> {
        let start = self.sample_at(tone.start);
        let stop = self.sample_at(tone.stop).max(start);
        if self.samples.len() < stop {
            self.samples.resize(stop, 0);
        }

        if tone.is_silent() {
            return Ok(());
        }

        let wave = generate_square_wave(
            tone.frequency,
            stop - start,
            self.opts.sample_rate,
            self.opts.volume,
        );
        self.samples[start..stop].copy_from_slice(&wave);
        debug!(freq = tone.frequency, start, stop, "rendered tone");
        Ok(())
    }
}
