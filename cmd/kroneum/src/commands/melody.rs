//! Melody commands.
//!
//! A melody comes either from a built-in preset or from a YAML/JSON file
//! given with `-f`.

use std::fs::File;
use std::io::BufWriter;

use anyhow::Context as _;
use clap::{Args, Subcommand};
use serde::Serialize;
use tracing::info;

use kroneum_cli::input::resolve_melody;
use kroneum_cli::output::{print_info, print_success};
use kroneum_melody::pcm::{PcmRenderer, RenderOptions, DEFAULT_SAMPLE_RATE, play};
use kroneum_melody::{ALL_PRESETS, Melody, ScheduledTone, WireNote, plan, schedule_local, to_wire_encoding};

use super::{find_context, get_context, output_result, print_verbose, resolve_scale};
use crate::Cli;
use crate::device::DeviceClient;

/// Buzzer melodies.
///
/// Inspect presets, schedule and encode melodies, render previews and play
/// them on the device.
#[derive(Args)]
pub struct MelodyCommand {
    #[command(subcommand)]
    command: MelodySubcommand,
}

#[derive(Subcommand)]
enum MelodySubcommand {
    /// List built-in presets
    List,

    /// Schedule a melody on the local timeline
    Schedule {
        /// Preset id (ignored when -f is given)
        preset: Option<String>,
        /// Timeline origin in seconds
        #[arg(long, default_value_t = 0.0)]
        origin: f64,
    },

    /// Encode a melody for the device
    Wire {
        /// Preset id (ignored when -f is given)
        preset: Option<String>,
        /// Duration scale factor (default: context, then 1.0)
        #[arg(long)]
        scale: Option<f64>,
    },

    /// Render a square-wave WAV preview
    Render {
        /// Preset id (ignored when -f is given)
        preset: Option<String>,
        /// Sample rate in Hz
        #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
        sample_rate: u32,
        /// Volume 0.0-1.0
        #[arg(long, default_value_t = 0.3)]
        volume: f64,
    },

    /// Play a melody on the device
    Play {
        /// Preset id (ignored when -f is given)
        preset: Option<String>,
        /// Duration scale factor (default: context, then 1.0)
        #[arg(long)]
        scale: Option<f64>,
        /// Also write a WAV preview to this path
        #[arg(long)]
        preview: Option<String>,
    },
}

#[derive(Serialize)]
struct PresetSummary {
    id: &'static str,
    name: &'static str,
    events: usize,
    beats: f64,
    seconds: f64,
}

#[derive(Serialize)]
struct ScheduleResult {
    origin: f64,
    end: f64,
    tones: Vec<ScheduledTone>,
}

impl MelodyCommand {
    pub async fn run(&self, cli: &Cli) -> anyhow::Result<()> {
        match &self.command {
            MelodySubcommand::List => self.list(cli),
            MelodySubcommand::Schedule { preset, origin } => self.schedule(cli, preset, *origin),
            MelodySubcommand::Wire { preset, scale } => self.wire(cli, preset, *scale),
            MelodySubcommand::Render {
                preset,
                sample_rate,
                volume,
            } => self.render(cli, preset, *sample_rate, *volume),
            MelodySubcommand::Play {
                preset,
                scale,
                preview,
            } => self.play(cli, preset, *scale, preview.as_deref()).await,
        }
    }

    fn list(&self, cli: &Cli) -> anyhow::Result<()> {
        let mut summaries = Vec::with_capacity(ALL_PRESETS.len());
        for preset in ALL_PRESETS {
            let melody = preset.melody()?;
            summaries.push(PresetSummary {
                id: preset.id,
                name: preset.name,
                events: melody.len(),
                beats: melody.total_beats(),
                seconds: melody.duration(),
            });
        }
        output_result(cli, &summaries)
    }

    fn schedule(&self, cli: &Cli, preset: &Option<String>, origin: f64) -> anyhow::Result<()> {
        let melody = load_melody(cli, preset)?;
        let mut schedule = schedule_local(&melody, origin);
        let tones: Vec<ScheduledTone> = schedule.by_ref().collect();

        output_result(
            cli,
            &ScheduleResult {
                origin,
                end: schedule.cursor(),
                tones,
            },
        )
    }

    fn wire(&self, cli: &Cli, preset: &Option<String>, scale: Option<f64>) -> anyhow::Result<()> {
        let melody = load_melody(cli, preset)?;
        let ctx = find_context(cli)?;
        let scale = resolve_scale(scale, ctx.as_ref());
        print_verbose(cli, &format!("Scale factor: {}", scale));

        let notes: Vec<WireNote> = to_wire_encoding(&melody, scale)?;
        output_result(cli, &notes)
    }

    fn render(
        &self,
        cli: &Cli,
        preset: &Option<String>,
        sample_rate: u32,
        volume: f64,
    ) -> anyhow::Result<()> {
        let melody = load_melody(cli, preset)?;
        let output_path = cli.output.as_deref().unwrap_or("melody.wav");

        let opts = RenderOptions::default()
            .with_sample_rate(sample_rate)
            .with_volume(volume);
        let seconds = write_preview(schedule_local(&melody, 0.0), opts, output_path)?;

        print_success(&format!(
            "Preview saved to: {} ({:.2}s)",
            output_path, seconds
        ));
        Ok(())
    }

    async fn play(
        &self,
        cli: &Cli,
        preset: &Option<String>,
        scale: Option<f64>,
        preview: Option<&str>,
    ) -> anyhow::Result<()> {
        let melody = load_melody(cli, preset)?;
        let ctx = get_context(cli)?;
        let scale = resolve_scale(scale, Some(&ctx));

        print_verbose(cli, &format!("Using context: {}", ctx.name));
        print_verbose(cli, &format!("Scale factor: {}", scale));

        let playback = plan(&melody, 0.0, scale)?;

        if let Some(path) = preview {
            let tones = playback.tones.iter().copied();
            let seconds = write_preview(tones, RenderOptions::default(), path)?;
            print_success(&format!("Preview saved to: {} ({:.2}s)", path, seconds));
        }

        let client = DeviceClient::from_context(&ctx)?;
        print_info(&format!("Sending {} notes to {}", playback.wire.len(), client.play_url()));
        info!(url = %client.play_url(), notes = playback.wire.len(), "playing melody");
        client.play_melody(&playback.wire).await?;

        print_success(&format!(
            "Melody sent to {} ({} notes, {:.2}s)",
            ctx.base_url(),
            playback.wire.len(),
            playback.end().unwrap_or(0.0)
        ));

        let result = serde_json::json!({
            "context": ctx.name,
            "scale_factor": scale,
            "notes": playback.wire,
            "end": playback.end(),
        });
        output_result(cli, &result)
    }
}

fn load_melody(cli: &Cli, preset: &Option<String>) -> anyhow::Result<Melody> {
    let melody = resolve_melody(preset.as_deref(), cli.input.as_deref())?;
    print_verbose(cli, &format!("Melody: {} events, {:.2}s", melody.len(), melody.duration()));
    Ok(melody)
}

/// Renders tones scheduled from origin 0 into a preview buffer.
fn render_preview<I>(tones: I, opts: RenderOptions) -> anyhow::Result<PcmRenderer>
where
    I: IntoIterator<Item = ScheduledTone>,
{
    let mut renderer = PcmRenderer::new(opts, 0.0);
    play(tones, &mut renderer)?;
    Ok(renderer)
}

/// Renders tones to a WAV file and returns its length in seconds.
fn write_preview<I>(tones: I, opts: RenderOptions, path: &str) -> anyhow::Result<f64>
where
    I: IntoIterator<Item = ScheduledTone>,
{
    let renderer = render_preview(tones, opts)?;
    let file = File::create(path).with_context(|| format!("failed to create {}", path))?;
    renderer.write_wav(BufWriter::new(file))?;
    Ok(renderer.duration())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kroneum_melody::Preset;
    use kroneum_melody::pcm::ToneSink;

    #[test]
    fn test_write_preview() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("beep.wav");

        let melody = Preset::by_id("beep").unwrap().melody().unwrap();
        let tones = schedule_local(&melody, 0.0);
        let seconds = write_preview(tones, RenderOptions::default(), path.to_str().unwrap()).unwrap();
        assert!((seconds - melody.duration()).abs() < 1e-3);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WAVE");
    }

    #[test]
    fn test_preview_from_plan_tones() {
        let melody = Preset::by_id("alarm").unwrap().melody().unwrap();
        let playback = plan(&melody, 0.0, 1.0).unwrap();
        let opts = RenderOptions::default();

        let from_plan = render_preview(playback.tones.iter().copied(), opts).unwrap();
        let mut direct = PcmRenderer::new(opts, 0.0);
        for tone in schedule_local(&melody, 0.0) {
            direct.emit(&tone).unwrap();
        }

        assert_eq!(from_plan.samples(), direct.samples());
        assert!((from_plan.duration() - playback.end().unwrap()).abs() < 1e-3);
    }
}
