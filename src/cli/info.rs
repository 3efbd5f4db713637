use std::io;

use anyhow::Result;
use indicatif::MultiProgress;
use serde::Serialize;

use super::command::{Cli, InfoArgs};
use super::decode::create_progress_bar;
use crate::input::open_input;
use crate::timestamp::samples_str;
use tta::process::decode::{ChunkStatus, Decoder, Progress, SessionState};
use tta::structs::key::KeyMaterial;

#[derive(Debug, Serialize)]
struct StreamSummary {
    format: String,
    channels: u16,
    bits_per_sample: u16,
    sample_rate: u32,
    samples: u32,
    duration: String,
    pcm_bytes: u64,
    frames: u32,
    frame_length: u32,
    last_frame_length: u32,
    seek_table: bool,
    data_offset: u64,
    file_size: u64,
    average_bitrate_kbps: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    verification: Option<Verification>,
}

#[derive(Debug, Default, Serialize)]
struct Verification {
    frames_checked: u32,
    corrupted_frames: Vec<u32>,
    completed: bool,
}

pub fn cmd_info(args: &InfoArgs, cli: &Cli, multi: Option<&MultiProgress>) -> Result<()> {
    log::info!("Analyzing TTA stream: {}", args.input.display());

    let mut reader = open_input(&args.input)?;
    let file_size = io::Seek::seek(&mut reader, io::SeekFrom::End(0))?;
    io::Seek::rewind(&mut reader)?;

    // Without --verify no audio is decoded, so any key lets an encrypted
    // stream open.
    let key = match &args.password {
        Some(password) => Some(KeyMaterial::from_password(password)),
        None if !args.verify => Some(KeyMaterial::default()),
        None => None,
    };

    let mut decoder = Decoder::open_with_key(reader, key)?;
    decoder.set_fail_level(cli.fail_level());

    let mut summary = summarize(&decoder, file_size);

    if args.verify {
        summary.verification = Some(verify_frames(&mut decoder, multi)?);
    }

    if args.yaml {
        print!("{}", serde_yaml_ng::to_string(&summary)?);
    } else {
        display_summary(&summary);
    }

    Ok(())
}

fn summarize<R: io::Read + io::Seek>(decoder: &Decoder<R>, file_size: u64) -> StreamSummary {
    let info = decoder.info();
    let geometry = decoder.geometry();

    let duration_secs = info.duration_secs();
    let audio_bytes = file_size.saturating_sub(decoder.data_offset());
    let average_bitrate_kbps = if duration_secs > 0.0 {
        (audio_bytes as f64 * 8.0) / (duration_secs * 1000.0)
    } else {
        0.0
    };

    StreamSummary {
        format: info.format.to_string(),
        channels: info.channels,
        bits_per_sample: info.bits_per_sample,
        sample_rate: info.sample_rate,
        samples: info.samples,
        duration: samples_str(info.samples as u64, info.sample_rate),
        pcm_bytes: info.pcm_len(),
        frames: geometry.frames,
        frame_length: geometry.standard_len,
        last_frame_length: geometry.last_len,
        seek_table: decoder.has_seek_table(),
        data_offset: decoder.data_offset(),
        file_size,
        average_bitrate_kbps,
        verification: None,
    }
}

/// Decodes every frame once and records the ones that fail their checksum.
fn verify_frames<R: io::Read + io::Seek>(
    decoder: &mut Decoder<R>,
    multi: Option<&MultiProgress>,
) -> Result<Verification> {
    let pb = multi
        .map(|multi| create_progress_bar(multi, decoder.frames(), 0))
        .transpose()?;
    let pb_clone = pb.clone();
    let mut on_progress = move |progress: Progress| {
        if let Some(ref pb) = pb_clone {
            pb.set_position(progress.frame as u64);
            pb.set_message(format!("bitrate: {} kbps", progress.rate));
        }
    };

    // one standard frame per call: every call starts on a frame boundary
    let steps = decoder.geometry().standard_len as usize;
    let mut buffer = vec![0u8; steps * decoder.info().block_align()];
    let mut verification = Verification::default();

    while decoder.state() == SessionState::Decoding {
        let frame = decoder.frame_index();

        let chunk = match decoder.frame_byte_len(frame) {
            Some(frame_bytes) => {
                decoder.process_frame(frame_bytes, &mut buffer, Some(&mut on_progress))?
            }
            None => decoder.process_stream(&mut buffer, Some(&mut on_progress))?,
        };

        verification.frames_checked += 1;
        if chunk.status == ChunkStatus::Muted {
            verification.corrupted_frames.push(frame);
        }
    }

    verification.completed = decoder.is_finished();
    if !verification.completed {
        log::warn!(
            "Verification stopped at frame {} of {}",
            decoder.frame_index() + 1,
            decoder.frames()
        );
    }

    if let Some(pb) = pb {
        pb.finish_with_message(format!(
            "{} corrupted frames",
            verification.corrupted_frames.len()
        ));
    }

    Ok(verification)
}

fn display_summary(summary: &StreamSummary) {
    println!("Stream Information");
    println!("  Format                    {}", summary.format);
    println!("  Channels                  {}", summary.channels);
    println!("  Bits per sample           {}", summary.bits_per_sample);
    println!("  Sampling rate             {} Hz", summary.sample_rate);
    println!("  Samples                   {}", summary.samples);
    println!("  Duration                  {}", summary.duration);
    println!();

    println!("Frame Layout");
    println!("  Frames                    {}", summary.frames);
    println!("  Frame length              {} samples", summary.frame_length);
    println!("  Last frame length         {} samples", summary.last_frame_length);
    println!(
        "  Seek table                {}",
        if summary.seek_table { "valid" } else { "missing or corrupted" }
    );
    println!("  Data offset               {}", summary.data_offset);
    println!();

    println!("Analysis Summary");
    let size_mb = summary.file_size as f64 / 1_000_000.0;
    println!(
        "  Size                      {size_mb:.2} MB ({} bytes)",
        summary.file_size
    );
    println!("  PCM size                  {} bytes", summary.pcm_bytes);
    println!(
        "  Average data rate         {:.1} kbps",
        summary.average_bitrate_kbps
    );

    if let Some(ref verification) = summary.verification {
        println!("  Frames verified           {}", verification.frames_checked);
        if verification.corrupted_frames.is_empty() {
            println!("  Corrupted frames          none");
        } else {
            println!(
                "  Corrupted frames          {:?}",
                verification.corrupted_frames
            );
        }
        if !verification.completed {
            println!("  Verification              stopped early");
        }
    }

    println!();
}
