use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use super::command::{AudioFormat, Cli, DecodeArgs};
use crate::input::open_input;
use crate::timestamp::{samples_str, time_str};
use crate::wav::{FormatChunk, WAVWriter};
use tta::process::decode::{ChunkStatus, Decoder, Progress, SessionState};
use tta::structs::header::StreamInfo;

/// Time-steps decoded per call.
const PCM_BUFFER_STEPS: usize = 5184;

pub(crate) fn create_path_with_extension(base_path: &Path, expected_ext: &str) -> PathBuf {
    match base_path.extension() {
        Some(existing_ext) if existing_ext == expected_ext => base_path.to_path_buf(),
        Some(_) => {
            let mut name = base_path.as_os_str().to_os_string();
            name.push(".");
            name.push(expected_ext);
            PathBuf::from(name)
        }
        None => base_path.with_extension(expected_ext),
    }
}

pub(crate) fn create_progress_bar(
    multi: &MultiProgress,
    total_frames: u32,
    start_frame: u32,
) -> Result<ProgressBar> {
    let pb = multi.add(ProgressBar::new(total_frames as u64));
    pb.set_style(ProgressStyle::with_template(
        "{bar:40.cyan/blue} {pos}/{len} frames ({percent}%)\n{msg} | elapsed: {elapsed_precise} | ETA: {eta_precise}",
    )?);
    pb.set_position(start_frame as u64);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb.set_message("initializing decoder");
    Ok(pb)
}

enum AudioWriter {
    Pcm(BufWriter<File>),
    Wav(WAVWriter<File>),
}

impl AudioWriter {
    fn create(path: &Path, format: AudioFormat, info: &StreamInfo) -> Result<Self> {
        let file = File::create(path)?;

        Ok(match format {
            AudioFormat::Pcm => AudioWriter::Pcm(BufWriter::new(file)),
            AudioFormat::Wav => {
                let mut wav_writer = WAVWriter::new(
                    file,
                    FormatChunk::pcm(info.sample_rate, info.channels, info.bits_per_sample),
                );
                wav_writer.write_header()?;
                AudioWriter::Wav(wav_writer)
            }
        })
    }

    fn write_pcm(&mut self, pcm: &[u8]) -> Result<()> {
        match self {
            AudioWriter::Pcm(pcm_writer) => pcm_writer.write_all(pcm)?,
            AudioWriter::Wav(wav_writer) => wav_writer.write_pcm(pcm)?,
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        match self {
            AudioWriter::Pcm(pcm_writer) => pcm_writer.flush()?,
            AudioWriter::Wav(wav_writer) => wav_writer.finish()?,
        }
        Ok(())
    }
}

struct DecodedBlock {
    pcm: Vec<u8>,
    samples: usize,
    status: ChunkStatus,
}

pub fn cmd_decode(args: &DecodeArgs, cli: &Cli, multi: Option<&MultiProgress>) -> Result<()> {
    macro_rules! pb_update {
        ($pb:expr, $method:ident($($args:expr),*)) => {
            if let Some(ref pb) = $pb {
                pb.$method($($args),*);
            }
        };
    }

    log::info!(
        "Decoding TTA stream: {} (strict mode: {})",
        args.input.display(),
        cli.strict
    );

    let mut decoder = Decoder::open(open_input(&args.input)?, args.password.as_deref())?;
    decoder.set_fail_level(cli.fail_level());

    let info = *decoder.info();
    log::info!(
        "{} Hz, {} channels, {} bit, {} ({} frames)",
        info.sample_rate,
        info.channels,
        info.bits_per_sample,
        samples_str(info.samples as u64, info.sample_rate),
        decoder.frames()
    );

    if !decoder.has_seek_table() {
        log::warn!("Stream has no valid seek table, corrupted frames will stop decoding");
    }

    if let Some(seconds) = args.start {
        let start = decoder.set_position(seconds)?;
        log::info!(
            "Starting at frame {} ({})",
            decoder.frame_index(),
            time_str(start as f64)
        );
    }
    let start_sample = decoder.position();

    let mut audio_writer = match &args.output_path {
        Some(base_path) => {
            let audio_path = create_path_with_extension(base_path, args.format.extension());
            log::info!("Creating audio file: {}", audio_path.display());
            Some(AudioWriter::create(&audio_path, args.format, &info)?)
        }
        None => {
            log::info!("No output path specified, verifying only");
            None
        }
    };

    let pb = multi
        .map(|multi| create_progress_bar(multi, decoder.frames(), decoder.frame_index()))
        .transpose()?;

    let (tx, rx) = mpsc::sync_channel::<Result<DecodedBlock>>(4);
    let pb_clone = pb.clone();

    let decode_thread = thread::spawn(move || -> Result<SessionState> {
        let mut buffer = vec![0u8; PCM_BUFFER_STEPS * decoder.info().block_align()];
        let mut on_progress = |progress: Progress| {
            pb_update!(pb_clone, set_position(progress.frame as u64));
            log::trace!(
                "Frame {}/{} verified, {} kbps",
                progress.frame,
                progress.frames,
                progress.rate
            );
        };

        loop {
            match decoder.process_stream(&mut buffer, Some(&mut on_progress)) {
                Ok(chunk) if chunk.samples == 0 => break,
                Ok(chunk) => {
                    let block = DecodedBlock {
                        pcm: buffer[..chunk.bytes].to_vec(),
                        samples: chunk.samples,
                        status: chunk.status,
                    };
                    if tx.send(Ok(block)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.send(Err(e));
                    break;
                }
            }
        }

        Ok(decoder.state())
    });

    let mut decoded_samples = 0u64;
    let mut muted_blocks = 0u64;
    let mut blocks = 0u64;
    let start_time = std::time::Instant::now();

    while let Ok(result) = rx.recv() {
        match result {
            Ok(block) => {
                if block.status == ChunkStatus::Muted {
                    muted_blocks += 1;
                    log::warn!(
                        "Muted {} samples at {}",
                        block.samples,
                        samples_str(start_sample + decoded_samples, info.sample_rate)
                    );
                }

                if let Some(ref mut writer) = audio_writer {
                    writer.write_pcm(&block.pcm)?;
                }

                decoded_samples += block.samples as u64;
                blocks += 1;

                if blocks.is_multiple_of(30) {
                    let audio_duration_secs = decoded_samples as f64 / info.sample_rate as f64;
                    let realtime_multiplier =
                        audio_duration_secs / start_time.elapsed().as_secs_f64();
                    let time_str = samples_str(start_sample + decoded_samples, info.sample_rate);

                    pb_update!(
                        pb,
                        set_message(format!(
                            "speed: {realtime_multiplier:.1}x | timestamp: {time_str}"
                        ))
                    );
                }
            }
            Err(e) => {
                pb_update!(pb, finish_with_message("decode failed"));
                return Err(e);
            }
        }
    }

    if let Some(ref mut writer) = audio_writer {
        writer.finish()?;
    }

    let state = match decode_thread.join() {
        Ok(Ok(state)) => state,
        Ok(Err(e)) => {
            pb_update!(pb, finish_with_message("decode failed"));
            return Err(e);
        }
        Err(_) => {
            pb_update!(pb, finish_with_message("decode thread panicked"));
            return Err(anyhow::anyhow!("Decode thread panicked"));
        }
    };

    if state == SessionState::Halted {
        log::warn!(
            "Decoding stopped after {} of {} samples",
            start_sample + decoded_samples,
            info.samples
        );
    }

    if muted_blocks > 0 {
        log::warn!("{muted_blocks} output blocks contained corrupted frames and were muted");
    }

    let elapsed = start_time.elapsed();
    let audio_duration_secs = decoded_samples as f64 / info.sample_rate as f64;
    let realtime_multiplier = audio_duration_secs / elapsed.as_secs_f64();
    let final_time_str = samples_str(start_sample + decoded_samples, info.sample_rate);

    pb_update!(
        pb,
        finish_with_message(format!(
            "speed: {realtime_multiplier:.1}x | timestamp: {final_time_str}"
        ))
    );

    log::info!("Decoding completed: {decoded_samples} samples in {:.3}s", elapsed.as_secs_f64());

    Ok(())
}
