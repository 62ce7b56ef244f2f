use std::ffi::OsString;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use human_repr::HumanCount;
use kdam::{term, tqdm, BarExt};

use crate::config::EncoderConfig;
use crate::encoder::ProfileEncoder;
use crate::error::EncoderError;
use crate::ffmpeg::probe::probe_total_frames;
use crate::filters::filter_chain;
use crate::profiles::EncodingProfile;
use crate::request::{EncodingRequest, SubtitleMode};

#[derive(Debug)]
struct EncodingProgress {
    pub frame: usize,
    pub fps: f64,
    pub total_size: usize,
}

impl EncodingProgress {
    pub fn new() -> Self {
        EncodingProgress {
            frame: 0,
            fps: 0.0,
            total_size: 0,
        }
    }
}

enum FFmpegStdoutResult {
    Continue,
    Render,
}

/// Builds the full ffmpeg argument list for one profile of the request.
pub fn build_args(
    profile: &EncodingProfile,
    request: &EncodingRequest,
    config: &EncoderConfig,
    output: &PathBuf,
) -> Vec<OsString> {
    fn os(s: &str) -> OsString { OsString::from(s) }

    let mut args = vec![
        os("-hide_banner"),
        os("-nostats"),
        os("-loglevel"), os("warning"),
        os("-progress"), os("pipe:1"),
        os("-threads"), os("0"),
        os("-i"), OsString::from(request.input.as_os_str()),
    ];

    // soft subtitles ride along as a second input
    if let SubtitleMode::Soft(path) = &request.subtitles {
        args.push(os("-i"));
        args.push(OsString::from(path.as_os_str()));
    }

    args.push(os("-vf"));
    args.push(OsString::from(filter_chain(profile, request, config)));

    // primary video and audio always; the subtitle input maps separately
    args.push(os("-map")); args.push(os("0:v"));
    args.push(os("-map")); args.push(os("0:a"));
    if let SubtitleMode::Soft(_) = &request.subtitles {
        args.push(os("-map")); args.push(os("1:0"));
    }

    args.push(os("-c:v")); args.push(os("libx264"));
    args.push(os("-profile:v")); args.push(os("high"));
    args.push(os("-pix_fmt")); args.push(os(&request.pixel_format));
    args.push(os("-b:v")); args.push(os(profile.video_bitrate));
    args.push(os("-maxrate")); args.push(os(profile.max_bitrate));
    args.push(os("-bufsize")); args.push(os(profile.buffer_size));
    args.push(os("-preset")); args.push(os("medium"));

    args.push(os("-c:a")); args.push(os("aac"));
    args.push(os("-b:a")); args.push(os(profile.audio_bitrate));
    args.push(os("-ar")); args.push(os(&profile.sample_rate.to_string()));
    args.push(os("-ac")); args.push(os("2"));

    if let SubtitleMode::Soft(_) = &request.subtitles {
        args.push(os("-c:s")); args.push(os("mov_text"));
        args.push(os("-metadata:s:s:0"));
        args.push(os(&format!("language={}", request.subtitle_language)));
    }

    // strip source metadata and chapters, fast-start layout for streaming
    args.push(os("-map_metadata")); args.push(os("-1"));
    args.push(os("-map_chapters")); args.push(os("-1"));
    args.push(os("-movflags")); args.push(os("+faststart"));
    args.push(os("-dn"));

    args.push(OsString::from(output.as_os_str()));
    args
}

pub struct FFmpegEncoder {
    stop: Arc<AtomicBool>,
}

impl FFmpegEncoder {
    pub fn new(stop: Arc<AtomicBool>) -> Self {
        FFmpegEncoder {
            stop,
        }
    }

    fn consume_stdout(&self, child: &mut Child, total_frames: usize, input_size: usize) -> bool {
        term::init(false);

        let mut pbar = tqdm!(
            total = total_frames,
            desc = format!("encoding {}", input_size.human_count_bytes()),
            position = 0,
            force_refresh = true
        );
        let mut progress = EncodingProgress::new();
        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => return false,
        };
        let stdout_reader = BufReader::new(stdout);
        for line in stdout_reader.lines() {
            if let Ok(l) = line {
                match handle_ffmpeg_stdout_line(l, &mut progress) {
                    FFmpegStdoutResult::Continue => (),
                    FFmpegStdoutResult::Render => {
                        pbar.set_postfix(format!("{}", progress.total_size.human_count_bytes()));
                        let _ = pbar.update_to(progress.frame);
                    },
                }
            }

            if self.stop.load(Ordering::Relaxed) {
                println!("Caught stop signal; killing ffmpeg!");
                let _ = child.kill();
                return true;
            }
        }

        false
    }
}

impl ProfileEncoder for FFmpegEncoder {
    fn encode(
        &self,
        profile: &EncodingProfile,
        request: &EncodingRequest,
        config: &EncoderConfig,
        output: &PathBuf,
    ) -> Result<(), EncoderError> {
        let args = build_args(profile, request, config, output);
        let total_frames = get_total_frames(&request.input);
        let input_size = get_file_size(&request.input);

        println!("ffmpeg {}", args.iter().map(|s| format!("{:?}", s)).collect::<Vec<String>>().join(" "));

        let mut child = Command::new("ffmpeg")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|_| EncoderError::for_file(&request.input, "There was an error executing ffmpeg."))?;

        let stopped = self.consume_stdout(&mut child, total_frames, input_size);

        if let Ok(status) = child.wait() {
            if stopped {
                return Err(EncoderError::for_file(&request.input, "Encoding was interrupted."));
            }
            match status.success() {
                true => Ok(()),
                false => {
                    if let Some(code) = status.code() {
                        Err(EncoderError::for_file(&request.input, &format!("ffmpeg exited with {:}", code)))
                    } else {
                        Err(EncoderError::for_file(&request.input, "ffmpeg did not exit successfully."))
                    }
                },
            }
        } else {
            Err(EncoderError::for_file(&request.input, "There was an error waiting for the ffmpeg process."))
        }
    }
}

fn handle_ffmpeg_stdout_line(line: String, progress: &mut EncodingProgress) -> FFmpegStdoutResult {
    let parts: Vec<&str> = line.split('=').collect();
    if parts.len() == 2 {
        match parts[0] {
            "fps" => {
                progress.fps = parts[1].parse().unwrap_or(progress.fps);
                FFmpegStdoutResult::Continue
            },
            "frame" => {
                progress.frame = parts[1].parse().unwrap_or(progress.frame);
                FFmpegStdoutResult::Continue
            },
            "total_size" => {
                progress.total_size = parts[1].parse().unwrap_or(progress.total_size);
                FFmpegStdoutResult::Continue
            },
            "progress" => FFmpegStdoutResult::Render,
            _ => FFmpegStdoutResult::Continue,
        }
    } else {
        FFmpegStdoutResult::Continue
    }
}

fn get_total_frames(input: &PathBuf) -> usize {
    match probe_total_frames(input) {
        Ok(total_frames) => total_frames,
        Err(_) => 1,
    }
}

fn get_file_size(input: &PathBuf) -> usize {
    match fs::metadata(input) {
        Ok(fi) => fi.len().try_into().unwrap_or(1),
        Err(_) => 1,
    }
}
