pub mod config;
pub mod encoder;
pub mod error;
pub mod ffmpeg;
pub mod filters;
pub mod profiles;
pub mod request;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use rustop::opts;

use config::EncoderConfig;
use encoder::Encoder;
use request::{EncodingRequest, SubtitleMode};

fn main() -> ExitCode {
    let (args, _rest) = opts! {
        synopsis "Encode a video into multiple resolution variants with a text watermark and optional soft or burned-in subtitles.";
        opt x:i64=20, desc:"X position for the watermark text.";
        opt y:i64=40, desc:"Y position for the watermark text.";
        opt fontsize:u32=30, desc:"Font size for the watermark text.";
        opt fontcolor:String=String::from("white@0.5"), desc:"Font color for the watermark text.";
        opt pix_fmt:String=String::from("yuv420p"), desc:"Pixel format.";
        opt lang:String=String::from("ar"), desc:"Subtitle language code (ISO 639) for soft subtitles.";
        opt watermark:String=String::from("HALASHOW.COM"), desc:"Watermark text to overlay.";
        opt resolutions:String=String::from("all"), desc:"Comma-separated resolutions to encode. [all, 1080p, 720p, 480p, 360p]";
        opt soft:Option<String>, desc:"Path to subtitle file for soft embedding (separate stream).";
        opt burn:Option<String>, desc:"Path to subtitle file to burn into video (hard subtitles).";
        param input:String, desc:"Input video file";
        param output:String, desc:"Base output file name (without extension)";
    }.parse_or_exit();

    let subtitles = match SubtitleMode::from_args(args.soft, args.burn) {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    let requested: Vec<String> = args.resolutions
        .split(',')
        .map(|r| String::from(r.trim()))
        .filter(|r| !r.is_empty())
        .collect();
    let unknown = profiles::unknown_names(&requested);
    if !unknown.is_empty() {
        eprintln!("Unknown resolutions: {}.", unknown.join(", "));
        return ExitCode::FAILURE;
    }
    let selected = profiles::select_profiles(&requested);

    let f = ffmpeg::FFmpeg::new();
    if !f.is_installed() {
        eprintln!("ffmpeg is not installed.");
        return ExitCode::FAILURE;
    }

    let stop = Arc::new(AtomicBool::new(false));
    if let Err(err) = signal_hook::flag::register(signal_hook::consts::SIGINT, Arc::clone(&stop)) {
        eprintln!("Unable to register signal handler: {}", err);
        return ExitCode::FAILURE;
    }

    let request = EncodingRequest {
        subtitles,
        input: PathBuf::from(args.input),
        output_base: args.output,
        watermark: args.watermark,
        x: args.x,
        y: args.y,
        font_size: args.fontsize,
        font_color: args.fontcolor,
        pixel_format: args.pix_fmt,
        subtitle_language: args.lang,
    };

    match Encoder::new(EncoderConfig::default(), request, stop).encode_all(&selected) {
        Ok(_) => {
            println!("Encoding complete!");
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("Encoding failed!\n{}", err);
            ExitCode::FAILURE
        },
    }
}
