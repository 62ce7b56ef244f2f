use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crate::config::EncoderConfig;
use crate::error::EncoderError;
use crate::ffmpeg::encoder::FFmpegEncoder;
use crate::profiles::EncodingProfile;
use crate::request::EncodingRequest;

/// Seam to the external encoder; one call per profile, blocking.
pub trait ProfileEncoder {
    fn encode(
        &self,
        profile: &EncodingProfile,
        request: &EncodingRequest,
        config: &EncoderConfig,
        output: &PathBuf,
    ) -> Result<(), EncoderError>;
}

pub struct Encoder {
    config: EncoderConfig,
    request: EncodingRequest,
    stop: Arc<AtomicBool>,
}

impl Encoder {
    pub fn new(config: EncoderConfig, request: EncodingRequest, stop: Arc<AtomicBool>) -> Self {
        Encoder {
            config,
            request,
            stop,
        }
    }

    pub fn encode_all(&self, profiles: &[EncodingProfile]) -> Result<(), EncoderError> {
        let ffmpeg = FFmpegEncoder::new(Arc::clone(&self.stop));
        self.dispatch(&ffmpeg, profiles)
    }

    // Strictly sequential; the first failed invocation aborts the rest.
    fn dispatch(
        &self,
        encoder: &dyn ProfileEncoder,
        profiles: &[EncodingProfile],
    ) -> Result<(), EncoderError> {
        for profile in profiles {
            let output = generate_output_filename(
                &self.request.output_base,
                profile.name,
                self.config.container_extension,
            );
            println!("Processing: {:?} -> {:?}", self.request.input, output);
            encoder.encode(profile, &self.request, &self.config, &output)?;
        }
        Ok(())
    }
}

fn generate_output_filename(base: &str, profile_name: &str, extension: &str) -> PathBuf {
    PathBuf::from(format!("{base:}_{profile_name:}.{extension:}"))
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use super::*;
    use crate::profiles::select_profiles;
    use crate::request::SubtitleMode;

    struct RecordingEncoder {
        calls: RefCell<Vec<String>>,
        fail_on_call: Option<usize>,
    }

    impl RecordingEncoder {
        fn succeeding() -> Self {
            RecordingEncoder {
                calls: RefCell::new(vec![]),
                fail_on_call: None,
            }
        }

        fn failing_on(call: usize) -> Self {
            RecordingEncoder {
                calls: RefCell::new(vec![]),
                fail_on_call: Some(call),
            }
        }
    }

    impl ProfileEncoder for RecordingEncoder {
        fn encode(
            &self,
            profile: &EncodingProfile,
            request: &EncodingRequest,
            _config: &EncoderConfig,
            _output: &PathBuf,
        ) -> Result<(), EncoderError> {
            let mut calls = self.calls.borrow_mut();
            calls.push(String::from(profile.name));
            match self.fail_on_call {
                Some(n) if calls.len() == n => {
                    Err(EncoderError::for_file(&request.input, "ffmpeg exited with 1"))
                },
                _ => Ok(()),
            }
        }
    }

    fn encoder() -> Encoder {
        Encoder::new(
            EncoderConfig::default(),
            EncodingRequest {
                input: PathBuf::from("movie.mkv"),
                output_base: String::from("out/movie"),
                watermark: String::from("HALASHOW.COM"),
                x: 20,
                y: 40,
                font_size: 30,
                font_color: String::from("white@0.5"),
                pixel_format: String::from("yuv420p"),
                subtitles: SubtitleMode::None,
                subtitle_language: String::from("ar"),
            },
            Arc::new(AtomicBool::new(false)),
        )
    }

    #[test]
    fn test_generate_output_filename() {
        assert_eq!(
            generate_output_filename("out/movie", "1080p", "mp4"),
            PathBuf::from("out/movie_1080p.mp4")
        );
        assert_eq!(
            generate_output_filename("movie", "360p", "mp4"),
            PathBuf::from("movie_360p.mp4")
        );
    }

    #[test]
    fn test_dispatch_runs_every_profile_exactly_once_in_order() {
        let recording = RecordingEncoder::succeeding();
        let profiles = select_profiles(&[String::from("all")]);
        assert!(encoder().dispatch(&recording, &profiles).is_ok());
        assert_eq!(
            *recording.calls.borrow(),
            vec![
                String::from("1080p"),
                String::from("720p"),
                String::from("480p"),
                String::from("360p"),
            ]
        );
    }

    #[test]
    fn test_dispatch_stops_on_first_failure() {
        let recording = RecordingEncoder::failing_on(1);
        let profiles = select_profiles(&[
            String::from("1080p"),
            String::from("720p"),
            String::from("480p"),
        ]);
        assert!(encoder().dispatch(&recording, &profiles).is_err());
        assert_eq!(*recording.calls.borrow(), vec![String::from("1080p")]);
    }

    #[test]
    fn test_dispatch_fails_midway_without_touching_later_profiles() {
        let recording = RecordingEncoder::failing_on(2);
        let profiles = select_profiles(&[String::from("all")]);
        assert!(encoder().dispatch(&recording, &profiles).is_err());
        assert_eq!(
            *recording.calls.borrow(),
            vec![String::from("1080p"), String::from("720p")]
        );
    }
}
