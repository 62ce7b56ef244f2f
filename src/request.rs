use std::path::PathBuf;

use crate::error::UsageError;

#[derive(Clone, Debug, PartialEq)]
pub enum SubtitleMode {
    None,
    Soft(PathBuf),
    Burn(PathBuf),
}

impl SubtitleMode {
    /// Builds the mode from the mutually exclusive --soft/--burn options.
    pub fn from_args(soft: Option<String>, burn: Option<String>) -> Result<Self, UsageError> {
        match (soft, burn) {
            (Some(_), Some(_)) => Err(UsageError::new(
                "--soft and --burn are mutually exclusive.",
            )),
            (Some(path), None) => Ok(SubtitleMode::Soft(PathBuf::from(path))),
            (None, Some(path)) => Ok(SubtitleMode::Burn(PathBuf::from(path))),
            (None, None) => Ok(SubtitleMode::None),
        }
    }
}

#[derive(Debug)]
pub struct EncodingRequest {
    pub input: PathBuf,
    pub output_base: String,
    pub watermark: String,
    pub x: i64,
    pub y: i64,
    pub font_size: u32,
    pub font_color: String,
    pub pixel_format: String,
    pub subtitles: SubtitleMode,
    pub subtitle_language: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle_mode_from_args() {
        assert_eq!(SubtitleMode::from_args(None, None).unwrap(), SubtitleMode::None);
        assert_eq!(
            SubtitleMode::from_args(Some(String::from("subs.srt")), None).unwrap(),
            SubtitleMode::Soft(PathBuf::from("subs.srt"))
        );
        assert_eq!(
            SubtitleMode::from_args(None, Some(String::from("subs.srt"))).unwrap(),
            SubtitleMode::Burn(PathBuf::from("subs.srt"))
        );
    }

    #[test]
    fn test_soft_and_burn_conflict() {
        let result = SubtitleMode::from_args(
            Some(String::from("a.srt")),
            Some(String::from("b.srt")),
        );
        assert!(result.is_err());
    }
}
