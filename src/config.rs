use std::env;
use std::path::PathBuf;

const DEFAULT_FONT_FILE: &str = "NeometricAlt-HeavyItalic.ttf";

/// Fixed per-run configuration for the command assembler. Everything the
/// original kept as ambient globals lives here instead.
#[derive(Clone, Debug)]
pub struct EncoderConfig {
    pub font_path: PathBuf,
    pub container_extension: &'static str,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        EncoderConfig {
            font_path: default_font_path(),
            container_extension: "mp4",
        }
    }
}

// The watermark font ships next to the binary.
fn default_font_path() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => exe.with_file_name(DEFAULT_FONT_FILE),
        Err(_) => PathBuf::from(DEFAULT_FONT_FILE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_font_path_names_the_shipped_font() {
        let config = EncoderConfig::default();
        assert_eq!(
            config.font_path.file_name().unwrap().to_str().unwrap(),
            DEFAULT_FONT_FILE
        );
    }
}
