use std::process::Command;
pub mod encoder;
pub mod probe;

pub struct FFmpeg {
}

impl FFmpeg {
    pub fn new() -> Self {
        FFmpeg {  }
    }

    pub fn is_installed(&self) -> bool {
        let cmd = Command::new("ffmpeg")
            .arg("-version")
            .output();
        match cmd {
            Ok(output) => output.status.success(),
            Err(_) => false,
        }
    }
}
