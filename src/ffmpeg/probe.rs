use std::path::PathBuf;
use std::process::Command;
use serde::{Deserialize, Serialize};
use serde_json;

use crate::error::InputParseError;

#[derive(Serialize, Deserialize, Debug)]
struct FFProbeJsonOutput {
    pub streams: Vec<FFProbeJsonStream>,
}

#[derive(Serialize, Deserialize, Debug)]
struct FFProbeJsonStream {
    pub nb_read_packets: Option<String>,
}

/// Packet count of the primary video stream. Only used to size the
/// progress bar; callers fall back to a default when this fails.
pub fn probe_total_frames(path: &PathBuf) -> Result<usize, InputParseError> {
    let output = Command::new("ffprobe")
        .args([
            &PathBuf::from("-of"),
            &PathBuf::from("json"),
            &PathBuf::from("-show_streams"),
            &PathBuf::from("-select_streams"),
            &PathBuf::from("v:0"),
            &PathBuf::from("-count_packets"),
            path,
        ])
        .output()
        .map_err(|_| InputParseError::for_file(path, "Unable to execute ffprobe."))?;
    if output.status.success() {
        let utf8 = String::from_utf8(output.stdout)
            .map_err(|_| InputParseError::for_file(path, "ffprobe output was not valid utf-8."))?;
        let deserialized = serde_json::from_str::<FFProbeJsonOutput>(&utf8)
            .map_err(|_| InputParseError::for_file(path, "Unexpected ffprobe json output."))?;
        match deserialized.streams.first() {
            Some(stream) => Ok(match &stream.nb_read_packets {
                None => 1,
                Some(tf) => tf.parse().unwrap_or(1),
            }),
            None => Err(InputParseError::for_file(path, "No video streams reported.")),
        }
    } else {
        Err(InputParseError::for_file(path, "ffprobe did not exit successfully."))
    }
}
