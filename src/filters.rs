use crate::config::EncoderConfig;
use crate::profiles::EncodingProfile;
use crate::request::{EncodingRequest, SubtitleMode};

/// Escapes a value embedded inside a filter expression. ffmpeg's filter
/// syntax gives '\', ':' and the quote meaning, so they must not pass
/// through verbatim from user input.
pub fn escape_filter_value(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace(':', "\\:")
}

/// Video filter chain for one profile: scale, then the burn-in subtitle
/// stage when requested, then the watermark drawtext stage.
pub fn filter_chain(
    profile: &EncodingProfile,
    request: &EncodingRequest,
    config: &EncoderConfig,
) -> String {
    let mut stages = vec![format!("scale={}", profile.resolution)];

    if let SubtitleMode::Burn(path) = &request.subtitles {
        stages.push(format!(
            "subtitles='{}'",
            escape_filter_value(&path.to_string_lossy())
        ));
    }

    stages.push(format!(
        "drawtext=fontfile='{}':text='{}':x={}:y={}:fontsize={}:fontcolor={}",
        escape_filter_value(&config.font_path.to_string_lossy()),
        escape_filter_value(&request.watermark),
        request.x,
        request.y,
        request.font_size,
        request.font_color,
    ));

    stages.join(",")
}
