#[derive(Clone, Debug, PartialEq)]
pub struct EncodingProfile {
    pub name: &'static str,
    pub resolution: &'static str,
    pub video_bitrate: &'static str,
    pub max_bitrate: &'static str,
    pub buffer_size: &'static str,
    pub audio_bitrate: &'static str,
    pub sample_rate: u32,
}

pub const PROFILES: [EncodingProfile; 4] = [
    EncodingProfile {
        name: "1080p",
        resolution: "1920x1080",
        video_bitrate: "3000k",
        max_bitrate: "3500k",
        buffer_size: "6000k",
        audio_bitrate: "125k",
        sample_rate: 48000,
    },
    EncodingProfile {
        name: "720p",
        resolution: "1280x720",
        video_bitrate: "2000k",
        max_bitrate: "2500k",
        buffer_size: "4000k",
        audio_bitrate: "110k",
        sample_rate: 48000,
    },
    EncodingProfile {
        name: "480p",
        resolution: "854x480",
        video_bitrate: "1000k",
        max_bitrate: "1500k",
        buffer_size: "2000k",
        audio_bitrate: "90k",
        sample_rate: 44100,
    },
    EncodingProfile {
        name: "360p",
        resolution: "640x360",
        video_bitrate: "700k",
        max_bitrate: "1200k",
        buffer_size: "1400k",
        audio_bitrate: "75k",
        sample_rate: 44100,
    },
];

/// Matching subset of the built-in table, table order preserved. An empty
/// request or one containing "all" selects everything; names with no table
/// entry are skipped.
pub fn select_profiles(requested: &[String]) -> Vec<EncodingProfile> {
    if requested.is_empty() || requested.iter().any(|r| r == "all") {
        return PROFILES.to_vec();
    }
    PROFILES
        .iter()
        .filter(|p| requested.iter().any(|r| r == p.name))
        .cloned()
        .collect()
}

pub fn unknown_names(requested: &[String]) -> Vec<String> {
    requested
        .iter()
        .filter(|r| r.as_str() != "all" && !PROFILES.iter().any(|p| p.name == r.as_str()))
        .cloned()
        .collect()
}
