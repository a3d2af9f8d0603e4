//! Latency event categories and their display names

use core::fmt;

/// Fixed set of media pipeline stages whose latency is measured.
///
/// Each category maps to a stable display string that forms the first field
/// of every emitted log line. Callers distinguish concurrent sources within
/// one category via the sub-identifier on [`log`](crate::LatencyLogger::log).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Audio media stream track
    AudioTrack,
    /// Video media stream track
    VideoTrack,
    /// Audio backend (cubeb)
    AudioBackend,
    /// Platform audio stream
    AudioStream,
    /// Network statistics
    NetStat,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::AudioTrack,
        Category::VideoTrack,
        Category::AudioBackend,
        Category::AudioStream,
        Category::NetStat,
    ];

    /// Returns the display name used in emitted log lines.
    ///
    /// These strings are a compatibility surface; consumers parse them back
    /// out of the debug log.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::AudioTrack => "Audio MediaStreamTrack",
            Category::VideoTrack => "Video MediaStreamTrack",
            Category::AudioBackend => "Cubeb",
            Category::AudioStream => "AudioStream",
            Category::NetStat => "NetStat",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
