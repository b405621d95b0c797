/// A free-text command reduced to one playback action.
///
/// Classification is ordered, case-sensitive substring matching: the first
/// of "play", "pause", "next", "previous", "volume" contained in the text
/// wins. "play" is tested first, so any text mentioning a playlist still
/// resumes playback; that quirk is part of the route's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackCommand {
    Play,
    Pause,
    Next,
    Previous,
    /// Volume change. The level is the last whitespace-delimited token of
    /// the text, `None` when that token is not a number in u8 range.
    Volume(Option<u8>),
    Unknown,
}

impl PlaybackCommand {
    pub fn classify(text: &str) -> Self {
        if text.contains("play") {
            Self::Play
        } else if text.contains("pause") {
            Self::Pause
        } else if text.contains("next") {
            Self::Next
        } else if text.contains("previous") {
            Self::Previous
        } else if text.contains("volume") {
            Self::Volume(Self::trailing_level(text))
        } else {
            Self::Unknown
        }
    }

    fn trailing_level(text: &str) -> Option<u8> {
        text.split_whitespace().next_back()?.parse().ok()
    }
}
