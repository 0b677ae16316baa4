// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Storage(String),
    Audio(AudioError),
}

/// Failures reported by the audio-processing platform.
/// Used to pick the transient notification shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioError {
    /// The platform offers no audio-processing support at all.
    Unsupported,

    /// Creating the shared context was rejected (autoplay or security policy).
    ContextRejected(String),

    /// Resuming a suspended context was rejected.
    ResumeRejected(String),

    /// Routing the media output through the gain stage failed
    /// (typically a cross-origin source).
    RoutingFailed(String),
}

impl AudioError {
    /// Returns the notification message key for this error type.
    pub fn message_key(&self) -> &'static str {
        match self {
            AudioError::Unsupported => "notification-booster-unsupported",
            AudioError::ContextRejected(_) => "notification-booster-context-rejected",
            AudioError::ResumeRejected(_) => "notification-booster-resume-rejected",
            AudioError::RoutingFailed(_) => "notification-booster-routing-failed",
        }
    }
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AudioError::Unsupported => write!(f, "Audio processing is not supported"),
            AudioError::ContextRejected(msg) => {
                write!(f, "Audio context creation rejected: {}", msg)
            }
            AudioError::ResumeRejected(msg) => write!(f, "Audio context resume rejected: {}", msg),
            AudioError::RoutingFailed(msg) => write!(f, "Audio routing failed: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Audio(e) => write!(f, "Audio Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<AudioError> for Error {
    fn from(err: AudioError) -> Self {
        Error::Audio(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Storage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn json_error_maps_to_storage() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Storage(_)));
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn audio_error_message_keys() {
        assert_eq!(
            AudioError::Unsupported.message_key(),
            "notification-booster-unsupported"
        );
        assert_eq!(
            AudioError::ResumeRejected("policy".into()).message_key(),
            "notification-booster-resume-rejected"
        );
    }

    #[test]
    fn audio_error_display_contains_reason() {
        let err: Error = AudioError::RoutingFailed("cross-origin".to_string()).into();
        assert!(format!("{}", err).contains("cross-origin"));
    }
}
