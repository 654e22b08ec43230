use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed, including dry runs and no-op toggles
/// - `Failure` (1): The file's language has no nested comment support
/// - `Error` (2): Command failed (unreadable file, bad config, selection outside the file)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Language could not be resolved or is unsupported.
    Failure,
    /// Command failed due to internal error (I/O error, config error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
