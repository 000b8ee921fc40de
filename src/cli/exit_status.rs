use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed successfully
/// - `Failure` (1): Sync completed but left aliases unresolved (only with `--strict`)
/// - `Error` (2): Command failed (store error, unreadable input, config error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed successfully.
    Success,
    /// Command completed but reported problems.
    Failure,
    /// Command failed.
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
