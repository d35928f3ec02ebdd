use std::process::ExitCode;

/// Exit status of the `dictsplit` binary.
///
/// - `Success` (0): the run completed, possibly with warnings
/// - `Error` (2): the run was aborted (bad arguments, unreadable source tree,
///   invalid configuration)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed; warnings never change the status.
    Success,
    /// Run aborted by a fatal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
