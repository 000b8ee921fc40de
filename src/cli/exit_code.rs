use super::commands::{CommandResult, CommandSummary};
use super::exit_status::ExitStatus;

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    match &result.summary {
        CommandSummary::Sync(report) => match &report.summary {
            None => ExitStatus::Error,
            Some(summary) if report.strict && summary.unresolved_aliases > 0 => {
                ExitStatus::Failure
            }
            Some(_) => ExitStatus::Success,
        },
        CommandSummary::Parse(_) | CommandSummary::Init(_) => ExitStatus::Success,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::commands::SyncReport;
    use crate::core::{SyncStatus, SyncSummary};

    fn sync_result(summary: Option<SyncSummary>, strict: bool) -> CommandResult {
        let status = match summary {
            Some(_) => SyncStatus::Success("ok".to_string()),
            None => SyncStatus::Error("boom".to_string()),
        };
        CommandResult {
            summary: CommandSummary::Sync(SyncReport {
                input: PathBuf::from("tokens.css"),
                store: PathBuf::from("tokens.store.json"),
                status,
                summary,
                strict,
            }),
        }
    }

    #[test]
    fn test_failed_run_is_error() {
        assert_eq!(
            exit_status_from_result(&sync_result(None, false)),
            ExitStatus::Error
        );
    }

    #[test]
    fn test_unresolved_aliases_only_fail_in_strict_mode() {
        let summary = SyncSummary {
            unresolved_aliases: 2,
            ..SyncSummary::default()
        };
        assert_eq!(
            exit_status_from_result(&sync_result(Some(summary.clone()), false)),
            ExitStatus::Success
        );
        assert_eq!(
            exit_status_from_result(&sync_result(Some(summary), true)),
            ExitStatus::Failure
        );
    }
}
