use super::commands::CommandResult;
use super::exit_status::ExitStatus;

pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.exit_on_issues && !result.issues.is_empty() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
