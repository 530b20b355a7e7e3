use async_trait::async_trait;

use crate::{
    cli::{Command, CommandResult, formatting::format_notice, types::CommandMetadata},
    freshness::ReleaseChecker,
};

/// Asks the release endpoint whether a newer build has been published.
pub struct CheckCommand;

#[async_trait]
impl Command for CheckCommand {
    async fn execute(&self, _args: &[String]) -> CommandResult {
        let status = ReleaseChecker::new()?.check().await?;

        if status.newer_available {
            Ok(format_notice(&format!(
                "Version {} is available (running {})",
                status.remote, status.local
            )))
        } else {
            Ok(format!("Up to date (running {})", status.local))
        }
    }

    fn metadata(&self) -> CommandMetadata {
        CommandMetadata {
            name: "check".to_string(),
            description: "Check for a newer release".to_string(),
            category: "update".to_string(),
            args: vec![],
            examples: vec!["update check".to_string()],
        }
    }
}
