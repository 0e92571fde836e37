//! `frontend-status check`: show what the status document contains, for
//! tracking down a dashboard that lists no groups.

use crate::cli::args::SourceArgs;
use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use frontend_status::{GroupReport, MissingNamePolicy, StatusConfig, StatusSource};
use serde::Serialize;

/// Shape of one source's document. Serialized as the `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub source: String,
    pub report: GroupReport,
}

/// Run the check command.
pub async fn run(args: &SourceArgs) -> Result<()> {
    let config = args.resolve().context("invalid configuration")?;
    let outcome = check(&config).await?;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&outcome)?);
    } else {
        let s = Styled::new();
        for line in output::report_lines(&s, &outcome.source, &outcome.report, output::is_verbose())
        {
            eprintln!("{line}");
        }
        eprintln!();
        eprintln!("{}", output::status_line(&s, &outcome.report));
    }

    verdict(config.policy, &outcome)
}

/// Load the document for `config` and summarize it.
pub async fn check(config: &StatusConfig) -> Result<CheckOutcome> {
    let source = config.source().context("invalid status location")?;
    let location = source.describe();

    let document = source
        .load()
        .await
        .with_context(|| format!("failed to load {location}"))?;

    Ok(CheckOutcome {
        report: frontend_status::inspect(document.root()),
        source: location,
    })
}

/// Under the strict policy, unnamed groups fail the check.
pub fn verdict(policy: MissingNamePolicy, outcome: &CheckOutcome) -> Result<()> {
    if policy == MissingNamePolicy::Fail && outcome.report.unnamed > 0 {
        anyhow::bail!(
            "{} without a name attribute in {}",
            output::plural(outcome.report.unnamed, "group"),
            outcome.source
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontend_status::Location;
    use std::path::PathBuf;

    fn write_status(dir: &tempfile::TempDir, xml: &str) -> PathBuf {
        let path = dir.path().join("frontend_status.xml");
        std::fs::write(&path, xml).unwrap();
        path
    }

    fn monitor_config(dir: &tempfile::TempDir, policy: MissingNamePolicy) -> StatusConfig {
        StatusConfig {
            location: Location::MonitorDir(dir.path().to_path_buf()),
            policy,
            ..StatusConfig::default()
        }
    }

    #[tokio::test]
    async fn test_check_reports_shape() {
        let dir = tempfile::tempdir().unwrap();
        write_status(
            &dir,
            r#"<frontend><groups><group name="main"/><group/></groups><groups/></frontend>"#,
        );

        let outcome = check(&monitor_config(&dir, MissingNamePolicy::Skip))
            .await
            .unwrap();
        assert_eq!(outcome.report.root, "frontend");
        assert_eq!(outcome.report.containers, 2);
        assert_eq!(outcome.report.names, vec!["main"]);
        assert_eq!(outcome.report.unnamed, 1);

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["report"]["unnamed"], 1);
        assert_eq!(json["report"]["names"], serde_json::json!(["main"]));
    }

    #[tokio::test]
    async fn test_strict_check_fails_on_unnamed() {
        let dir = tempfile::tempdir().unwrap();
        write_status(
            &dir,
            r#"<frontend><groups><group name="main"/><group/></groups></frontend>"#,
        );

        let strict = monitor_config(&dir, MissingNamePolicy::Fail);
        let outcome = check(&strict).await.unwrap();
        let err = verdict(strict.policy, &outcome).unwrap_err();
        assert!(err.to_string().starts_with("1 group without a name attribute"));

        assert!(verdict(MissingNamePolicy::Skip, &outcome).is_ok());
    }

    #[tokio::test]
    async fn test_run_strict_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_status(&dir, r#"<frontend><groups><group/></groups></frontend>"#);

        let lenient = SourceArgs {
            file: Some(path.clone()),
            ..SourceArgs::default()
        };
        assert!(run(&lenient).await.is_ok());

        let strict = SourceArgs {
            file: Some(path),
            strict: true,
            ..SourceArgs::default()
        };
        assert!(run(&strict).await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_document_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_status(&dir, "<frontend><groups>");

        let err = check(&monitor_config(&dir, MissingNamePolicy::Skip))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to load"));
        assert!(matches!(
            err.downcast_ref::<frontend_status::StatusError>(),
            Some(frontend_status::StatusError::Parse { .. })
        ));
    }
}
