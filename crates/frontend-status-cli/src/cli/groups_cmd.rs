//! `frontend-status groups`: print the frontend's group names.

use crate::cli::args::SourceArgs;
use crate::cli::output::{self, Styled};
use anyhow::{Context, Result};
use frontend_status::{StatusConfig, StatusSource};
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// Groups loaded from one source. Serialized as the `--json` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupListing {
    pub source: String,
    pub groups: Vec<String>,
}

/// Run the groups command.
pub async fn run(args: &SourceArgs) -> Result<()> {
    let config = args.resolve().context("invalid configuration")?;
    let listing = list(&config).await?;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&listing)?);
        return Ok(());
    }

    for name in &listing.groups {
        println!("{name}");
    }
    if !output::is_quiet() {
        eprintln!(
            "{}",
            output::listing_footer(&Styled::new(), listing.groups.len(), &listing.source)
        );
    }

    Ok(())
}

/// Load and extract group names for `config`.
pub async fn list(config: &StatusConfig) -> Result<GroupListing> {
    let source = config.source().context("invalid status location")?;
    let location = source.describe();

    let start = Instant::now();
    let groups = frontend_status::load_groups(source.as_ref(), config.policy)
        .await
        .with_context(|| format!("failed to load groups from {location}"))?;
    info!("loaded {} groups in {:?}", groups.len(), start.elapsed());

    Ok(GroupListing {
        source: location,
        groups,
    })
}
