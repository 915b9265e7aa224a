use anyhow::Result;
use clap::Parser;

use release_tools::cli::{exit_on_clap_error, run_sync_workflow, SyncWorkflowArgs};
use release_tools::ui;

#[derive(clap::Parser)]
#[command(
    name = "sync-screenshots",
    version,
    about = "Copy the canonical screenshots to the docs site and the store metadata"
)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::try_parse().unwrap_or_else(|e| exit_on_clap_error(e));

    if let Err(e) = run_sync_workflow(SyncWorkflowArgs::default()) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
