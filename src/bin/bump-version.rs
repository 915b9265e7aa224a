use anyhow::Result;
use clap::Parser;

use release_tools::cli::{exit_on_clap_error, run_bump_workflow, BumpWorkflowArgs};
use release_tools::ui;

#[derive(clap::Parser)]
#[command(
    name = "bump-version",
    version,
    about = "Update the version across every manifest and the Android build file",
    after_help = "Does NOT create any git commits or tags."
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "New version in semver format: x.y.z (e.g. 1.2.3)"
    )]
    new_version: String,
}

fn main() -> Result<()> {
    let args = Args::try_parse().unwrap_or_else(|e| exit_on_clap_error(e));

    let workflow_args = BumpWorkflowArgs {
        version: args.new_version,
        root: None,
    };

    if let Err(e) = run_bump_workflow(workflow_args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
