//! Batch run orchestration for the CLI.

mod progress;
pub(crate) mod terminal;

use anyhow::{Context, Result};
use favicon_core::{HttpClient, SiteEvent, load_targets, run_batch};
use tracing::{debug, info};

use crate::cli::Args;
use crate::output;

use self::terminal::TerminalSettings;

/// Loads the target list and processes every site in order.
///
/// # Errors
///
/// Fails when the input list is missing or empty, or when the output root
/// cannot be created. Per-site failures are printed and never abort the run.
pub(crate) async fn run(args: &Args, settings: &TerminalSettings) -> Result<()> {
    let targets = load_targets(&args.input)?;
    info!(sites = targets.len(), input = %args.input.display(), "Favicon fetch starting");

    let bar = progress::site_progress(settings.progress, targets.len());

    let client = HttpClient::new();
    let stats = run_batch(&client, &targets, &args.output_dir, |event| match event {
        SiteEvent::PageFetchFailed { target, error } => {
            let line = output::fetch_error_line(&target.url, error);
            bar.suspend(|| println!("{line}"));
        }
        SiteEvent::Finished(report) => {
            for line in output::site_report_lines(report) {
                bar.suspend(|| println!("{line}"));
            }
            bar.set_message(report.target.url.clone());
            bar.inc(1);
        }
    })
    .await
    .with_context(|| {
        format!(
            "cannot create output directory {}",
            args.output_dir.display()
        )
    })?;
    bar.finish_and_clear();

    debug!(?stats, "run finished");
    println!("{}", output::COMPLETED_MESSAGE);
    Ok(())
}
