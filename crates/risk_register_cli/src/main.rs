//! Risk register batch entry point.
//!
//! # Responsibility
//! - Run one generate -> score -> report pass with default settings.
//! - Print the two output paths on success; exit non-zero on any failure.

use risk_register_core::{init_logging, LogTarget, RegisterConfig, RegisterService};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = RegisterConfig::default();

    // Logs go to stderr so the run only leaves the two report files behind.
    if let Err(err) = init_logging(&config.log_level, LogTarget::Stderr) {
        eprintln!("warning: logging disabled: {err}");
    }
    log::debug!(
        "event=cli_start module=cli status=ok version={}",
        risk_register_core::core_version()
    );

    let service = RegisterService::with_default_backends();
    match service.run(&config) {
        Ok(outcome) => {
            println!(
                "Excel risk register saved to {}",
                outcome.paths.workbook_display().display()
            );
            println!(
                "Risk distribution chart saved to {}",
                outcome.paths.chart_display().display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("event=register_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
