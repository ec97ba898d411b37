mod args;

use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use ftreport_core::{ScanConfig, format_size, generate_report};

use args::{Args, USAGE};

/// Exit code for a wrong argument count
const USAGE_EXIT_CODE: i32 = 2;

fn main() -> Result<()> {
    color_eyre::install()?;

    let Some(args) = Args::try_from_args(std::env::args_os()) else {
        println!("{USAGE}");
        std::process::exit(USAGE_EXIT_CODE);
    };

    // Logs go to stderr, stdout is reserved for the usage message
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let report = generate_report(&args.folder, &args.report_file, &ScanConfig::default())
        .wrap_err_with(|| format!("Failed to generate report for {}", args.folder.display()))?;

    tracing::info!(
        "{} files ({}) in {} extension groups",
        report.total_files,
        format_size(report.total_bytes),
        report.rows.len()
    );

    Ok(())
}
