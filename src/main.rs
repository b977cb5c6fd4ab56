use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use nextclean::config::{CleanerConfig, DEFAULT_MIN_AGE_DAYS};
use nextclean::report::ScanReport;
use nextclean::{CleanError, RealFs, TreeScanner, cleaner, default_roots, format_size, logging};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "nextclean")]
#[command(about = "Find and remove stale Next.js .next build caches to reclaim disk space")]
#[command(version)]
struct Cli {
    /// Directories to scan (defaults to the current directory)
    paths: Vec<PathBuf>,

    /// Only remove caches older than this many days
    #[arg(short, long, default_value_t = DEFAULT_MIN_AGE_DAYS)]
    days: u64,

    /// Extra path fragment to skip; any path containing it is never visited
    #[arg(short, long = "exclude", value_name = "FRAGMENT")]
    excludes: Vec<String>,

    /// Show what would be deleted without deleting
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    /// Where to append the diagnostic log (defaults to ~/.nextclean.log)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log debug details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("aborted: {e:#}");
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CleanerConfig::new(cli.days, &cli.excludes, cli.log_file)?;
    logging::init(&config.log_file, cli.verbose)?;

    let known_roots = default_roots();
    tracing::info!(
        roots = ?known_roots,
        min_age_days = config.min_age_days(),
        "starting scan; user directories on this system"
    );

    let roots = resolve_roots(cli.paths)?;
    let report = scan_all(&config, &roots);

    if report.is_empty() {
        println!("{}", format!("No stale {} directories found.", config.cache_dir_name).yellow());
        return Ok(());
    }

    let total_size = report.total_size();
    println!(
        "Found {} stale {} directories ({})\n",
        report.len().to_string().green().bold(),
        config.cache_dir_name,
        format_size(total_size).green().bold()
    );
    print_report(&report);

    if cli.dry_run {
        println!("\n{}", "Dry run - nothing was deleted.".yellow());
        tracing::info!(matches = report.len(), total_bytes = total_size, "dry run finished");
        return Ok(());
    }

    if !cli.yes && !confirm(report.len()) {
        println!("\n{}", "Cancelled.".yellow());
        tracing::info!("deletion declined");
        return Ok(());
    }

    println!("\n{} {} directories...", "Deleting".red().bold(), report.len());
    let result = cleaner::clean(report.into_records());

    if !result.failed.is_empty() {
        println!("\n{}", "Failed to delete:".red());
        for (record, err) in &result.failed {
            println!("  {} - {}", record.path().display(), err);
        }
    }

    if !result.deleted.is_empty() {
        println!(
            "\n{} Cleaned {} in {} directories",
            "Done!".green().bold(),
            format_size(result.total_cleaned()).green().bold(),
            result.deleted.len().to_string().green()
        );
    }
    tracing::info!(
        deleted = result.deleted.len(),
        failed = result.failed.len(),
        freed_bytes = result.total_cleaned(),
        "cleanup finished"
    );

    Ok(())
}

/// Makes each root absolute without resolving symlinks. No roots means the
/// current directory.
fn resolve_roots(paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    if paths.is_empty() {
        let cwd = std::env::current_dir().map_err(CleanError::CurrentDir)?;
        return Ok(vec![cwd]);
    }

    paths
        .into_iter()
        .map(|p| std::path::absolute(&p).with_context(|| format!("invalid path: {}", p.display())))
        .collect()
}

fn scan_all(config: &CleanerConfig, roots: &[PathBuf]) -> ScanReport {
    let fs = RealFs;
    let mut scanner = TreeScanner::new(config, &fs);
    let mut report = ScanReport::new();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));

    for root in roots {
        spinner.set_message(format!("Scanning {} ({} found)", root.display(), report.len()));
        scanner.scan(root, &mut report);
    }
    spinner.finish_and_clear();

    let stats = scanner.stats();
    tracing::info!(
        dirs_listed = stats.dirs_listed,
        matched = stats.matched,
        skipped_invalid = stats.skipped_invalid,
        too_young = stats.too_young,
        errors = stats.errors,
        "scan finished"
    );
    report
}

fn print_report(report: &ScanReport) {
    let width = report
        .records()
        .iter()
        .map(|r| r.path().display().to_string().len())
        .max()
        .unwrap_or(50);

    for record in report {
        println!(
            "  {:<width$}  {:>10}  {}",
            record.path().display().to_string(),
            record.size_human(),
            record.modified_human().dimmed(),
            width = width
        );
    }
    println!(
        "\n{} {}",
        "Total:".bold(),
        format_size(report.total_size()).green().bold()
    );
}

fn confirm(count: usize) -> bool {
    let answer = Confirm::new()
        .with_prompt(format!("Delete {count} directories?"))
        .default(false)
        .wait_for_newline(true)
        .interact();

    match answer {
        Ok(yes) => yes,
        Err(e) => {
            tracing::warn!(error = %e, "confirmation prompt failed, treating as no");
            false
        }
    }
}
