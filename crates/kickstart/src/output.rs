//! Terminal output utilities

use camino::Utf8PathBuf;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use kickstart_projects::{EnvOutcome, InitOutcome, ScaffoldSummary};

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red().bold(), msg);
}

/// Print a warning message
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("⚠").yellow().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Create a spinner
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(spinner_style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Print the skeleton a dry run would create
pub fn planned_paths(planned: &[Utf8PathBuf]) {
    header(&format!("Skeleton ({} files)", planned.len()));
    for path in planned {
        println!("  {}", path);
    }
    println!();
}

/// Print what a scaffolding run did
pub fn scaffold_summary(summary: &ScaffoldSummary, strategy: &str) {
    success(&format!(
        "Created {} project '{}'",
        summary.project_type, summary.project_name
    ));
    kv("Root", summary.root.as_str());
    kv(
        "Skeleton",
        &format!(
            "{} files written, {} kept",
            summary.materialized.written, summary.materialized.preserved
        ),
    );

    if summary.bootstrap.init == InitOutcome::SkippedExisting {
        warning("Project directory already existed; project initialization skipped");
    }
    kv(
        "Environment",
        &environment_line(&summary.bootstrap.environment, strategy),
    );
    kv("Boilerplate", &format!("{} files", summary.boilerplate.len()));
}

fn environment_line(outcome: &EnvOutcome, strategy: &str) -> String {
    match outcome {
        EnvOutcome::Created { path } => format!("{} ({})", path, strategy),
        EnvOutcome::SkippedExisting { path } => format!("{} (already present)", path),
        EnvOutcome::Disabled => "none".to_string(),
    }
}
