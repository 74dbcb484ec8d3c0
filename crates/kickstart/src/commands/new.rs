//! New command: scaffold a project workspace

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use console::Term;
use dialoguer::Input;
use kickstart_core::KickstartConfig;
use kickstart_projects::{BoilerplateWriter, ProjectType, ScaffoldRequest, WorkspaceBuilder};
use std::io::BufRead;

use crate::cli::NewArgs;
use crate::output;

pub async fn run(args: NewArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config_path)?;

    // Anything not given as a flag is asked for
    let mut prompted = false;

    let project_type = match args.project_type {
        Some(project_type) => project_type,
        None => {
            prompted = true;
            prompt_project_type()?
        }
    };
    let project_type: ProjectType = project_type.parse()?;

    let project_name = match args.name {
        Some(name) => name,
        None => {
            prompted = true;
            prompt_text("Enter the project name", None)?
        }
    };

    let mut request = ScaffoldRequest::new(project_type, project_name.trim())?
        .with_base_dir(args.output_dir.unwrap_or_else(|| Utf8PathBuf::from(".")));
    if let Some(author) = resolve_author(args.author, &config, prompted)? {
        request = request.with_author(author);
    }

    let builder = WorkspaceBuilder::from_config(&config, args.bootstrap)
        .context("Failed to prepare project layout")?;

    if args.dry_run {
        return print_plan(&builder, &request);
    }

    let spinner = output::spinner(&format!(
        "Creating {} project '{}'...",
        request.project_type, request.project_name
    ));
    let result = builder.build(&request).await;
    spinner.finish_and_clear();

    let summary = result.with_context(|| {
        format!(
            "Failed to create {} project '{}'",
            request.project_type, request.project_name
        )
    })?;
    output::scaffold_summary(&summary, builder.bootstrapper_name());

    Ok(())
}

/// Author precedence: flag, then a prompt when the session is interactive,
/// then the configured default. `None` lets the license use its placeholder.
fn resolve_author(
    flag: Option<String>,
    config: &KickstartConfig,
    prompted: bool,
) -> Result<Option<String>> {
    let author = match flag {
        Some(author) => Some(author),
        None if prompted => Some(prompt_text(
            "Enter the author name (optional)",
            config.default_author.as_deref(),
        )?),
        None => config.default_author.clone(),
    };

    Ok(author
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty()))
}

fn prompt_project_type() -> Result<String> {
    let names: Vec<_> = ProjectType::all().iter().map(|t| t.as_str()).collect();
    prompt_text(
        &format!("Enter the project type ({})", names.join(", ")),
        None,
    )
}

fn prompt_text(prompt: &str, default: Option<&str>) -> Result<String> {
    if !Term::stderr().is_term() {
        return read_piped_answer(prompt, default);
    }

    let mut input = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    input.interact_text().context("Failed to read input")
}

/// Answers piped on stdin, one per line. End of input counts as an empty
/// answer.
fn read_piped_answer(prompt: &str, default: Option<&str>) -> Result<String> {
    match default {
        Some(default) => eprintln!("{} [{}]:", prompt, default),
        None => eprintln!("{}:", prompt),
    }

    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input")?;

    Ok(answer_or_default(&line, default))
}

fn answer_or_default(line: &str, default: Option<&str>) -> String {
    match (line.trim(), default) {
        ("", Some(default)) => default.to_string(),
        (answer, _) => answer.to_string(),
    }
}

fn print_plan(builder: &WorkspaceBuilder, request: &ScaffoldRequest) -> Result<()> {
    let planned = builder.plan(request)?;

    output::header(&format!(
        "Dry run: {} project '{}'",
        request.project_type, request.project_name
    ));
    output::kv("Root", request.root().as_str());
    output::kv("Environment", builder.bootstrapper_name());
    output::kv(
        "Boilerplate",
        &BoilerplateWriter::file_names().collect::<Vec<_>>().join(", "),
    );
    output::planned_paths(&planned);
    output::info("Dry run: nothing was written");

    Ok(())
}
