//! Types command: list the supported project types

use anyhow::{Context, Result};
use camino::Utf8Path;
use kickstart_projects::{LayoutLoader, LayoutTable, ProjectType};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::TypesArgs;

#[derive(Tabled)]
struct TypeRow {
    name: String,
    aliases: String,
    description: String,
    files: usize,
}

#[derive(Serialize)]
struct TypeJson {
    name: &'static str,
    description: &'static str,
    aliases: &'static [&'static str],
    files: Vec<String>,
}

pub fn run(args: TypesArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = super::load_config(config_path)?;
    let layouts = LayoutLoader::load(config.layouts_file.as_deref())
        .context("Failed to load project layouts")?;

    if args.json {
        let types = type_entries(&layouts)?;
        println!("{}", serde_json::to_string_pretty(&types)?);
    } else {
        let rows = type_entries(&layouts)?
            .into_iter()
            .map(|entry| TypeRow {
                name: entry.name.to_string(),
                aliases: entry.aliases.join(", "),
                description: entry.description.to_string(),
                files: entry.files.len(),
            })
            .collect::<Vec<_>>();

        let mut table = Table::new(rows);
        table.with(Style::sharp());
        println!("{}", table);
        println!();
        println!("Every project also gets {} common files.", layouts.common().len());
    }

    Ok(())
}

fn type_entries(layouts: &LayoutTable) -> Result<Vec<TypeJson>> {
    ProjectType::all()
        .into_iter()
        .map(|project_type| {
            Ok(TypeJson {
                name: project_type.as_str(),
                description: project_type.description(),
                aliases: project_type.aliases(),
                files: layouts.extension(project_type)?.to_vec(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_cover_every_type() {
        let layouts = LayoutLoader::from_embedded().unwrap();
        let entries = type_entries(&layouts).unwrap();

        let names: Vec<_> = entries.iter().map(|e| e.name).collect();
        assert_eq!(
            names,
            vec!["data-engineering", "data-science", "machine-learning", "generative-ai"]
        );
        assert!(entries.iter().all(|e| !e.files.is_empty()));
    }
}
