//! CLI command implementations.
//!
//! Commands are thin: they parse arguments, call the schema layer and render
//! results. No command mutates anything.

use crate::schema::{insert_schema, validate_insert, EntityKind};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_document, write_failures, write_json};

/// Parses arguments and dispatches to the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    match cli.command {
        Command::Entities => run_entities(),
        Command::Validate { entity, file } => run_validate(&entity, file.as_deref()),
    }
}

/// Prints every entity kind with its insert contract.
fn run_entities() -> CliResult<()> {
    for kind in EntityKind::ALL {
        let schema = insert_schema(kind);
        println!("{}", kind);
        for (name, def) in &schema.fields {
            println!(
                "  {:<16} {}{}",
                name,
                def.field_type.type_name(),
                if def.required { "" } else { " (optional)" }
            );
        }
    }
    Ok(())
}

/// Validates one document against the named entity kind's insert contract.
fn run_validate(entity: &str, file: Option<&std::path::Path>) -> CliResult<()> {
    let kind: EntityKind = entity
        .parse()
        .map_err(|_| CliError::unknown_entity(entity))?;
    let document = read_document(file)?;

    match validate_insert(kind, &document) {
        Ok(normalized) => {
            write_json(&normalized);
            Ok(())
        }
        Err(errors) => {
            write_failures(&errors);
            Err(CliError::invalid_document(errors.failures().len()))
        }
    }
}
