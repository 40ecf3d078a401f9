//! Minimal CLI: trim | schema over one or more JSON documents.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::error::Error;
use crate::{infer, input, jq_exec, trim};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// derive size-reduced samples and inferred JSON Schemas from JSON documents
#[derive(Parser, Debug)]
#[command(name = "json-digest", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// cap every array in each document at a fixed element count
    Trim(TrimOut),
    /// infer one JSON Schema covering all input documents
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// treat each input as newline-delimited JSON (one document per line)
    #[arg(long, default_value_t = false)]
    ndjson: bool,

    /// JSON Pointer selecting a subnode of each document (e.g. /data/items)
    #[arg(long)]
    json_pointer: Option<String>,

    /// jq pre-process filter applied to each document
    #[arg(long)]
    jq_expr: Option<String>,

    /// one or more inputs; literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(Args, Debug)]
struct TrimOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// maximum number of elements kept per array, at every depth
    #[arg(short, long)]
    limit: usize,

    /// output file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    fn for_each_document(&self, mut apply: impl FnMut(Value)) -> Result<(), Error> {
        let source_paths = input::resolve_file_path_patterns(&self.input)?;
        for source_path in source_paths {
            let origin = source_path.to_string_lossy().to_string();
            let source =
                std::fs::read_to_string(&source_path).map_err(|source| Error::Read {
                    path: source_path.clone(),
                    source,
                })?;

            let mut documents = Vec::new();
            if self.ndjson {
                for line in source.lines().filter(|line| !line.trim().is_empty()) {
                    documents.push(input::parse_with_path(line, &origin)?);
                }
            } else {
                documents.push(input::parse_with_path(&source, &origin)?);
            }

            for document in documents {
                let document = match self.json_pointer.as_deref() {
                    None => document,
                    Some(pointer) => input::select_pointer(&document, pointer, &origin)?,
                };
                match self.jq_expr.as_deref() {
                    None => apply(document),
                    Some(expr) => {
                        for value in jq_exec::run_filter(expr, &document, &origin)? {
                            apply(value);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Trim(target) => {
                let mut trimmed = Vec::new();
                target.input_settings.for_each_document(|value| {
                    trimmed.push(trim::trim_value(&value, target.limit));
                })?;
                // One document pretty-prints; several emit one line each.
                let rendered = match trimmed.as_slice() {
                    [single] => serde_json::to_string_pretty(single)?,
                    many => many
                        .iter()
                        .map(Value::to_string)
                        .collect::<Vec<_>>()
                        .join("\n"),
                };
                write_output(target.out.as_deref(), &rendered)?;
            }
            Command::Schema(target) => {
                let mut inference = infer::Inference::new();
                target
                    .input_settings
                    .for_each_document(|value| inference.observe_value(&value))?;
                let rendered = serde_json::to_string_pretty(&inference.to_document())?;
                write_output(target.out.as_deref(), &rendered)?;
            }
        }
        Ok(())
    }
}

fn write_output(out: Option<&Path>, rendered: &str) -> anyhow::Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, rendered)?;
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
