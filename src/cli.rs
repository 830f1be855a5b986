//! Minimal CLI: infer → (header | schema)
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use crate::schema::TypeName;
use crate::{codegen, infer, input, naming};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// infer record types from one JSON sample and emit a C++ header or a schema view
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// infer and emit a C++ header (structs + nlohmann/json bindings)
    Header(HeaderOut),
    /// infer and print the schema as pretty JSON
    Schema(SchemaOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON sample file
    #[arg(long, short)]
    input: PathBuf,

    /// root type name (defaults to the input file stem, e.g. person.json → Person)
    #[arg(long)]
    root_type: Option<String>,
}

#[derive(Args, Debug)]
struct HeaderOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .hpp file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Args, Debug)]
struct SchemaOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Root type name plus the parsed sample document.
    fn load(&self) -> Result<(TypeName, Value)> {
        let root = match self.root_type.as_deref() {
            Some(raw) => naming::resolve(raw),
            None => naming::root_name_from_path(&self.input),
        };
        let document = input::load_document(&self.input)?;
        Ok((root, document))
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Header(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let (root, document) = target.input_settings.load()?;
                let schema = infer::infer(root.clone(), &document)?;

                // Guard token comes from the output artifact's name; for
                // stdout, fall back to `<input stem>.hpp`.
                let guard_source = match target.out.as_ref().and_then(|p| p.file_name()) {
                    Some(name) => name.to_string_lossy().into_owned(),
                    None => {
                        let stem = target
                            .input_settings
                            .input
                            .file_stem()
                            .map(|s| s.to_string_lossy().into_owned())
                            .unwrap_or_default();
                        format!("{stem}.hpp")
                    }
                };
                let guard = naming::header_guard(&guard_source);

                let mut cg = codegen::Codegen::new();
                cg.emit(&schema, &guard);
                write_out(target.out.as_deref(), &cg.into_string())?;

                if let Some(out) = target.out.as_ref() {
                    eprintln!("wrote {} (root type: {root})", out.display());
                }
            }
            Command::Schema(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let (root, document) = target.input_settings.load()?;
                let schema = infer::infer(root, &document)?;
                let schema_src =
                    serde_json::to_string_pretty(&schema).context("failed to render schema")?;
                write_out(target.out.as_deref(), &schema_src)?;
            }
        }
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_out(out: Option<&Path>, src: &str) -> Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
            }
            std::fs::write(out, src)
                .with_context(|| format!("failed to write {}", out.display()))?;
        }
        None => println!("{src}"),
    }
    Ok(())
}
