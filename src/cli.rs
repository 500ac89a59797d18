//! Minimal CLI: load schema docs → (sample | list)
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use crate::decl;
use crate::schema::{Schema, SchemaSet};
use crate::synth::Synthesizer;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// synthesize constraint-respecting sample values from declared schemas
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// synthesize one or more samples for a schema and print them as JSON
    Sample(SampleOut),
    /// print the resolved schema inventory
    List(ListOut),
}

#[derive(Args, Debug, Clone)]
struct InputSettings {
    /// JSON Pointer to the schema document inside each input file
    /// (e.g. /components/schemas)
    #[arg(long)]
    json_pointer: Option<String>,

    /// One or more schema documents. May be literal paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,
}

#[derive(clap::Parser, Debug)]
struct SampleOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// schema to synthesize (defaults to the last declared)
    #[arg(long)]
    schema: Option<String>,

    /// RNG seed for reproducible samples (OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// number of samples to synthesize
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct ListOut {
    #[command(flatten)]
    input_settings: InputSettings,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl InputSettings {
    /// Gather declarations from every input, then resolve them as one set so
    /// schema references may cross file boundaries.
    fn load_set(&self) -> anyhow::Result<SchemaSet> {
        let source_paths = resolve_file_path_patterns(&self.input)?;
        let mut decls = Vec::new();
        for source_path in source_paths {
            let source_path_str = source_path.to_string_lossy().to_string();
            let source = std::fs::read_to_string(&source_path)
                .with_context(|| format!("failed to read schema file {source_path_str}"))?;
            let file = match self.json_pointer.as_deref() {
                None => decl::from_str_with_path(&source)
                    .map_err(|e| anyhow::anyhow!("{source_path_str}: {e}"))?,
                Some(ptr) => {
                    let doc: serde_json::Value = serde_json::from_str(&source).with_context(
                        || format!("failed to parse JSON source file {source_path_str}"),
                    )?;
                    let node = doc.pointer(ptr).with_context(|| {
                        format!("JSON pointer {ptr} matched nothing in {source_path_str}")
                    })?;
                    decl::from_value_with_path(node.clone())
                        .map_err(|e| anyhow::anyhow!("{source_path_str}: {e}"))?
                }
            };
            decls.extend(file.schemas);
        }
        Ok(SchemaSet::from_decls(decls)?)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Sample(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let set = target.input_settings.load_set()?;
                let schema_name = match target.schema.as_deref() {
                    Some(name) => name.to_string(),
                    None => set
                        .last()
                        .map(|s| s.name().to_string())
                        .context("no schemas declared in the input")?,
                };

                let mut synthesizer = match target.seed {
                    Some(seed) => Synthesizer::new(&set, seed),
                    None => Synthesizer::from_entropy(&set),
                };

                let mut rendered = Vec::with_capacity(target.count.max(1) as usize);
                for _ in 0..target.count.max(1) {
                    rendered.push(synthesizer.synthesize_pretty(&schema_name)?);
                }
                let output = rendered.join("\n");

                if let Some(out) = target.out.as_ref() {
                    if let Some(parent) = out.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(out, &output)?;
                } else {
                    println!("{output}");
                }
                Ok(())
            }
            Command::List(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(());
                }

                let set = target.input_settings.load_set()?;
                for schema in set.iter() {
                    match schema {
                        Schema::Record(rec) => {
                            println!("{} (record, {} fields)", rec.name, rec.fields.len())
                        }
                        Schema::Root(root) => println!("{} (root alias)", root.name),
                    }
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn resolve_file_path_patterns<I>(patterns: I) -> anyhow::Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in glob::glob(pattern)? {
                out.push(entry?);
                matched_any = true;
            }
            if !matched_any {
                // Explicit glob that matched nothing -> surface as an error
                anyhow::bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            // Treat as a literal path
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
