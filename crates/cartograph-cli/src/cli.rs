//! Command-line interface for the cartograph utility
//!
//! Provides a CLI to load a context map from JSON and render it as a PlantUML
//! component diagram.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use cartograph::core::{ContextMap, Relationship, Renderer as _, DEFAULT_NOTE_WRAP_THRESHOLD};
use cartograph::plantuml::ComponentDiagramRenderer;

/// Cartograph - Render DDD context maps as PlantUML component diagrams
#[derive(Parser)]
#[command(name = "cartograph")]
#[command(about = "A Rust utility to render DDD context maps as PlantUML component diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a context map as a PlantUML component diagram
    Render {
        /// Input file containing a JSON context map (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the diagram text (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Soft line width for wrapped vision-statement notes
        #[arg(long, default_value_t = DEFAULT_NOTE_WRAP_THRESHOLD)]
        wrap_width: usize,
    },

    /// Summarize the contexts and relationships in a context map
    Inspect {
        /// Input file containing a JSON context map (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Main CLI application
pub struct CartographApp;

impl CartographApp {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, cli: Cli) -> Result<()> {
        match cli.command {
            Commands::Render {
                input,
                output,
                wrap_width,
            } => self.render(input, output, wrap_width),
            Commands::Inspect { input, json } => self.inspect(input, json),
        }
    }

    fn render(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        wrap_width: usize,
    ) -> Result<()> {
        let map = self.load_map(input)?;
        let renderer = ComponentDiagramRenderer::with_note_wrap_threshold(wrap_width);
        let diagram = renderer.render(&map)?;
        info!(
            context_count = map.context_count(),
            relationship_count = map.relationship_count(),
            "Rendered component diagram"
        );
        write_output(output, &diagram)
    }

    fn inspect(&self, input: Option<PathBuf>, json: bool) -> Result<()> {
        let map = self.load_map(input)?;
        let summary = MapSummary::of(&map);

        let mut stdout = io::stdout().lock();
        if json {
            serde_json::to_writer_pretty(&mut stdout, &summary)?;
            writeln!(stdout)?;
        } else {
            writeln!(stdout, "Bounded contexts: {}", summary.context_count)?;
            for name in &summary.contexts {
                writeln!(stdout, "  - {}", name)?;
            }
            writeln!(stdout, "Relationships: {}", summary.relationship_count)?;
            for kind in &summary.relationships {
                writeln!(stdout, "  - {}", kind)?;
            }
        }
        Ok(())
    }

    fn load_map(&self, input: Option<PathBuf>) -> Result<ContextMap> {
        let text = read_input(input)?;
        let map: ContextMap =
            serde_json::from_str(&text).context("Failed to parse context map JSON")?;
        debug!(
            context_count = map.context_count(),
            relationship_count = map.relationship_count(),
            "Loaded context map"
        );
        Ok(map)
    }
}

impl Default for CartographApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat summary of a context map for the inspect command
#[derive(serde::Serialize)]
struct MapSummary {
    context_count: usize,
    relationship_count: usize,
    contexts: Vec<String>,
    relationships: Vec<String>,
}

impl MapSummary {
    fn of(map: &ContextMap) -> Self {
        let contexts = map
            .bounded_contexts()
            .iter()
            .map(|bc| bc.name().to_string())
            .collect();
        let relationships = map
            .relationships()
            .iter()
            .map(|rel| match rel {
                Relationship::Partnership(r) => {
                    format!("Partnership: {} <-> {}", r.participant1(), r.participant2())
                }
                Relationship::SharedKernel(r) => {
                    format!("Shared Kernel: {} <-> {}", r.participant1(), r.participant2())
                }
                Relationship::UpstreamDownstream(r) if r.is_customer_supplier() => {
                    format!("Customer-Supplier: {} -> {}", r.upstream(), r.downstream())
                }
                Relationship::UpstreamDownstream(r) => {
                    format!("Upstream-Downstream: {} -> {}", r.upstream(), r.downstream())
                }
            })
            .collect();
        Self {
            context_count: map.context_count(),
            relationship_count: map.relationship_count(),
            contexts,
            relationships,
        }
    }
}

fn read_input(input: Option<PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(&path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(output: Option<PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) if path.as_os_str() != "-" => fs::write(&path, content)
            .with_context(|| format!("Failed to write output file: {}", path.display())),
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            Ok(())
        }
    }
}
