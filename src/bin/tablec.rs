//! tablec CLI - Build and render HTML tables from JSON, YAML or CSV data

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use std::path::Path;
#[cfg(feature = "cli")]
use tableclass::{
    data::{builtin_template, BUILTIN_TEMPLATES},
    loading::{load_str, InputFormat},
    EscapePolicy, HeaderlessPolicy, RenderOptions, TableError, TableFactory, TeraRenderer,
};
#[cfg(feature = "cli")]
use tracing::{debug, info};
#[cfg(feature = "cli")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "tablec")]
#[command(version)]
#[command(about = "tablec - Build and render HTML tables from structured data", long_about = None)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Input format (detected from the file extension, JSON for stdin)
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// What to do with body cells that have no header column
    #[arg(long, value_enum, default_value_t = Headerless::Keep)]
    headerless: Headerless,

    /// Escaping of cell and attribute values
    #[arg(short, long, value_enum)]
    escape: Option<Escape>,

    /// Class to add to the table element (repeatable)
    #[arg(short, long = "class")]
    classes: Vec<String>,

    /// Custom Tera template file
    #[arg(short, long)]
    template: Option<String>,

    /// Render only the <tbody> section
    #[arg(long)]
    body_only: bool,

    /// Render options file (JSON or YAML)
    #[arg(long)]
    config: Option<String>,

    /// Print the record tree as JSON instead of rendering HTML
    #[arg(long)]
    record: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Print a bundled template (a starting point for custom templates)
    Template {
        /// Template name
        #[arg(default_value = "table.html")]
        name: String,
    },

    /// List bundled templates
    Templates,
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Csv,
}

#[cfg(feature = "cli")]
impl From<Format> for InputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Json => InputFormat::Json,
            Format::Yaml => InputFormat::Yaml,
            Format::Csv => InputFormat::Csv,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Headerless {
    /// Leave body cells untouched
    Keep,
    /// Hide cells without a visible header column
    Hide,
    /// Remove cells without a header column
    Remove,
}

#[cfg(feature = "cli")]
impl From<Headerless> for HeaderlessPolicy {
    fn from(h: Headerless) -> Self {
        match h {
            Headerless::Keep => HeaderlessPolicy::Keep,
            Headerless::Hide => HeaderlessPolicy::Hide,
            Headerless::Remove => HeaderlessPolicy::Remove,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum Escape {
    /// Escape HTML special characters
    Html,
    /// Write values as-is (trusted input only)
    Raw,
}

#[cfg(feature = "cli")]
impl From<Escape> for EscapePolicy {
    fn from(e: Escape) -> Self {
        match e {
            Escape::Html => EscapePolicy::Html,
            Escape::Raw => EscapePolicy::Raw,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle subcommands first
    if let Some(cmd) = cli.command {
        return handle_subcommand(cmd);
    }

    // Read input
    let (input, format) = match cli.input_file {
        Some(ref path) => {
            let format = match cli.format {
                Some(f) => f.into(),
                None => InputFormat::from_path(Path::new(path)).unwrap_or(InputFormat::Json),
            };
            (fs::read_to_string(path)?, format)
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            (buffer, cli.format.map(Into::into).unwrap_or(InputFormat::Json))
        }
    };
    debug!(%format, bytes = input.len(), "input read");

    // Build table
    let factory = TableFactory::new()
        .with_classes(cli.classes.iter().cloned())
        .with_headerless(cli.headerless.into());
    let table = factory.from_input(load_str(&input, format).map_err(to_io)?);
    info!(rows = table.row_count(), "table built");

    // Record mode: dump the record tree
    let result = if cli.record {
        let escape = cli.escape.map(Into::into).unwrap_or(EscapePolicy::Raw);
        table.to_record_with(escape).to_json_pretty().map_err(to_io)?
    } else {
        let mut options = match cli.config {
            Some(ref path) => load_options(path)?,
            None => RenderOptions::default(),
        };
        if let Some(escape) = cli.escape {
            options.escape = escape.into();
        }
        if cli.body_only {
            options = RenderOptions {
                template_name: RenderOptions::body_only().template_name,
                ..options
            };
        }

        let mut renderer = TeraRenderer::with_options(options.clone()).map_err(to_io)?;
        if let Some(ref path) = cli.template {
            let content = fs::read_to_string(path)?;
            let name = Path::new(path)
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("custom.html")
                .to_string();
            renderer.add_template(&name, &content).map_err(to_io)?;
            renderer.set_options(options.with_template(name));
        }
        table.render(&renderer).map_err(to_io)?
    };

    // Output
    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            eprintln!("✓ Output written to: {}", path);
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn handle_subcommand(cmd: Commands) -> io::Result<()> {
    match cmd {
        Commands::Template { name } => match builtin_template(&name) {
            Some(content) => {
                print!("{}", content);
                Ok(())
            }
            None => Err(to_io(TableError::invalid(format!(
                "no bundled template named '{}'",
                name
            )))),
        },
        Commands::Templates => {
            let mut names: Vec<_> = BUILTIN_TEMPLATES.keys().collect();
            names.sort();
            for name in names {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

/// Render options from a JSON or YAML file (YAML parsing accepts both)
#[cfg(feature = "cli")]
fn load_options(path: &str) -> io::Result<RenderOptions> {
    let text = fs::read_to_string(path)?;
    serde_yaml::from_str(&text).map_err(|e| to_io(TableError::from(e)))
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn to_io(err: TableError) -> io::Error {
    io::Error::other(err)
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install tableclass --features cli");
    eprintln!("  tablec [OPTIONS] [INPUT_FILE]");
}
