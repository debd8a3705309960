//! axtable CLI - Inspect the table structure inferred from an accessibility tree

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read};
#[cfg(feature = "cli")]
use axtable::{find_tables, format_table_info, format_warnings, AxTree, TableConfig, TreeUpdate};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "axtable")]
#[command(version)]
#[command(about = "Inspect table structure inferred from an accessibility tree", long_about = None)]
struct Cli {
    /// JSON tree update file (reads from stdin if not provided)
    input_file: Option<String>,

    /// Only report this table node
    #[arg(short, long)]
    table: Option<i32>,

    /// Synthesize column and header-container nodes
    #[arg(long)]
    extra_mac_nodes: bool,

    /// Print the computed structure as JSON
    #[arg(long)]
    json: bool,

    /// Exit with an error if any table produced warnings
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(message) = run(&cli) {
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }
}

#[cfg(feature = "cli")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

#[cfg(feature = "cli")]
fn run(cli: &Cli) -> Result<(), String> {
    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path).map_err(|e| format!("{}: {}", path, e))?,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| e.to_string())?;
            buffer
        }
    };

    let update = TreeUpdate::from_json(&input).map_err(|e| format!("invalid tree JSON: {}", e))?;
    let config = TableConfig {
        enable_extra_mac_nodes: cli.extra_mac_nodes,
    };
    let mut tree = AxTree::with_config(update, config).map_err(|e| e.to_string())?;

    let table_ids = match cli.table {
        Some(id) if tree.is_table(id) => vec![id],
        Some(id) => return Err(format!("node {} is not a table", id)),
        None => find_tables(&tree),
    };
    if table_ids.is_empty() {
        return Err("no table nodes found".to_string());
    }

    let mut warning_count = 0;
    let mut infos = Vec::with_capacity(table_ids.len());
    for id in table_ids {
        if let Some(info) = tree.table_info(id) {
            warning_count += info.warnings.len();
            if !cli.quiet && info.has_warnings() {
                eprint!("{}", format_warnings(info));
            }
            infos.push(info.clone());
        }
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&infos).map_err(|e| e.to_string())?;
        println!("{}", json);
    } else {
        for info in &infos {
            println!("{}", format_table_info(info));
        }
    }

    if cli.strict && warning_count > 0 {
        return Err(format!("{} table warning(s) in strict mode", warning_count));
    }
    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install axtable --features cli");
    eprintln!("  axtable [OPTIONS] [INPUT_FILE]");
}
