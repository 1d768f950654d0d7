use anyhow::{Result, bail};
use appdb::config::{Blacklist, OutputFormat, load_config};
use appdb::matcher::FuzzyMatcher;
use appdb::{AppDb, AppEntry, LoadOptions, ProcessEnv, load_with, resolve_base_dirs};
use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file (default: <config dir>/appdb/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all applications in discovery order
    List,
    /// Show one application by exact name
    Show { name: String },
    /// Fuzzy search application names
    Search {
        query: String,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Print the base directories in scan order
    Dirs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let level = if args.verbose { "debug" } else { config.general.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let format = if args.json { OutputFormat::Json } else { config.general.format };
    let blacklist = config.filter.compile()?;

    if let Command::Dirs = args.command {
        let dirs = resolve_base_dirs(&ProcessEnv)?;
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dirs)?),
            OutputFormat::Text => dirs.iter().for_each(|d| println!("{}", d.display())),
        }
        return Ok(());
    }

    let opts = LoadOptions {
        max_keys: config.scan.max_keys,
    };
    let db = load_with(&ProcessEnv, &opts)?;

    let result = run(&args.command, &db, &blacklist, format, config.search.limit);
    db.release();
    result
}

fn run(
    command: &Command,
    db: &AppDb,
    blacklist: &Blacklist,
    format: OutputFormat,
    default_limit: usize,
) -> Result<()> {
    match command {
        Command::List => {
            let visible: Vec<&AppEntry> =
                db.iter().filter(|e| !blacklist.is_hidden(&e.name)).collect();
            print_entries(&visible, format)
        }
        Command::Show { name } => {
            let Some(entry) = db.get(name).filter(|e| !blacklist.is_hidden(&e.name)) else {
                bail!("no application named '{}'", name);
            };
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entry)?),
                OutputFormat::Text => print_details(entry),
            }
            Ok(())
        }
        Command::Search { query, limit } => {
            let limit = limit.unwrap_or(default_limit);
            let hits = FuzzyMatcher::new().match_entries(query, db.as_slice());
            debug!("'{}' matched {} of {} entries", query, hits.len(), db.len());
            let visible: Vec<&AppEntry> = hits
                .into_iter()
                .map(|(i, _)| &db.as_slice()[i])
                .filter(|e| !blacklist.is_hidden(&e.name))
                .take(limit)
                .collect();
            print_entries(&visible, format)
        }
        Command::Dirs => Ok(()),
    }
}

fn print_entries(entries: &[&AppEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(entries)?),
        OutputFormat::Text => {
            for entry in entries {
                let term = if entry.terminal { " [terminal]" } else { "" };
                println!("{}\t{}{}", entry.name, entry.exec.as_deref().unwrap_or("-"), term);
            }
        }
    }
    Ok(())
}

fn print_details(entry: &AppEntry) {
    println!("Name:        {}", entry.name);
    let optional = [
        ("GenericName", &entry.generic_name),
        ("Comment", &entry.comment),
        ("Icon", &entry.icon),
        ("Exec", &entry.exec),
        ("Path", &entry.path),
    ];
    for (label, value) in optional {
        if let Some(value) = value {
            println!("{:<12} {}", format!("{label}:"), value);
        }
    }
    println!("Terminal:    {}", entry.terminal);
}
