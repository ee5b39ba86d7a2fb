//! CLI entry point for canopy

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use canopy::{OutputConfig, SummaryModes, TreeFormatter, TreeWalker, WalkerConfig, resolve_root};
use clap::{Parser, ValueEnum};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "A tree command that searches file names and contents")]
#[command(version)]
#[command(after_help = "Examples:
  canopy                      Show tree of current directory
  canopy /path/to/dir         Show tree of specified directory
  canopy -a                   Include hidden files
  canopy -d                   Show directories only
  canopy -L 2                 Limit depth to 2 levels
  canopy -s \"import\"          Search for 'import' in files
  canopy -s \"TODO,FIXME\"      Search for either keyword
  canopy -s \"def\\s+\\w+\" -r    Search using a regex pattern
  canopy -n test -m           Show only entries whose name contains 'test'")]
struct Args {
    /// Directory to display
    #[arg(default_value = ".")]
    directory: PathBuf,

    /// Show hidden files and directories
    #[arg(short, long)]
    all: bool,

    /// List directories only
    #[arg(short = 'd', long = "dirs-only")]
    dirs_only: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', long = "level", value_name = "DEPTH")]
    level: Option<usize>,

    /// Search for PATTERN in file contents (comma-separated keywords unless -r)
    #[arg(short = 's', long = "search", value_name = "PATTERN")]
    search: Option<String>,

    /// Search for PATTERN in file and directory names
    #[arg(short = 'n', long = "name", value_name = "PATTERN")]
    name: Option<String>,

    /// Treat search and name patterns as regular expressions
    #[arg(short = 'r', long = "regex")]
    regex: bool,

    /// Case-insensitive search
    #[arg(short = 'i', long = "ignore-case")]
    ignore_case: bool,

    /// Show only matching files and the directories that lead to them
    #[arg(short = 'm', long = "matches-only")]
    matches_only: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Skip content search for files larger than SIZE.
    /// Use suffixes: K, M, G (e.g., 5M for 5MB)
    #[arg(long = "max-filesize", value_name = "SIZE")]
    max_file_size: Option<String>,
}

/// Parse a file size string like "5M", "100K", "1G" into bytes.
/// Supports suffixes: K/KB (1024), M/MB (1024^2), G/GB (1024^3)
/// Without suffix, interprets as bytes.
fn parse_file_size(s: &str) -> Result<u64, String> {
    let s = s.trim().to_uppercase();
    let (num_str, multiplier) = if let Some(n) = s.strip_suffix("GB") {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('G') {
        (n, 1024 * 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("MB") {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix('M') {
        (n, 1024 * 1024)
    } else if let Some(n) = s.strip_suffix("KB") {
        (n, 1024)
    } else if let Some(n) = s.strip_suffix('K') {
        (n, 1024)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str
        .trim()
        .parse()
        .map_err(|_| format!("invalid number: {}", num_str))?;

    num.checked_mul(multiplier)
        .ok_or_else(|| format!("size too large: {}", s))
}

fn run(args: &Args, max_file_size: Option<u64>) -> canopy::Result<()> {
    let root = resolve_root(&args.directory)?;

    let walker_config = WalkerConfig {
        show_hidden: args.all,
        dirs_only: args.dirs_only,
        max_depth: args.level,
        search_pattern: args.search.clone(),
        name_pattern: args.name.clone(),
        is_regex: args.regex,
        ignore_case: args.ignore_case,
        matches_only: args.matches_only,
        max_file_size,
    };

    // Compiles the patterns, so an invalid regex fails before any output
    let walker = TreeWalker::new(walker_config)?;
    let modes = SummaryModes::from(walker.config());

    log::debug!("walking {}", root.display());
    let listing = walker.walk(&root);

    let formatter = TreeFormatter::new(OutputConfig::with_color(should_use_color(args.color)), modes);
    formatter.print(&root, &listing)?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    let args = Args::parse();

    let max_file_size = args.max_file_size.as_ref().map(|size_str| {
        parse_file_size(size_str).unwrap_or_else(|e| {
            eprintln!("canopy: invalid --max-filesize '{}': {}", size_str, e);
            process::exit(1);
        })
    });

    if let Err(e) = run(&args, max_file_size) {
        eprintln!("canopy: {}", e);
        process::exit(1);
    }
}
