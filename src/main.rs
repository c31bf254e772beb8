mod debug_report;

use parsstem::{LruCache, NoCache, Options, Resources, StemCache, TrieCache};
use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DATA_ENV: &str = "PARSSTEM_DATA";
const DEFAULT_DATA_DIR: &str = "Resources";

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let resources = match Resources::load(&config.data_dir) {
        Ok(resources) => resources,
        Err(err) => {
            eprintln!("error: failed to load resources from '{}': {err}", config.data_dir.display());
            std::process::exit(1);
        }
    };

    let cache: Box<dyn StemCache> = match config.cache {
        CachePolicy::Unbounded => Box::new(TrieCache::new()),
        CachePolicy::Bounded(capacity) => Box::new(LruCache::new(capacity)),
        CachePolicy::Disabled => Box::new(NoCache),
    };
    let mut stemmer = resources.stemmer_with(cache, config.options);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for word in &config.words {
        if config.trace {
            let trace = stemmer.run_with_trace(word);
            debug_report::print_trace(&trace, config.color);
        } else if writeln!(out, "{}", stemmer.run(word)).is_err() {
            // Closed pipe.
            break;
        }
    }
}

enum CachePolicy {
    Unbounded,
    Bounded(usize),
    Disabled,
}

struct CliConfig {
    words: Vec<String>,
    data_dir: PathBuf,
    options: Options,
    cache: CachePolicy,
    trace: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut words: Vec<String> = Vec::new();
    let mut data_dir = std::env::var_os(DATA_ENV).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
    let mut options = Options::default();
    let mut cache = CachePolicy::Unbounded;
    let mut trace = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("parsstem {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--trace" => trace = true,
            "--no-verbs" => options.enable_verbs = false,
            "--no-cache" => cache = CachePolicy::Disabled,
            "-d" | "--data" => {
                let value = args.next().ok_or_else(|| format!("error: {arg} expects a directory"))?;
                data_dir = PathBuf::from(value);
            }
            "--cache-capacity" => {
                let value = args.next().ok_or_else(|| "error: --cache-capacity expects a value".to_string())?;
                cache = CachePolicy::Bounded(parse_capacity(&value)?);
            }
            "--pattern-count" => {
                let value = args.next().ok_or_else(|| "error: --pattern-count expects a value".to_string())?;
                options.pattern_count = parse_pattern_count(&value)?;
            }
            "--" => {
                words.extend(args.by_ref());
                break;
            }
            _ if arg.starts_with("--data=") => {
                data_dir = PathBuf::from(arg.trim_start_matches("--data="));
            }
            _ if arg.starts_with("--cache-capacity=") => {
                cache = CachePolicy::Bounded(parse_capacity(arg.trim_start_matches("--cache-capacity="))?);
            }
            _ if arg.starts_with("--pattern-count=") => {
                options.pattern_count = parse_pattern_count(arg.trim_start_matches("--pattern-count="))?;
            }
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => words.push(arg),
        }
    }

    if words.is_empty() {
        words = read_stdin_words()?;
    }
    if words.is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { words, data_dir, options, cache, trace, color })
}

fn read_stdin_words() -> Result<Vec<String>, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.split_whitespace().map(str::to_string).collect())
}

fn parse_capacity(value: &str) -> Result<usize, String> {
    value.parse().map_err(|_| format!("error: invalid --cache-capacity '{value}' (expected a non-negative integer)"))
}

fn parse_pattern_count(value: &str) -> Result<i32, String> {
    value.parse().map_err(|_| format!("error: invalid --pattern-count '{value}' (expected an integer)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "parsstem {version}

Persian stemmer CLI. Prints one stem per input word.

Usage:
  parsstem [OPTIONS] [--] <word...>
  echo <words> | parsstem [OPTIONS]

Options:
  -d, --data <dir>           Resource directory (Patterns.fa, Dictionary.fa,
                             Mokassar.fa, VerbList.fa).
                             Default: ${data_env} or ./{default_dir}
  --trace                    Print how each stem was reached.
  --color                    Force ANSI color output (with --trace).
  --no-color                 Disable ANSI color output.
  --no-cache                 Do not memoize results.
  --cache-capacity <n>       Keep at most <n> results (least recently used
                             are evicted). Default: unbounded.
  --pattern-count <n>        Candidate ordering: >0 sort, <0 reverse,
                             0 discovery order. Default: 1
  --no-verbs                 Skip the irregular-verb map.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter (default: warn), e.g. parsstem=debug.

Exit codes:
  0  Success.
  1  Resources could not be loaded.
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        data_env = DATA_ENV,
        default_dir = DEFAULT_DATA_DIR,
    )
}
