use dragons_quest::build_info;
use dragons_quest::core::{run, Session};
use dragons_quest::io::{InputProvider, TerminalConsole};
use dragons_quest::GameConfig;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Debug, Default)]
struct CliArgs {
    name: Option<String>,
    config_path: Option<PathBuf>,
}

fn print_usage() {
    println!("The Dragon's Quest - a text adventure\n");
    println!("Usage: dragons-quest [options]\n");
    println!("Options:");
    println!("  --name NAME    Play as NAME instead of being asked");
    println!("  --config PATH  Load settings from PATH (default ~/.dragons_quest/config.json)");
    println!("  --version      Show version information");
    println!("  --help         Show this help message");
    println!("\nSet RUST_LOG=info to see game events on stderr.");
}

fn missing_value(flag: &str) -> ! {
    eprintln!("Missing value for {}", flag);
    eprintln!("Run 'dragons-quest --help' for usage.");
    process::exit(1);
}

fn parse_args(args: impl IntoIterator<Item = String>) -> CliArgs {
    let mut parsed = CliArgs::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string());
                process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--name" => {
                parsed.name = Some(args.next().unwrap_or_else(|| missing_value("--name")));
            }
            "--config" => {
                let path = args.next().unwrap_or_else(|| missing_value("--config"));
                parsed.config_path = Some(PathBuf::from(path));
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'dragons-quest --help' for usage.");
                process::exit(1);
            }
        }
    }
    parsed
}

fn init_logging() {
    // Game text owns stdout; logs go to stderr and stay quiet unless asked for
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> io::Result<()> {
    let args = parse_args(std::env::args().skip(1));
    init_logging();

    let config = match GameConfig::load_or_default(args.config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: could not load config: {}", e);
            eprintln!("Starting with the default settings.");
            tracing::warn!(error = %e, "config rejected, using defaults");
            GameConfig::default()
        }
    };

    let mut console = TerminalConsole::new();
    let name = match args.name {
        Some(name) => name,
        None => console.read_line("What is your name, adventurer? "),
    };
    if console.is_closed() {
        return Ok(());
    }

    let mut session = Session::new_game(Some(name.as_str()), config, &mut console);
    let status = run(&mut session, &mut console);
    tracing::debug!(?status, "exiting");
    Ok(())
}
