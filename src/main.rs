use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

use mazeway::{
    app::{App, Config},
    maze::Coord,
    solvers::Solver,
};

/// Generate a perfect maze and route through it with A* and greedy best-first search.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Number of logical maze rows
    #[arg(short, long, default_value_t = 20)]
    rows: usize,

    /// Number of logical maze columns
    #[arg(short, long, default_value_t = 20)]
    cols: usize,

    /// Seed for reproducible mazes
    #[arg(short, long)]
    seed: Option<u64>,

    /// Solver to run (astar or greedy); repeat to run several. Runs both when omitted.
    #[arg(long = "solver")]
    solvers: Vec<Solver>,

    /// Route start in layout coordinates, as `row,col`
    #[arg(long)]
    start: Option<Coord>,

    /// Route end in layout coordinates, as `row,col`
    #[arg(long)]
    end: Option<Coord>,

    /// Only print route summaries, without drawing the maze
    #[arg(long)]
    no_draw: bool,

    /// File to write logs to
    #[arg(long, default_value = "mazeway.log")]
    log_file: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let defaults = Config::default();
        Config {
            rows: cli.rows,
            cols: cli.cols,
            seed: cli.seed,
            solvers: if cli.solvers.is_empty() {
                defaults.solvers
            } else {
                cli.solvers
            },
            start: cli.start,
            end: cli.end,
            draw: !cli.no_draw,
        }
    }
}

/// Log to a file so tracing output never interleaves with the drawn maze.
fn init_logging(path: &std::path::Path, level: Level) -> WorkerGuard {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(std::path::Path::new("."));
    let file_name = path
        .file_name()
        .map_or_else(|| "mazeway.log".into(), |name| name.to_owned());
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    let _guard = init_logging(&cli.log_file, cli.log_level);

    let app = App::new(cli.into());
    match app.run(std::io::stdout()) {
        Ok(_) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("[app] {}", err);
            eprintln!("error: {}", err);
            std::process::ExitCode::FAILURE
        }
    }
}
