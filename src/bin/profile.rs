use mazeway::app::{App, AppError, Config};

/// Times both solvers on a 50x50 maze. Usage: `profile [iterations] [seed]`.
fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args.next().and_then(|s| s.parse::<usize>().ok());
    let seed = args.next().and_then(|s| s.parse::<u64>().ok());

    let app = App::new(Config {
        seed,
        ..Config::default()
    });
    for report in app.profile(50, 50, num_iters.unwrap_or(100))? {
        println!(
            "{}: {} runs, total {:?}, mean {:?}, {} steps, {} cells expanded",
            report.solver,
            report.iterations,
            report.total,
            report.mean(),
            report.steps,
            report.expanded
        );
    }
    Ok(())
}
