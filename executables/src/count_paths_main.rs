#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
use algorithms::count_paths;
use common::{logging, GridError, GridResult};
use executables::{read_problem, read_problem_from_path, Problem};
use std::{
    io::{self, Write},
    path::PathBuf,
};
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(
    about = "Counts the classes of monotone paths through a grid with rectangular obstacles, modulo 1000000007."
)]
struct Cli {
    #[structopt(
        short = "i",
        long = "input",
        parse(from_os_str),
        help = "Read the problem from this file instead of stdin."
    )]
    input_path: Option<PathBuf>,
    #[structopt(
        long = "log-dir",
        parse(from_os_str),
        help = "Write logs to a file in this directory. Warnings are still printed to stderr."
    )]
    log_dir: Option<PathBuf>,
}

fn run(args: &Cli) -> GridResult<()> {
    let Problem { grid, obstacles } = match &args.input_path {
        Some(path) => read_problem_from_path(path)
            .map_err(GridError::rethrow_with("Could not read problem file"))?,
        None => read_problem(io::stdin().lock())
            .map_err(GridError::rethrow_with("Could not read problem from stdin"))?,
    };
    log::info!("Read {} grid with {} obstacles", grid, obstacles.len());

    let result = count_paths(grid, &obstacles)?;
    log::info!("Counted {} path classes", result);

    let mut stdout = io::stdout();
    write!(stdout, "{}", result)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let args = Cli::from_args();
    logging::init_logging(args.log_dir.as_deref())
        .unwrap_or_else(|error| panic!("Logging initialization failed: {}", error));

    if let Err(error) = run(&args) {
        log::error!("{}", error);
        std::process::exit(1);
    }
}
