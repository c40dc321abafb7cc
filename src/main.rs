use std::{fs, io};

use clap::Parser;
use codelang::{config::Config, error::Error, run_source};
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// codelang runs programs written in CODE, a small typed teaching language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells codelang to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// How many times a single loop may run before it counts as infinite.
    #[arg(short, long, default_value_t = codelang::config::MAX_LOOP_ITERATIONS)]
    max_iterations: usize,

    contents: String,
}

/// Installs a stderr logger when `RUST_LOG` is set, so program output on
/// stdout stays clean.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }

    let _ = tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                                          .with(EnvFilter::from_default_env())
                                          .try_init();
}

fn main() {
    let args = Args::parse();
    init_tracing();

    let script = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    let config = Config::default().with_max_loop_iterations(args.max_iterations);
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();

    match run_source(&script, config, &mut input, &mut output) {
        Ok(()) => {},
        Err(Error::Runtime(e)) => {
            drop(output);
            debug!(position = ?e.position(), "program stopped");
            println!("{e}");
            std::process::exit(1);
        },
        Err(e @ Error::Parse(_)) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
