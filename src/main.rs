//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};
use tikv_jemallocator::Jemalloc;

use huff::tools::cli::huffopts_init;
use huff::tools::report::Report;
use huff::{HuffError, HuffmanCodec};

#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> Result<(), HuffError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    // Logs go to stderr so the report on stdout stays clean.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }

    let opts = huffopts_init();

    let result = run(&opts);
    if let Err(e) = &result {
        error!("{}", e);
    }
    info!("Done.\n");
    result
}

/// Read the input, build its code and print the report.
fn run(opts: &huff::tools::cli::HuffOpts) -> Result<(), HuffError> {
    let input = opts.read_input()?;
    info!("Read {} symbols.", input.len());

    let codec = HuffmanCodec::from_symbols(&input)?;
    let report = Report::new(&input, &codec)?;
    println!();
    print!("{}", report);
    Ok(())
}
