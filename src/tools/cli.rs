use clap::Parser;
use log::{debug, info};
use std::{
    fmt::{Display, Formatter},
    io::{self, BufRead},
};

use crate::error::Result;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    /// Map the -v count onto a level. Anything past 5 is trace.
    pub fn from_level(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn level_filter(self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Where the symbols to encode come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Text given on the command line
    Text(String),
    /// Raw bytes of a file
    File(String),
    /// One line read from stdin
    Stdin,
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(_) => write!(f, "command line"),
            Input::File(name) => write!(f, "file {}", name),
            Input::Stdin => write!(f, "stdin"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HuffOpts {
    /// Source of the symbols to encode
    pub input: Input,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: Input::Stdin,
            verbose: Verbosity::Warnings,
        }
    }

    /// Fill the options from parsed command line arguments.
    pub fn from_args(args: Args) -> Self {
        let mut opts = HuffOpts::new();
        opts.verbose = if args.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::from_level(args.v)
        };
        if let Some(file) = args.file {
            opts.input = Input::File(file)
        } else if let Some(text) = args.text {
            opts.input = Input::Text(text)
        };
        opts
    }

    /// Read the symbols to encode.
    pub fn read_input(&self) -> Result<Vec<u8>> {
        match &self.input {
            Input::Text(text) => Ok(text.as_bytes().to_vec()),
            Input::File(name) => Ok(std::fs::read(name)?),
            Input::Stdin => {
                eprint!("Enter a string to encode: ");
                read_line(io::stdin().lock())
            }
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a single line, without its line ending.
pub fn read_line<R: BufRead>(mut source: R) -> Result<Vec<u8>> {
    let mut line = Vec::new();
    source.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
        if line.last() == Some(&b'\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman encode a string and show the code table",
    long_about = "
    Builds a huffman code from the symbol frequencies of the input, prints the codeword of every
    symbol, then encodes the input, decodes it again and reports the compression ratio."
)]
pub struct Args {
    /// Text to encode. One line is read from stdin when neither this nor --file is given
    #[clap()]
    text: Option<String>,

    /// Encode the contents of a file instead
    #[clap(short = 'f', long = "file")]
    file: Option<String>,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    v: u8,

    /// Print only the report
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Parse the command line and set the log level to match.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from_args(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level_filter());

    info!("---- Huff Initialization Start ----",);
    info!("Verbosity set to {}", log::max_level());
    info!("Getting input from {}", opts.input);
    debug!("{:?}", opts);
    info!("---- Huff Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::{read_line, Args, HuffOpts, Input, Verbosity};
    use clap::Parser;

    #[test]
    fn args_test() {
        let opts = HuffOpts::from_args(Args::parse_from(["huff", "-v", "4", "hello"]));
        assert_eq!(opts.input, Input::Text("hello".to_string()));
        assert_eq!(opts.verbose, Verbosity::Debug);

        let opts = HuffOpts::from_args(Args::parse_from(["huff", "-q", "--file", "in.txt"]));
        assert_eq!(opts.input, Input::File("in.txt".to_string()));
        assert_eq!(opts.verbose, Verbosity::Quiet);

        let opts = HuffOpts::from_args(Args::parse_from(["huff"]));
        assert_eq!(opts.input, Input::Stdin);
        assert_eq!(opts.verbose, Verbosity::Warnings);
    }

    #[test]
    fn verbosity_test() {
        assert_eq!(Verbosity::from_level(0).level_filter(), log::LevelFilter::Off);
        assert_eq!(Verbosity::from_level(3).level_filter(), log::LevelFilter::Info);
        assert_eq!(Verbosity::from_level(9).level_filter(), log::LevelFilter::Trace);
    }

    #[test]
    fn read_line_test() {
        assert_eq!(read_line("abb\r\nmore".as_bytes()).unwrap(), b"abb");
        assert_eq!(read_line("abb".as_bytes()).unwrap(), b"abb");
        assert!(read_line("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn text_input_test() {
        let opts = HuffOpts {
            input: Input::Text("abb".to_string()),
            verbose: Verbosity::Quiet,
        };
        assert_eq!(opts.read_input().unwrap(), b"abb");
    }
}
