use std::io;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{bail, WrapErr};
use elapsed::measure_time;
use log::{debug, error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use expr_parser::Options;
use truth_table_core::process_line;
use truth_table_core::render::to_latex;

use crate::parsing::sources;

mod parsing;

/// Print a LaTeX truth table for every formula, one formula per line.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Cli {
    /// Files with formulas, read in order (standard input if none or `-`)
    #[clap(parse(from_os_str), value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Reject characters that are not part of the formula notation
    #[clap(long)]
    strict: bool,

    /// Maximum nesting depth accepted by the parser
    #[clap(long, value_name = "NUM")]
    max_depth: Option<usize>,

    /// Report a bad line and carry on instead of stopping at it
    #[clap(short, long)]
    keep_going: bool,

    /// Log level: off, error, warn, info, debug or trace
    #[clap(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            strict: self.strict,
            max_depth: self.max_depth,
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    // Tables go to stdout, so logs go to stderr.
    TermLogger::init(cli.log_level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;
    info!("args = {:?}", cli);

    let options = cli.options();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0;
    for source in sources(&cli.files) {
        let name = source.to_string();
        let reader = source.open().wrap_err_with(|| format!("Could not open {name}"))?;
        failed += run(&name, reader, &mut out, &options, cli.keep_going)?;
    }

    if failed > 0 {
        bail!("{} formula(s) could not be processed", failed);
    }
    Ok(())
}

/// Prints one table per non-blank line of `reader`.
///
/// Stops at the first bad line unless `keep_going` is set, in which case bad
/// lines are logged and counted.
fn run<R, W>(name: &str, reader: R, out: &mut W, options: &Options, keep_going: bool) -> color_eyre::Result<usize>
where
    R: BufRead,
    W: Write,
{
    let mut failed = 0;
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line.wrap_err_with(|| format!("Could not read {name}"))?;
        if line.trim().is_empty() {
            debug!("{}:{}: skipping blank line", name, line_no);
            continue;
        }

        let (elapsed, result) = measure_time(|| process_line(&line, options));
        debug!("{}:{}: processed {:?} in {}", name, line_no, line, elapsed);
        match result {
            Ok(table) => writeln!(out, "{}", to_latex(&table))?,
            Err(e) if keep_going => {
                error!("{}:{}: {}", name, line_no, e);
                failed += 1;
            }
            Err(e) => return Err(e).wrap_err_with(|| format!("{name}:{line_no}: could not process {line:?}")),
        }
    }
    Ok(failed)
}
