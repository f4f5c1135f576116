// src/cli.rs
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{consts::CONFIG_FILE, options::AppOptions};
use crate::controller::Controller;
use crate::csv::{Delim, write_row};
use crate::error::{AppError, LoadError, Result};
use crate::resolver::describe;
use crate::scan::{LineScanner, run_session};
use crate::status::{Notice, StatusSink};

#[derive(Parser, Debug)]
#[command(name = "bin_lookup", version, about = "Resolve inventory IDs against a spreadsheet")]
pub struct Cli {
    /// Spreadsheet path or http(s) URL (overrides config and env)
    #[arg(long, global = true)]
    source: Option<String>,

    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Do not append a cache-busting query parameter to URLs
    #[arg(long, global = true)]
    no_cache_bust: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up one or more IDs
    Lookup {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Read scanned codes from stdin, one per line
    Scan {
        /// Keep reading after the first code
        #[arg(long)]
        continuous: bool,
    },
    /// Print the loaded table
    Dump {
        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Tsv,
}

impl From<Format> for Delim {
    fn from(f: Format) -> Self {
        match f { Format::Csv => Delim::Csv, Format::Tsv => Delim::Tsv }
    }
}

/// Status goes to stderr so stdout stays clean for results.
struct CliStatus;

impl StatusSink for CliStatus {
    fn begin(&mut self) { eprintln!("{}", Notice::Loading); }
    fn ready(&mut self, rows: usize) { eprintln!("{} ({} rows)", Notice::Ready, rows); }
    fn failed(&mut self, err: &LoadError) { eprintln!("{} ({})", Notice::LoadFailed, err); }
}

impl Cli {
    fn options(&self) -> Result<AppOptions> {
        let mut opts = AppOptions::load(&self.config)?;
        opts.apply_env();
        if let Some(src) = &self.source {
            opts.source.location = src.clone();
        }
        if self.no_cache_bust {
            opts.source.cache_bust = false;
        }
        Ok(opts)
    }
}

/// Parse args and run. `Ok(false)` means at least one lookup failed.
pub fn run() -> Result<bool> {
    run_with(Cli::parse())
}

pub fn run_with(cli: Cli) -> Result<bool> {
    let controller = Controller::new(cli.options()?);
    // A failed load is already reported; lookups then answer "not loaded yet".
    let _ = controller.load(&mut CliStatus);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Lookup { ids } => {
            let mut all_ok = true;
            for id in &ids {
                let outcome = controller.submit(id);
                all_ok &= outcome.is_ok();
                writeln!(out, "{}", describe(&outcome))?;
            }
            out.flush()?;
            Ok(all_ok)
        }
        Command::Scan { continuous } => {
            let stop_after_read = !continuous && controller.options().scan.stop_after_read;
            let stdin = io::stdin();
            let mut scanner = LineScanner::new(stdin.lock());
            let mut all_ok = true;
            let mut write_err = None;
            run_session(&mut scanner, &controller, stop_after_read, |_, outcome| {
                all_ok &= outcome.is_ok();
                if let Err(e) = writeln!(out, "{}", describe(outcome)).and_then(|_| out.flush()) {
                    write_err.get_or_insert(e);
                }
            })?;
            if let Some(e) = write_err {
                return Err(AppError::Io(e));
            }
            Ok(all_ok)
        }
        Command::Dump { format } => {
            let sep = Delim::from(format).sep();
            write_row(&mut out, &["ID", "Value"], sep)?;
            for rec in controller.table().iter() {
                write_row(&mut out, &[rec.id.as_str(), rec.value.as_str()], sep)?;
            }
            out.flush()?;
            Ok(true)
        }
    }
}
