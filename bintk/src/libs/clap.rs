use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::Result;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::fmt::time::OffsetTime;

use crate::args::MatrixArgs;
use crate::subcommands::{bin, breakpoint_fill, correct, fill, merge, pipeline};

#[derive(Parser, Debug)]
#[command(author, version, about, styles=get_styles())]
pub struct Arguments {
    #[command(subcommand)]
    cmd: SubCommand,
}

#[derive(Args, Debug, Clone)]
pub struct LogAndVerbosity {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, default_value_t = 3)]
    pub verbosity: u8,

    /// A file path to save logs to
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Silence all warning and info messages
    #[arg(long)]
    pub silent: bool,
}

#[derive(Subcommand, Debug)]
pub enum SubCommand {
    /// Collapse markers into majority rule bins spanning a base pair window
    Bin {
        #[command(flatten)]
        args: MatrixArgs,

        #[command(flatten)]
        log_and_verbosity: LogAndVerbosity,

        /// Bin size in base pairs
        #[arg(short = 'w', long)]
        window: u64,
    },

    /// Fill missing genotypes with the majority call of the surrounding markers
    Fill {
        #[command(flatten)]
        args: MatrixArgs,

        #[command(flatten)]
        log_and_verbosity: LogAndVerbosity,

        /// Number of markers used on each side
        #[arg(short = 'w', long, default_value_t = 3)]
        window: usize,

        /// Minimum number of markers in the window, the target included. Defaults to 2 * window + 1
        #[arg(short = 'e', long)]
        min_evidence: Option<usize>,

        /// Leave the first and last `window` markers of each scaffold untouched
        #[arg(long)]
        skip_edges: bool,
    },

    /// Fill missing genotypes on recombination breakpoints shared with other samples
    #[command(visible_alias = "fill2")]
    BreakpointFill {
        #[command(flatten)]
        args: MatrixArgs,

        #[command(flatten)]
        log_and_verbosity: LogAndVerbosity,

        /// Number of markers required on each side of the breakpoint
        #[arg(short = 'w', long, default_value_t = 3)]
        window: usize,
    },

    /// Correct genotypes that disagree with unanimous surrounding markers
    Correct {
        #[command(flatten)]
        args: MatrixArgs,

        #[command(flatten)]
        log_and_verbosity: LogAndVerbosity,

        /// Number of markers used on each side
        #[arg(short = 'w', long, default_value_t = 5)]
        window: usize,

        /// Minimum number of markers in the window, the target included. Defaults to 2 * window + 1
        #[arg(short = 'e', long)]
        min_evidence: Option<usize>,

        /// Leave the first and last `window` markers of each scaffold untouched
        #[arg(long)]
        skip_edges: bool,
    },

    /// Merge adjacent markers with identical genotypes
    Merge {
        #[command(flatten)]
        args: MatrixArgs,

        #[command(flatten)]
        log_and_verbosity: LogAndVerbosity,
    },

    /// Run bin, fill (3, 5, 7), breakpoint-fill (3), correct (5) and merge in one go
    Pipeline {
        #[command(flatten)]
        args: MatrixArgs,

        #[command(flatten)]
        log_and_verbosity: LogAndVerbosity,

        /// Bin size in base pairs
        #[arg(short = 'w', long)]
        bin_window: u64,

        /// Leave scaffold edges untouched in the fill and correct passes
        #[arg(long)]
        skip_edges: bool,
    },
}

impl SubCommand {
    #[rustfmt::skip]
    pub fn log_and_verbosity(&self) -> (u8, &Option<PathBuf>, bool) {
        match self {
            SubCommand::Bin { log_and_verbosity, .. }
            | SubCommand::Fill { log_and_verbosity, .. }
            | SubCommand::BreakpointFill { log_and_verbosity, .. }
            | SubCommand::Correct { log_and_verbosity, .. }
            | SubCommand::Merge { log_and_verbosity, .. }
            | SubCommand::Pipeline { log_and_verbosity, .. }
            => (log_and_verbosity.verbosity, &log_and_verbosity.log_file, log_and_verbosity.silent),
        }
    }

    #[rustfmt::skip]
    pub fn args(&self) -> &MatrixArgs {
        match self {
            SubCommand::Bin { args, .. }
            | SubCommand::Fill { args, .. }
            | SubCommand::BreakpointFill { args, .. }
            | SubCommand::Correct { args, .. }
            | SubCommand::Merge { args, .. }
            | SubCommand::Pipeline { args, .. } => args,
        }
    }
}

pub fn run_args(args: Arguments) -> Result<()> {
    let (verbosity, log_file, is_silent) = args.cmd.log_and_verbosity();

    let (level, wrtr, _guard) = init_tracing(verbosity, log_file, is_silent)?;

    let timer = time::format_description::parse("[hour]:[minute]:[second].[subsecond digits:3]")?;
    let time_offset = time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC);
    let timer = OffsetTime::new(time_offset, timer);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(wrtr)
        .with_timer(timer)
        .init();

    run_cmd(args.cmd)?;

    Ok(())
}

#[rustfmt::skip]
pub fn run_cmd(cmd: SubCommand) -> Result<()> {
    match cmd {
        SubCommand::Bin { args, window, .. } => bin::run(args, window)?,
        SubCommand::Fill { args, window, min_evidence, skip_edges, .. }
            => fill::run(args, window, min_evidence, skip_edges)?,
        SubCommand::BreakpointFill { args, window, .. } => breakpoint_fill::run(args, window)?,
        SubCommand::Correct { args, window, min_evidence, skip_edges, .. }
            => correct::run(args, window, min_evidence, skip_edges)?,
        SubCommand::Merge { args, .. } => merge::run(args)?,
        SubCommand::Pipeline { args, bin_window, skip_edges, .. }
            => pipeline::run(args, bin_window, skip_edges)?,
    };
    Ok(())
}

pub fn init_tracing(
    verbosity: u8,
    log_file: &Option<PathBuf>,
    is_silent: bool,
) -> Result<(Level, NonBlocking, WorkerGuard)> {
    let level = if is_silent {
        Level::ERROR
    } else {
        match verbosity {
            0 | 1 => Level::ERROR,
            2 => Level::WARN,
            3 => Level::INFO,
            4 => Level::DEBUG,
            5..=u8::MAX => Level::TRACE,
        }
    };

    // Write logs to stderr or file
    let (wrtr, _guard) = match log_file {
        Some(path) => {
            let file = std::fs::File::options()
                .create(true)
                .write(true)
                .truncate(true)
                .open(path)?;
            tracing_appender::non_blocking(file)
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    Ok((level, wrtr, _guard))
}

pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .header(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
        )
        .literal(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .invalid(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
        )
        .valid(
            anstyle::Style::new()
                .bold()
                .underline()
                .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
        )
        .placeholder(
            anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))),
        )
}
