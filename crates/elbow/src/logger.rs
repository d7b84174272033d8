use colored::Colorize;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes every enabled record to stderr with a colored level tag.
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let tag = match record.level() {
            Level::Error => "error".red().bold(),
            Level::Warn => "warning".yellow().bold(),
            Level::Info => "info".green(),
            Level::Debug => "debug".cyan(),
            Level::Trace => "trace".dimmed(),
        };
        eprintln!("{tag}: {}", record.args());
    }

    fn flush(&self) {}
}

/// Install the stderr logger.
///
/// Warnings are shown by default, `-v` adds debug output and `-vv` trace output.
/// `--quiet` leaves errors only.
pub fn init(verbose: u8, quiet: bool) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_filter(verbose, quiet));
    }
}

fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
