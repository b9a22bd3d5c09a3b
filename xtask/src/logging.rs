use std::io::Write;

/// Writes `[LEVEL] target: message` lines to stderr, keeping stdout free for command output.
pub struct StderrLogger;

static STDERR_LOGGER: StderrLogger = StderrLogger;

pub fn init(level: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    log::set_logger(&STDERR_LOGGER)?;
    log::set_max_level(level);

    Ok(())
}

/// Maps the `-v`/`-q` flags onto a level filter.
pub fn level_filter(verbose: u8, quiet: bool) -> log::LevelFilter {
    match (quiet, verbose) {
        (true, _) => log::LevelFilter::Error,
        (false, 0) => log::LevelFilter::Info,
        (false, 1) => log::LevelFilter::Debug,
        (false, _) => log::LevelFilter::Trace,
    }
}

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let mut stderr = std::io::stderr().lock();
            // Nowhere left to report a failed write to stderr.
            let _ = writeln!(
                stderr,
                "[{level}] {target}: {args}",
                level = record.level(),
                target = record.target(),
                args = record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::{init, level_filter};
    use anyhow::Context;
    use log::LevelFilter;

    #[test]
    fn second_init_reports_context() {
        // Another test may already have installed the logger.
        let _ = init(LevelFilter::Info);

        let err = init(LevelFilter::Info).with_context(|| "failed to install logger").unwrap_err();
        assert_eq!(err.to_string(), "failed to install logger");
        assert!(err.chain().count() >= 2);
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_filter(0, false), LevelFilter::Info);
        assert_eq!(level_filter(1, false), LevelFilter::Debug);
        assert_eq!(level_filter(4, false), LevelFilter::Trace);
        assert_eq!(level_filter(0, true), LevelFilter::Error);
    }
}
