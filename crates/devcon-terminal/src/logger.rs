//! `log` facade integration.
//!
//! [`ConsoleLogger`] forwards host log records into a session's transcript
//! and, optionally, to another logger (usually `env_logger`) so stderr
//! output keeps working.

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

use crate::transcript::LogSender;

/// A `log::Log` that feeds the console transcript.
pub struct ConsoleLogger {
    sender: LogSender,
    level: LevelFilter,
    inner: Option<Box<dyn Log>>,
}

impl ConsoleLogger {
    /// Forward records at `level` or more severe to `sender`.
    pub fn new(sender: LogSender, level: LevelFilter) -> Self {
        Self {
            sender,
            level,
            inner: None,
        }
    }

    /// Also pass every record to `inner`, filtered by its own rules.
    pub fn with_inner(mut self, inner: Box<dyn Log>) -> Self {
        self.inner = Some(inner);
        self
    }

    /// Install as the global logger.
    ///
    /// The global max level is raised to `max_level` so records the inner
    /// logger wants are not filtered out before reaching it.
    pub fn install(self, max_level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(max_level);
        Ok(())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
            || self.inner.as_ref().is_some_and(|inner| inner.enabled(metadata))
    }

    fn log(&self, record: &Record<'_>) {
        if record.level() <= self.level {
            self.sender
                .send(record.level().into(), record.args().to_string());
        }
        if let Some(inner) = &self.inner
            && inner.enabled(record.metadata())
        {
            inner.log(record);
        }
    }

    fn flush(&self) {
        if let Some(inner) = &self.inner {
            inner.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use log::Level;

    use super::*;
    use crate::transcript::log_channel;

    struct CountingLogger {
        seen: Arc<AtomicUsize>,
        level: Level,
    }

    impl Log for CountingLogger {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            metadata.level() <= self.level
        }
        fn log(&self, _record: &Record<'_>) {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }
        fn flush(&self) {}
    }

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("host")
                .args(format_args!("{msg}"))
                .build(),
        );
    }

    #[test]
    fn forwards_with_severity() {
        let (tx, rx) = log_channel();
        let logger = ConsoleLogger::new(tx, LevelFilter::Info);
        emit(&logger, Level::Info, "loaded level");
        emit(&logger, Level::Warn, "slow frame");
        emit(&logger, Level::Error, "missing asset");
        let lines: Vec<String> = rx.drain().map(|m| m.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "[Info] loaded level",
                "[Warning] slow frame",
                "[Error] missing asset",
            ]
        );
    }

    #[test]
    fn filters_below_level() {
        let (tx, rx) = log_channel();
        let logger = ConsoleLogger::new(tx, LevelFilter::Warn);
        emit(&logger, Level::Info, "chatter");
        emit(&logger, Level::Debug, "more chatter");
        emit(&logger, Level::Warn, "kept");
        assert_eq!(rx.drain().count(), 1);
    }

    #[test]
    fn enabled_respects_level() {
        let (tx, _rx) = log_channel();
        let logger = ConsoleLogger::new(tx, LevelFilter::Info);
        let info = Metadata::builder().level(Level::Info).build();
        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn passes_records_to_inner() {
        let (tx, rx) = log_channel();
        let seen = Arc::new(AtomicUsize::new(0));
        let inner = CountingLogger {
            seen: Arc::clone(&seen),
            level: Level::Debug,
        };
        let logger = ConsoleLogger::new(tx, LevelFilter::Info).with_inner(Box::new(inner));

        emit(&logger, Level::Debug, "inner only");
        emit(&logger, Level::Info, "both");
        emit(&logger, Level::Trace, "neither");

        assert_eq!(seen.load(Ordering::SeqCst), 2);
        assert_eq!(rx.drain().count(), 1);

        let debug = Metadata::builder().level(Level::Debug).build();
        assert!(logger.enabled(&debug));
        logger.flush();
    }
}
