//! The named logger facade. A `Logger` is a cheap handle to a shared core holding the
//! threshold, the default formats and the attached sinks; each record fans out to every
//! sink whose floor admits it.

mod from_config;
mod registry;
mod sink;

pub use registry::Registry;
pub use sink::{Sink, SinkInfo};

use crate::fmt::{DEFAULT_FORMAT, FormatTemplate};
use crate::internal;
use crate::level::Level;
use crate::output::{
    ConsoleOutput, DEFAULT_TIMESTAMP_FORMAT, FileOutput, LogRecord, Output,
    validate_timestamp_format,
};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

struct Core {
    name: String,
    state: RwLock<State>,
}

struct State {
    threshold: Level,
    format: FormatTemplate,
    timestamp_format: String,
    sinks: Vec<Sink>,
}

/// Handle to a named logger. Clones share the same core.
#[derive(Clone)]
pub struct Logger {
    core: Arc<Core>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("Logger")
            .field("name", &self.core.name)
            .field("threshold", &state.threshold)
            .field("sinks", &state.sinks.len())
            .finish()
    }
}

impl Logger {
    /// Looks up or creates `name` in the process-wide registry.
    #[must_use]
    pub fn create(name: &str) -> Self {
        Registry::global().logger(name)
    }

    /// Unregistered core with the stock defaults. `Registry::logger` is the public way in.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            core: Arc::new(Core {
                name: name.to_string(),
                state: RwLock::new(State {
                    threshold: Level::Debug,
                    format: FormatTemplate::parse(DEFAULT_FORMAT),
                    timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
                    sinks: Vec::new(),
                }),
            }),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.core
            .state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.core
            .state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.core.name
    }

    /// True when both handles refer to the same registered core.
    #[must_use]
    pub fn same_logger(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.core, &other.core)
    }

    #[must_use]
    pub fn threshold(&self) -> Level {
        self.read().threshold
    }

    /// Sets the logger floor and overwrites every attached sink's floor with it.
    ///
    /// Accepts a `Level`, a numeric code or a level name. Anything that is not one of the
    /// five severities is ignored and nothing changes.
    pub fn set_threshold<L: TryInto<Level>>(&self, value: L) {
        let Ok(level) = value.try_into() else {
            return;
        };

        let mut state = self.write();
        state.threshold = level;
        for sink in &mut state.sinks {
            sink.set_threshold(level);
        }
    }

    #[must_use]
    pub fn default_format(&self) -> String {
        self.read().format.as_str().to_string()
    }

    /// Only sinks attached afterwards pick up the new default.
    pub fn set_default_format(&self, template: &str) {
        self.write().format = FormatTemplate::parse(template);
    }

    #[must_use]
    pub fn timestamp_format(&self) -> String {
        self.read().timestamp_format.clone()
    }

    /// strftime layout for `{timestamp}`, applied to every sink from the next record on.
    ///
    /// # Errors
    /// `Error::InvalidTimestampFormat` when chrono cannot render the layout; the
    /// previous layout stays in effect.
    pub fn set_timestamp_format(&self, format: impl Into<String>) -> Result<(), crate::Error> {
        let format = format.into();
        validate_timestamp_format(&format)?;
        self.write().timestamp_format = format;
        Ok(())
    }

    /// Attaches any output. `format` of `None` uses the logger's default template.
    pub fn add_sink(&self, output: impl Output + 'static, threshold: Level, format: Option<&str>) {
        let mut state = self.write();
        let template = format.map_or_else(|| state.format.clone(), FormatTemplate::parse);
        let sink = Sink::new(Box::new(output), threshold, template);
        internal::debug(
            "LOGGER",
            &format!(
                "{}: attached {:?} at {threshold}",
                self.core.name,
                sink.info().kind
            ),
        );
        state.sinks.push(sink);
    }

    /// Opens `path` for appending and attaches it.
    ///
    /// # Errors
    /// `Error::SinkOpen` when the file cannot be opened; nothing is attached in that case.
    pub fn add_file_sink(
        &self,
        path: impl AsRef<Path>,
        threshold: Level,
        format: Option<&str>,
    ) -> Result<(), crate::Error> {
        let output = FileOutput::open(path)?;
        self.add_sink(output, threshold, format);
        Ok(())
    }

    /// File sink at INFO with the default format.
    ///
    /// # Errors
    /// `Error::SinkOpen` when the file cannot be opened.
    pub fn add_file_sink_default(&self, path: impl AsRef<Path>) -> Result<(), crate::Error> {
        self.add_file_sink(path, Level::Info, None)
    }

    /// Attaches a stderr sink.
    pub fn add_console_sink(&self, threshold: Level, format: Option<&str>) {
        self.add_sink(ConsoleOutput::new(), threshold, format);
    }

    /// Stderr sink at INFO with the default format.
    pub fn add_console_sink_default(&self) {
        self.add_console_sink(Level::Info, None);
    }

    /// One console sink at DEBUG plus `{level}_{base_name}.log` in the working directory
    /// for each level, each file's floor being its own level.
    ///
    /// Files overlap: `debug_x.log` receives everything, `critical_x.log` only CRITICAL.
    ///
    /// # Errors
    /// The first file that fails to open; sinks attached before it stay attached.
    pub fn add_leveled_sinks(&self, base_name: &str) -> Result<(), crate::Error> {
        self.add_leveled_sinks_in(Path::new(""), base_name)
    }

    /// Same as `add_leveled_sinks`, with the files placed under `dir`.
    ///
    /// # Errors
    /// The first file that fails to open; sinks attached before it stay attached.
    pub fn add_leveled_sinks_in(
        &self,
        dir: impl AsRef<Path>,
        base_name: &str,
    ) -> Result<(), crate::Error> {
        let dir = dir.as_ref();
        self.add_console_sink(Level::Debug, None);
        for level in Level::all() {
            let path = dir.join(format!("{}_{base_name}.log", level.as_str()));
            self.add_file_sink(path, level, None)?;
        }
        Ok(())
    }

    /// Core dispatch: filters by the logger floor, then by each sink's floor.
    ///
    /// # Errors
    /// The first sink write failure; later sinks are not attempted.
    pub fn log(&self, level: Level, msg: &str) -> Result<(), crate::Error> {
        let state = self.read();
        if level < state.threshold || !state.sinks.iter().any(|s| s.admits(level)) {
            return Ok(());
        }

        let record = LogRecord::new(&self.core.name, level, msg);
        let values = record.values(&state.timestamp_format);

        for sink in state.sinks.iter().filter(|s| s.admits(level)) {
            sink.emit(&record, &values)?;
        }
        Ok(())
    }

    /// # Errors
    /// The first sink write failure.
    pub fn debug(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Level::Debug, msg)
    }

    /// # Errors
    /// The first sink write failure.
    pub fn info(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Level::Info, msg)
    }

    /// # Errors
    /// The first sink write failure.
    pub fn warning(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Level::Warning, msg)
    }

    /// # Errors
    /// The first sink write failure.
    pub fn error(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Level::Error, msg)
    }

    /// # Errors
    /// The first sink write failure.
    pub fn critical(&self, msg: &str) -> Result<(), crate::Error> {
        self.log(Level::Critical, msg)
    }

    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for sink in &self.read().sinks {
            sink.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.read().sinks.len()
    }

    /// Attach-ordered snapshot of every sink's kind, floor and format.
    #[must_use]
    pub fn sinks(&self) -> Vec<SinkInfo> {
        self.read().sinks.iter().map(Sink::info).collect()
    }
}
