//! Binds an output to the threshold and template it was attached with.

use crate::fmt::{FormatTemplate, FormatValues};
use crate::level::Level;
use crate::output::{LogRecord, Output, SinkKind};

/// One attached destination. Owned by exactly one logger core.
pub struct Sink {
    output: Box<dyn Output>,
    threshold: Level,
    template: FormatTemplate,
}

impl Sink {
    pub(crate) fn new(output: Box<dyn Output>, threshold: Level, template: FormatTemplate) -> Self {
        Self {
            output,
            threshold,
            template,
        }
    }

    #[must_use]
    pub const fn threshold(&self) -> Level {
        self.threshold
    }

    pub(crate) const fn set_threshold(&mut self, threshold: Level) {
        self.threshold = threshold;
    }

    #[must_use]
    pub fn admits(&self, level: Level) -> bool {
        level >= self.threshold
    }

    pub(crate) fn emit(&self, record: &LogRecord, values: &FormatValues) -> Result<(), crate::Error> {
        let line = self.template.render(values);
        self.output.write(record, &line)
    }

    pub(crate) fn flush(&self) -> Result<(), crate::Error> {
        self.output.flush()
    }

    #[must_use]
    pub fn info(&self) -> SinkInfo {
        SinkInfo {
            kind: self.output.kind(),
            threshold: self.threshold,
            format: self.template.as_str().to_string(),
        }
    }
}

/// Snapshot of an attached sink for inspection; detached from the live sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkInfo {
    pub kind: SinkKind,
    pub threshold: Level,
    pub format: String,
}
