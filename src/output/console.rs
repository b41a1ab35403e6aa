//! Console sink. Stderr by default so log lines never mix into a program's stdout data.

use super::{LogRecord, Output, SinkKind};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stream {
    #[default]
    Stderr,
    Stdout,
}

#[derive(Debug, Clone, Default)]
pub struct ConsoleOutput {
    stream: Stream,
}

impl ConsoleOutput {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }

    #[must_use]
    pub const fn stream(mut self, stream: Stream) -> Self {
        self.stream = stream;
        self
    }
}

impl Output for ConsoleOutput {
    fn write(&self, _record: &LogRecord, line: &str) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stderr => writeln!(io::stderr().lock(), "{line}")?,
            Stream::Stdout => writeln!(io::stdout().lock(), "{line}")?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        match self.stream {
            Stream::Stderr => io::stderr().flush()?,
            Stream::Stdout => io::stdout().flush()?,
        }
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Console(self.stream)
    }
}
