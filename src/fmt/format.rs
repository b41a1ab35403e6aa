//! Different sinks need different line layouts: a console sink may want `{level}: {msg}`
//! while a file sink keeps `{timestamp} - {name} - {level} - {msg}`. Templates make this
//! a per-sink choice instead of hardcoding it per backend.

/// Layout used when a sink is attached without an explicit format.
pub const DEFAULT_FORMAT: &str = "{timestamp} - {name} - {level} - {msg}";

/// Closed set of known substitution tokens. Unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Name,
    Level,
    LevelNo,
    Msg,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Name => "name",
            Self::Level => "level",
            Self::LevelNo => "levelno",
            Self::Msg => "msg",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Name,
        Self::Level,
        Self::LevelNo,
        Self::Msg,
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

/// Parsing into segments once avoids re-scanning the template on every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens are substituted at render time.
    Placeholder(Placeholder),
}

/// Pre-parsed template: parse once at attach time, render once per admitted record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Turns `"{timestamp} - {msg}"` into a segment list. Never fails: an unclosed `{`
    /// is kept as literal text.
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}') else {
                break;
            };
            let close = open + close;
            current.push_str(&rest[..open]);

            let name = &rest[open + 1..close];
            if let Some(ph) = Placeholder::from_name(name) {
                if !current.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                }
                segments.push(FormatSegment::Placeholder(ph));
            } else {
                current.push_str(&rest[open..=close]);
            }

            rest = &rest[close + 1..];
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self {
            source: template.to_string(),
            segments,
        }
    }

    /// The template text as given, so sinks can report what they were configured with.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// Substitutes values into the pre-parsed segments.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::with_capacity(self.source.len() + values.msg.len());

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => {
                    let value = match ph {
                        Placeholder::Timestamp => &values.timestamp,
                        Placeholder::Name => &values.name,
                        Placeholder::Level => &values.level,
                        Placeholder::LevelNo => &values.levelno,
                        Placeholder::Msg => &values.msg,
                    };
                    result.push_str(value);
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_FORMAT)
    }
}

/// Typed value bag: every placeholder has a matching field, so there are no key typos at runtime.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub timestamp: String,
    pub name: String,
    pub level: String,
    pub levelno: String,
    pub msg: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    /// Logger name, so several loggers sharing one file stay distinguishable.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn levelno(mut self, levelno: impl Into<String>) -> Self {
        self.levelno = levelno.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }
}
