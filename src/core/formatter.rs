//! Pattern compiler and renderer
//!
//! A pattern string such as `[%d{%H:%M:%S}][%p] %m%n` is compiled once into
//! an ordered list of [`FormatItem`]s and then rendered for every record.
//!
//! | Specifier | Renders                                              |
//! |-----------|------------------------------------------------------|
//! | `%d{fmt}` | record time in local time, strftime `fmt` (default `%H:%M:%S`) |
//! | `%t`      | calling thread identity                              |
//! | `%c`      | logger name                                          |
//! | `%f`      | source file                                          |
//! | `%l`      | source line                                          |
//! | `%m`      | message payload                                      |
//! | `%T`      | a tab                                                |
//! | `%n`      | a newline                                            |
//! | `%p`      | level name                                           |
//! | `%%`      | a literal `%`                                        |
//!
//! `%d` without braces uses `%H:%M:%S`; `%d{}` is an empty format and
//! renders nothing.
//!
//! Any other specifier compiles to a literal holding its brace argument
//! (empty when there is none), so `%z` renders as nothing and `%z{abc}`
//! renders as `abc`.

use super::record::LogRecord;
use super::util::local_time;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

pub const DEFAULT_PATTERN: &str = "[%d{%H:%M:%S}][%t][%c][%f:%l][%p]%T%m%n";
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M:%S";

/// Reasons a pattern string fails to compile
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("'%' at byte {position} is not followed by a specifier")]
    MissingSpecifier { position: usize },

    #[error("'{{' at byte {position} has no matching '}}'")]
    UnclosedBrace { position: usize },

    #[error("'{format}' is not a valid time format")]
    InvalidTimeFormat { format: String },
}

/// One compiled element of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatItem {
    Message,
    Level,
    LoggerName,
    ThreadId,
    File,
    Line,
    Time(String),
    Tab,
    Newline,
    Literal(String),
}

impl FormatItem {
    fn from_specifier(specifier: char, argument: Option<String>) -> Result<Self, PatternError> {
        let item = match specifier {
            'd' => {
                let format = argument.unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string());
                validate_time_format(&format)?;
                FormatItem::Time(format)
            }
            't' => FormatItem::ThreadId,
            'c' => FormatItem::LoggerName,
            'f' => FormatItem::File,
            'l' => FormatItem::Line,
            'm' => FormatItem::Message,
            'T' => FormatItem::Tab,
            'n' => FormatItem::Newline,
            'p' => FormatItem::Level,
            _ => FormatItem::Literal(argument.unwrap_or_default()),
        };
        Ok(item)
    }

    fn render_into(&self, record: &LogRecord, out: &mut String) {
        match self {
            FormatItem::Message => out.push_str(&record.payload),
            FormatItem::Level => out.push_str(record.level.to_str()),
            FormatItem::LoggerName => out.push_str(&record.logger_name),
            FormatItem::ThreadId => out.push_str(&record.thread_id),
            FormatItem::File => out.push_str(&record.file),
            FormatItem::Line => {
                let _ = write!(out, "{}", record.line);
            }
            FormatItem::Time(format) => {
                // validated at compile time, so formatting cannot fail
                let _ = write!(out, "{}", local_time(record.timestamp).format(format));
            }
            FormatItem::Tab => out.push('\t'),
            FormatItem::Newline => out.push('\n'),
            FormatItem::Literal(text) => out.push_str(text),
        }
    }
}

fn validate_time_format(format: &str) -> Result<(), PatternError> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(PatternError::InvalidTimeFormat {
            format: format.to_string(),
        });
    }
    Ok(())
}

/// A compiled pattern.
///
/// Immutable after compilation; rendering takes `&self` and touches no
/// shared state, so one pattern can be rendered from many threads at once.
///
/// # Example
///
/// ```
/// use rust_pattern_logger::core::{LogLevel, LogRecord, Pattern};
///
/// let pattern = Pattern::compile("[%p] %m%n").unwrap();
/// let record = LogRecord::new(LogLevel::Info, 0, "main.rs", 7, "root", "ready");
/// assert_eq!(pattern.render(&record), b"[INFO] ready\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    items: Vec<FormatItem>,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            if ch != '%' {
                literal.push(ch);
                continue;
            }
            if let Some((_, '%')) = chars.peek() {
                chars.next();
                literal.push('%');
                continue;
            }

            let Some((_, specifier)) = chars.next() else {
                return Err(PatternError::MissingSpecifier { position });
            };

            let mut argument = None;
            if let Some(&(brace, '{')) = chars.peek() {
                chars.next();
                let mut content = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, c)) => content.push(c),
                        None => return Err(PatternError::UnclosedBrace { position: brace }),
                    }
                }
                argument = Some(content);
            }

            if !literal.is_empty() {
                items.push(FormatItem::Literal(std::mem::take(&mut literal)));
            }
            items.push(FormatItem::from_specifier(specifier, argument)?);
        }

        if !literal.is_empty() {
            items.push(FormatItem::Literal(literal));
        }

        Ok(Self {
            source: pattern.to_string(),
            items,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn items(&self) -> &[FormatItem] {
        &self.items
    }

    pub fn render(&self, record: &LogRecord) -> Vec<u8> {
        let mut out = String::with_capacity(self.source.len() + record.payload.len() + 32);
        self.render_into(record, &mut out);
        out.into_bytes()
    }

    pub fn render_into(&self, record: &LogRecord, out: &mut String) {
        for item in &self.items {
            item.render_into(record, out);
        }
    }
}

/// The compiled form of [`DEFAULT_PATTERN`]
impl Default for Pattern {
    fn default() -> Self {
        let sep = || FormatItem::Literal("][".to_string());
        Self {
            source: DEFAULT_PATTERN.to_string(),
            items: vec![
                FormatItem::Literal("[".to_string()),
                FormatItem::Time(DEFAULT_TIME_FORMAT.to_string()),
                sep(),
                FormatItem::ThreadId,
                sep(),
                FormatItem::LoggerName,
                sep(),
                FormatItem::File,
                FormatItem::Literal(":".to_string()),
                FormatItem::Line,
                sep(),
                FormatItem::Level,
                FormatItem::Literal("]".to_string()),
                FormatItem::Tab,
                FormatItem::Message,
                FormatItem::Newline,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;

    fn record() -> LogRecord {
        LogRecord::new(LogLevel::Warning, 1_700_000_000, "main.rs", 42, "net", "disk low")
            .with_thread_id("ThreadId(7)")
    }

    #[test]
    fn test_compile_default_pattern() {
        let pattern = Pattern::compile(DEFAULT_PATTERN).unwrap();
        assert_eq!(pattern, Pattern::default());
        assert_eq!(
            pattern.items(),
            &[
                FormatItem::Literal("[".into()),
                FormatItem::Time("%H:%M:%S".into()),
                FormatItem::Literal("][".into()),
                FormatItem::ThreadId,
                FormatItem::Literal("][".into()),
                FormatItem::LoggerName,
                FormatItem::Literal("][".into()),
                FormatItem::File,
                FormatItem::Literal(":".into()),
                FormatItem::Line,
                FormatItem::Literal("][".into()),
                FormatItem::Level,
                FormatItem::Literal("]".into()),
                FormatItem::Tab,
                FormatItem::Message,
                FormatItem::Newline,
            ]
        );
    }

    #[test]
    fn test_render_default_pattern() {
        let expected_time = local_time(1_700_000_000).format("%H:%M:%S").to_string();
        let rendered = Pattern::default().render(&record());
        assert_eq!(
            String::from_utf8(rendered).unwrap(),
            format!("[{}][ThreadId(7)][net][main.rs:42][WARNING]\tdisk low\n", expected_time)
        );
    }

    #[test]
    fn test_time_sub_format() {
        let pattern = Pattern::compile("%d{%Y-%m-%d}|%d").unwrap();
        let time = local_time(1_700_000_000);
        let expected = format!("{}|{}", time.format("%Y-%m-%d"), time.format("%H:%M:%S"));
        assert_eq!(pattern.render(&record()), expected.into_bytes());
    }

    #[test]
    fn test_empty_time_format_renders_nothing() {
        let pattern = Pattern::compile("<%d{}>%m").unwrap();
        assert_eq!(pattern.items()[1], FormatItem::Time(String::new()));
        assert_eq!(pattern.render(&record()), b"<>disk low");
    }

    #[test]
    fn test_percent_escape() {
        let pattern = Pattern::compile("100%% %m").unwrap();
        assert_eq!(pattern.items(), &[
            FormatItem::Literal("100% ".into()),
            FormatItem::Message,
        ]);
        assert_eq!(pattern.render(&record()), b"100% disk low");
    }

    #[test]
    fn test_trailing_literal_is_kept() {
        let pattern = Pattern::compile("%m end").unwrap();
        assert_eq!(pattern.render(&record()), b"disk low end");
    }

    #[test]
    fn test_unknown_specifier_degrades_to_literal() {
        let pattern = Pattern::compile("a%zb").unwrap();
        assert_eq!(pattern.items(), &[
            FormatItem::Literal("a".into()),
            FormatItem::Literal(String::new()),
            FormatItem::Literal("b".into()),
        ]);
        assert_eq!(pattern.render(&record()), b"ab");

        let pattern = Pattern::compile("%z{kept}%m").unwrap();
        assert_eq!(pattern.render(&record()), b"keptdisk low");
    }

    #[test]
    fn test_brace_argument_ignored_for_other_items() {
        let pattern = Pattern::compile("%p{ignored}:%l{x}").unwrap();
        assert_eq!(pattern.render(&record()), b"WARNING:42");
    }

    #[test]
    fn test_trailing_percent_fails() {
        assert_eq!(
            Pattern::compile("[%p] %"),
            Err(PatternError::MissingSpecifier { position: 5 })
        );
    }

    #[test]
    fn test_unclosed_brace_fails() {
        assert_eq!(
            Pattern::compile("%d{%H:%M"),
            Err(PatternError::UnclosedBrace { position: 2 })
        );
    }

    #[test]
    fn test_invalid_time_format_fails() {
        assert!(matches!(
            Pattern::compile("%d{%Q}"),
            Err(PatternError::InvalidTimeFormat { .. })
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let pattern = Pattern::default();
        let record = record();
        assert_eq!(pattern.render(&record), pattern.render(&record));
    }

    #[test]
    fn test_non_ascii_literals() {
        let pattern = Pattern::compile("日志:%m→%n").unwrap();
        assert_eq!(
            String::from_utf8(pattern.render(&record())).unwrap(),
            "日志:disk low→\n"
        );
    }
}
