//! Pattern layouts.
//!
//! A pattern is literal text interleaved with `%` conversions:
//!
//! | token | output                                  |
//! |-------|-----------------------------------------|
//! | `%p`  | level label                             |
//! | `%m`  | message                                 |
//! | `%c`  | category name                           |
//! | `%f`  | source file (empty without call site)   |
//! | `%l`  | source line (empty without call site)   |
//! | `%n`  | newline                                 |
//! | `%%`  | a literal `%`                           |
//! | `%[`  | start of the level-coloured section     |
//! | `%]`  | end of the level-coloured section       |
//!
//! Value tokens take an optional `[-][min_width][.max_width]` spec; `-`
//! pads on the right instead of the left.

use std::{
    fmt, iter,
    iter::Peekable,
    panic::Location,
    str::CharIndices,
};

use level::LogLevel;

use crate::error::LayoutError;

const ESCAPE: char = '%';
const LEFT_ALIGN: char = '-';
const PRECISION: char = '.';
const COLOUR_RESET: &str = "\x1b[39m";

/// Originating file and line of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self { file: location.file(), line: location.line() }
    }
}

/// A single log event as seen by a layout.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    pub level: LogLevel,
    pub category: &'a str,
    /// `None` unless the category captures call sites.
    pub location: Option<SourceLocation>,
    pub message: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Level,
    Message,
    Category,
    File,
    Line,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FormatSpec {
    left_align: bool,
    min_width: usize,
    max_width: Option<usize>,
}

impl FormatSpec {
    fn write(&self, dst: &mut String, value: &str) {
        let value = match self.max_width {
            Some(max) => value.char_indices().nth(max).map_or(value, |(end, _)| &value[..end]),
            None => value,
        };
        let padding = self.min_width.saturating_sub(value.chars().count());

        if !self.left_align {
            dst.extend(iter::repeat_n(' ', padding));
        }
        dst.push_str(value);
        if self.left_align {
            dst.extend(iter::repeat_n(' ', padding));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field, FormatSpec),
    ColourStart,
    ColourEnd,
}

/// A parsed layout pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pattern: String,
    segments: Vec<Segment>,
}

impl Layout {
    /// Parses `pattern`, rejecting unknown conversions and a trailing `%`.
    pub fn parse(pattern: &str) -> Result<Self, LayoutError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            if c != ESCAPE {
                literal.push(c);
                continue;
            }

            let spec = parse_format_spec(&mut chars, offset)?;
            let Some((token_offset, token)) = chars.next() else {
                return Err(LayoutError::DanglingPercent);
            };

            let segment = match token {
                ESCAPE => {
                    literal.push(ESCAPE);
                    continue;
                }
                'n' => {
                    literal.push('\n');
                    continue;
                }
                '[' => Segment::ColourStart,
                ']' => Segment::ColourEnd,
                'p' => Segment::Field(Field::Level, spec),
                'm' => Segment::Field(Field::Message, spec),
                'c' => Segment::Field(Field::Category, spec),
                'f' => Segment::Field(Field::File, spec),
                'l' => Segment::Field(Field::Line, spec),
                other => {
                    return Err(LayoutError::UnknownToken { token: other, offset: token_offset });
                }
            };

            flush_literal(&mut literal, &mut segments);
            segments.push(segment);
        }
        flush_literal(&mut literal, &mut segments);

        Ok(Self { pattern: pattern.to_owned(), segments })
    }

    /// Returns the source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders `record` onto the end of `dst`. ANSI colour codes are only
    /// emitted for `%[`/`%]` when `ansi` is set.
    pub fn render(&self, record: &Record<'_>, ansi: bool, dst: &mut String) {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => dst.push_str(text),
                Segment::ColourStart if ansi => dst.push_str(colour_code(record.level)),
                Segment::ColourEnd if ansi => dst.push_str(COLOUR_RESET),
                Segment::ColourStart | Segment::ColourEnd => {}
                Segment::Field(field, spec) => match field {
                    Field::Level => spec.write(dst, record.level.as_str()),
                    Field::Message => spec.write(dst, record.message),
                    Field::Category => spec.write(dst, record.category),
                    Field::File => spec.write(dst, record.location.map_or("", |l| l.file)),
                    Field::Line => match record.location {
                        Some(location) => spec.write(dst, &location.line.to_string()),
                        None => spec.write(dst, ""),
                    },
                },
            }
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

fn parse_format_spec(
    chars: &mut Peekable<CharIndices<'_>>,
    offset: usize,
) -> Result<FormatSpec, LayoutError> {
    let mut spec = FormatSpec::default();

    if chars.next_if(|&(_, c)| c == LEFT_ALIGN).is_some() {
        spec.left_align = true;
    }
    spec.min_width = parse_number(chars, offset)?.unwrap_or(0);

    if chars.next_if(|&(_, c)| c == PRECISION).is_some() {
        let max = parse_number(chars, offset)?;
        if max.is_none() {
            return Err(LayoutError::InvalidFormatSpec { offset });
        }
        spec.max_width = max;
    }

    Ok(spec)
}

fn parse_number(
    chars: &mut Peekable<CharIndices<'_>>,
    offset: usize,
) -> Result<Option<usize>, LayoutError> {
    let mut value: Option<usize> = None;

    while let Some((_, c)) = chars.next_if(|&(_, c)| c.is_ascii_digit()) {
        let digit = (c as u8 - b'0') as usize;
        value = value
            .unwrap_or(0)
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .map(Some)
            .ok_or(LayoutError::InvalidFormatSpec { offset })?;
    }

    Ok(value)
}

fn colour_code(level: LogLevel) -> &'static str {
    match level {
        LogLevel::TRACE => "\x1b[34m",
        LogLevel::DEBUG => "\x1b[36m",
        LogLevel::INFO => "\x1b[32m",
        LogLevel::WARN => "\x1b[33m",
        LogLevel::ERROR => "\x1b[91m",
        LogLevel::FATAL => "\x1b[35m",
        LogLevel::MARK | LogLevel::ALL | LogLevel::OFF => "\x1b[90m",
    }
}
