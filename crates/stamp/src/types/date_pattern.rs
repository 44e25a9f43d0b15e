use crate::types::TimeError;
use stamp_config::DEFAULT_DATE_PATTERN;
use std::fmt;

// Longest tokens first so `yyyy` wins over `yy`.
const TOKENS: &[(&str, &str)] = &[
    ("yyyy", "%Y"),
    ("SSS", "%3f"),
    ("yy", "%y"),
    ("MM", "%m"),
    ("dd", "%d"),
    ("HH", "%H"),
    ("mm", "%M"),
    ("ss", "%S"),
];

///
/// DatePattern
///
/// A display pattern in the `yyyy-MM-dd HH:mm:ss` notation, translated once
/// into a chrono format string. Text inside single quotes is literal and `''`
/// is a quote.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DatePattern {
    source: String,
    chrono: String,
}

impl DatePattern {
    pub fn parse(pattern: &str) -> Result<Self, TimeError> {
        let mut chrono = String::with_capacity(pattern.len() * 2);
        let mut rest = pattern;

        while let Some(ch) = rest.chars().next() {
            if ch == '\'' {
                rest = literal(pattern, &rest[1..], &mut chrono)?;
                continue;
            }

            if let Some((token, spec)) = TOKENS.iter().find(|(token, _)| rest.starts_with(token)) {
                chrono.push_str(spec);
                rest = &rest[token.len()..];
                continue;
            }

            if ch.is_ascii_alphabetic() {
                return Err(TimeError::UnknownLetter {
                    pattern: pattern.to_string(),
                    letter: ch,
                });
            }

            push_literal(&mut chrono, ch);
            rest = &rest[ch.len_utf8()..];
        }

        Ok(Self {
            source: pattern.to_string(),
            chrono,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The equivalent `chrono::format` string.
    #[must_use]
    pub fn chrono_format(&self) -> &str {
        &self.chrono
    }
}

// Consume a quoted section (opening quote already taken); returns the rest.
fn literal<'a>(pattern: &str, mut rest: &'a str, out: &mut String) -> Result<&'a str, TimeError> {
    if let Some(after) = rest.strip_prefix('\'') {
        out.push('\'');
        return Ok(after);
    }

    loop {
        let Some(ch) = rest.chars().next() else {
            return Err(TimeError::UnterminatedQuote(pattern.to_string()));
        };
        rest = &rest[ch.len_utf8()..];

        if ch != '\'' {
            push_literal(out, ch);
        } else if let Some(after) = rest.strip_prefix('\'') {
            out.push('\'');
            rest = after;
        } else {
            return Ok(rest);
        }
    }
}

fn push_literal(out: &mut String, ch: char) {
    if ch == '%' {
        out.push_str("%%");
    } else {
        out.push(ch);
    }
}

impl Default for DatePattern {
    fn default() -> Self {
        Self {
            source: DEFAULT_DATE_PATTERN.to_string(),
            chrono: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

impl fmt::Display for DatePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

///
/// TESTS
///
