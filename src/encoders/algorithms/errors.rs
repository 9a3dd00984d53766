use std::fmt;

/// Errors that can occur while encoding units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A unit needs more digit positions than the charset allows
    Overflow { unit: u64, max_code: u64 },
    /// A code block was requested wider than the charset allows
    WidthOverflow { width: usize, max_code_length: u8 },
    /// A readable value cannot be shifted above the radix without wrapping
    ReadableOverflow { value: u64 },
}

impl CodecError {
    /// Returns true for every overflow flavour.
    ///
    /// All variants are overflows today; callers should still match on this
    /// rather than on the enum so new variants do not break them.
    pub fn is_overflow(&self) -> bool {
        matches!(
            self,
            CodecError::Overflow { .. }
                | CodecError::WidthOverflow { .. }
                | CodecError::ReadableOverflow { .. }
        )
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            CodecError::Overflow { unit, max_code } => {
                write_header(f, use_color, &format!("unit {} is too big", unit))?;
                write_hint(
                    f,
                    use_color,
                    &format!(
                        "units must be below {} for this charset; raise max_code_length or use a larger charset",
                        max_code
                    ),
                )
            }
            CodecError::WidthOverflow {
                width,
                max_code_length,
            } => {
                write_header(
                    f,
                    use_color,
                    &format!("code block of width {} is too wide", width),
                )?;
                write_hint(
                    f,
                    use_color,
                    &format!("the charset allows at most {} digits", max_code_length),
                )
            }
            CodecError::ReadableOverflow { value } => {
                write_header(
                    f,
                    use_color,
                    &format!("value {} cannot be shifted above the radix", value),
                )?;
                write_hint(f, use_color, "readable values must leave room for the radix below u64::MAX")
            }
        }
    }
}

impl std::error::Error for CodecError {}

/// Errors raised while building or reconfiguring a charset.
///
/// A failed reconfiguration never touches the previous table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The charset is empty, non-ASCII, or not a bijection
    InvalidCharset { reason: String },
    /// The marker byte is non-ASCII or collides with the charset
    InvalidMarker { marker: u32, reason: String },
    /// The maximum code length is out of range for this radix
    InvalidLength { length: u8, radix: usize },
}

impl ConfigError {
    pub(crate) fn invalid_charset(reason: impl Into<String>) -> Self {
        ConfigError::InvalidCharset {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_marker(marker: impl Into<u32>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidMarker {
            marker: marker.into(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        match self {
            ConfigError::InvalidCharset { reason } => {
                write_header(f, use_color, &format!("invalid charset: {}", reason))?;
                write_hint(
                    f,
                    use_color,
                    "a charset is 1 to 127 distinct ASCII characters",
                )
            }
            ConfigError::InvalidMarker { marker, reason } => {
                let shown = char::from_u32(*marker)
                    .map(|c| format!("{:?}", c))
                    .unwrap_or_else(|| format!("U+{:04X}", marker));
                write_header(
                    f,
                    use_color,
                    &format!("invalid marker {} (bytecode {}): {}", shown, marker, reason),
                )?;
                write_hint(
                    f,
                    use_color,
                    "pick an ASCII character that is not part of the charset",
                )
            }
            ConfigError::InvalidLength { length, radix } => {
                write_header(
                    f,
                    use_color,
                    &format!(
                        "invalid max code length {} for a charset of {} characters",
                        length, radix
                    ),
                )?;
                write_hint(
                    f,
                    use_color,
                    "the length must be 1..=127 and radix^length must fit in 64 bits",
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Error when a named charset is not found in the registry
#[derive(Debug)]
pub struct CharsetNotFoundError {
    pub name: String,
    pub suggestion: Option<String>,
}

impl CharsetNotFoundError {
    pub fn new(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            name: name.into(),
            suggestion,
        }
    }
}

impl fmt::Display for CharsetNotFoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m charset '{}' not found",
                self.name
            )?;
        } else {
            writeln!(f, "error: charset '{}' not found", self.name)?;
        }

        writeln!(f)?;

        if let Some(suggestion) = &self.suggestion {
            if use_color {
                writeln!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                writeln!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        if use_color {
            write!(
                f,
                "      run \x1b[1m`ascbin config list`\x1b[0m to see all charsets"
            )?;
        } else {
            write!(f, "      run `ascbin config list` to see all charsets")?;
        }

        Ok(())
    }
}

impl std::error::Error for CharsetNotFoundError {}

fn write_header(f: &mut fmt::Formatter<'_>, use_color: bool, message: &str) -> fmt::Result {
    if use_color {
        writeln!(f, "\x1b[1;31merror:\x1b[0m {}", message)?;
    } else {
        writeln!(f, "error: {}", message)?;
    }
    writeln!(f)
}

fn write_hint(f: &mut fmt::Formatter<'_>, use_color: bool, hint: &str) -> fmt::Result {
    if use_color {
        write!(f, "\x1b[1;36mhint:\x1b[0m {}", hint)
    } else {
        write!(f, "hint: {}", hint)
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching charset name
pub fn find_closest_charset(name: &str, available: &[String]) -> Option<String> {
    let threshold = if name.len() < 5 { 2 } else { 3 };

    available
        .iter()
        .map(|candidate| (levenshtein_distance(name, candidate), candidate))
        .filter(|(distance, _)| *distance <= threshold)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.clone())
}
