use std::fmt::{self, Display, Formatter};

pub const FIELD_SEPARATOR: char = ',';

/// An enumerator name taken verbatim from the keyword range.
///
/// Never empty and never contains [`FIELD_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReservedWord(String);

impl ReservedWord {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The spelling the lexer looks the keyword up by.
    ///
    /// Uses the Unicode default case mapping, so the result does not depend
    /// on the host locale.
    pub fn lookup_key(&self) -> String {
        self.0.to_lowercase()
    }
}

impl Display for ReservedWord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ReservedWord {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Takes the first comma-delimited field of a line.
///
/// Returns `None` for lines whose first field is blank.
pub fn extract_first_field(line: &str) -> Option<ReservedWord> {
    let field = line.split(FIELD_SEPARATOR).next()?.trim();

    if field.is_empty() {
        return None;
    }

    Some(ReservedWord(field.to_string()))
}
