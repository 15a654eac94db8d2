use crate::CodeBuilder;
use kwgen_scan::ReservedWord;
use std::fmt::{self, Display, Formatter};
use tracing::debug;

/// The variable parts of the generated header. Everything else in the
/// output is fixed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableTemplate {
    /// Header that declares the enumeration, included by the generated file.
    pub header: String,
    /// C++ type of the enumeration.
    pub enum_type: String,
    /// Name of the generated `std::map`.
    pub table_name: String,
}

impl TableTemplate {
    pub const DEFAULT_HEADER: &'static str = "token.h";
    pub const DEFAULT_ENUM_TYPE: &'static str = "TokenType";
    pub const DEFAULT_TABLE_NAME: &'static str = "str2token";
}

impl Default for TableTemplate {
    fn default() -> Self {
        Self {
            header: Self::DEFAULT_HEADER.to_string(),
            enum_type: Self::DEFAULT_ENUM_TYPE.to_string(),
            table_name: Self::DEFAULT_TABLE_NAME.to_string(),
        }
    }
}

/// One `{ "spelling", ENUMERATOR },` initializer of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedEntry<'a> {
    pub key: String,
    pub ident: &'a ReservedWord,
}

impl<'a> GeneratedEntry<'a> {
    pub fn new(word: &'a ReservedWord) -> Self {
        Self {
            key: word.lookup_key(),
            ident: word,
        }
    }
}

impl Display for GeneratedEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{ \"{}\", {} }},", self.key, self.ident)
    }
}

/// Concatenates the entries in order. The last entry keeps its trailing
/// comma, which C++ brace initializers accept.
pub fn render_entries(words: &[ReservedWord]) -> String {
    words
        .iter()
        .map(|word| GeneratedEntry::new(word).to_string())
        .collect()
}

pub fn render_table(words: &[ReservedWord], template: &TableTemplate) -> String {
    debug!(entries = words.len(), table = %template.table_name, "rendering keyword table");

    let entries = render_entries(words);
    let mut code = CodeBuilder::new(2);

    code.blank_line();
    code.add_line(&format!("#include \"{}\"", template.header));
    code.blank_line();
    code.add_line("#include <map>");
    code.add_line("#include <string>");
    code.add_block(
        &format!(
            "const static std::map<std::string, {}> {} = {{",
            template.enum_type, template.table_name
        ),
        "};",
        |code| code.add_line(&entries),
    );
    code.blank_line();

    code.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kwgen_scan::{Markers, extract_reserved, extract_first_field};
    use pretty_assertions::assert_eq;

    const PREAMBLE: &str = "\n#include \"token.h\"\n\n#include <map>\n#include <string>\nconst static std::map<std::string, TokenType> str2token = {\n  ";
    const CLOSER: &str = "\n};\n\n";

    fn words(names: &[&str]) -> Vec<ReservedWord> {
        names
            .iter()
            .map(|name| extract_first_field(name).unwrap())
            .collect()
    }

    #[test]
    fn test_entries() {
        assert_eq!(
            render_entries(&words(&["FOO", "BAR"])),
            "{ \"foo\", FOO },{ \"bar\", BAR },"
        );
    }

    #[test]
    fn test_entry_keeps_identifier_verbatim() {
        let word = extract_first_field("WhileLoop").unwrap();
        assert_eq!(
            GeneratedEntry::new(&word).to_string(),
            "{ \"whileloop\", WhileLoop },"
        );
    }

    #[test]
    fn test_table_matches_fixed_template() {
        let code = render_table(&words(&["FOO", "BAR"]), &TableTemplate::default());
        assert_eq!(
            code,
            format!("{PREAMBLE}{{ \"foo\", FOO }},{{ \"bar\", BAR }},{CLOSER}")
        );
    }

    #[test]
    fn test_empty_table_keeps_template() {
        let code = render_table(&[], &TableTemplate::default());
        assert_eq!(code, format!("{PREAMBLE}{CLOSER}"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let source = "// Keywords.\nAND,\nOR,\nTEOF";
        let first = render_table(
            &extract_reserved(source, &Markers::default()),
            &TableTemplate::default(),
        );
        let second = render_table(
            &extract_reserved(source, &Markers::default()),
            &TableTemplate::default(),
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_template() {
        let template = TableTemplate {
            header: "lexer/tokens.h".to_string(),
            enum_type: "Tok".to_string(),
            table_name: "keywords".to_string(),
        };
        let code = render_table(&words(&["IF"]), &template);
        assert_eq!(
            code,
            "\n#include \"lexer/tokens.h\"\n\n#include <map>\n#include <string>\nconst static std::map<std::string, Tok> keywords = {\n  { \"if\", IF },\n};\n\n"
        );
    }
}
