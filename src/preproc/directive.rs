use super::ppinclude::PPInclude;

pub const INCLUDE: &str = "#include";

/// Unicode whitespace plus the ASCII separators `\x1c`..=`\x1f`
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// How much of the include name's quoting is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteMode {
    /// only the opening quote is required, `"foo` names `fo`
    #[default]
    Lenient,
    /// the name must also end with a closing quote
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PPLine {
    Include(PPInclude),
    Text(String),
}

impl PPLine {
    /// A line is an include when it splits into exactly two whitespace separated
    /// tokens, the first being `#include` and the second a quoted name. Anything
    /// else is text and comes back trimmed.
    pub fn classify(line: &str, mode: QuoteMode) -> Self {
        match Self::include_of(line, mode) {
            Some(inc) => PPLine::Include(inc),
            None => PPLine::Text(line.trim_matches(is_separator).to_owned()),
        }
    }

    fn include_of(line: &str, mode: QuoteMode) -> Option<PPInclude> {
        let mut tokens = line.split(is_separator).filter(|token| !token.is_empty());
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(INCLUDE), Some(name), None) => PPInclude::resolve(name)
                .filter(|inc| mode == QuoteMode::Lenient || inc.is_closed()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PPLine, QuoteMode};

    fn text(line: &str) -> PPLine {
        PPLine::Text(line.to_owned())
    }

    fn included(line: &str, mode: QuoteMode) -> Option<String> {
        match PPLine::classify(line, mode) {
            PPLine::Include(inc) => Some(inc.name().to_owned()),
            PPLine::Text(_) => None,
        }
    }

    #[test]
    fn include_line() {
        assert_eq!(Some("mid.txt".to_owned()), included("#include \"mid.txt\"", QuoteMode::Lenient));
        assert_eq!(
            Some("et_trees.hpp".to_owned()),
            included("\t #include   \"et_trees.hpp\"  \r", QuoteMode::Lenient)
        );
    }

    #[test]
    fn plain_lines_are_trimmed() {
        assert_eq!(text("int x = 1;"), PPLine::classify("   int x = 1;\t ", QuoteMode::Lenient));
        assert_eq!(text(""), PPLine::classify("   ", QuoteMode::Lenient));
        assert_eq!(text(""), PPLine::classify("", QuoteMode::Lenient));
    }

    #[test]
    fn rejected_shapes() {
        for line in [
            "#include \"\"",
            "#include \"a",
            "#include <ab>",
            "#include <vector>",
            "#include \"a\" extra",
            "#include",
            "# include \"a.h\"",
            "#include\"a.h\"",
            "#define X \"a.h\"",
        ] {
            assert_eq!(text(line), PPLine::classify(line, QuoteMode::Lenient), "{}", line);
        }
    }

    #[test]
    fn ascii_separators_split_and_trim() {
        assert_eq!(Some("ab".to_owned()), included("#include\x1c\"ab\"", QuoteMode::Lenient));
        assert_eq!(
            Some("a.h".to_owned()),
            included("\x1f#include\x1d \"a.h\"\x1e", QuoteMode::Lenient)
        );
        assert_eq!(text("int x;"), PPLine::classify("\x1cint x;\x1f ", QuoteMode::Lenient));
        assert_eq!(text("a\x1bb"), PPLine::classify("a\x1bb", QuoteMode::Lenient));
    }

    #[test]
    fn length_counts_the_quotes() {
        assert_eq!(Some("ab".to_owned()), included("#include \"ab\"", QuoteMode::Lenient));
        assert_eq!(Some("a".to_owned()), included("#include \"a\"", QuoteMode::Strict));
    }

    #[test]
    fn unclosed_quote() {
        assert_eq!(Some("fo".to_owned()), included("#include \"foo", QuoteMode::Lenient));
        assert_eq!(None, included("#include \"foo", QuoteMode::Strict));
        assert_eq!(
            Some("foo.h".to_owned()),
            included("#include \"foo.h\"", QuoteMode::Strict)
        );
    }
}
