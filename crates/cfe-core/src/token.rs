//! Token vocabulary shared between the scanner and the parser.

use std::fmt;
use std::str::FromStr;

/// The closed set of lexical categories a token can belong to.
///
/// The `Display`/`FromStr` pair round-trips through the exact spelling the
/// interchange format persists (see [`crate::interchange`]); `Display` is
/// what the scanner writes, `FromStr` is what the parser reads back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    Keyword,
    Identifier,
    Operator,
    SpecialCharacter,
    NumericConstant,
    PreprocessorDirective,
    SingleLineComment,
    MultiLineComment,
    /// Narrow legacy side-path token; never produced by the main grammar.
    CharLiteral,
}

impl fmt::Display for TokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            TokenClass::Keyword => "KEYWORD",
            TokenClass::Identifier => "IDENTIFIER",
            TokenClass::Operator => "OPERATOR",
            TokenClass::SpecialCharacter => "SPECIAL CHARACTER",
            TokenClass::NumericConstant => "NUMERIC CONSTANT",
            TokenClass::PreprocessorDirective => "PREPROCESSOR DIRECTIVE",
            TokenClass::SingleLineComment => "Single-Line Comment",
            TokenClass::MultiLineComment => "Multi-Line Comment",
            TokenClass::CharLiteral => "CHAR_LITERAL",
        };
        f.write_str(spelling)
    }
}

/// Error returned when a class spelling doesn't match any known category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTokenClass(pub String);

impl fmt::Display for UnknownTokenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown token class '{}'", self.0)
    }
}

impl std::error::Error for UnknownTokenClass {}

impl FromStr for TokenClass {
    type Err = UnknownTokenClass;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "KEYWORD" => Ok(TokenClass::Keyword),
            "IDENTIFIER" => Ok(TokenClass::Identifier),
            "OPERATOR" => Ok(TokenClass::Operator),
            "SPECIAL CHARACTER" => Ok(TokenClass::SpecialCharacter),
            "NUMERIC CONSTANT" => Ok(TokenClass::NumericConstant),
            "PREPROCESSOR DIRECTIVE" => Ok(TokenClass::PreprocessorDirective),
            "Single-Line Comment" => Ok(TokenClass::SingleLineComment),
            "Multi-Line Comment" => Ok(TokenClass::MultiLineComment),
            "CHAR_LITERAL" => Ok(TokenClass::CharLiteral),
            other => Err(UnknownTokenClass(other.to_string())),
        }
    }
}

impl TokenClass {
    /// True for the two comment categories, which the parser treats as
    /// whitespace and never places in the syntax tree.
    pub fn is_comment(self) -> bool {
        matches!(
            self,
            TokenClass::SingleLineComment | TokenClass::MultiLineComment
        )
    }
}

/// A single classified lexeme.
///
/// `value` carries the exact source text for every class except the two
/// comment classes, which are recorded as the fixed placeholders `//` and
/// `/* .. */` regardless of the comment's actual length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub class: TokenClass,
    pub value: String,
    pub line: u32,
}

impl Token {
    pub fn new(class: TokenClass, value: impl Into<String>, line: u32) -> Self {
        Token {
            class,
            value: value.into(),
            line,
        }
    }
}
