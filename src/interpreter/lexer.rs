use logos::Logos;

use crate::{error::SyntaxError, interpreter::evaluator::core::is_default_constant};

/// Raw lexical shapes recognized by the generated lexer.
///
/// The raw stream is an implementation detail: [`scan`] folds it into
/// [`Token`]s, classifying identifiers into functions, variables, and
/// constants along the way.
#[derive(Logos, Debug, PartialEq, Clone)]
enum RawToken {
    /// Numeric literal tokens, such as `3.14`, `.5`, `42` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Identifier tokens; function, variable or constant names such as `x` or
    /// `sin`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// Spaces, tabs and newlines.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// Very large literals saturate to infinity here; the parser rejects them
/// with a `LiteralTooLarge` error before any AST node is built.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// The lexical operator symbols of the expression language.
///
/// `DoubleStar` (`**`) and `Caret` (`^`) are distinct symbols here even
/// though both mean exponentiation; the parser maps them onto the same
/// [`BinaryOperator`](crate::ast::BinaryOperator).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `//`
    DoubleSlash,
    /// `%`
    Percent,
    /// `**`
    DoubleStar,
    /// `^`
    Caret,
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::DoubleSlash => "//",
            Self::Percent => "%",
            Self::DoubleStar => "**",
            Self::Caret => "^",
        };
        write!(f, "{symbol}")
    }
}

/// The classified type of a [`Token`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TokenKind {
    /// A numeric literal and its parsed value.
    Number(f64),
    /// An arithmetic operator symbol.
    Operator(OperatorKind),
    /// An identifier immediately followed by `(`.
    Function,
    /// An identifier that is not a known constant name.
    Variable,
    /// An identifier matching a default constant name (`pi`, `e`, ...).
    Constant,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `,`
    Comma,
    /// End of the source string. Always the final token, even for empty
    /// input.
    EndOfInput,
    /// A character outside every known token class.
    Unknown,
}

/// A classified token with its lexeme and source position.
///
/// Tokens are immutable and created only by [`scan`]/[`tokenize`]; the parser
/// consumes them read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The classified type of the token.
    pub kind:     TokenKind,
    /// The lexeme as it appeared in the source. Empty for `EndOfInput`.
    pub text:     String,
    /// Zero-based byte offset of the token's first character.
    pub position: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfInput => write!(f, "end of input"),
            _ => write!(f, "{}", self.text),
        }
    }
}

/// Scans a source string into classified tokens without failing.
///
/// Unrecognized characters become [`TokenKind::Unknown`] tokens rather than
/// errors, and a terminal [`TokenKind::EndOfInput`] token is always appended,
/// even for an empty source. Identifier classification:
///
/// - followed immediately by `(` → [`TokenKind::Function`],
/// - name of a default constant → [`TokenKind::Constant`],
/// - anything else → [`TokenKind::Variable`].
///
/// ## Example
/// ```
/// use expreval::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("sin(x)");
///
/// assert_eq!(tokens[0].kind, TokenKind::Function);
/// assert_eq!(tokens[0].text, "sin");
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfInput);
/// ```
#[must_use]
pub fn scan(text: &str) -> Vec<Token> {
    let mut raw = Vec::new();
    let mut lexer = RawToken::lexer(text);

    while let Some(result) = lexer.next() {
        raw.push((result, lexer.span()));
    }

    let mut tokens = Vec::with_capacity(raw.len() + 1);

    for (i, (result, span)) in raw.iter().enumerate() {
        let kind = match result {
            Ok(RawToken::Number(value)) => TokenKind::Number(*value),
            Ok(RawToken::Identifier(name)) => {
                if let Some((Ok(RawToken::LParen), _)) = raw.get(i + 1) {
                    TokenKind::Function
                } else if is_default_constant(name) {
                    TokenKind::Constant
                } else {
                    TokenKind::Variable
                }
            },
            Ok(RawToken::DoubleStar) => TokenKind::Operator(OperatorKind::DoubleStar),
            Ok(RawToken::DoubleSlash) => TokenKind::Operator(OperatorKind::DoubleSlash),
            Ok(RawToken::Plus) => TokenKind::Operator(OperatorKind::Plus),
            Ok(RawToken::Minus) => TokenKind::Operator(OperatorKind::Minus),
            Ok(RawToken::Star) => TokenKind::Operator(OperatorKind::Star),
            Ok(RawToken::Slash) => TokenKind::Operator(OperatorKind::Slash),
            Ok(RawToken::Percent) => TokenKind::Operator(OperatorKind::Percent),
            Ok(RawToken::Caret) => TokenKind::Operator(OperatorKind::Caret),
            Ok(RawToken::LParen) => TokenKind::LeftParen,
            Ok(RawToken::RParen) => TokenKind::RightParen,
            Ok(RawToken::Comma) => TokenKind::Comma,
            Ok(RawToken::Ignored) => continue,
            Err(()) => TokenKind::Unknown,
        };

        tokens.push(Token { kind,
                            text: text[span.clone()].to_string(),
                            position: span.start });
    }

    tokens.push(Token { kind:     TokenKind::EndOfInput,
                        text:     String::new(),
                        position: text.len(), });

    tokens
}

/// Tokenizes a source string, rejecting unrecognized characters.
///
/// This is the entry point the parser uses. It behaves like [`scan`], but the
/// first [`TokenKind::Unknown`] token is reported as a
/// [`SyntaxError::UnknownCharacter`] carrying its position.
///
/// # Errors
/// Returns a `SyntaxError` if the source contains a character outside every
/// known token class.
///
/// ## Example
/// ```
/// use expreval::interpreter::lexer::tokenize;
///
/// assert!(tokenize("2 + 2").is_ok());
/// assert!(tokenize("2 @ 2").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, SyntaxError> {
    let tokens = scan(text);

    if let Some(unknown) = tokens.iter().find(|t| t.kind == TokenKind::Unknown) {
        let character = unknown.text.chars().next().unwrap_or('\u{fffd}');
        return Err(SyntaxError::UnknownCharacter { character,
                                                   position: unknown.position });
    }

    Ok(tokens)
}

/// Checks that every parenthesis in the token stream has a matching partner.
///
/// The check is stack-based: opening parentheses push their position, closing
/// parentheses pop. A closing token with an empty stack or a leftover opening
/// token produces a `SyntaxError` carrying the offending position.
///
/// # Errors
/// Returns `UnmatchedClosingParen` or `UnmatchedOpeningParen` on imbalance.
///
/// ## Example
/// ```
/// use expreval::interpreter::lexer::{tokenize, validate_tokens};
///
/// let tokens = tokenize("((2)").unwrap();
///
/// assert!(validate_tokens(&tokens).is_err());
/// ```
pub fn validate_tokens(tokens: &[Token]) -> Result<(), SyntaxError> {
    let mut open_positions = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LeftParen => open_positions.push(token.position),
            TokenKind::RightParen => {
                if open_positions.pop().is_none() {
                    return Err(SyntaxError::UnmatchedClosingParen { position: token.position, });
                }
            },
            _ => {},
        }
    }

    if let Some(position) = open_positions.pop() {
        return Err(SyntaxError::UnmatchedOpeningParen { position });
    }

    Ok(())
}
