#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during tokenization or parsing.
pub enum SyntaxError {
    /// Encountered a character outside every known token class.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// An opening parenthesis `(` has no matching `)`.
    UnmatchedOpeningParen {
        /// Byte offset of the unmatched `(`.
        position: usize,
    },
    /// A closing parenthesis `)` has no matching `(`.
    UnmatchedClosingParen {
        /// Byte offset of the unmatched `)`.
        position: usize,
    },
    /// Found a token that cannot start or continue an expression.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// Reached the end of input while an expression was still incomplete.
    UnexpectedEndOfInput {
        /// Byte offset where input ended.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but something else was found.
    ExpectedClosingParen {
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// A complete expression was parsed but tokens remain.
    TrailingTokens {
        /// The first extra token.
        token:    String,
        /// Byte offset of the extra token.
        position: usize,
    },
    /// A numeric literal was too large to be represented as a finite `f64`.
    LiteralTooLarge {
        /// Byte offset of the literal.
        position: usize,
    },
    /// A function-call node carries an empty name (AST validation).
    EmptyFunctionName {
        /// Position recorded on the offending node.
        position: usize,
    },
    /// A number node holds a non-finite value (AST validation).
    NonFiniteNumber {
        /// Position recorded on the offending node.
        position: usize,
    },
}

impl SyntaxError {
    /// Gets the source position the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownCharacter { position, .. }
            | Self::UnmatchedOpeningParen { position }
            | Self::UnmatchedClosingParen { position }
            | Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::TrailingTokens { position, .. }
            | Self::LiteralTooLarge { position }
            | Self::EmptyFunctionName { position }
            | Self::NonFiniteNumber { position } => *position,
        }
    }

    /// Returns a one-line remediation hint for the error, when one exists.
    ///
    /// ## Example
    /// ```
    /// use expreval::interpreter::parser::core::parse;
    ///
    /// let error = parse("(1 + 2").unwrap_err();
    ///
    /// assert_eq!(error.suggestion(), Some("Add the missing ')'."));
    /// ```
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnknownCharacter { .. } => Some("Remove the unrecognized character."),
            Self::UnmatchedOpeningParen { .. } | Self::ExpectedClosingParen { .. } => {
                Some("Add the missing ')'.")
            },
            Self::UnmatchedClosingParen { .. } => {
                Some("Remove the extra ')' or add a matching '('.")
            },
            Self::UnexpectedToken { .. } => Some("Check the expression near this position."),
            Self::UnexpectedEndOfInput { .. } => Some("Complete the expression."),
            Self::TrailingTokens { .. } => Some("Remove the extra tokens after the expression."),
            Self::LiteralTooLarge { .. } => Some("Use a smaller numeric literal."),
            Self::EmptyFunctionName { .. } | Self::NonFiniteNumber { .. } => None,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f, "Error at position {position}: Unrecognized character '{character}'.")
            },

            Self::UnmatchedOpeningParen { position } => {
                write!(f, "Error at position {position}: Unmatched opening parenthesis.")
            },

            Self::UnmatchedClosingParen { position } => {
                write!(f, "Error at position {position}: Unmatched closing parenthesis.")
            },

            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token '{token}'.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Error at position {position}: Unexpected end of input.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at position {position}: Expected closing parenthesis ')' but none found."),

            Self::TrailingTokens { token, position } => write!(f,
                                                               "Error at position {position}: Unexpected token '{token}' after the expression."),

            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Numeric literal is too large.")
            },

            Self::EmptyFunctionName { position } => {
                write!(f, "Error at position {position}: Function call has an empty name.")
            },

            Self::NonFiniteNumber { position } => {
                write!(f, "Error at position {position}: Number node holds a non-finite value.")
            },
        }
    }
}

impl std::error::Error for SyntaxError {}
