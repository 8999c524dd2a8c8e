/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw expression string and produces a stream of
/// classified tokens (numbers, operators, names, parentheses), each carrying
/// its byte offset in the source. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input string into tokens with type, lexeme and position.
/// - Classifies identifiers into functions, variables and constants.
/// - Validates parenthesis balance over the token stream.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the expression, with one
/// recursive-descent function per precedence level.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Applies operator precedence and associativity.
/// - Reports malformed input with position info and a remediation hint.
pub mod parser;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, performs arithmetic with domain-error
/// checking, resolves names against the context tables, and enforces the
/// recursion-depth and execution-time limits. It is the core execution engine
/// of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Manages variables, constants, and the function table.
/// - Reports evaluation errors such as division by zero or undefined names.
pub mod evaluator;
