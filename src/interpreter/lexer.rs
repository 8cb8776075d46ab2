use logos::{FilterResult, Lexer, Logos, Skip};
use tracing::debug;

use crate::error::ParseError;

/// Represents the category of a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Literal categories carry their decoded value.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
pub enum TokenKind {
    /// Numeric literal tokens, such as `3.14`, `.5` or `42`.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// String literal tokens delimited by matching `"` or `'`.
    #[token("\"", lex_string)]
    #[token("'", lex_string)]
    Str(String),
    /// Identifier tokens; variable names such as `x` or `total`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `write`
    #[token("write")]
    Write,
    /// `writeln`
    #[token("writeln")]
    Writeln,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `not`
    #[token("not")]
    Not,
    /// `or`
    #[token("or")]
    Or,
    /// `and`
    #[token("and")]
    And,
    /// `xor`
    #[token("xor")]
    Xor,
    /// `nor`
    #[token("nor")]
    Nor,
    /// `nand`
    #[token("nand")]
    Nand,
    /// `xnor`
    #[token("xnor")]
    Xnor,
    /// `for`
    #[token("for")]
    For,
    /// `while`
    #[token("while")]
    While,
    /// `repeat`
    #[token("repeat")]
    Repeat,
    /// `until`
    #[token("until")]
    Until,
    /// `break`
    #[token("break")]
    Break,
    /// `continue`
    #[token("continue")]
    Continue,
    /// `read`
    #[token("read")]
    Read,
    /// `readnum`
    #[token("readnum")]
    ReadNum,
    /// `fun` (reserved)
    #[token("fun")]
    Fun,
    /// `return` (reserved)
    #[token("return")]
    Return,
    /// `class` (reserved)
    #[token("class")]
    Class,
    /// `this` (reserved)
    #[token("this")]
    This,
    /// `super` (reserved)
    #[token("super")]
    Super,

    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `;`
    #[token(";")]
    Semicolon,
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
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,

    /// `// Comments.`
    #[token("//", skip_line_comment)]
    Comment,
    /// `/* Block comments, possibly spanning lines. */`
    #[token("/*", skip_block_comment)]
    BlockComment,
    /// Line breaks. Skipped, but they advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,

    /// End of input. Never produced by logos; appended by [`scan`].
    Eof,
}

impl TokenKind {
    /// Returns whether this token begins a statement.
    ///
    /// Used by the parser to find a safe point to resume after a syntax error.
    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(self,
                 Self::Write
                 | Self::Writeln
                 | Self::Let
                 | Self::If
                 | Self::For
                 | Self::While
                 | Self::Repeat
                 | Self::Read
                 | Self::ReadNum
                 | Self::Break
                 | Self::Continue
                 | Self::Fun
                 | Self::Return
                 | Self::Class)
    }

    /// Returns whether this token is a keyword reserved for future use.
    #[must_use]
    pub const fn is_reserved(&self) -> bool {
        matches!(self, Self::Fun | Self::Return | Self::Class | Self::This | Self::Super)
    }
}

/// A token together with the text it was scanned from and its source line.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The token category, including any decoded literal value.
    pub kind:   TokenKind,
    /// The exact source text of the token.
    pub lexeme: String,
    /// The line on which the token ends.
    pub line:   usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Errors produced by the logos state machine.
///
/// These are converted into [`ParseError`]s by [`scan`], which adds the line
/// and offending character.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    UnexpectedCharacter,
    /// A string literal that reaches the end of input.
    UnterminatedString,
    /// A block comment that reaches the end of input.
    UnterminatedComment,
}

/// Scans `source` into tokens.
///
/// Scanning never stops early: every lexical error is recorded and the scan
/// continues with the next character. The returned token vector always ends
/// with an [`TokenKind::Eof`] token.
///
/// # Example
/// ```
/// use lack::interpreter::lexer::{TokenKind, scan};
///
/// let (tokens, errors) = scan("let x = 1.5;");
///
/// assert!(errors.is_empty());
/// assert_eq!(tokens[3].kind, TokenKind::Number(1.5));
/// assert_eq!(tokens.last().map(|t| &t.kind), Some(&TokenKind::Eof));
/// ```
#[must_use]
pub fn scan(source: &str) -> (Vec<Token>, Vec<ParseError>) {
    let mut tokens = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = TokenKind::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(LexError::UnexpectedCharacter) => {
                let character = lexer.slice().chars().next().unwrap_or('\0');
                errors.push(ParseError::UnexpectedCharacter { character, line });
            },
            Err(LexError::UnterminatedString) => {
                errors.push(ParseError::UnterminatedString { line });
            },
            Err(LexError::UnterminatedComment) => {
                errors.push(ParseError::UnterminatedComment { line });
            },
        }
    }

    tokens.push(Token::new(TokenKind::Eof, "", lexer.extras.line));
    debug!(tokens = tokens.len(), errors = errors.len(), "scanned source");

    (tokens, errors)
}

/// Parses a numeric literal from the current token slice.
fn parse_number(lex: &Lexer<TokenKind>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Consumes a string literal whose opening quote is the current slice.
///
/// The literal is closed by the same quote character that opened it. Newlines
/// inside the literal are counted.
fn lex_string(lex: &mut Lexer<TokenKind>) -> Result<String, LexError> {
    let quote = lex.slice().chars().next().unwrap_or('"');
    let rest = lex.remainder();

    if let Some(end) = rest.find(quote) {
        let text = rest[..end].to_string();
        lex.extras.line += text.matches('\n').count();
        lex.bump(end + quote.len_utf8());
        Ok(text)
    } else {
        lex.extras.line += rest.matches('\n').count();
        lex.bump(rest.len());
        Err(LexError::UnterminatedString)
    }
}

/// Skips the rest of a `//` comment, leaving the newline in place.
fn skip_line_comment(lex: &mut Lexer<TokenKind>) -> Skip {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
    Skip
}

/// Skips a `/* ... */` comment, counting the newlines it spans.
fn skip_block_comment(lex: &mut Lexer<TokenKind>) -> FilterResult<(), LexError> {
    let rest = lex.remainder();

    if let Some(end) = rest.find("*/") {
        lex.extras.line += rest[..end].matches('\n').count();
        lex.bump(end + 2);
        FilterResult::Skip
    } else {
        lex.extras.line += rest.matches('\n').count();
        lex.bump(rest.len());
        FilterResult::Error(LexError::UnterminatedComment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let (tokens, errors) = scan(source);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        tokens.into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn scans_numbers() {
        assert_eq!(kinds("12 3.5 .25"),
                   vec![TokenKind::Number(12.0),
                        TokenKind::Number(3.5),
                        TokenKind::Number(0.25),
                        TokenKind::Eof]);
    }

    #[test]
    fn number_takes_a_single_fraction() {
        assert_eq!(kinds("1.2.3"),
                   vec![TokenKind::Number(1.2), TokenKind::Number(0.3), TokenKind::Eof]);
        assert_eq!(kinds("7."), vec![TokenKind::Number(7.0), TokenKind::Dot, TokenKind::Eof]);
    }

    #[test]
    fn scans_both_quote_styles() {
        assert_eq!(kinds(r#""a'b" 'c"d'"#),
                   vec![TokenKind::Str("a'b".into()),
                        TokenKind::Str("c\"d".into()),
                        TokenKind::Eof]);
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(kinds("let letter readnum reader xnor"),
                   vec![TokenKind::Let,
                        TokenKind::Identifier("letter".into()),
                        TokenKind::ReadNum,
                        TokenKind::Identifier("reader".into()),
                        TokenKind::Xnor,
                        TokenKind::Eof]);
    }

    #[test]
    fn two_character_operators() {
        assert_eq!(kinds("== != <= >= = < >"),
                   vec![TokenKind::EqualEqual,
                        TokenKind::BangEqual,
                        TokenKind::LessEqual,
                        TokenKind::GreaterEqual,
                        TokenKind::Equals,
                        TokenKind::Less,
                        TokenKind::Greater,
                        TokenKind::Eof]);
    }

    #[test]
    fn comments_are_skipped_and_lines_counted() {
        let (tokens, errors) = scan("// one\n/* two\nthree */ x\n'a\nb' y");
        assert!(errors.is_empty());
        let lines: Vec<_> = tokens.iter().map(|t| (t.lexeme.as_str(), t.line)).collect();
        assert_eq!(lines, vec![("x", 3), ("'a\nb'", 5), ("y", 5), ("", 5)]);
    }

    #[test]
    fn bare_bang_is_reported_and_scanning_continues() {
        let (tokens, errors) = scan("1 ! 2 # 3");
        assert_eq!(errors,
                   vec![ParseError::UnexpectedCharacter { character: '!',
                                                          line:      1, },
                        ParseError::UnexpectedCharacter { character: '#',
                                                          line:      1, }]);
        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn unterminated_string_emits_no_token() {
        let (tokens, errors) = scan("write \"abc\n");
        assert_eq!(errors, vec![ParseError::UnterminatedString { line: 2 }]);
        assert_eq!(tokens.iter().map(|t| &t.kind).collect::<Vec<_>>(),
                   vec![&TokenKind::Write, &TokenKind::Eof]);
    }

    #[test]
    fn unterminated_block_comment_is_reported() {
        let (tokens, errors) = scan("x /* never\nclosed");
        assert_eq!(errors, vec![ParseError::UnterminatedComment { line: 2 }]);
        assert_eq!(tokens.len(), 2);
    }
}
