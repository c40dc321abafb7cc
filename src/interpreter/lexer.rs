use logos::Logos;

use crate::{ast::Position, error::ParseError};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Real literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_real)]
    Real(f32),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i32),
    /// Boolean literal tokens: `"TRUE"` or `"FALSE"`, quotes included.
    #[token("\"TRUE\"", |_| true)]
    #[token("\"FALSE\"", |_| false)]
    Bool(bool),
    /// Character literal tokens, such as `'c'`.
    #[regex(r"'[^'\n]'", |lex| lex.slice().chars().nth(1))]
    Char(char),
    /// String literal tokens, such as `"hello"`.
    #[regex(r#""[^"\n]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Text(String),
    /// Escape literal tokens, such as `[#]`.
    #[regex(r"\[[^\n]\]", |lex| lex.slice().chars().nth(1))]
    Escape(char),
    /// `$`, the newline literal.
    #[token("$")]
    Dollar,
    /// `BEGIN`
    #[token("BEGIN")]
    Begin,
    /// `END`
    #[token("END")]
    End,
    /// `CODE`
    #[token("CODE")]
    Code,
    /// `INT`
    #[token("INT")]
    Int,
    /// `FLOAT`
    #[token("FLOAT")]
    Float,
    /// `CHAR`
    #[token("CHAR")]
    CharType,
    /// `BOOL`
    #[token("BOOL")]
    BoolType,
    /// `STRING`
    #[token("STRING")]
    StringType,
    /// `IF`
    #[token("IF")]
    If,
    /// `ELSE`
    #[token("ELSE")]
    Else,
    /// `WHILE`
    #[token("WHILE")]
    While,
    /// `DO`
    #[token("DO")]
    Do,
    /// `DISPLAY`
    #[token("DISPLAY")]
    Display,
    /// `SCAN`
    #[token("SCAN")]
    Scan,
    /// `AND`
    #[token("AND")]
    And,
    /// `OR`
    #[token("OR")]
    Or,
    /// `NOT`
    #[token("NOT")]
    Not,
    /// Identifier tokens; variable names such as `x` or `a_1`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
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
    /// `&`
    #[token("&")]
    Ampersand,
    /// `=`
    #[token("=")]
    Equals,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `<>`
    #[token("<>")]
    NotEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// Line breaks; they separate statements.
    #[regex(r"\r?\n")]
    NewLine,
    /// Spaces, tabs, feeds and stray carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line and the byte offset at which it starts, so that
/// every token can be given a line and a column. Columns count characters,
/// not bytes.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line:       usize,
    /// Byte offset of the first character of the current line.
    pub line_start: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line:       1,
               line_start: 0, }
    }
}

/// Splits `source` into positioned tokens.
///
/// Comments and horizontal whitespace are dropped; line breaks are kept as
/// [`Token::NewLine`].
///
/// # Errors
/// - `LiteralTooLarge` for an integer literal that does not fit in 32 bits.
/// - `UnrecognizedInput` for any text that does not start a token.
///
/// # Example
/// ```
/// use codelang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("INT x = 5").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Int,
///                 Token::Identifier("x".to_string()),
///                 Token::Equals,
///                 Token::Integer(5)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Position)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        let column = source[lexer.extras.line_start..span.start].chars().count();
        let pos = Position::new(lexer.extras.line, column);

        match token {
            Ok(Token::NewLine) => {
                tokens.push((Token::NewLine, pos));
                lexer.extras.line += 1;
                lexer.extras.line_start = span.end;
            },
            Ok(tok) => tokens.push((tok, pos)),
            Err(()) => {
                let text = lexer.slice().to_string();
                if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(ParseError::LiteralTooLarge { text, pos });
                }
                return Err(ParseError::UnrecognizedInput { text, pos });
            },
        }
    }

    Ok(tokens)
}

/// Parses a real literal from the current token slice.
///
/// # Returns
/// - `Some(f32)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_real(lex: &logos::Lexer<Token>) -> Option<f32> {
    lex.slice().parse().ok()
}
/// Parses an integer literal from the current token slice.
///
/// # Returns
/// - `Some(i32)`: The parsed value if it fits.
/// - `None`: If the literal is out of range.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i32> {
    lex.slice().parse().ok()
}
