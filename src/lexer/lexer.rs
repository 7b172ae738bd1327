use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;

use crate::{Position, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

fn pattern(regex: &str, handler: RegexHandler) -> RegexPattern {
    RegexPattern {
        regex: Regex::new(regex).expect("lexer patterns are valid regular expressions"),
        handler,
    }
}

lazy_static! {
    // Every pattern is anchored; two-character operators precede their prefixes.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        pattern("^[ \\t\\r\\n\\x0B\\x0C]+", skip_handler),
        pattern("^//[^\\n]*", skip_handler),
        pattern("^[a-zA-Z_][a-zA-Z0-9_]*", symbol_handler),
        pattern("^[0-9]+(\\.[0-9]+)?", number_handler),
        pattern("^==", MK_DEFAULT_HANDLER!(TokenKind::Equal, "==")),
        pattern("^!=", MK_DEFAULT_HANDLER!(TokenKind::NotEqual, "!=")),
        pattern("^<=", MK_DEFAULT_HANDLER!(TokenKind::LessEqual, "<=")),
        pattern("^>=", MK_DEFAULT_HANDLER!(TokenKind::GreaterEqual, ">=")),
        pattern("^=", MK_DEFAULT_HANDLER!(TokenKind::Assign, "=")),
        pattern("^<", MK_DEFAULT_HANDLER!(TokenKind::LessThan, "<")),
        pattern("^>", MK_DEFAULT_HANDLER!(TokenKind::GreaterThan, ">")),
        pattern("^\\+", MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")),
        pattern("^-", MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")),
        pattern("^\\*", MK_DEFAULT_HANDLER!(TokenKind::Multiply, "*")),
        pattern("^/", MK_DEFAULT_HANDLER!(TokenKind::Divide, "/")),
        pattern("^\\(", MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")),
        pattern("^\\)", MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")),
        pattern("^\\{", MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{")),
        pattern("^\\}", MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}")),
        pattern("^;", MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")),
        pattern("^,", MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")),
    ];
}

/// Scanner state for a single source unit.
pub struct Lexer<'a> {
    tokens: Vec<Token>,
    source: &'a str,
    pos: usize,
    line: u32,
    column: u32,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Consumes `text`, which must be the prefix of the remainder, keeping
    /// line and column in step with every character.
    pub fn advance_str(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos += text.len();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_str(matched);
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    let kind = if matched.contains('.') {
        TokenKind::Float
    } else {
        TokenKind::Integer
    };

    lexer.push(MK_TOKEN!(kind, String::from(matched), lexer.position()));
    lexer.advance_str(matched);
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    lexer.push(MK_TOKEN!(kind, String::from(matched), lexer.position()));
    lexer.advance_str(matched);
}

fn invalid_handler(lexer: &mut Lexer) {
    let remainder = lexer.remainder();
    let Some(c) = remainder.chars().next() else {
        return;
    };
    let text = &remainder[..c.len_utf8()];

    trace!("invalid character {:?} at {}", c, lexer.position());
    lexer.push(MK_TOKEN!(TokenKind::Invalid, String::from(text), lexer.position()));
    lexer.advance_str(text);
}

/// Splits `source` into tokens.
///
/// Never fails: characters no pattern accepts become `Invalid` tokens and
/// scanning continues. The result always ends with exactly one `EOF` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let remainder = lex.remainder();
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remainder)
                .map(|found| (pattern.handler, &remainder[..found.end()]))
        });

        match matched {
            Some((handler, text)) if !text.is_empty() => handler(&mut lex, text),
            _ => invalid_handler(&mut lex),
        }
    }

    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), lex.position()));
    debug!("tokenized {} bytes into {} tokens", source.len(), lex.tokens.len());

    lex.tokens
}
