use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{MK_SPAN, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new("^[ \t\n\r]+").unwrap();
    static ref IDENTIFIER: Regex = Regex::new("^[a-zA-Z_]+").unwrap();
    static ref NUMBER: Regex = Regex::new("^[0-9]+").unwrap();
}

/// On-demand scanner over one source text.
///
/// The only state carried between calls is the cursor, so the lexer can be
/// driven one token at a time by the parser.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            file: file_name,
        }
    }

    pub fn file(&self) -> Rc<String> {
        Rc::clone(&self.file)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    /// Builds a token from `literal` at the cursor and moves past it.
    fn emit(&mut self, kind: TokenKind, literal: String) -> Token {
        let start = self.pos;
        self.advance_n(literal.len());

        MK_TOKEN!(kind, literal, MK_SPAN!(start, self.pos, self.file))
    }

    /// Returns the next token. Past the end of input this keeps returning EOF.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();
        let token = self.read_token();
        trace!(kind = %token.kind, literal = %token.literal, "scanned token");
        token
    }

    fn read_token(&mut self) -> Token {
        let Some(ch) = self.at() else {
            return MK_TOKEN!(TokenKind::EOF, String::new(), MK_SPAN!(self.pos, self.pos, self.file));
        };

        if let Some(matched) = IDENTIFIER.find(self.remainder()) {
            let literal = matched.as_str().to_string();
            return self.emit(lookup_identifier(&literal), literal);
        }

        if let Some(matched) = NUMBER.find(self.remainder()) {
            let literal = matched.as_str().to_string();
            return self.emit(TokenKind::Number, literal);
        }

        match (ch, self.peek()) {
            ('=', Some('=')) => return self.emit(TokenKind::Equals, String::from("==")),
            ('!', Some('=')) => return self.emit(TokenKind::NotEquals, String::from("!=")),
            _ => {}
        }

        // Non-ASCII input is consumed a whole character at a time.
        match TokenKind::from_punctuation(ch) {
            Some(kind) => self.emit(kind, ch.to_string()),
            None => self.emit(TokenKind::Illegal, ch.to_string()),
        }
    }
}

/// Scans the whole source up to and including the first EOF token.
///
/// The parser pulls tokens lazily; this is for tooling and tests.
pub fn tokenize(source: String, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
