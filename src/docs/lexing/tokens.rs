//! Token definitions for commented source files
//!
//! The lexer only needs to tell comments apart from everything else, so the token set is
//! small: the two comment forms, the literal forms whose contents must not be mistaken
//! for comments, and catch-all code. The tokens are defined using the logos derive macro.
//!
//! Apostrophes and slashes mean different things in different languages, so the lexer
//! carries a [Dialect] in its extras and the callbacks consult it.
use logos::{Lexer, Logos};

/// Reasons the source lexer gives up on a file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LexError {
    #[default]
    UnexpectedInput,
    UnterminatedBlockComment,
    UnterminatedString,
    UnterminatedTemplate,
}

impl LexError {
    pub fn message(&self) -> &'static str {
        match self {
            LexError::UnexpectedInput => "Unexpected input",
            LexError::UnterminatedBlockComment => "Unterminated block comment",
            LexError::UnterminatedString => "Unterminated string literal",
            LexError::UnterminatedTemplate => "Unterminated template literal",
        }
    }
}

/// Literal syntax of the language being lexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// JavaScript and friends: `'...'` is a string, `/.../` may be a regular expression
    #[default]
    Script,
    /// Rust, C, Java, Go: `'x'` is a character literal, any other apostrophe is code
    CharLiterals,
}

/// All possible tokens of a C-family source file
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexError)]
#[logos(extras = Dialect)]
pub enum SourceToken {
    // `// ...` up to (not including) the line break; carries the body after `//`
    #[regex(r"//[^\n]*", |lex| lex.slice()[2..].trim_end_matches('\r').to_string())]
    LineComment(String),

    // `/* ... */`; carries the body between the delimiters
    #[token("/*", block_comment)]
    BlockComment(String),

    #[token("\"", double_quoted)]
    DoubleQuoted,

    // A quoted literal, or a lone apostrophe (lifetimes, labels)
    #[token("'", single_quoted)]
    SingleQuoted,

    #[token("`", template)]
    Template,

    // Division, or in script code a whole regular expression literal
    #[token("/", slash)]
    Slash,

    // Everything that can't start a comment or a literal
    #[regex(r#"[^/"'`]+"#)]
    Code,
}

impl SourceToken {
    /// Body of a line or block comment
    pub fn comment_text(self) -> Option<String> {
        match self {
            SourceToken::LineComment(text) | SourceToken::BlockComment(text) => Some(text),
            _ => None,
        }
    }
}

fn block_comment(lex: &mut Lexer<SourceToken>) -> Result<String, LexError> {
    let remainder = lex.remainder();
    match remainder.find("*/") {
        Some(end) => {
            let body = remainder[..end].to_string();
            lex.bump(end + 2);
            Ok(body)
        }
        None => Err(LexError::UnterminatedBlockComment),
    }
}

/// Length in bytes up to and including the closing quote, honoring backslash escapes.
fn closing_quote(text: &str, quote: char, multi_line: bool) -> Option<usize> {
    let mut escaped = false;
    for (offset, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\n' if !multi_line => return None,
            c if c == quote => return Some(offset + c.len_utf8()),
            _ => {}
        }
    }
    None
}

/// Length of the rest of a character literal: one character or one escape, then `'`
fn char_literal(text: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    match chars.next()? {
        (_, '\'' | '\n') => None,
        (_, '\\') => {
            let (_, escaped) = chars.next()?;
            if escaped == '\n' {
                return None;
            }
            // `\n`, `\'`, `\x41`, `\u{e9}`
            for (offset, ch) in chars {
                match ch {
                    '\'' => return Some(offset + 1),
                    c if c.is_ascii_alphanumeric() || c == '{' || c == '}' => {}
                    _ => return None,
                }
            }
            None
        }
        _ => match chars.next()? {
            (offset, '\'') => Some(offset + 1),
            _ => None,
        },
    }
}

/// Whether a `/` preceded by `before` starts a regular expression rather than a division
fn regex_allowed_after(before: &str) -> bool {
    const KEYWORDS: &[&str] = &[
        "return", "typeof", "instanceof", "in", "of", "new", "delete", "void", "throw", "case",
        "do", "else", "yield", "await",
    ];

    let before = before.trim_end();
    match before.chars().last() {
        None => true,
        Some(c) if "(,=:[!&|?{};+-*%<>~^".contains(c) => true,
        Some(c) if c.is_alphanumeric() || c == '_' || c == '$' => {
            let rest =
                before.trim_end_matches(|c: char| c.is_alphanumeric() || c == '_' || c == '$');
            KEYWORDS.contains(&&before[rest.len()..])
        }
        _ => false,
    }
}

/// Length of the rest of a regular expression literal, flags included
fn regex_literal(text: &str) -> Option<usize> {
    let mut escaped = false;
    let mut in_class = false;
    for (offset, ch) in text.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            '\n' => return None,
            '[' => in_class = true,
            ']' => in_class = false,
            '/' if !in_class => {
                let rest = &text[offset + 1..];
                let flags = rest.len()
                    - rest
                        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
                        .len();
                return Some(offset + 1 + flags);
            }
            _ => {}
        }
    }
    None
}

fn double_quoted(lex: &mut Lexer<SourceToken>) -> Result<(), LexError> {
    let end = closing_quote(lex.remainder(), '"', false).ok_or(LexError::UnterminatedString)?;
    lex.bump(end);
    Ok(())
}

fn single_quoted(lex: &mut Lexer<SourceToken>) {
    let end = match lex.extras {
        Dialect::Script => closing_quote(lex.remainder(), '\'', false),
        Dialect::CharLiterals => char_literal(lex.remainder()),
    };
    if let Some(end) = end {
        lex.bump(end);
    }
}

fn template(lex: &mut Lexer<SourceToken>) -> Result<(), LexError> {
    let end = closing_quote(lex.remainder(), '`', true).ok_or(LexError::UnterminatedTemplate)?;
    lex.bump(end);
    Ok(())
}

fn slash(lex: &mut Lexer<SourceToken>) {
    if lex.extras != Dialect::Script || !regex_allowed_after(&lex.source()[..lex.span().start]) {
        return;
    }
    if let Some(end) = regex_literal(lex.remainder()) {
        lex.bump(end);
    }
}
