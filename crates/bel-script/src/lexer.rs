//! Expression tokenizer.
//!
//! Produces span-based tokens without storing text; text is sliced from the
//! logical line only when needed. Consecutive unrecognised characters are
//! coalesced into a single `Garbage` token, which the parser reports as the
//! line's error.

use logos::Logos;
use rowan::TextRange;

use bel_core::RelationshipType;

use crate::location::to_text_range;

/// Token kinds. `Eol` is never produced by the lexer; the parser reports it
/// when looking past the last token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    #[token("(")]
    ParenOpen = 0,

    #[token(")")]
    ParenClose,

    #[token("{")]
    BraceOpen,

    #[token("}")]
    BraceClose,

    #[token(",")]
    Comma,

    /// Namespace separator. `:>` wins by longest match.
    #[token(":")]
    Colon,

    #[token("=")]
    Equals,

    #[token("->")]
    Increases,

    #[token("-|")]
    Decreases,

    #[token("=>")]
    DirectlyIncreases,

    #[token("=|")]
    DirectlyDecreases,

    #[token("--")]
    Association,

    #[token(":>")]
    TranscribedTo,

    #[token(">>")]
    TranslatedTo,

    #[regex(r#""(?:[^"\\]|\\.)*""#)]
    StringLiteral,

    /// Identifier: function names, prefixes, bare values, keywords.
    /// Inner `.` and `-` are allowed (`1.0`, `IL-6`).
    #[regex(r"[A-Za-z0-9_]+(?:[.\-][A-Za-z0-9_]+)*")]
    Id,

    #[regex(r"[ \t\r\x0C]+")]
    Whitespace,

    /// Coalesced unrecognized characters
    Garbage,

    Eol,
}

use SyntaxKind::*;

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        self == Whitespace
    }

    /// The relationship a symbolic operator token stands for.
    pub fn relationship(self) -> Option<RelationshipType> {
        match self {
            Increases => Some(RelationshipType::Increases),
            Decreases => Some(RelationshipType::Decreases),
            DirectlyIncreases => Some(RelationshipType::DirectlyIncreases),
            DirectlyDecreases => Some(RelationshipType::DirectlyDecreases),
            Association => Some(RelationshipType::Association),
            TranscribedTo => Some(RelationshipType::TranscribedTo),
            TranslatedTo => Some(RelationshipType::TranslatedTo),
            _ => None,
        }
    }

    /// Human-readable name for error messages.
    pub fn describe(self) -> &'static str {
        match self {
            ParenOpen => "`(`",
            ParenClose => "`)`",
            BraceOpen => "`{`",
            BraceClose => "`}`",
            Comma => "`,`",
            Colon => "`:`",
            Equals => "`=`",
            Increases => "`->`",
            Decreases => "`-|`",
            DirectlyIncreases => "`=>`",
            DirectlyDecreases => "`=|`",
            Association => "`--`",
            TranscribedTo => "`:>`",
            TranslatedTo => "`>>`",
            StringLiteral => "string",
            Id => "identifier",
            Whitespace => "whitespace",
            Garbage => "unrecognized input",
            Eol => "end of line",
        }
    }
}

/// Zero-copy token: kind + span, text retrieved via [`token_text`] when needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub span: TextRange,
}

impl Token {
    #[inline]
    pub fn new(kind: SyntaxKind, span: TextRange) -> Self {
        Self { kind, span }
    }
}

/// Tokenizes one logical line into span-based tokens.
pub fn lex(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = SyntaxKind::lexer(text);
    let mut error_start: Option<usize> = None;

    loop {
        match lexer.next() {
            Some(Ok(kind)) => {
                if let Some(start) = error_start.take() {
                    let end = lexer.span().start;
                    tokens.push(Token::new(Garbage, to_text_range(start..end)));
                }
                tokens.push(Token::new(kind, to_text_range(lexer.span())));
            }
            Some(Err(())) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
            None => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(Garbage, to_text_range(start..text.len())));
                }
                break;
            }
        }
    }

    tokens
}

/// Retrieves the text slice for a token. O(1) slice into the line.
#[inline]
pub fn token_text<'t>(text: &'t str, token: &Token) -> &'t str {
    &text[std::ops::Range::<usize>::from(token.span)]
}
