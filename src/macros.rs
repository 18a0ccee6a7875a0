//! Utility macros for the front end.
//!
//! - `MK_SPAN!` - Creates a Span between two byte offsets of one source
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Span covering `$start..$end` in the source named `$file`.
///
/// Positions are `u32`, so offsets past 4 GiB saturate at `u32::MAX`
/// instead of wrapping.
///
/// # Arguments
///
/// * `$start` - Start byte offset
/// * `$end` - End byte offset (exclusive)
/// * `$file` - `Rc<String>` naming the source
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $end:expr, $file:expr) => {
        $crate::Span {
            start: $crate::Position(
                u32::try_from($start).unwrap_or(u32::MAX),
                ::std::rc::Rc::clone(&$file),
            ),
            end: $crate::Position(
                u32::try_from($end).unwrap_or(u32::MAX),
                ::std::rc::Rc::clone(&$file),
            ),
        }
    };
}

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$literal` - The token's source text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $literal:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            literal: $literal,
            span: $span,
        }
    };
}
