#![allow(clippy::module_inception)]

use std::rc::Rc;

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

#[cfg(test)]
mod test_helpers;

extern crate regex;

pub use crate::parser::parser::parse;

/// Byte offset into a named source.
#[derive(Debug, Clone)]
pub struct Position(pub u32, pub Rc<String>);

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Finds the line containing byte offset `position` in `content`.
///
/// Returns the 1-based line number, the line text and the column within the
/// line. An offset equal to the content length (where EOF sits) maps to the
/// end of the last line. Returns `None` for offsets past that.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;
    let mut last = (1, String::new(), 0);

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        last = (line_number, line.to_string(), line.trim_end_matches('\n').len());
        start = end;
        line_number += 1;
    }

    // EOF after a trailing newline sits on its own, empty line
    if content.ends_with('\n') {
        return Some((line_number, String::new(), 0));
    }

    Some(last)
}

/// Renders an error against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (Expected `IDENT` here, found `=`)
/// -> main.mk
///   |
/// 1 | let = 5;
///   | ----^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", position.1));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, position.0) else {
        out.push_str(&format!("   {}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    // Offsets are bytes but the caret is padded in characters
    let column = line_text
        .get(..line_pos)
        .map_or(line_pos, |before| before.chars().count());
    let arrows = column.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.len() - string.trim_start_matches([' ', '\t']).len();

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use crate::parse;

    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo\nbar\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);

        assert!(super::get_line_at_position(content, 100).is_none());
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("let x", 5).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "let x");
        assert_eq!(line_pos, 5);

        let (line_number, line, _) = super::get_line_at_position("x\n", 2).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "");
    }

    #[test]
    fn test_render_error() {
        let source = "let x = 1;\n  let = 5;\n";
        let (_, errors) = parse(source.to_string(), Some("main.mk".to_string()));
        let first = errors.iter().next().unwrap();

        let rendered = super::render_error(first, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(
            lines[0],
            "Error: UnexpectedToken (Expected `IDENT` here, found `=`)"
        );
        assert_eq!(lines[1], "-> main.mk");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | let = 5;");
        assert_eq!(lines[4], "  | ----^");
    }

    #[test]
    fn test_render_error_after_multibyte_character() {
        let source = "é + )";
        let (_, errors) = parse(source.to_string(), None);
        let second = errors.iter().nth(1).unwrap();
        assert_eq!(second.get_position().0, 3);

        let rendered = super::render_error(second, source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[3], "1 | é + )");
        assert_eq!(lines[4], "  | --^");
    }

    #[test]
    fn test_render_error_without_tip() {
        let source = format!("{}5", "-".repeat(200));
        let (_, errors) = parse(source.clone(), None);
        let first = errors.iter().next().unwrap();

        let rendered = super::render_error(first, &source);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "Error: NestingTooDeep");
        assert_eq!(lines[1], "-> shell");
        assert!(lines[4].ends_with("-^"));
    }
}
