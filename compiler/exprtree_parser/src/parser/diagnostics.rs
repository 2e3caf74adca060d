use super::error::PositionedError;

/// Formats an error with the offending source line and a caret under the
/// error position.
///
/// ```text
/// error: unexpected end of input
///   |
/// 1 | (1 + 2
///   |       ^
/// ```
pub fn render_snippet(error: &PositionedError, source: &str) -> String {
    let (line_no, line, column) = locate(source, error.position);
    let gutter = line_no.to_string();
    let pad = " ".repeat(gutter.len());
    format!(
        "error: {kind}\n{pad} |\n{gutter} | {line}\n{pad} | {caret}^",
        kind = error.kind,
        caret = " ".repeat(column),
    )
}

/// Finds the 1-based line number, the line text and the 0-based column of a
/// character offset. An offset at or past the end points just after the last
/// character.
fn locate(source: &str, position: usize) -> (usize, &str, usize) {
    let mut line_start = 0;
    let mut line_no = 1;
    let mut lines = source.split('\n').peekable();

    while let Some(line) = lines.next() {
        let len = line.chars().count();
        if position <= line_start + len || lines.peek().is_none() {
            let column = position.saturating_sub(line_start).min(len);
            return (line_no, line, column);
        }
        line_start += len + 1;
        line_no += 1;
    }

    (line_no, "", 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_snippet_single_line() {
        let err = PositionedError::new(ErrorKind::UnexpectedEndOfInput, 6);
        assert_eq!(
            render_snippet(&err, "(1 + 2"),
            "error: unexpected end of input\n  |\n1 | (1 + 2\n  |       ^"
        );
    }

    #[test]
    fn test_render_snippet_second_line() {
        let err = PositionedError::new(ErrorKind::UnexpectedSymbol, 6);
        let rendered = render_snippet(&err, "1 +\n2 % 3");
        assert_eq!(
            rendered,
            "error: unexpected symbol\n  |\n2 | 2 % 3\n  |   ^"
        );
    }

    #[test]
    fn test_render_snippet_empty_source() {
        let err = PositionedError::new(ErrorKind::EmptyBody, 0);
        assert_eq!(
            render_snippet(&err, ""),
            "error: unexpected empty body\n  |\n1 | \n  | ^"
        );
    }
}
