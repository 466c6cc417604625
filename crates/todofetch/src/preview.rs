//! Bounded preview of a fetched collection

use std::io::{self, Write};

use crate::types::Todo;

/// Number of todos shown by the command-line preview.
pub const PREVIEW_LIMIT: usize = 5;

/// Write a blank line, the header `First <limit> todos:` and at most `limit`
/// lines of `ID: <id>, Title: <title>`.
pub fn write_preview<W: Write>(out: &mut W, todos: &[Todo], limit: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "First {limit} todos:")?;
    for todo in todos.iter().take(limit) {
        writeln!(out, "{todo}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(todos: &[Todo], limit: usize) -> String {
        let mut buf = Vec::new();
        write_preview(&mut buf, todos, limit).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_preview_truncates() {
        let todos: Vec<_> = (1..=200)
            .map(|id| Todo::new(id, format!("todo {id}"), id % 2 == 0))
            .collect();

        let rendered = render(&todos, PREVIEW_LIMIT);
        let body: Vec<_> = rendered.lines().skip(2).collect();

        assert_eq!(
            body,
            vec![
                "ID: 1, Title: todo 1",
                "ID: 2, Title: todo 2",
                "ID: 3, Title: todo 3",
                "ID: 4, Title: todo 4",
                "ID: 5, Title: todo 5",
            ]
        );
    }

    #[test]
    fn test_preview_short_collection() {
        let todos = vec![Todo::new(9, "only one", false)];
        assert_eq!(
            render(&todos, PREVIEW_LIMIT),
            "\nFirst 5 todos:\nID: 9, Title: only one\n"
        );
    }

    #[test]
    fn test_preview_empty_collection() {
        assert_eq!(render(&[], PREVIEW_LIMIT), "\nFirst 5 todos:\n");
    }
}
