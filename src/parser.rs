//! Hive schema dump line parser.
//!
//! Extracts `(name, type)` declarations from a line-oriented schema dump and
//! assigns dense 1-based field ids in input order.

use crate::schema::Field;

/// A parsed declaration line, before id assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub field_type: String,
}

/// Parse one line of a schema dump.
///
/// Lines are split on single spaces, so runs of spaces produce empty tokens
/// that count toward the token total. A line is a declaration when it has
/// more than two tokens and its first token is not the `#` comment marker;
/// blank lines and section headers fall under the token-count rule. The
/// field name is the first token and the type is the last token. Middle
/// tokens hold column qualifiers the conversion does not use.
///
/// # Arguments
///
/// * `line` - One line of the schema dump, without its line terminator
///
/// # Returns
///
/// The extracted declaration, or `None` if the line is not a declaration
pub fn parse_declaration(line: &str) -> Option<Declaration> {
    let tokens: Vec<&str> = line.split(' ').collect();

    if tokens.len() <= 2 || tokens[0] == "#" {
        return None;
    }

    Some(Declaration {
        name: tokens[0].to_string(),
        field_type: tokens[tokens.len() - 1].to_string(),
    })
}

/// Parse declaration lines into fields with sequential ids.
///
/// Ids start at 1 and follow input order. Skipped lines do not consume an
/// id, so the result is always numbered 1..=N with no gaps.
pub fn parse_fields<'a, I>(lines: I) -> Vec<Field>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(parse_declaration)
        .enumerate()
        .map(|(idx, decl)| Field::new(idx as u32 + 1, decl.name, decl.field_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declaration_three_tokens() {
        let decl = parse_declaration("user_id bigint comment").unwrap();

        assert_eq!(decl.name, "user_id");
        assert_eq!(decl.field_type, "comment");
    }

    #[test]
    fn test_parse_declaration_keeps_first_and_last_token() {
        let decl = parse_declaration("age BIGINT from_deserializer EXTRA").unwrap();

        assert_eq!(decl.name, "age");
        assert_eq!(decl.field_type, "EXTRA");
    }

    #[test]
    fn test_parse_declaration_skips_comments() {
        assert_eq!(parse_declaration("# col_name data_type comment"), None);
    }

    #[test]
    fn test_parse_declaration_comment_marker_is_exact() {
        // Only a bare `#` first token marks a comment.
        let decl = parse_declaration("#id int comment").unwrap();

        assert_eq!(decl.name, "#id");
        assert_eq!(decl.field_type, "comment");
    }

    #[test]
    fn test_parse_declaration_skips_short_lines() {
        assert_eq!(parse_declaration(""), None);
        assert_eq!(parse_declaration("id INT"), None);
        assert_eq!(parse_declaration("# Partition"), None);
    }

    #[test]
    fn test_parse_declaration_counts_empty_tokens() {
        // Two spaces between tokens: the empty middle token makes this a
        // three-token line, so it parses as a declaration.
        let decl = parse_declaration("id  INT").unwrap();

        assert_eq!(decl.name, "id");
        assert_eq!(decl.field_type, "INT");
    }

    #[test]
    fn test_parse_declaration_tabs_are_not_separators() {
        assert_eq!(parse_declaration("id\tINT\tcomment"), None);
    }

    #[test]
    fn test_parse_fields_assigns_dense_ids() {
        let lines = vec![
            "id INT comment",
            "# comment INT here",
            "name STRING comment",
            "",
            "age BIGINT EXTRA",
        ];

        let fields = parse_fields(lines);

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], Field::new(1, "id", "comment"));
        assert_eq!(fields[1], Field::new(2, "name", "comment"));
        assert_eq!(fields[2], Field::new(3, "age", "EXTRA"));
    }

    #[test]
    fn test_parse_fields_empty_input() {
        assert!(parse_fields("".lines()).is_empty());
    }
}
