//! # Comment Rendering
//!
//! Turns schema documentation into PostgreSQL `COMMENT ON` statements.
//!
//! Each model renders to one block:
//!
//! ```text
//! -- users comments
//! COMMENT ON TABLE "users" IS 'User table';
//! COMMENT ON COLUMN "users"."name" IS 'Full name';
//!
//! ```
//!
//! The header and the trailing blank line are always present; the statements
//! only for documented objects. Models and fields keep the caller's order and
//! names are emitted verbatim. Nothing here touches the filesystem.

use remarks_core::Documented;
use remarks_ir::Model;

/// Version written as the first line of every artifact
pub const GENERATOR_VERSION: &str = "1.0.0";

/// Escape a documentation string for use inside a single-quoted SQL literal.
///
/// Only `'` is rewritten (to `''`).
pub fn escape_comment(comment: &str) -> String {
    comment.replace('\'', "''")
}

/// Render the comment block for one model, one entry per output line.
pub fn render_model(model: &Model) -> Vec<String> {
    let table = model.db_name();
    let mut lines = vec![format!("-- {} comments", table)];

    if let Some(doc) = model.comment() {
        lines.push(format!(
            "COMMENT ON TABLE \"{}\" IS '{}';",
            table,
            escape_comment(doc)
        ));
    }

    for field in &model.fields {
        if let Some(doc) = field.comment() {
            lines.push(format!(
                "COMMENT ON COLUMN \"{}\".\"{}\" IS '{}';",
                table,
                field.db_name(),
                escape_comment(doc)
            ));
        }
    }

    lines.push(String::new());
    lines
}

/// Render every model in order.
pub fn render_comments(models: &[Model]) -> Vec<String> {
    models.iter().flat_map(render_model).collect()
}

/// Render the complete artifact text: version header, blank line, then the
/// rendered lines joined with `\n`.
pub fn render_artifact(models: &[Model]) -> String {
    format!(
        "-- generator-version: {}\n\n{}",
        GENERATOR_VERSION,
        render_comments(models).join("\n")
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use remarks_ir::Field;

    fn users() -> Model {
        Model::new("User")
            .with_db_name("users")
            .with_documentation("User table")
            .with_field(Field::new("id"))
            .with_field(Field::new("name").with_documentation("Full name"))
    }

    #[test]
    fn test_users_block() {
        assert_eq!(
            render_model(&users()),
            vec![
                "-- users comments",
                "COMMENT ON TABLE \"users\" IS 'User table';",
                "COMMENT ON COLUMN \"users\".\"name\" IS 'Full name';",
                "",
            ]
        );
    }

    #[test]
    fn test_undocumented_model_is_header_and_blank() {
        let model = Model::new("Session")
            .with_field(Field::new("id"))
            .with_field(Field::new("token"));
        assert_eq!(render_model(&model), vec!["-- Session comments", ""]);
    }

    #[test]
    fn test_column_comment_without_table_comment() {
        let model = Model::new("Post").with_field(Field::new("title").with_documentation("Headline"));
        assert_eq!(
            render_model(&model),
            vec![
                "-- Post comments",
                "COMMENT ON COLUMN \"Post\".\"title\" IS 'Headline';",
                "",
            ]
        );
    }

    #[test]
    fn test_empty_documentation_skipped() {
        let model = Model::new("Tag")
            .with_documentation("")
            .with_field(Field::new("label").with_documentation(""));
        assert_eq!(render_model(&model), vec!["-- Tag comments", ""]);
    }

    #[test]
    fn test_escape_single_quotes() {
        assert_eq!(escape_comment("it's a table"), "it''s a table");
        assert_eq!(escape_comment("''"), "''''");
        assert_eq!(escape_comment("no quotes \"here\" \\n"), "no quotes \"here\" \\n");
    }

    #[test]
    fn test_escaping_applied_to_statements() {
        let model = Model::new("users")
            .with_documentation("it's a table")
            .with_field(Field::new("nick").with_documentation("user's nickname"));
        let lines = render_model(&model);
        assert_eq!(lines[1], "COMMENT ON TABLE \"users\" IS 'it''s a table';");
        assert_eq!(
            lines[2],
            "COMMENT ON COLUMN \"users\".\"nick\" IS 'user''s nickname';"
        );
    }

    #[test]
    fn test_mapped_column_names() {
        let model = Model::new("User").with_db_name("app_users").with_field(
            Field::new("createdAt")
                .with_db_name("created_at")
                .with_documentation("Row creation time"),
        );
        assert_eq!(
            render_model(&model)[1],
            "COMMENT ON COLUMN \"app_users\".\"created_at\" IS 'Row creation time';"
        );
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let models = vec![
            Model::new("b"),
            Model::new("a").with_documentation("first a"),
            Model::new("a").with_documentation("second a"),
        ];
        assert_eq!(
            render_comments(&models),
            vec![
                "-- b comments",
                "",
                "-- a comments",
                "COMMENT ON TABLE \"a\" IS 'first a';",
                "",
                "-- a comments",
                "COMMENT ON TABLE \"a\" IS 'second a';",
                "",
            ]
        );
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let models = vec![users(), Model::new("Post")];
        assert_eq!(render_artifact(&models), render_artifact(&models));
    }

    #[test]
    fn test_artifact_layout() {
        assert_eq!(
            render_artifact(&[users()]),
            "-- generator-version: 1.0.0\n\n\
             -- users comments\n\
             COMMENT ON TABLE \"users\" IS 'User table';\n\
             COMMENT ON COLUMN \"users\".\"name\" IS 'Full name';\n"
        );
    }

    #[test]
    fn test_artifact_for_empty_schema() {
        assert_eq!(render_artifact(&[]), "-- generator-version: 1.0.0\n\n");
    }
}
