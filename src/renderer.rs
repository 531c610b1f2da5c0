//! Template rendering for generated project files.
//! Sources are plain MiniJinja templates; the context is derived from the project configuration.
use crate::error::{Error, Result};
use minijinja::{AutoEscape, Environment};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer configured for source files rather than HTML.
    ///
    /// Block tags on their own line leave no trace in the output, the final
    /// newline of a template is kept and nothing is auto-escaped.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or fails to render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.env.render_str(template, context).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_block_tags_leave_no_blank_lines() {
        let engine = MiniJinjaRenderer::new();
        let template = "a\n{% if flag %}\nb\n{% endif %}\nc\n";

        let on = engine.render(template, &json!({"flag": true})).unwrap();
        assert_eq!(on, "a\nb\nc\n");

        let off = engine.render(template, &json!({"flag": false})).unwrap();
        assert_eq!(off, "a\nc\n");
    }

    #[test]
    fn test_nothing_is_escaped() {
        let engine = MiniJinjaRenderer::new();
        let result = engine.render("{{ v }}", &json!({"v": "<a href=\"x\">&</a>"})).unwrap();
        assert_eq!(result, "<a href=\"x\">&</a>");
    }

    #[test]
    fn test_invalid_template_is_an_error() {
        let engine = MiniJinjaRenderer::new();
        let result = engine.render("{% if %}", &json!({}));
        assert!(matches!(result, Err(Error::MinijinjaError(_))));
    }
}
