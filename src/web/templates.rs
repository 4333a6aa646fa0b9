//! Template rendering with Tera

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Create a new template renderer with embedded templates
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with context
    pub fn render(&self, template: &str, context: &impl Serialize) -> Result<String> {
        let ctx = Context::from_serialize(context)?;
        Ok(self.tera.render(template, &ctx)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_templates_load() {
        assert!(Templates::new().is_ok());
    }

    #[test]
    fn test_values_are_escaped() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render(
                "index.html",
                &json!({
                    "api_services": [],
                    "images": [],
                    "error": null,
                    "name": "<script>",
                    "email": "",
                    "search_term": "",
                    "api_service": "unsplash",
                }),
            )
            .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
