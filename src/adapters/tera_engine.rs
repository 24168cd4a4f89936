use crate::core::{RenderContext, TemplateEngine};
use crate::utils::error::{Result, ViewError};
use async_trait::async_trait;
use tera::Tera;

/// Template engine adapter backed by Tera. Templates are loaded once from a
/// directory glob at startup; the resolver hands over suffix-less paths
/// (e.g. "mobile/home") and the configured suffix selects the file.
pub struct TeraEngine {
    tera: Tera,
    suffix: String,
}

impl TeraEngine {
    pub fn from_dir(template_dir: &str, suffix: &str) -> Result<Self> {
        let glob = format!("{}/**/*{}", template_dir.trim_end_matches('/'), suffix);
        tracing::debug!("Loading templates from: {}", glob);

        let tera = Tera::new(&glob)?;
        tracing::info!(
            "Loaded {} templates from {}",
            tera.get_template_names().count(),
            template_dir
        );

        Ok(Self {
            tera,
            suffix: suffix.to_string(),
        })
    }

    fn template_name(&self, template_path: &str) -> String {
        format!("{}{}", template_path, self.suffix)
    }
}

#[async_trait]
impl TemplateEngine for TeraEngine {
    async fn render(&self, template_path: &str, context: &RenderContext) -> Result<String> {
        let name = self.template_name(template_path);

        if !self.tera.get_template_names().any(|n| n == name) {
            return Err(ViewError::ViewNotFound {
                path: template_path.to_string(),
            });
        }

        let ctx = tera::Context::from_serialize(&context.values)?;
        let body = self.tera.render(&name, &ctx)?;
        Ok(body)
    }

    fn has_template(&self, template_path: &str) -> bool {
        let name = self.template_name(template_path);
        self.tera.get_template_names().any(|n| n == name)
    }
}
