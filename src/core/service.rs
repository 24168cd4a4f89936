use crate::core::resolver::ViewResolver;
use crate::core::{DeviceCategory, DeviceClassifier, RenderContext, RenderedPage, TemplateEngine};
use crate::utils::error::Result;
use std::collections::HashMap;

/// Request-scoped render flow: classify, resolve, delegate to the engine.
/// Stateless apart from startup configuration, so safe to share across
/// request handlers without synchronization.
pub struct ViewService<E: TemplateEngine, D: DeviceClassifier> {
    resolver: ViewResolver,
    engine: E,
    classifier: D,
    encoding: String,
}

impl<E: TemplateEngine, D: DeviceClassifier> ViewService<E, D> {
    pub fn new(resolver: ViewResolver, engine: E, classifier: D, encoding: String) -> Self {
        Self {
            resolver,
            engine,
            classifier,
            encoding,
        }
    }

    /// Full per-request path: classify the headers, then render the view for
    /// the resulting category.
    pub async fn render_for_request(
        &self,
        view_name: &str,
        headers: &HashMap<String, String>,
        context: &RenderContext,
    ) -> Result<RenderedPage> {
        let device = self.classifier.classify(headers);
        tracing::debug!("Classified request as {} device", device);
        self.render_for_device(view_name, device, context).await
    }

    /// Resolve and render for an already-classified device. Failures from the
    /// engine propagate unchanged; there is no fallback resolution.
    pub async fn render_for_device(
        &self,
        view_name: &str,
        device: DeviceCategory,
        context: &RenderContext,
    ) -> Result<RenderedPage> {
        let template_path = self.resolver.resolve(view_name, device)?;
        tracing::debug!("Resolved view '{}' to template '{}'", view_name, template_path);

        let body = self.engine.render(&template_path, context).await?;

        Ok(RenderedPage {
            body,
            template_path,
            encoding: self.encoding.clone(),
            device,
        })
    }
}
