use crate::domain::model::{DeviceCategory, RenderContext};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Turns a resolved template path into rendered output. The engine owns its
/// own I/O and caching; resolution never retries through it.
#[async_trait]
pub trait TemplateEngine: Send + Sync {
    async fn render(&self, template_path: &str, context: &RenderContext) -> Result<String>;
    fn has_template(&self, template_path: &str) -> bool;
}

/// Classifies an incoming request. The resolver trusts the returned category
/// without further validation.
pub trait DeviceClassifier: Send + Sync {
    fn classify(&self, headers: &HashMap<String, String>) -> DeviceCategory;
}

pub trait ConfigProvider: Send + Sync {
    fn template_dir(&self) -> &str;
    fn template_suffix(&self) -> &str;
    fn mobile_prefix(&self) -> &str;
    fn tablet_prefix(&self) -> &str;
    fn encoding(&self) -> &str;
}
