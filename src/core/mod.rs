pub mod resolver;
pub mod service;

pub use crate::domain::model::{DeviceCategory, RenderContext, RenderedPage};
pub use crate::domain::ports::{ConfigProvider, DeviceClassifier, TemplateEngine};
pub use crate::utils::error::Result;
