pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::classifier::{FixedClassifier, HeaderClassifier};
pub use crate::adapters::tera_engine::TeraEngine;
pub use crate::core::resolver::{PrefixMapping, ViewResolver};
pub use crate::core::service::ViewService;
pub use crate::domain::model::{DeviceCategory, RenderContext, RenderedPage};
pub use crate::utils::error::{Result, ViewError};
