pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
pub mod cli {
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_encoding, validate_path, validate_prefix, validate_view_name, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "device-views")]
    #[command(about = "Render device-specific template variants")]
    pub struct CliConfig {
        #[arg(long, default_value = "./templates")]
        pub template_dir: String,

        #[arg(long, default_value = ".html")]
        pub template_suffix: String,

        #[arg(long, default_value = "mobile/")]
        pub mobile_prefix: String,

        #[arg(long, default_value = "tablet/")]
        pub tablet_prefix: String,

        #[arg(long, default_value = "UTF-8")]
        pub encoding: String,

        #[arg(long, default_value = "home", help = "Logical view name to render")]
        pub view: String,

        #[arg(
            long,
            default_value = "normal",
            help = "Device category: normal, mobile or tablet"
        )]
        pub device: String,

        #[arg(long, help = "JSON object merged into the render context")]
        pub data: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl ConfigProvider for CliConfig {
        fn template_dir(&self) -> &str {
            &self.template_dir
        }

        fn template_suffix(&self) -> &str {
            &self.template_suffix
        }

        fn mobile_prefix(&self) -> &str {
            &self.mobile_prefix
        }

        fn tablet_prefix(&self) -> &str {
            &self.tablet_prefix
        }

        fn encoding(&self) -> &str {
            &self.encoding
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("template_dir", &self.template_dir)?;
            validate_prefix("mobile_prefix", &self.mobile_prefix)?;
            validate_prefix("tablet_prefix", &self.tablet_prefix)?;
            validate_encoding("encoding", &self.encoding)?;
            validate_view_name("view", &self.view)?;
            Ok(())
        }
    }
}
