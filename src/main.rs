use clap::Parser;
use device_views::utils::{logger, validation::Validate};
use device_views::{
    CliConfig, DeviceCategory, FixedClassifier, PrefixMapping, RenderContext, TeraEngine,
    ViewResolver, ViewService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting device-views CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let device: DeviceCategory = match config.device.parse() {
        Ok(device) => device,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let mut context = RenderContext::new();
    context.insert("view", serde_json::Value::String(config.view.clone()));
    context.insert(
        "device",
        serde_json::Value::String(device.as_str().to_string()),
    );
    if let Some(data) = &config.data {
        let values: std::collections::HashMap<String, serde_json::Value> =
            serde_json::from_str(data)?;
        for (key, value) in values {
            context.insert(&key, value);
        }
    }

    let engine = TeraEngine::from_dir(&config.template_dir, &config.template_suffix)?;
    let resolver = ViewResolver::new(PrefixMapping::from_config(&config));
    let service = ViewService::new(
        resolver,
        engine,
        FixedClassifier::new(device),
        config.encoding.clone(),
    );

    match service.render_for_device(&config.view, device, &context).await {
        Ok(page) => {
            tracing::info!(
                "Rendered '{}' as '{}' ({} device)",
                config.view,
                page.template_path,
                page.device
            );
            println!("{}", page.body);
        }
        Err(e) => {
            tracing::error!("Render failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
