use graphql_resource::config::{load_config, Config};
use graphql_resource::error::Result;
use std::path::Path;

/// Print the SDL of the demo schema
pub fn run(config_path: String) -> Result<()> {
    let config = if Path::new(&config_path).exists() {
        load_config(&config_path)?
    } else {
        tracing::debug!("No config at {}, using defaults", config_path);
        Config::default()
    };

    let schema = super::demo_schema_config(config.pagination)?.finish()?;
    println!("{}", schema.sdl());

    Ok(())
}
