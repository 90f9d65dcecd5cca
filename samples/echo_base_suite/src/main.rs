mod config;
mod scenarios;

use swapi_catalog_client::LogLevel;
use swapi_catalog_client::catalog::resource::CatalogClient;

use config::load_settings;

#[tokio::main]
async fn main() -> Result<(), String> {
    let settings = load_settings()?;

    let client = CatalogClient::new(&settings.endpoint, LogLevel::Information);

    scenarios::uninhabited::run(&client, &settings).await?;
    scenarios::evacuation::run(&client, &settings).await?;

    Ok(())
}
