use clap::Parser;
use meteoproxy_core::{Config, ProxyRequest, WeatherProxyHandler};

/// Top-level CLI struct.
///
/// Invokes the handler once with `lat`/`lon` taken from the positional
/// arguments and prints status, headers and body, the same way a hosting
/// platform would see them.
#[derive(Debug, Parser)]
#[command(name = "meteoproxy", version, about = "Local harness for the weather proxy handler")]
pub struct Cli {
    /// Latitude query parameter, passed through as-is.
    #[arg(default_value = "40.7128", allow_hyphen_values = true)]
    pub lat: String,

    /// Longitude query parameter, passed through as-is.
    #[arg(default_value = "-74.0060", allow_hyphen_values = true)]
    pub lon: String,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let handler = WeatherProxyHandler::new(&config)?;

        let request =
            ProxyRequest::from_iter([("lat", self.lat.as_str()), ("lon", self.lon.as_str())]);
        let response = handler.handle(&request).await;

        println!("Status: {}", response.status);
        for (name, value) in &response.headers {
            println!("{name}: {value}");
        }
        println!();
        println!("{}", response.body);

        Ok(())
    }
}
