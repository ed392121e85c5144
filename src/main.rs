use r_hunt::config::Config;
use r_hunt::startup;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    std_logger::Config::logfmt().init();

    let config = Config::get()?;
    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address).await?;

    startup::run(config, listener).await?;
    Ok(())
}
