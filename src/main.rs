use anyhow::Result;
use echopanel::{config, logging, ui, App};
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    config::initialize_config()?;
    let _logger = logging::init_logging()?;
    info!("echopanel starting");

    let app = App::new();
    ui::run_ui(app).await?;

    info!("echopanel exited");
    Ok(())
}
