use std::sync::Arc;

use neonpage::{
    config::Config,
    storage::FileStore,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};
use tracing::info;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let config = Config::load()?;
    let storage_path = config.storage_path()?;
    info!("Using storage at {}", storage_path.display());
    let store = FileStore::open(storage_path)?;

    let mut app = App::new(config, Arc::new(store));
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenv::dotenv().ok();
    set_panic_hook();
    initialize_logging()
}
