use clap::Parser;

use dreamtasks::api::ApiService;
use dreamtasks::cli::{self, Cli};
use dreamtasks::config::Config;
use dreamtasks::logging;
use dreamtasks::storage::{FileStorage, LocalStorage};
use dreamtasks::store::{AppState, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init_tracing();

    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let api = ApiService::new(config.endpoints.clone(), &config.http)?;
    let storage = LocalStorage::new(FileStorage::new(config.storage.resolved_data_dir()));
    let store = Store::new(api, storage, AppState::with_user(config.user.clone()));

    let mut stdout = std::io::stdout().lock();
    cli::run(&store, args.command, &mut stdout).await
}
