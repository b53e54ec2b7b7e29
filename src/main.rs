use clap::Parser;
use dynamodb_contacts::{api, config, logging, store};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = config::Config::parse();
    logging::init_logging(&config.log_level, config.log_format)?;

    let store: Arc<dyn store::ContactStore> = match config.store {
        config::StoreKind::Dynamodb => {
            let table_name = config.table_name()?;
            let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
            let client = aws_sdk_dynamodb::Client::new(&sdk_config);
            tracing::info!(table = table_name, "using dynamodb store");
            Arc::new(store::dynamodb::DynamoDbStore::new(client, table_name))
        }
        config::StoreKind::Memory => {
            tracing::warn!("using in-memory store, contacts are lost on exit");
            Arc::new(store::memory::MemoryStore::new())
        }
    };

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, api::router(store)).await?;
    Ok(())
}
