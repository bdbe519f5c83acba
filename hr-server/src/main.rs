use hr_server::{BoxError, Config, Server, ServerState, setup_environment};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    setup_environment()?;

    let config = Config::from_env()?;
    let state = ServerState::initialize(&config).await?;

    Server::new(state).run().await.inspect_err(|e| tracing::error!("{e}"))?;
    Ok(())
}
