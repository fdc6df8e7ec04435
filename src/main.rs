use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    rockterm::cli::run_cli().await
}
