#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fediwizard::cli::run().await
}
