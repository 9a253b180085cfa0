#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ufo::app::run().await
}
