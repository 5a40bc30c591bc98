#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ludoteca::run().await
}
