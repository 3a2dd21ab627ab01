#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lexicards_backend::run().await
}
