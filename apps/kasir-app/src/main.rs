//! KasirCerdas server entry point.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    kasir_app::run().await
}
