use miette::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    projects::cli::run().await
}
