use fluentbit_manifest_provider::{
    init_logging, serve_with_options, FluentBitManifestProvider, ServeOptions,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let options = ServeOptions::from_env()?;
    serve_with_options(FluentBitManifestProvider::new(), options).await
}
