use quay_tag_check::{CheckConfig, Registry, RegistryType, TagCheckError};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let (stdout, code) = report(run().await);
    if let Some(line) = stdout {
        println!("{}", line);
    }
    std::process::exit(code);
}

async fn run() -> Result<bool, TagCheckError> {
    let config = CheckConfig::from_env()?;
    let registry = Registry::new(RegistryType::Quay);

    registry.tag_exists(&config.image, &config.version).await
}

/// Maps the check outcome to the stdout line and the process exit code.
fn report(result: Result<bool, TagCheckError>) -> (Option<String>, i32) {
    match result {
        Ok(exists) => (Some(exists.to_string()), 0),
        Err(e) => {
            error!("tag check failed: {}", e);
            (None, 1)
        }
    }
}
