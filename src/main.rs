#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use opentelemetry_configuration::OtelSdkBuilder;
    use portfolio::config::Config;

    let config = Config::load()?;

    let mut otel = OtelSdkBuilder::new()
        .service_name(env!("CARGO_PKG_NAME"))
        .service_version(env!("CARGO_PKG_VERSION"))
        .resource_attribute("vcs.repository.name", env!("CARGO_PKG_NAME"))
        .resource_attribute("vcs.ref.head.revision", env!("VCS_REF_HEAD_REVISION"))
        .resource_attribute("vcs.ref.head.name", env!("VCS_REF_HEAD_NAME"))
        .resource_attribute("vcs.ref.head.type", "branch")
        .resource_attribute(
            "deployment.environment.name",
            config.otel.environment.clone(),
        );
    if let Some(endpoint) = &config.otel.endpoint {
        otel = otel.endpoint(endpoint.clone());
    }
    let _guard = otel
        .with_standard_env()
        .build()
        .map_err(|e| anyhow::anyhow!("failed to initialise OpenTelemetry: {e:?}"))?;

    tracing::info!(
        environment = %config.otel.environment,
        "starting {}",
        env!("CARGO_PKG_NAME")
    );

    portfolio::server::serve(&config).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for hydration function instead
}
