use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::{Resource, propagation::TraceContextPropagator, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, fmt::format::Format, prelude::*};

use crate::{
    config::{AppConfig, DistributionConfig, TracingConfig},
    error::AppResult,
};

/// Tracer configuration and initialization.
///
/// Handles setting up logging and span export for the library service.
pub struct Tracer;

impl Tracer {
    /// Installs the tracer selected by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn install(config: &AppConfig) -> AppResult<()> {
        match config.tracing {
            TracingConfig::Memory => Self::install_fmt(),
            TracingConfig::Stdout => Self::install_stdout(&config.distribution),
        }
    }

    /// Installs stdout tracing with OpenTelemetry.
    ///
    /// # Errors
    ///
    /// Returns an error if tracer initialization fails.
    pub fn install_stdout(distribution: &DistributionConfig) -> AppResult<()> {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut resource = Resource::builder().with_service_name(distribution.name.clone());
        if let Some(version) = distribution.version.clone() {
            resource = resource.with_attribute(KeyValue::new("version", version));
        }

        let provider = SdkTracerProvider::builder()
            .with_resource(resource.build())
            .with_simple_exporter(SpanExporter::default())
            .build();
        global::set_tracer_provider(provider);

        Self::install_fmt()
    }

    fn install_fmt() -> AppResult<()> {
        let layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_filter(EnvFilter::from_default_env());

        tracing_subscriber::registry().with(layer).try_init()?;

        Ok(())
    }
}
