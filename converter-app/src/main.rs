//! # Converter Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Build the ExchangeRate-API client
//! - Create the conversion service
//! - Start the HTTP server

mod config;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use converter_hex::{CurrencyService, inbound::HttpServer};
use exchange_rates::ExchangeRateApiClient;

fn init_tracer() -> anyhow::Result<(sdktrace::Tracer, sdktrace::SdkTracerProvider)> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking).
    // The endpoint is read by the exporter from OTEL_EXPORTER_OTLP_ENDPOINT.
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()?;

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    Ok((provider.tracer("currency-converter"), provider))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let config = config::Config::from_env()?;

    // OpenTelemetry export is only enabled when a collector is configured
    let (telemetry, otel_provider) = match config.otlp_endpoint {
        Some(_) => {
            let (tracer, provider) = init_tracer()?;
            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                Some(provider),
            )
        }
        None => (None, None),
    };

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,converter_app=debug,converter_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    tracing::info!("Starting currency converter on port {}", config.port);
    tracing::info!("Using exchange rate provider: {}", config.exchange.base_url);
    tracing::info!("Failure status mode: {:?}", config.status_mode);

    // Create the conversion service
    let client = ExchangeRateApiClient::new(config.exchange);
    let service = CurrencyService::new(client);

    // Create and run the HTTP server
    let server = HttpServer::with_status_mode(service, config.status_mode);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Ensure traces are flushed before exit
    if let Some(provider) = otel_provider {
        let _ = provider.shutdown();
    }
    Ok(())
}
