use logger::PipelineLayer;
use tests::capturing_factory;
use tracing_subscriber::layer::SubscriberExt;

#[test]
fn tracing_events_use_the_selected_pipeline() {
    let (factory, output) = capturing_factory();
    let logger = factory.create_logger("info").unwrap();
    let subscriber = tracing_subscriber::registry().with(PipelineLayer::new(logger));

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("below threshold");
        tracing::info!(port = 8080, "listening");
        tracing::error!("shutting down");
    });

    assert_eq!(output.lines(), ["[INFO ] listening port=8080", "[ERROR] shutting down"]);
}

#[test]
fn tracing_events_carry_their_own_location_on_trace() {
    let (factory, output) = capturing_factory();
    let logger = factory.create_logger("trace").unwrap();
    let subscriber = tracing_subscriber::registry().with(PipelineLayer::new(logger));

    let line = line!() + 2;
    tracing::subscriber::with_default(subscriber, || {
        tracing::trace!("fine grained");
    });

    assert_eq!(output.lines(), [format!("[TRACE {}:{:<3}]\tfine grained", file!(), line)]);
}

#[test]
fn bridge_follows_reconfiguration() {
    let (factory, output) = capturing_factory();
    let logger = factory.create_logger("debug").unwrap();
    let subscriber = tracing_subscriber::registry().with(PipelineLayer::new(logger));

    tracing::subscriber::with_default(subscriber, || {
        tracing::debug!("first");
        factory.create_logger("off").unwrap();
        tracing::error!("second");
    });

    assert_eq!(output.lines(), ["[DEBUG] first"]);
}
