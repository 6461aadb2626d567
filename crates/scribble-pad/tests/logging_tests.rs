use scribble_base::{MemoryLogger, log};
use scribble_image::{FeatureVector, RasterSurface};
use scribble_infer::{Classifier, InferError, ModelSlot, ProbabilityDistribution};
use scribble_pad::{Session, SessionConfig};

struct Constant;

impl Classifier for Constant {
    async fn classify(
        &self,
        _features: &FeatureVector,
    ) -> Result<ProbabilityDistribution, InferError> {
        ProbabilityDistribution::new(&[0.1; 10])
    }
}

#[tokio::test]
async fn test_session_logs_refusals_and_stale_results() {
    let logger: &'static MemoryLogger = Box::leak(Box::new(MemoryLogger::new()));
    log::set_logger(logger).unwrap();
    log::set_max_level(log::LevelFilter::Debug);

    let slot = ModelSlot::new();
    let config = SessionConfig::default().with_canvas_size(28);
    let mut session = Session::new(config, slot.clone()).unwrap();
    assert!(session.classify().await.is_err());
    assert!(logger.contains("classification refused"));

    slot.install(Constant);
    let stale = session.begin_classification().unwrap();
    *session.surface_mut() = RasterSurface::blank(28, 28).unwrap();
    session.classify().await.unwrap();
    assert!(!session.apply(stale.run().await.unwrap()));
    assert!(logger.contains("discarding stale classification 1"));

    session.submit_correction("3").unwrap();
    assert!(logger.contains("Added feedback sample: 1"));
}
