use crates_image::ImageEncoder;
use scribble_image::{FeatureVector, ImageError, RasterSurface};
use scribble_infer::{Classifier, InferError, ModelSlot, ProbabilityDistribution};
use scribble_pad::{Session, SessionConfig, SessionError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

const WHITE: [u8; 4] = [255, 255, 255, 255];

fn one_hot(digit: usize, confidence: f32) -> ProbabilityDistribution {
    let rest = (1.0 - confidence) / 9.0;
    let mut probs = [rest; 10];
    probs[digit] = confidence;
    ProbabilityDistribution::new(&probs).unwrap()
}

/// Always answers 4 and counts calls.
struct Counting {
    calls: Arc<AtomicUsize>,
}

impl Classifier for Counting {
    async fn classify(
        &self,
        _features: &FeatureVector,
    ) -> Result<ProbabilityDistribution, InferError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(one_hot(4, 0.6))
    }
}

/// Answers 1 for a bright top-left pixel, 0 otherwise.
struct Brightness;

impl Classifier for Brightness {
    async fn classify(
        &self,
        features: &FeatureVector,
    ) -> Result<ProbabilityDistribution, InferError> {
        let digit = if features.as_slice()[0] > 0.5 { 1 } else { 0 };
        Ok(one_hot(digit, 0.9))
    }
}

/// Rejects every input.
struct Broken;

impl Classifier for Broken {
    async fn classify(
        &self,
        _features: &FeatureVector,
    ) -> Result<ProbabilityDistribution, InferError> {
        Err(InferError::Model("malformed input".to_string()))
    }
}

fn small_config() -> SessionConfig {
    SessionConfig::default().with_canvas_size(28)
}

#[test]
fn test_new_session_has_blank_canvas() {
    let session = Session::new(SessionConfig::default(), ModelSlot::ready(Brightness)).unwrap();
    assert_eq!(session.surface().width(), 280);
    assert_eq!(session.surface().height(), 280);
    assert!(session.surface().as_raw().iter().all(|&v| v == 0));
    assert!(session.prediction().is_none());
    assert!(session.feedback().is_empty());
}

#[tokio::test]
async fn test_classify_before_ready_issues_no_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let slot = ModelSlot::new();
    let (tx, rx) = tokio::sync::oneshot::channel::<()>();
    let provider = Counting {
        calls: Arc::clone(&calls),
    };
    let load = slot.spawn_load(async move {
        rx.await.map_err(|e| InferError::Runtime(e.to_string()))?;
        Ok(provider)
    });

    let mut session = Session::new(small_config(), slot).unwrap();
    let err = session.classify().await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Infer(InferError::ModelUnavailable(_))
    ));
    assert_eq!(
        err.notice(),
        Some("Model is still loading, please wait a moment.")
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(session.prediction().is_none());

    tx.send(()).unwrap();
    load.await.unwrap().unwrap();

    let prediction = session.classify().await.unwrap();
    assert_eq!(prediction.digit, 4);
    assert_eq!(prediction.percent, 60);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.prediction(), Some(&prediction));
}

#[tokio::test]
async fn test_failed_load_keeps_session_not_ready() {
    let slot = ModelSlot::<Brightness>::new();
    let load = slot.spawn_load(async { Err(InferError::ModelLoad("unreachable".to_string())) });
    assert!(load.await.unwrap().is_err());

    let mut session = Session::new(small_config(), slot).unwrap();
    let err = session.classify().await.unwrap_err();
    assert!(err.notice().is_some());
    assert!(err.to_string().contains("unreachable"));
}

#[tokio::test]
async fn test_stale_result_does_not_overwrite_newer_one() {
    let mut session = Session::new(small_config(), ModelSlot::ready(Brightness)).unwrap();

    let first = session.begin_classification().unwrap();
    *session.surface_mut() = RasterSurface::filled(28, 28, WHITE).unwrap();
    let second = session.begin_classification().unwrap();
    assert!(second.epoch() > first.epoch());

    // the later request finishes first
    let second_result = second.run().await.unwrap();
    assert!(session.apply(second_result));
    assert_eq!(session.prediction().unwrap().digit, 1);

    let first_result = first.run().await.unwrap();
    assert_eq!(first_result.inner.argmax(), 0);
    assert!(!session.apply(first_result));
    assert_eq!(session.prediction().unwrap().digit, 1);
}

#[tokio::test]
async fn test_latest_request_applies_even_when_finishing_last() {
    let mut session = Session::new(small_config(), ModelSlot::ready(Brightness)).unwrap();

    let first = session.begin_classification().unwrap();
    *session.surface_mut() = RasterSurface::filled(28, 28, WHITE).unwrap();
    let second = session.begin_classification().unwrap();

    let first_result = first.run().await.unwrap();
    assert!(!session.apply(first_result));
    assert!(session.prediction().is_none());

    let second_result = second.run().await.unwrap();
    assert!(session.apply(second_result));
    assert_eq!(session.prediction().unwrap().digit, 1);
}

#[tokio::test]
async fn test_provider_error_aborts_only_current_operation() {
    let mut session = Session::new(small_config(), ModelSlot::ready(Broken)).unwrap();
    let err = session.classify().await.unwrap_err();
    assert!(matches!(err, SessionError::Infer(InferError::Model(_))));
    assert_eq!(err.notice(), None);

    // the session stays usable
    assert_eq!(session.submit_correction("2").unwrap(), 1);
}

#[tokio::test]
async fn test_degenerate_canvas_is_invalid_surface() {
    let config = SessionConfig::default().with_canvas_size(0);
    let mut session = Session::new(config, ModelSlot::ready(Brightness)).unwrap();
    let err = session.classify().await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Image(ImageError::InvalidSurface(_))
    ));
    assert_eq!(err.notice(), None);
}

#[test]
fn test_submit_correction_validates_label_first() {
    let mut session = Session::new(small_config(), ModelSlot::ready(Brightness)).unwrap();

    for text in ["-1", "10", "4.5", "x"] {
        let err = session.submit_correction(text).unwrap_err();
        assert!(matches!(err, SessionError::InvalidLabel(_)), "{text:?}");
        assert_eq!(err.notice(), Some("Please enter a digit between 0 and 9."));
    }
    assert!(session.feedback().is_empty());

    *session.surface_mut() = RasterSurface::filled(28, 28, WHITE).unwrap();
    assert_eq!(session.submit_correction("7").unwrap(), 1);

    let sample = &session.feedback().samples()[0];
    assert_eq!(sample.y.value(), 7);
    assert_eq!(sample.x, session.capture().unwrap());
    assert!(sample.x.as_slice().iter().all(|&v| v == 1.0));
}

#[test]
fn test_feedback_works_without_model() {
    let mut session = Session::new(small_config(), ModelSlot::<Brightness>::new()).unwrap();
    assert_eq!(session.submit_correction("0").unwrap(), 1);
    assert_eq!(session.feedback_mut().drain().len(), 1);
}

#[test]
fn test_clear_resets_canvas() {
    let mut session = Session::new(small_config(), ModelSlot::ready(Brightness)).unwrap();
    session.surface_mut().put_pixel(3, 3, WHITE);
    session.clear();
    assert!(session.capture().unwrap().as_slice().iter().all(|&v| v == 0.0));
}

#[tokio::test]
async fn test_upload_composes_onto_canvas() {
    let mut buffer = Vec::new();
    let img = crates_image::RgbaImage::from_pixel(100, 50, crates_image::Rgba(WHITE));
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(img.as_raw(), 100, 50, crates_image::ExtendedColorType::Rgba8)
        .unwrap();

    let mut session = Session::new(SessionConfig::default(), ModelSlot::ready(Brightness)).unwrap();
    session.upload(&buffer).await.unwrap();

    let surface = session.surface();
    assert_eq!((surface.width(), surface.height()), (280, 280));
    assert_eq!(surface.pixel(140, 20), Some([0, 0, 0, 0]));
    assert_eq!(surface.pixel(140, 140), Some(WHITE));

    let features = session.capture().unwrap();
    // top rows black, middle rows white
    assert_eq!(features.at(0, 14), Some(0.0));
    assert_eq!(features.at(14, 14), Some(1.0));
}

#[tokio::test]
async fn test_upload_garbage_keeps_canvas() {
    let mut session = Session::new(small_config(), ModelSlot::ready(Brightness)).unwrap();
    session.surface_mut().put_pixel(0, 0, WHITE);

    let err = session.upload(b"not an image").await.unwrap_err();
    assert!(matches!(err, SessionError::Image(ImageError::Decode(_))));
    assert_eq!(session.surface().pixel(0, 0), Some(WHITE));
}
