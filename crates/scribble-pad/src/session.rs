use crate::{FeedbackCollector, Label, Prediction, SessionConfig, SessionError};
use scribble_base::{Epoch, Stamped, log};
use scribble_image::{FeatureVector, RasterSurface, compose, decode_image, normalize};
use scribble_infer::{Classifier, ModelSlot, ProbabilityDistribution};
use std::sync::Arc;

/// State of one digit pad: the canvas, the classifier slot, staged feedback
/// and the prediction currently on display.
///
/// Every classification is stamped with a fresh epoch. Its result is only
/// displayed if no newer classification was started in the meantime.
pub struct Session<C> {
    config: SessionConfig,
    surface: RasterSurface,
    model: ModelSlot<C>,
    feedback: FeedbackCollector,
    epoch: Epoch,
    displayed: Option<Stamped<Prediction>>,
}

/// A classification that has passed the readiness check and captured its
/// input, but has not run yet.
pub struct PendingClassification<C> {
    epoch: u64,
    classifier: Arc<C>,
    features: FeatureVector,
}

impl<C: Classifier> PendingClassification<C> {
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn features(&self) -> &FeatureVector {
        &self.features
    }

    pub async fn run(self) -> Result<Stamped<ProbabilityDistribution>, SessionError> {
        let dist = self.classifier.classify(&self.features).await?;
        Ok(Stamped::new(self.epoch, dist))
    }
}

impl<C: Classifier> Session<C> {
    pub fn new(config: SessionConfig, model: ModelSlot<C>) -> Result<Self, SessionError> {
        let surface = RasterSurface::blank(config.canvas_size, config.canvas_size)?;
        Ok(Self {
            config,
            surface,
            model,
            feedback: FeedbackCollector::new(),
            epoch: Epoch::new(),
            displayed: None,
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn model(&self) -> &ModelSlot<C> {
        &self.model
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.surface
    }

    /// Canvas for the drawing layer to paint on.
    pub fn surface_mut(&mut self) -> &mut RasterSurface {
        &mut self.surface
    }

    pub fn feedback(&self) -> &FeedbackCollector {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut FeedbackCollector {
        &mut self.feedback
    }

    pub fn prediction(&self) -> Option<&Prediction> {
        self.displayed.as_ref().map(|stamped| &stamped.inner)
    }

    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Decode an uploaded image and draw it onto the cleared canvas, scaled to
    /// fit and centered.
    pub async fn upload(&mut self, bytes: &[u8]) -> Result<(), SessionError> {
        let image = decode_image(bytes).await?;
        self.surface = compose(&image, self.config.canvas_size)?;
        log::debug!(
            "uploaded {}x{} image onto {}px canvas",
            image.width(),
            image.height(),
            self.config.canvas_size
        );
        Ok(())
    }

    /// The canvas as classifier input.
    pub fn capture(&self) -> Result<FeatureVector, SessionError> {
        Ok(normalize(&self.surface)?)
    }

    /// Check readiness, capture the canvas and stamp a new request.
    ///
    /// Fails with `ModelUnavailable` before the provider is loaded; in that
    /// case nothing is captured and no request is issued.
    pub fn begin_classification(&self) -> Result<PendingClassification<C>, SessionError> {
        let classifier = match self.model.get() {
            Ok(classifier) => classifier,
            Err(err) => {
                log::warn!("classification refused: {err}");
                return Err(err.into());
            }
        };
        let features = self.capture()?;
        let epoch = self.epoch.advance();
        log::debug!("classification {epoch} issued");
        Ok(PendingClassification {
            epoch,
            classifier,
            features,
        })
    }

    /// Display a finished result unless a newer request has been issued.
    /// Returns whether the result was applied.
    pub fn apply(&mut self, result: Stamped<ProbabilityDistribution>) -> bool {
        if !self.epoch.is_current(result.epoch) {
            log::debug!(
                "discarding stale classification {} (latest is {})",
                result.epoch,
                self.epoch.current()
            );
            return false;
        }
        let prediction = result.map(|dist| Prediction::from_distribution(&dist));
        log::info!(
            "prediction {} ({}%)",
            prediction.inner.digit,
            prediction.inner.percent
        );
        self.displayed = Some(prediction);
        true
    }

    /// Classify the canvas and display the result.
    pub async fn classify(&mut self) -> Result<Prediction, SessionError> {
        let stamped = self.begin_classification()?.run().await?;
        let prediction = Prediction::from_distribution(&stamped.inner);
        self.apply(stamped);
        Ok(prediction)
    }

    /// Store the canvas under the label typed by the user. The label is
    /// checked before the canvas is captured. Returns the number of staged
    /// samples.
    pub fn submit_correction(&mut self, label_text: &str) -> Result<usize, SessionError> {
        let label = Label::parse(label_text)?;
        let features = self.capture()?;
        self.feedback.push(features, label);
        Ok(self.feedback.len())
    }
}
