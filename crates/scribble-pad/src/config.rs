/// Per-session settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Side of the square drawing canvas in pixels.
    pub canvas_size: usize,
    /// Character width of a full bar in `Prediction::render_text`.
    pub bar_width: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            canvas_size: 280,
            bar_width: 20,
        }
    }
}

impl SessionConfig {
    pub fn with_canvas_size(mut self, canvas_size: usize) -> Self {
        self.canvas_size = canvas_size;
        self
    }

    pub fn with_bar_width(mut self, bar_width: usize) -> Self {
        self.bar_width = bar_width;
        self
    }
}
