use scribble_infer::ProbabilityDistribution;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

/// One digit's row in the probability chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    pub digit: usize,
    /// Rounded probability, also the bar's fill width in percent.
    pub percent: u32,
    /// True for the headline digit.
    pub active: bool,
}

impl Bar {
    /// Even digits go left, odd digits right.
    pub fn column(&self) -> Column {
        if self.digit % 2 == 0 {
            Column::Left
        } else {
            Column::Right
        }
    }
}

/// What the presentation layer shows for one classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub digit: usize,
    pub percent: u32,
    pub bars: Vec<Bar>,
}

fn to_percent(p: f32) -> u32 {
    (p * 100.0).round() as u32
}

impl Prediction {
    pub fn from_distribution(dist: &ProbabilityDistribution) -> Self {
        let digit = dist.argmax();
        let bars = dist
            .as_slice()
            .iter()
            .enumerate()
            .map(|(d, &p)| Bar {
                digit: d,
                percent: to_percent(p),
                active: d == digit,
            })
            .collect();
        Self {
            digit,
            percent: to_percent(dist.as_slice()[digit]),
            bars,
        }
    }

    pub fn accuracy_label(&self) -> String {
        format!("Accuracy: {}%", self.percent)
    }

    pub fn bar(&self, digit: usize) -> Option<&Bar> {
        self.bars.get(digit)
    }

    /// Bars of one column in ascending digit order.
    pub fn column(&self, column: Column) -> impl Iterator<Item = &Bar> {
        self.bars.iter().filter(move |bar| bar.column() == column)
    }

    /// Plain text chart, two columns of five rows.
    pub fn render_text(&self, bar_width: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Prediction: {}  {}", self.digit, self.accuracy_label());
        let left = self.column(Column::Left);
        let right = self.column(Column::Right);
        for (l, r) in left.zip(right) {
            let _ = writeln!(
                out,
                "{}    {}",
                render_bar(l, bar_width),
                render_bar(r, bar_width)
            );
        }
        out
    }
}

fn render_bar(bar: &Bar, width: usize) -> String {
    let filled = ((bar.percent.min(100) as usize * width) + 50) / 100;
    format!(
        "{}{} [{}{}] {:>3}%",
        if bar.active { '>' } else { ' ' },
        bar.digit,
        "#".repeat(filled),
        ".".repeat(width - filled),
        bar.percent
    )
}
