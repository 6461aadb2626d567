use scribble_infer::ProbabilityDistribution;
use scribble_pad::{Column, Prediction};

fn dist(values: &[f32]) -> ProbabilityDistribution {
    ProbabilityDistribution::new(values).unwrap()
}

#[test]
fn test_headline_and_bar_for_clear_winner() {
    let prediction = Prediction::from_distribution(&dist(&[
        0.05, 0.05, 0.05, 0.05, 0.6, 0.05, 0.05, 0.05, 0.05, 0.05,
    ]));

    assert_eq!(prediction.digit, 4);
    assert_eq!(prediction.percent, 60);
    assert_eq!(prediction.accuracy_label(), "Accuracy: 60%");

    let bar = prediction.bar(4).unwrap();
    assert_eq!(bar.percent, 60);
    assert!(bar.active);
    assert_eq!(bar.column(), Column::Left);
    assert_eq!(prediction.bars.iter().filter(|b| b.active).count(), 1);
}

#[test]
fn test_columns_split_by_parity_in_ascending_order() {
    let prediction = Prediction::from_distribution(&dist(&[0.1; 10]));
    let left: Vec<usize> = prediction.column(Column::Left).map(|b| b.digit).collect();
    let right: Vec<usize> = prediction.column(Column::Right).map(|b| b.digit).collect();
    assert_eq!(left, vec![0, 2, 4, 6, 8]);
    assert_eq!(right, vec![1, 3, 5, 7, 9]);
}

#[test]
fn test_tie_resolves_to_lower_digit() {
    let prediction = Prediction::from_distribution(&dist(&[
        0.0, 0.0, 0.0, 0.45, 0.0, 0.0, 0.0, 0.0, 0.45, 0.1,
    ]));
    assert_eq!(prediction.digit, 3);
    assert!(prediction.bar(3).unwrap().active);
    assert!(!prediction.bar(8).unwrap().active);
}

#[test]
fn test_percent_rounds_to_nearest() {
    let prediction = Prediction::from_distribution(&dist(&[
        0.004, 0.006, 0.125, 0.0, 0.866, 0.0, 0.0, 0.0, 0.0, 0.0,
    ]));
    assert_eq!(prediction.bar(0).unwrap().percent, 0);
    assert_eq!(prediction.bar(1).unwrap().percent, 1);
    assert_eq!(prediction.bar(4).unwrap().percent, 87);
}

#[test]
fn test_render_text_layout() {
    let prediction = Prediction::from_distribution(&dist(&[
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
    ]));
    let text = prediction.render_text(10);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Prediction: 7  Accuracy: 100%");
    // row 4 pairs digit 6 with digit 7
    assert!(lines[4].starts_with(" 6 [..........]   0%"));
    assert!(lines[4].ends_with(">7 [##########] 100%"));
}
