use std::fs;
use tempfile::TempDir;

use super::command::*;
use super::helper::*;
use super::typedef::*;
use crate::error::DashboardError;
use crate::predict::typedef::PredictionBatch;
use crate::test_support::{daily_series, day, ramp};
use crate::typedef::{BlockSize, NormalizationFactor, TimeSeries};

fn batch(values: &[f64]) -> PredictionBatch {
	PredictionBatch(values.iter().map(|each| vec![*each]).collect())
}

fn input<'a>(
	transformed: &'a TimeSeries,
	raw: &'a TimeSeries,
	norm_factor: f64,
	block_size: usize,
	window_start: usize,
	batch: &'a PredictionBatch,
) -> AlignmentInput<'a> {
	AlignmentInput {
		transformed,
		raw,
		norm_factor: NormalizationFactor::new(norm_factor).unwrap(),
		block_size: BlockSize(block_size),
		window_start,
		batch,
	}
}

#[test]
fn test_alignment_starts_after_lookback_block() {
	let series = ramp(200);
	let predictions = batch(&[0.1, 0.2, 0.3, 0.4, 0.5]);

	let aligned = align_prediction(&input(&series, &series, 1.0, 60, 0, &predictions)).unwrap();

	let expected = (60..65).map(|i| series.get(i).unwrap().date).collect::<Vec<_>>();
	assert_eq!(aligned.dates, expected);
	assert_eq!(aligned.actual, vec![160.0, 161.0, 162.0, 163.0, 164.0]);
}

#[test]
fn test_alignment_shifts_with_window_start() {
	let series = ramp(200);
	let predictions = batch(&[0.1, 0.2, 0.3]);

	let aligned = align_prediction(&input(&series, &series, 1.0, 60, 25, &predictions)).unwrap();

	assert_eq!(aligned.dates, vec![day(85), day(86), day(87)]);
	assert_eq!(aligned.actual, vec![185.0, 186.0, 187.0]);
}

#[test]
fn test_alignment_uses_transformed_dates_and_raw_values() {
	let transformed = daily_series(&[0.1, 0.2, 0.3, 0.4]);
	let raw = daily_series(&[10.0, 20.0, 30.0, 40.0]);
	let predictions = batch(&[0.5]);

	let aligned = align_prediction(&input(&transformed, &raw, 100.0, 2, 1, &predictions)).unwrap();

	assert_eq!(aligned.dates, vec![day(3)]);
	assert_eq!(aligned.actual, vec![40.0]);
	assert_eq!(aligned.predicted, vec![50.0]);
}

#[test]
fn test_lengths_agree_for_valid_windows() {
	let series = ramp(120);
	for (window_start, steps) in [(0, 1), (0, 60), (10, 30), (59, 1), (30, 30)] {
		let predictions = batch(&vec![0.5; steps]);
		let aligned =
			align_prediction(&input(&series, &series, 2.0, 60, window_start, &predictions)).unwrap();

		assert_eq!(aligned.dates.len(), steps);
		assert_eq!(aligned.actual.len(), steps);
		assert_eq!(aligned.predicted.len(), steps);
		assert_eq!(aligned.absolute_error.len(), steps);
		assert_eq!(aligned.relative_error.len(), steps);
	}
}

#[test]
fn test_relative_error_scenario() {
	let transformed = daily_series(&[0.0, 0.0, 0.0]);
	let raw = daily_series(&[100.0, 50.0, 0.0]);
	let predictions = batch(&[11.0, 4.5, 0.5]);

	let aligned = align_prediction(&input(&transformed, &raw, 10.0, 0, 0, &predictions)).unwrap();

	assert_eq!(aligned.predicted, vec![110.0, 45.0, 5.0]);
	assert_eq!(aligned.absolute_error, vec![10.0, 5.0, 5.0]);
	assert_eq!(
		aligned.relative_error,
		vec![
			RelativeError::Percent(10.0),
			RelativeError::Percent(10.0),
			RelativeError::Undefined
		]
	);
}

#[test]
fn test_zero_actual_is_reported() {
	let transformed = daily_series(&[0.0, 0.0, 0.0]);
	let raw = daily_series(&[100.0, 50.0, 0.0]);
	let predictions = batch(&[11.0, 4.5, 0.5]);

	let aligned = align_prediction(&input(&transformed, &raw, 10.0, 0, 0, &predictions)).unwrap();
	let err = aligned.relative_error_percent().unwrap_err();

	assert!(matches!(err, DashboardError::DivisionEdgeCase { date } if date == day(2)));
	assert!(aligned.error_points()[2].y.is_undefined());
}

#[test]
fn test_relative_error_percent_when_defined() {
	let actual = [200.0, 50.0];
	let absolute = absolute_error(&actual, &[210.0, 40.0]).unwrap();
	let relative = relative_error(&actual, &absolute);

	assert_eq!(relative[0].percent(day(0)).unwrap(), 5.0);
	assert_eq!(relative[1].percent(day(1)).unwrap(), 20.0);
}

#[test]
fn test_absolute_error_length_mismatch() {
	let err = absolute_error(&[1.0, 2.0], &[1.0]).unwrap_err();
	assert!(matches!(
		err,
		DashboardError::Alignment {
			predicted: 1,
			actual: 2
		}
	));
}

#[test]
fn test_prediction_past_series_end() {
	let series = ramp(64);
	let predictions = batch(&[0.1, 0.2, 0.3, 0.4, 0.5]);

	let err = align_prediction(&input(&series, &series, 1.0, 60, 0, &predictions)).unwrap_err();
	assert!(matches!(
		err,
		DashboardError::Alignment {
			predicted: 5,
			actual: 4
		}
	));
}

#[test]
fn test_window_start_beyond_series() {
	let series = ramp(50);
	let predictions = batch(&[0.1]);

	let err = align_prediction(&input(&series, &series, 1.0, 60, 10, &predictions)).unwrap_err();
	assert!(matches!(
		err,
		DashboardError::Alignment {
			predicted: 1,
			actual: 0
		}
	));
}

#[test]
fn test_oversized_block_size_is_misaligned() {
	let series = ramp(200);
	let predictions = batch(&[0.1, 0.2]);

	let err =
		align_prediction(&input(&series, &series, 1.0, usize::MAX, 1, &predictions)).unwrap_err();
	assert!(matches!(
		err,
		DashboardError::Alignment {
			predicted: 2,
			actual: 0
		}
	));
}

#[test]
fn test_flatten_keeps_order() {
	let flat = flatten_batch(&PredictionBatch(vec![vec![1.2], vec![3.4], vec![5.6]])).unwrap();
	assert_eq!(flat, vec![1.2, 3.4, 5.6]);

	let flat = flatten_batch(&PredictionBatch(vec![vec![1.0, 2.0], vec![3.0]])).unwrap();
	assert_eq!(flat, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_flatten_rejects_malformed_batch() {
	for malformed in [
		PredictionBatch(vec![]),
		PredictionBatch(vec![vec![1.0], vec![]]),
		PredictionBatch(vec![vec![f64::NAN]]),
		PredictionBatch(vec![vec![f64::INFINITY]]),
	] {
		let result = flatten_batch(&malformed);
		assert!(matches!(result, Err(DashboardError::InvalidResponse(_))));
	}
}

#[test]
fn test_denormalize_round_trip() {
	let factor = NormalizationFactor::from_closes(ramp(3).values()).unwrap();
	assert!((factor.get() - 174.94284781036347).abs() < 1e-9);

	for price in [0.0, 1.5, 187.23, 12_345.678] {
		let restored = factor.denormalize(factor.normalize(price));
		assert!((restored - price).abs() < 1e-9 * price.max(1.0));
	}
}

#[test]
fn test_evaluation_is_bit_identical() {
	let transformed = ramp(150);
	let raw = daily_series(&(0..150).map(|i| 37.3 + (i as f64).sin()).collect::<Vec<_>>());
	let predictions = batch(&(0..40).map(|i| 0.11 + i as f64 * 0.003).collect::<Vec<_>>());
	let request = input(&transformed, &raw, 431.77, 60, 7, &predictions);

	let first = evaluate_prediction(&request).unwrap();
	let second = evaluate_prediction(&request).unwrap();

	let bits = |values: &[f64]| values.iter().map(|each| each.to_bits()).collect::<Vec<_>>();
	assert_eq!(bits(&first.aligned.predicted), bits(&second.aligned.predicted));
	assert_eq!(bits(&first.aligned.absolute_error), bits(&second.aligned.absolute_error));
	assert_eq!(
		bits(&first.aligned.relative_error_percent().unwrap()),
		bits(&second.aligned.relative_error_percent().unwrap())
	);
	assert_eq!(first, second);
}

#[test]
fn test_summary_skips_undefined_points() {
	let transformed = daily_series(&[0.0, 0.0, 0.0]);
	let raw = daily_series(&[100.0, 50.0, 0.0]);
	let predictions = batch(&[11.0, 4.5, 0.5]);

	let report = evaluate_prediction(&input(&transformed, &raw, 10.0, 0, 0, &predictions)).unwrap();

	assert!((report.summary.mean_absolute_error - 20.0 / 3.0).abs() < 1e-12);
	assert_eq!(report.summary.mean_absolute_percentage_error, Some(10.0));
	assert_eq!(report.summary.undefined_points, 1);
}

#[test]
fn test_report_peaks() {
	let series = ramp(10);
	let predictions = batch(&[3.0, 9.0, 1.0, 9.0, 1.0]);

	let report = evaluate_prediction(&input(&series, &series, 1.0, 2, 0, &predictions)).unwrap();

	let high = report.high_peak.unwrap();
	let low = report.low_peak.unwrap();
	assert_eq!((high.x, high.y1), (day(3), 9.0));
	assert_eq!((low.x, low.y1), (day(4), 1.0));
}

#[test]
fn test_undefined_relative_error_serializes_as_null() {
	let points = vec![
		ErrorPoint {
			x: day(0),
			y: RelativeError::Percent(2.5),
		},
		ErrorPoint {
			x: day(1),
			y: RelativeError::Undefined,
		},
	];

	let json = serde_json::to_value(&points).unwrap();
	assert_eq!(
		json,
		serde_json::json!([
			{ "x": "2020-01-01", "y": 2.5 },
			{ "x": "2020-01-02", "y": null }
		])
	);
}

#[test]
fn test_save_report_writes_csv() {
	let transformed = daily_series(&[0.0, 0.0, 0.0]);
	let raw = daily_series(&[100.0, 50.0, 0.0]);
	let predictions = batch(&[11.0, 4.5, 0.5]);
	let report = evaluate_prediction(&input(&transformed, &raw, 10.0, 0, 0, &predictions)).unwrap();

	let dir = TempDir::new().unwrap();
	let path = dir.path().join("prediction.csv");
	save_report(&report, &path).unwrap();

	let content = fs::read_to_string(&path).unwrap();
	let lines = content.lines().collect::<Vec<_>>();
	assert_eq!(
		lines,
		vec![
			"Date,Actual,Predicted,Absolute Error,Relative Error [%]",
			"2020-01-01,100,110,10,10",
			"2020-01-02,50,45,5,10",
			"2020-01-03,0,5,5,",
		]
	);
}

#[test]
fn test_save_report_unwritable_path() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("missing").join("prediction.csv");

	let err = save_report(&EvaluationReport::default(), &path).unwrap_err();
	assert!(matches!(err, DashboardError::Export(_)));
}
