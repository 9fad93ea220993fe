use crate::calibration::calibrationcase::CalibrationCase;
use crate::math::residualcurve::{
    ResidualCurve,
    ResidualSample
};
use crate::reimbursement::formula::FormulaConstants;

/// Back-solve the receipts reimbursement implied by the historical cases.
///
/// The analytic formula is known to be incomplete: for every case the part
/// of the expected output it cannot explain is `expected - base_amount`,
/// and that remainder correlates with receipts. Dividing both the receipts
/// total and the remainder by the trip length puts every case on a common
/// per-day axis, so one curve generalizes across trip lengths.
///
/// Cases with no positive day count carry no per-day information and are
/// skipped. The samples are kept exactly as extracted: no smoothing,
/// deduplication or outlier rejection.
pub fn build_residual_curve(
    cases: &[CalibrationCase],
    constants: &FormulaConstants,
) -> ResidualCurve {
    let mut samples = Vec::with_capacity(cases.len());
    for case in cases {
        if case.days() <= 0 {
            continue;
        }
        let days = case.days() as f64;
        let base = constants.base_amount(case.days(), case.miles());
        let residual = case.expected() - base;
        samples.push(ResidualSample::new(case.receipts() / days, residual / days));
    }
    tracing::info!(cases = cases.len(), samples = samples.len(), "residual curve built");
    ResidualCurve::new(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_per_day_residual_samples() {
        let constants = FormulaConstants::default();
        // two zero-mile days: base is exactly two per-diems
        let case = CalibrationCase::new(2, 0.0, 50.0, 300.0);
        let curve = build_residual_curve(&[case], &constants);

        assert_eq!(curve.len(), 1);
        let sample = curve.samples()[0];
        assert_eq!(sample.x(), 25.0);
        let residual = 300.0 - 2.0 * constants.per_diem_rate;
        assert!((sample.y() - residual / 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_day_cases_are_skipped() {
        let constants = FormulaConstants::default();
        let cases = [
            CalibrationCase::new(0, 0.0, 10.0, 0.0),
            CalibrationCase::new(1, 0.0, 10.0, 150.0),
            CalibrationCase::new(0, 500.0, 99.0, 300.0),
        ];
        let curve = build_residual_curve(&cases, &constants);
        assert_eq!(curve.len(), 1);
        assert_eq!(curve.samples()[0].x(), 10.0);
    }

    #[test]
    fn samples_come_out_sorted_by_receipts_per_day() {
        let constants = FormulaConstants::default();
        let cases = [
            CalibrationCase::new(1, 0.0, 90.0, 100.0),
            CalibrationCase::new(1, 0.0, 10.0, 100.0),
            CalibrationCase::new(2, 0.0, 100.0, 200.0),
            CalibrationCase::new(1, 0.0, 40.0, 100.0),
        ];
        let curve = build_residual_curve(&cases, &constants);
        let xs: Vec<f64> = curve.samples().iter().map(|s| s.x()).collect();
        assert_eq!(xs, vec![10.0, 40.0, 50.0, 90.0]);
    }

    #[test]
    fn all_degenerate_cases_build_an_empty_curve() {
        let constants = FormulaConstants::default();
        let cases = [CalibrationCase::new(0, 1.0, 2.0, 3.0)];
        let curve = build_residual_curve(&cases, &constants);
        assert!(curve.is_empty());
        assert_eq!(curve.value(17.0), 0.0);
    }

    #[test]
    fn long_trip_discount_flows_into_the_residual() {
        let constants = FormulaConstants::default();
        // eight days, zero miles: base is eight discounted per-diems
        let case = CalibrationCase::new(8, 0.0, 80.0, 900.0);
        let curve = build_residual_curve(&[case], &constants);
        let base = 8.0 * constants.per_diem_rate * constants.long_trip_multiplier;
        let want = (900.0 - base) / 8.0;
        assert!((curve.samples()[0].y() - want).abs() < 1e-9);
        assert_eq!(curve.samples()[0].x(), 10.0);
    }
}
