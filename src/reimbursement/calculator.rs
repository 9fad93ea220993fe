use crate::math::residualcurve::ResidualCurve;
use crate::math::round::round_cents;
use crate::reimbursement::formula::FormulaConstants;

/// Arguments to one reimbursement computation. `days` may be zero or even
/// negative; the computation is defined (if degenerate) for both. Negative
/// miles or receipts are not validated and simply flow through the
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripInput {
    pub days: i64,
    pub miles: f64,
    pub receipts: f64,
}

impl TripInput {
    pub fn new(days: i64, miles: f64, receipts: f64) -> TripInput {
        TripInput { days, miles, receipts }
    }
}

/// Final reimbursement amount, rounded to whole cents.
///
/// The analytic base (per-diem, five-day bonus, tiered mileage with the
/// efficiency bonus, long-trip discount) is topped up with the empirical
/// receipts correction: the curve maps receipts-per-day to a per-day
/// amount, which scales back up by the day count. A non-positive day count
/// looks up zero receipts-per-day instead of dividing, and the scaling by
/// `days` zeroes the correction for `days == 0`.
pub fn compute(input: &TripInput, constants: &FormulaConstants, curve: &ResidualCurve) -> f64 {
    let mut total = constants.base_amount(input.days, input.miles);
    let receipts_per_day = if input.days > 0 {
        input.receipts / input.days as f64
    } else {
        0.0
    };
    total += curve.value(receipts_per_day) * input.days as f64;
    round_cents(total)
}
