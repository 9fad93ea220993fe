use serde::Deserialize;

/// One historical observation: the trip inputs together with the
/// reimbursement the legacy system paid out for them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationCase {
    days: i64,
    miles: f64,
    receipts: f64,
    expected: f64,
}

impl CalibrationCase {
    pub fn new(days: i64, miles: f64, receipts: f64, expected: f64) -> CalibrationCase {
        CalibrationCase { days, miles, receipts, expected }
    }

    pub fn days(&self) -> i64 {
        self.days
    }

    pub fn miles(&self) -> f64 {
        self.miles
    }

    pub fn receipts(&self) -> f64 {
        self.receipts
    }

    pub fn expected(&self) -> f64 {
        self.expected
    }
}

/// Wire shape of one dataset record. The field names are the dataset
/// contract and must not drift.
#[derive(Deserialize)]
pub(crate) struct CalibrationCaseJsonProp {
    input: TripJsonProp,
    expected_output: f64,
}

#[derive(Deserialize)]
struct TripJsonProp {
    trip_duration_days: i64,
    miles_traveled: f64,
    total_receipts_amount: f64,
}

impl CalibrationCaseJsonProp {
    pub(crate) fn into_case(self) -> CalibrationCase {
        CalibrationCase::new(
            self.input.trip_duration_days,
            self.input.miles_traveled,
            self.input.total_receipts_amount,
            self.expected_output,
        )
    }
}
