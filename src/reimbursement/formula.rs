/// The analytic side of the reimbursement schedule: per-diem, the five-day
/// bonus, the three-tier mileage rates, the efficiency band and the
/// long-trip discount. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct FormulaConstants {
    /// Flat daily amount, independent of miles and receipts.
    pub per_diem_rate: f64,
    /// Flat extra paid when the trip lasts exactly five days.
    pub five_day_bonus: f64,
    /// Miles covered by tier 1 (from zero).
    pub tier1_max_miles: f64,
    /// Miles covered by tiers 1 and 2 together.
    pub tier2_max_miles: f64,
    pub tier1_rate: f64,
    pub tier2_rate: f64,
    pub tier3_rate: f64,
    /// Inclusive miles-per-day band that earns the efficiency bonus.
    pub efficiency_low: f64,
    pub efficiency_high: f64,
    pub efficiency_multiplier: f64,
    /// Trips of at least this many days take the long-trip discount.
    pub long_trip_min_days: i64,
    /// Discount factor (< 1) over the whole non-receipts subtotal.
    pub long_trip_multiplier: f64,
}

impl Default for FormulaConstants {
    /// The rates fitted against the historical expected outputs.
    fn default() -> FormulaConstants {
        FormulaConstants {
            per_diem_rate: 99.999792,
            five_day_bonus: 49.999912,
            tier1_max_miles: 100.0,
            tier2_max_miles: 500.0,
            tier1_rate: 0.579759,
            tier2_rate: 0.519797,
            tier3_rate: 0.449873,
            efficiency_low: 150.0,
            efficiency_high: 250.0,
            efficiency_multiplier: 1.099989,
            long_trip_min_days: 8,
            long_trip_multiplier: 0.849974,
        }
    }
}

impl FormulaConstants {
    /// Tiered mileage reimbursement. Each tier's rate applies only to the
    /// miles falling inside that tier, so the schedule is continuous at the
    /// breakpoints.
    pub fn tiered_mileage(&self, miles: f64) -> f64 {
        let tier1 = miles.min(self.tier1_max_miles) * self.tier1_rate;
        let tier2 = (miles - self.tier1_max_miles)
            .max(0.0)
            .min(self.tier2_max_miles - self.tier1_max_miles)
            * self.tier2_rate;
        let tier3 = (miles - self.tier2_max_miles).max(0.0) * self.tier3_rate;
        tier1 + tier2 + tier3
    }

    /// Mileage contribution including the efficiency bonus, which applies
    /// when the daily pace sits inside the band. `days <= 0` never
    /// qualifies; in particular there is no division by a zero day count.
    pub fn mileage_amount(&self, days: i64, miles: f64) -> f64 {
        let mut mileage = self.tiered_mileage(miles);
        if days > 0 {
            let miles_per_day = miles / days as f64;
            if self.efficiency_low <= miles_per_day && miles_per_day <= self.efficiency_high {
                mileage *= self.efficiency_multiplier;
            }
        }
        mileage
    }

    /// Everything except the receipts correction: per-diem, the five-day
    /// bonus, mileage, and the long-trip discount over that running
    /// subtotal. Shared by the curve builder and the calculator so the two
    /// sides can never disagree on what "base" means.
    pub fn base_amount(&self, days: i64, miles: f64) -> f64 {
        let mut total = self.per_diem_rate * days as f64;
        if days == 5 {
            total += self.five_day_bonus;
        }
        total += self.mileage_amount(days, miles);
        if days >= self.long_trip_min_days {
            total *= self.long_trip_multiplier;
        }
        total
    }
}
