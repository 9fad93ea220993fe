/// Round a reimbursement amount to whole cents (two decimal places).
///
/// Convention: round-half-to-even, judged on the cents-scaled value.
/// `f64::round` alone rounds halves away from zero, so the case where
/// `x * 100` lands exactly on a half cent is redone against the nearest
/// even cent. Decimal `.xx5` amounts are usually not exact halves once
/// stored in binary and simply take the nearest cent.
pub fn round_cents(x: f64) -> f64 {
    let y = x * 100.0;
    let mut z = y.round();
    if (y - z).abs() == 0.5 {
        z = 2.0 * (y / 2.0).round();
    }
    z / 100.0
}
