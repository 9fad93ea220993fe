pub mod calibration {
    pub mod calibrationcase;
    pub mod calibrationerror;
    pub mod calibrationset;
}

pub mod math {
    pub mod residualcurve;
    pub mod round;
}

pub mod reimbursement {
    pub mod calculator;
    pub mod curvebuilder;
    pub mod curvecache;
    pub mod formula;
}
