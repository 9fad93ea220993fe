// ─────────────────────────────────────────────
// ResidualSample
// ─────────────────────────────────────────────

/// 殘差曲線上的一個樣本點：`x` 為每日收據金額，`y` 為解析公式
/// 無法解釋的每日報銷殘差。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualSample {
    x: f64,
    y: f64,
}

impl ResidualSample {
    pub fn new(x: f64, y: f64) -> ResidualSample {
        ResidualSample { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    fn slope(lhs: &ResidualSample, rhs: &ResidualSample) -> f64 {
        (rhs.y - lhs.y) / (rhs.x - lhs.x)
    }
}

// ─────────────────────────────────────────────
// ResidualCurve
// ─────────────────────────────────────────────

/// 依 `x` 非遞減排序的經驗曲線，以線性內插查值。
///
/// # 設計說明：顯式二分搜尋取代向量化內插
/// 查值演算法刻意寫成「排序樣本上的二分搜尋＋兩點線性內插」：
/// - `partition_point` 找出最右側滿足 `sample.x <= x` 的樣本；
///   若存在重複的 `x`，取其中最後一個（與右閉括號搜尋一致），
///   因此正好命中樣本點時不會除以零。
/// - 超出 `[min_x, max_x]` 範圍一律夾到邊界樣本的 `y`（平坦外插，
///   不延伸斜率）。
/// - 空曲線沒有可查的樣本，回傳 0.0 代表「無收據修正」。
///
/// 建構後不再變動；`Vec<ResidualSample>` 只含 `f64`，可在多執行緒間
/// 共享唯讀存取。
pub struct ResidualCurve {
    samples: Vec<ResidualSample>,
}

impl ResidualCurve {
    /// 以穩定排序建立曲線；相同 `x` 的樣本保留原始相對順序。
    pub fn new(mut samples: Vec<ResidualSample>) -> ResidualCurve {
        samples.sort_by(|a, b| a.x.total_cmp(&b.x));
        ResidualCurve { samples }
    }

    pub fn samples(&self) -> &[ResidualSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn min_x(&self) -> Option<f64> {
        self.samples.first().map(ResidualSample::x)
    }

    pub fn max_x(&self) -> Option<f64> {
        self.samples.last().map(ResidualSample::x)
    }

    /// Interpolated per-day residual at `x`, with flat clamping outside the
    /// sampled range. An empty curve contributes nothing.
    pub fn value(&self, x: f64) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let last = self.samples.len() - 1;
        let bracket = self.samples.partition_point(|s| s.x <= x);
        if bracket == 0 {
            return self.samples[0].y;
        }
        let i = bracket - 1;
        if i == last || self.samples[i].x == x {
            return self.samples[i].y;
        }
        let lhs = &self.samples[i];
        let rhs = &self.samples[i + 1];
        lhs.y + ResidualSample::slope(lhs, rhs) * (x - lhs.x)
    }
}
