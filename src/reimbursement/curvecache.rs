use std::sync::OnceLock;

use crate::math::residualcurve::ResidualCurve;

/// 行程共用的殘差曲線插槽。
///
/// # 設計說明：OnceLock 取代可失效快取
/// 曲線由完整校準資料一次建成，建成後永不變動，也沒有「換一條曲線」
/// 的失效情境，因此不需要 key 比對或清空邏輯，單一 `OnceLock` 插槽
/// 即可：
/// - 多條執行緒同時初次呼叫時，保證 builder 只執行一次；
/// - 之後所有呼叫都拿到同一份唯讀曲線的參考，讀取不需加鎖。
///
/// 偏好依賴注入的呼叫端可以完全不用這個型別，自行建曲線後以
/// `&ResidualCurve` 傳遞；這裡只服務需要行程層級共享的情境。
pub struct CurveCache {
    slot: OnceLock<ResidualCurve>,
}

impl CurveCache {
    pub const fn new() -> CurveCache {
        CurveCache { slot: OnceLock::new() }
    }

    /// Run `build` on first use and keep its result for the life of the
    /// process; later calls (from any thread) get the cached curve and
    /// `build` never runs again.
    pub fn get_or_build<F>(&self, build: F) -> &ResidualCurve
    where
        F: FnOnce() -> ResidualCurve,
    {
        self.slot.get_or_init(build)
    }

    /// The cached curve, if some caller has already built it.
    pub fn get(&self) -> Option<&ResidualCurve> {
        self.slot.get()
    }
}

impl Default for CurveCache {
    fn default() -> CurveCache {
        CurveCache::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::math::residualcurve::ResidualSample;

    #[test]
    fn builds_exactly_once_across_threads() {
        let cache = CurveCache::new();
        let builds = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let curve = cache.get_or_build(|| {
                        builds.fetch_add(1, Ordering::SeqCst);
                        ResidualCurve::new(vec![ResidualSample::new(1.0, 2.0)])
                    });
                    assert_eq!(curve.value(1.0), 2.0);
                });
            }
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        assert!(cache.get().is_some());
    }

    #[test]
    fn empty_cache_reports_nothing() {
        let cache = CurveCache::default();
        assert!(cache.get().is_none());
    }

    #[test]
    fn later_builders_are_ignored() {
        let cache = CurveCache::new();
        cache.get_or_build(|| ResidualCurve::new(vec![ResidualSample::new(0.0, 1.0)]));
        let curve = cache.get_or_build(|| ResidualCurve::new(vec![ResidualSample::new(0.0, 9.0)]));
        assert_eq!(curve.value(0.0), 1.0);
    }
}
