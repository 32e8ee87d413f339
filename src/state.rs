//! 服务状态

use std::sync::atomic::{AtomicU64, Ordering};

/// 应用状态
///
/// 静态配置在构造时确定，唯一的跨请求可变状态是运行计数。
pub struct AppState {
    /// 对外暴露的模型名
    pub model_name: String,
    /// 默认 max_tokens（请求体显式传 null 时使用）
    pub max_tokens: u32,
    /// 每请求每秒 token 数（保留的 CLI 参数，当前未参与任何逻辑）
    #[allow(dead_code)]
    pub speed: u32,
    /// 正在处理中的补全请求数
    num_requests_running: AtomicU64,
}

impl AppState {
    pub fn new(model_name: String, max_tokens: u32, speed: u32) -> Self {
        Self {
            model_name,
            max_tokens,
            speed,
            num_requests_running: AtomicU64::new(0),
        }
    }

    /// 当前正在处理的请求数（由指标端点读取，允许读到瞬时过期值）
    pub fn num_requests_running(&self) -> u64 {
        self.num_requests_running.load(Ordering::Relaxed)
    }

    /// 获取运行计数守卫：创建时 +1，Drop 时 -1
    pub fn running_guard(&self) -> RunningRequestGuard<'_> {
        self.num_requests_running.fetch_add(1, Ordering::Relaxed);
        RunningRequestGuard {
            counter: &self.num_requests_running,
        }
    }
}

/// 运行计数守卫
///
/// 计数的增减严格成对：任何退出路径（包括 panic 展开）都会在 Drop 中恢复计数，
/// 因此计数不会为负。
pub struct RunningRequestGuard<'a> {
    counter: &'a AtomicU64,
}

impl Drop for RunningRequestGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new("fake_model_name".to_string(), 100, 100)
    }

    #[test]
    fn test_guard_pairs_increment_and_decrement() {
        let state = test_state();
        assert_eq!(state.num_requests_running(), 0);
        {
            let _g1 = state.running_guard();
            let _g2 = state.running_guard();
            let _g3 = state.running_guard();
            assert_eq!(state.num_requests_running(), 3);
        }
        assert_eq!(state.num_requests_running(), 0);
    }

    #[test]
    fn test_guard_restores_count_on_panic() {
        let state = test_state();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = state.running_guard();
            panic!("generation failed");
        }));
        assert!(result.is_err());
        assert_eq!(state.num_requests_running(), 0);
    }

    #[test]
    fn test_concurrent_guards_stay_within_bounds() {
        let state = Arc::new(test_state());
        let threads: u64 = 8;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    for _ in 0..200 {
                        let _guard = state.running_guard();
                        let observed = state.num_requests_running();
                        // 持有守卫期间，计数至少包含自己，至多为并发线程数
                        assert!(observed >= 1);
                        assert!(observed <= threads);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(state.num_requests_running(), 0);
    }
}
