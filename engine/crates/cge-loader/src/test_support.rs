//! 测试用的伪造符号来源

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::symbol_source::{RawFn, SymbolSource};

/// 用本地 `extern "C"` 函数伪造的导出集合
///
/// 不经过真实的 dlopen，方便验证解析与转发行为。
pub(crate) struct FakeExports {
    symbols: HashMap<&'static str, RawFn>,
    lookups: AtomicUsize,
}

impl FakeExports {
    pub(crate) fn new() -> Self {
        Self {
            symbols: HashMap::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    /// 追加一个导出，`raw` 是 `extern "C"` 函数的地址
    pub(crate) fn export(mut self, name: &'static str, raw: RawFn) -> Self {
        self.symbols.insert(name, raw);
        self
    }

    /// 至今为止的解析次数，用于验证加载的幂等性
    pub(crate) fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }
}

impl SymbolSource for FakeExports {
    fn lookup(&self, name: &str) -> Option<RawFn> {
        self.lookups.fetch_add(1, Ordering::Relaxed);
        self.symbols.get(name).copied()
    }
}
