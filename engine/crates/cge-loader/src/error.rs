use thiserror::Error;

/// 加载 castleengine 时的错误
///
/// 两种错误都不致命：库打不开时整张分发表保持未解析，
/// 单个符号缺失只影响对应槽位，转发调用退化为空操作。
#[derive(Debug, Error)]
pub enum CgeLoadError {
    /// 动态库本身无法打开
    #[error("无法打开引擎动态库 {name}")]
    LibraryNotFound {
        name: String,
        #[source]
        source: libloading::Error,
    },

    /// 库已打开，但缺少某个导出函数
    #[error("引擎未导出函数 {symbol}")]
    SymbolUnresolved { symbol: &'static str },
}
