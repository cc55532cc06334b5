//! 引擎实例：库句柄 + 分发表
//!
//! 原生接口要求先加载、后转发，期间不支持并发。`CgeEngine` 由执行
//! 加载的一方持有，替代原接口中的进程级全局函数指针。

use std::ffi::OsStr;

use crate::error::CgeLoadError;
use crate::symbol_source::SymbolSource;
use crate::table::DispatchTable;

/// 当前平台默认的引擎动态库文件名
pub fn default_library_name() -> &'static str {
    if cfg!(target_os = "windows") {
        "castleengine.dll"
    } else if cfg!(target_os = "macos") {
        "libcastleengine.dylib"
    } else {
        "libcastleengine.so"
    }
}

/// 已加载（或尚未加载）的引擎
///
/// 加载成功后分发表不再变化；未加载或某符号缺失时，对应的转发
/// 方法是安全的空操作。转发接口见 [`crate::api`] 下按职责拆分的
/// 各个 impl 块。
pub struct CgeEngine {
    /// 库句柄只为保活：函数指针必须与它活得一样久
    _library: Option<libloading::Library>,
    pub(crate) table: DispatchTable,
    /// 打开库之后没有解析出来的符号名
    unresolved: Vec<&'static str>,
    loaded: bool,
}

impl Default for CgeEngine {
    fn default() -> Self {
        Self::new()
    }
}

// 加载
impl CgeEngine {
    /// 未加载的引擎，所有槽位空置
    pub fn new() -> Self {
        Self {
            _library: None,
            table: DispatchTable::empty(),
            unresolved: Vec::new(),
            loaded: false,
        }
    }

    /// 按平台默认文件名加载引擎库
    pub fn load(&mut self) -> Result<(), CgeLoadError> {
        self.load_from(default_library_name())
    }

    /// 从指定路径加载引擎库并解析全部符号
    ///
    /// 幂等：已加载的引擎直接返回成功，不重新解析。打开失败返回
    /// [`CgeLoadError::LibraryNotFound`]，所有槽位保持未解析；单个符号
    /// 缺失不致命，只记录并告警。
    pub fn load_from(&mut self, path: impl AsRef<OsStr>) -> Result<(), CgeLoadError> {
        if self.loaded {
            return Ok(());
        }

        let path = path.as_ref();
        let library = unsafe { libloading::Library::new(path) }.map_err(|source| CgeLoadError::LibraryNotFound {
            name: path.to_string_lossy().into_owned(),
            source,
        })?;

        self.resolve_table(&library);
        self._library = Some(library);
        self.loaded = true;

        log::info!("引擎动态库已加载: {}", path.to_string_lossy());
        Ok(())
    }

    /// 从任意符号来源解析分发表，不持有库句柄
    ///
    /// 与 [`Self::load_from`] 同样幂等。
    ///
    /// # Safety
    /// 调用方保证来源给出的地址与槽位签名一致，且在引擎存活期间有效。
    pub unsafe fn load_symbols(&mut self, source: &impl SymbolSource) {
        if self.loaded {
            return;
        }
        self.resolve_table(source);
        self.loaded = true;
    }

    fn resolve_table(&mut self, source: &impl SymbolSource) {
        let (table, missing) = DispatchTable::resolve(source);
        for symbol in &missing {
            log::warn!("未找到引擎导出函数: {symbol}");
        }
        self.table = table;
        self.unresolved = missing;
    }
}

// 状态查询
impl CgeEngine {
    /// 是否已经成功加载过
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// 加载后仍未解析的符号名，目录顺序
    pub fn unresolved_symbols(&self) -> &[&'static str] {
        &self.unresolved
    }

    /// 确认某个符号已解析，供上层在依赖该调用前检查
    ///
    /// 引擎尚未加载、名字不在目录中、或加载后未解析，都算未解析。
    pub fn check_symbol(&self, symbol: &'static str) -> Result<(), CgeLoadError> {
        let resolved =
            self.loaded && DispatchTable::SYMBOLS.contains(&symbol) && !self.unresolved.contains(&symbol);
        if resolved {
            Ok(())
        } else {
            Err(CgeLoadError::SymbolUnresolved { symbol })
        }
    }
}
