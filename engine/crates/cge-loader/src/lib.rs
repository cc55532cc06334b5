//! castleengine 动态库加载器
//!
//! 引擎本体（渲染、场景、导航）都在外部动态库中，这里只做两件事：
//! 按名称把固定目录中的导出函数解析进分发表，以及提供与之对应的
//! 安全转发接口。未解析的槽位调用时是空操作，返回文档约定的默认值。
//!
//! # 使用
//! ```ignore
//! let mut engine = CgeEngine::new();
//! engine.load()?;
//! engine.initialize("config/");
//! engine.render();
//! ```

pub mod api;
pub mod engine;
pub mod error;
pub mod symbol_source;
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::{BoundingBox, ViewCoords};
pub use engine::{CgeEngine, default_library_name};
pub use error::CgeLoadError;
pub use symbol_source::{RawFn, SymbolSource};
pub use table::DispatchTable;
