//! castleengine 动态库的接口契约
//!
//! 动态库导出一组 `CGE_*` 函数，名称与签名由库的版本决定。
//! 本 crate 只描述这份契约：
//! - [`pfn`]: 每个导出函数对应的函数指针类型
//! - [`consts`]: 接口中使用的枚举、标记与回调事件码
//!
//! 签名不匹配属于配置/版本错误，而不是加载器的逻辑错误。

pub mod consts;
pub mod pfn;

pub use consts::{EngineVariable, NavigationType, OpenFlags, TouchInterface, WalkMouseDragMode};
pub use pfn::LibraryCallback;
