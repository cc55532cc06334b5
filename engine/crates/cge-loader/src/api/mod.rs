//! 安全的转发接口
//!
//! 按职责拆成若干个 [`crate::CgeEngine`] 的 impl 块：窗口与生命周期、
//! 输入事件、场景、相机与视点、导航配置、引擎变量、节点字段。
//! 每个方法对应目录中的一个符号：槽位已解析时透传参数并返回结果，
//! 未解析时是空操作，返回文档约定的默认值。

mod camera;
mod fields;
mod input;
mod navigation;
mod scene;
mod vars;
mod window;

pub use camera::{BoundingBox, ViewCoords};

use std::ffi::{CString, c_int};

/// 转为 C 字符串；内部 NUL 无法跨过 C 边界，在第一个 NUL 处截断
pub(crate) fn to_c_string(s: &str) -> CString {
    match CString::new(s) {
        Ok(c) => c,
        Err(err) => {
            let pos = err.nul_position();
            let mut bytes = err.into_vec();
            bytes.truncate(pos);
            // 截断后不再含 NUL
            CString::new(bytes).unwrap()
        }
    }
}

/// 数组长度转为 C 侧的 count，超出 `c_int` 范围时收窄到上限
/// 而不是回绕成负数
pub(crate) fn to_c_count(len: usize) -> c_int {
    c_int::try_from(len).unwrap_or(c_int::MAX)
}

/// 从引擎填充的缓冲区里取出以 NUL 结尾的字符串
pub(crate) fn buffer_to_string(buffer: &[u8]) -> String {
    let end = buffer.iter().position(|&b| b == 0).unwrap_or(buffer.len());
    String::from_utf8_lossy(&buffer[..end]).into_owned()
}
