use std::ffi::c_void;

/// 解析出的符号地址，转换成具体函数指针之前不做任何解释
pub type RawFn = *const c_void;

/// 按名称解析符号的来源
///
/// 生产环境由 [`libloading::Library`] 实现；测试里可以用本地函数
/// 伪造一份导出集合，不经过真实的 dlopen。
pub trait SymbolSource {
    /// 解析一个导出符号，`name` 不含结尾 NUL
    ///
    /// 找不到返回 `None`，单个符号缺失不影响其它符号的解析。
    fn lookup(&self, name: &str) -> Option<RawFn>;
}

impl SymbolSource for libloading::Library {
    fn lookup(&self, name: &str) -> Option<RawFn> {
        let mut bytes = Vec::with_capacity(name.len() + 1);
        bytes.extend_from_slice(name.as_bytes());
        bytes.push(0);

        // Symbol<*mut c_void> 解引用得到的就是符号地址
        unsafe { self.get::<*mut c_void>(&bytes) }.ok().map(|sym| *sym as RawFn)
    }
}
