use std::ffi::{c_char, c_int};

use cge_ffi::{LibraryCallback, OpenFlags};

use super::{buffer_to_string, to_c_string};
use crate::engine::CgeEngine;

/// 版本与 OpenGL 信息的缓冲区大小
const INFO_BUF_SIZE: usize = 8192;

// 生命周期与窗口
impl CgeEngine {
    /// 初始化引擎，`application_config_directory` 为引擎配置文件目录
    pub fn initialize(&self, application_config_directory: &str) {
        if let Some(pfn) = self.table.initialize {
            let dir = to_c_string(application_config_directory);
            unsafe { pfn(dir.as_ptr()) };
        }
    }

    pub fn finalize(&self) {
        if let Some(pfn) = self.table.finalize {
            unsafe { pfn() };
        }
    }

    /// 在渲染上下文就绪后打开引擎视图
    pub fn open(&self, flags: OpenFlags, initial_width: u32, initial_height: u32, dpi: u32) {
        if let Some(pfn) = self.table.open {
            unsafe { pfn(flags.bits(), initial_width, initial_height, dpi) };
        }
    }

    pub fn close(&self, quit_when_last_window_closed: bool) {
        if let Some(pfn) = self.table.close {
            unsafe { pfn(quit_when_last_window_closed) };
        }
    }

    /// 当前 OpenGL 环境的描述，未加载时为空字符串
    pub fn opengl_information(&self) -> String {
        let Some(pfn) = self.table.get_opengl_information else {
            return String::new();
        };
        let mut buf = vec![0u8; INFO_BUF_SIZE];
        unsafe { pfn(buf.as_mut_ptr() as *mut c_char, buf.len() as c_int) };
        buffer_to_string(&buf)
    }

    /// 引擎版本号，未加载时为空字符串
    pub fn engine_version(&self) -> String {
        let Some(pfn) = self.table.get_engine_version else {
            return String::new();
        };
        let mut buf = vec![0u8; INFO_BUF_SIZE];
        unsafe { pfn(buf.as_mut_ptr() as *mut c_char, buf.len() as c_int) };
        buffer_to_string(&buf)
    }

    pub fn resize(&self, view_width: u32, view_height: u32) {
        if let Some(pfn) = self.table.resize {
            unsafe { pfn(view_width, view_height) };
        }
    }

    pub fn render(&self) {
        if let Some(pfn) = self.table.render {
            unsafe { pfn() };
        }
    }

    pub fn save_screenshot_to_file(&self, file: &str) {
        if let Some(pfn) = self.table.save_screenshot_to_file {
            let file = to_c_string(file);
            unsafe { pfn(file.as_ptr()) };
        }
    }

    /// 注册库到宿主的回调，事件码见 [`cge_ffi::consts::callback_code`]
    pub fn set_library_callback(&self, callback: LibraryCallback) {
        if let Some(pfn) = self.table.set_library_callback_proc {
            unsafe { pfn(callback) };
        }
    }

    /// 每帧推进引擎内部状态
    pub fn update(&self) {
        if let Some(pfn) = self.table.update {
            unsafe { pfn() };
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::c_uint;
    use std::sync::Mutex;

    use super::*;
    use crate::symbol_source::RawFn;
    use crate::test_support::FakeExports;

    unsafe extern "C" fn fake_version(buffer: *mut c_char, buf_size: c_int) {
        let version = b"4.1.0\0";
        if buf_size as usize >= version.len() {
            unsafe { std::ptr::copy_nonoverlapping(version.as_ptr(), buffer as *mut u8, version.len()) };
        }
    }

    static OPEN_ARGS: Mutex<Vec<(u32, u32, u32, u32)>> = Mutex::new(Vec::new());
    unsafe extern "C" fn fake_open(flags: c_uint, width: c_uint, height: c_uint, dpi: c_uint) {
        OPEN_ARGS.lock().unwrap().push((flags, width, height, dpi));
    }

    #[test]
    fn test_engine_version_reads_out_buffer() {
        let fake = FakeExports::new().export("CGE_GetCastleEngineVersion", fake_version as RawFn);
        let mut engine = CgeEngine::new();
        unsafe { engine.load_symbols(&fake) };

        assert_eq!(engine.engine_version(), "4.1.0");
        // 同目录下未导出的查询返回空串
        assert_eq!(engine.opengl_information(), "");
    }

    #[test]
    fn test_open_passes_flags_and_geometry() {
        let fake = FakeExports::new().export("CGE_Open", fake_open as RawFn);
        let mut engine = CgeEngine::new();
        unsafe { engine.load_symbols(&fake) };

        engine.open(OpenFlags::MSAA, 1280, 720, 96);
        assert_eq!(OPEN_ARGS.lock().unwrap().as_slice(), [(OpenFlags::MSAA.bits(), 1280, 720, 96)]);
    }
}
