use super::to_c_string;
use crate::engine::CgeEngine;

// 场景
impl CgeEngine {
    /// 加载场景文件（X3D/VRML/glTF 等，由引擎识别格式）
    pub fn load_scene_from_file(&self, file: &str) {
        if let Some(pfn) = self.table.load_scene_from_file {
            let file = to_c_string(file);
            unsafe { pfn(file.as_ptr()) };
        }
    }

    pub fn save_scene_to_file(&self, file: &str) {
        if let Some(pfn) = self.table.save_scene_to_file {
            let file = to_c_string(file);
            unsafe { pfn(file.as_ptr()) };
        }
    }

    /// 手动推进场景时间（秒），用于宿主控制动画节奏
    pub fn increase_scene_time(&self, time_s: f32) {
        if let Some(pfn) = self.table.increase_scene_time {
            unsafe { pfn(time_s) };
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::{CStr, c_char};
    use std::sync::Mutex;

    use super::*;
    use crate::symbol_source::RawFn;
    use crate::test_support::FakeExports;

    static LOADED_FILES: Mutex<Vec<String>> = Mutex::new(Vec::new());
    unsafe extern "C" fn fake_load_scene(file: *const c_char) {
        let file = unsafe { CStr::from_ptr(file) }.to_string_lossy().into_owned();
        LOADED_FILES.lock().unwrap().push(file);
    }

    #[test]
    fn test_scene_path_reaches_library_unchanged() {
        let fake = FakeExports::new().export("CGE_LoadSceneFromFile", fake_load_scene as RawFn);
        let mut engine = CgeEngine::new();
        unsafe { engine.load_symbols(&fake) };

        engine.load_scene_from_file("data/castle.x3dv");
        assert_eq!(LOADED_FILES.lock().unwrap().as_slice(), ["data/castle.x3dv"]);
    }
}
