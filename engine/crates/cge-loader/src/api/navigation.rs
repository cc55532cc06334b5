use cge_ffi::{NavigationType, TouchInterface, WalkMouseDragMode};

use crate::engine::CgeEngine;

// 导航配置
impl CgeEngine {
    /// 绑定导航操作的快捷键
    ///
    /// `input` 是引擎的导航输入编号，其余参数是引擎键码 / 鼠标键 /
    /// 滚轮方向编号，0 表示不绑定。编号表属于库的契约，这里不解释。
    pub fn set_navigation_input_shortcut(&self, input: i32, key1: i32, key2: i32, mouse_button: i32, mouse_wheel: i32) {
        if let Some(pfn) = self.table.set_navigation_input_shortcut {
            unsafe { pfn(input, key1, key2, mouse_button, mouse_wheel) };
        }
    }

    /// 当前导航模式，未加载时为 [`NavigationType::Walk`]
    pub fn navigation_type(&self) -> NavigationType {
        match self.table.get_navigation_type {
            Some(pfn) => NavigationType::from_raw(unsafe { pfn() }),
            None => NavigationType::default(),
        }
    }

    pub fn set_navigation_type(&self, new_type: NavigationType) {
        if let Some(pfn) = self.table.set_navigation_type {
            unsafe { pfn(new_type as i32) };
        }
    }

    pub fn set_touch_interface(&self, mode: TouchInterface) {
        if let Some(pfn) = self.table.set_touch_interface {
            unsafe { pfn(mode as i32) };
        }
    }

    /// 让引擎按导航模式自动挑选触屏操控界面
    pub fn set_auto_touch_interface(&self, automatic: bool) {
        if let Some(pfn) = self.table.set_auto_touch_interface {
            unsafe { pfn(automatic) };
        }
    }

    pub fn set_walk_navigation_mouse_drag_mode(&self, mode: WalkMouseDragMode) {
        if let Some(pfn) = self.table.set_walk_navigation_mouse_drag_mode {
            unsafe { pfn(mode as i32) };
        }
    }
}
