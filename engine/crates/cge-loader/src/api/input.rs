use crate::engine::CgeEngine;

// 输入事件
//
// 坐标是窗口像素坐标，`finger_idx` 区分多点触控的手指，桌面端恒为 0。
// 键码是引擎自己的键码表，转发时不做解释。
impl CgeEngine {
    pub fn mouse_down(&self, x: i32, y: i32, left_btn: bool, finger_idx: i32) {
        if let Some(pfn) = self.table.mouse_down {
            unsafe { pfn(x, y, left_btn, finger_idx) };
        }
    }

    pub fn motion(&self, x: i32, y: i32, finger_idx: i32) {
        if let Some(pfn) = self.table.motion {
            unsafe { pfn(x, y, finger_idx) };
        }
    }

    pub fn mouse_up(&self, x: i32, y: i32, left_btn: bool, finger_idx: i32) {
        if let Some(pfn) = self.table.mouse_up {
            unsafe { pfn(x, y, left_btn, finger_idx) };
        }
    }

    pub fn mouse_wheel(&self, z_delta: f32, vertical: bool) {
        if let Some(pfn) = self.table.mouse_wheel {
            unsafe { pfn(z_delta, vertical) };
        }
    }

    pub fn key_down(&self, key: i32) {
        if let Some(pfn) = self.table.key_down {
            unsafe { pfn(key) };
        }
    }

    pub fn key_up(&self, key: i32) {
        if let Some(pfn) = self.table.key_up {
            unsafe { pfn(key) };
        }
    }
}
