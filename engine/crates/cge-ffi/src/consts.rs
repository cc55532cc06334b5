//! 接口中使用的枚举与常量
//!
//! 数值与动态库头文件中的 C 枚举保持一致，透传时使用 `as i32`/`bits()`。

use std::ffi::c_int;

bitflags::bitflags! {
    /// `CGE_Open` 的窗口特性标记
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OpenFlags: u32 {
        /// 降低内存占用，适用于移动端
        const SAVE_MEMORY = 1;
        /// 开启多重采样抗锯齿
        const MSAA = 2;
    }
}

/// 相机导航模式
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationType {
    #[default]
    Walk = 0,
    Fly = 1,
    Examine = 2,
    Turntable = 3,
    None = 4,
}

impl NavigationType {
    /// 引擎返回的原始值转换为枚举，未知值按 Walk 处理
    pub fn from_raw(raw: c_int) -> Self {
        match raw {
            1 => Self::Fly,
            2 => Self::Examine,
            3 => Self::Turntable,
            4 => Self::None,
            _ => Self::Walk,
        }
    }
}

/// 触屏操控界面模式
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchInterface {
    #[default]
    None = 0,
    CtlWalkCtlRotate = 1,
    CtlWalkDragRotate = 2,
    CtlFlyCtlWalkDragRotate = 3,
    CtlPanXyDragRotate = 4,
}

/// Walk 导航下鼠标拖拽的行为
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkMouseDragMode {
    #[default]
    Walk = 0,
    Rotate = 1,
    None = 2,
}

/// 引擎的整型开关变量，配合 `CGE_SetVariableInt` / `CGE_GetVariableInt`
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineVariable {
    WalkHeadBobbing = 0,
    EffectSsao = 1,
    MouseLook = 2,
    CrossHair = 3,
    AnimationRunning = 4,
    WalkTouchCtl = 5,
    ScenePaused = 6,
    AutoRedisplay = 7,
    Headlight = 8,
    OcclusionCulling = 9,
    PhongShading = 10,
    PreventInfiniteFallingDown = 11,
    UiScaling = 12,
}

/// 库回调的事件码，即 [`crate::pfn::LibraryCallback`] 的 `code` 参数
pub mod callback_code {
    use std::ffi::c_int;

    /// 场景需要重绘
    pub const NEEDS_DISPLAY: c_int = 0;
    /// 更换鼠标指针，param1 见 [`super::mouse_cursor`]
    pub const SET_MOUSE_CURSOR: c_int = 1;
    /// 导航模式被引擎改变（例如场景切换视点）
    pub const NAVIGATION_TYPE_CHANGED: c_int = 2;
    /// 移动鼠标指针到 (param1, param2)
    pub const SET_MOUSE_POSITION: c_int = 3;
    /// 引擎警告，文本在字符串参数中
    pub const WARNING: c_int = 4;
}

/// `SET_MOUSE_CURSOR` 回调的指针样式
pub mod mouse_cursor {
    use std::ffi::c_int;

    pub const DEFAULT: c_int = 0;
    pub const WAIT: c_int = 1;
    pub const HAND: c_int = 2;
    pub const TEXT: c_int = 3;
    pub const NONE: c_int = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_type_round_trip() {
        for nav in [
            NavigationType::Walk,
            NavigationType::Fly,
            NavigationType::Examine,
            NavigationType::Turntable,
            NavigationType::None,
        ] {
            assert_eq!(NavigationType::from_raw(nav as i32), nav);
        }
    }

    #[test]
    fn test_navigation_type_unknown_falls_back_to_walk() {
        assert_eq!(NavigationType::from_raw(42), NavigationType::Walk);
        assert_eq!(NavigationType::from_raw(-1), NavigationType::Walk);
    }

    #[test]
    fn test_open_flags_bits() {
        let flags = OpenFlags::SAVE_MEMORY | OpenFlags::MSAA;
        assert_eq!(flags.bits(), 3);
    }
}
