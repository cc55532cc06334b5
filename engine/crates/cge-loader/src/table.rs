//! 符号分发表
//!
//! 引擎导出函数的目录是固定且编译期已知的，这里用一个声明式宏
//! 同时生成槽位结构体、符号名目录与逐槽解析逻辑，保证三者不会漂移。

use cge_ffi::pfn::*;

use crate::symbol_source::{RawFn, SymbolSource};

macro_rules! dispatch_table {
    ($($field:ident : $pfn:ty = $symbol:literal,)+) => {
        /// 符号分发表
        ///
        /// 每个槽位对应动态库的一个导出函数。槽位要么未解析（`None`，
        /// 转发调用是安全的空操作），要么持有一个签名匹配的函数指针，
        /// 不存在部分绑定的状态。加载后不再修改。
        pub struct DispatchTable {
            $(pub(crate) $field: Option<$pfn>,)+
        }

        impl DispatchTable {
            /// 固定的符号目录，顺序即解析顺序
            pub const SYMBOLS: &'static [&'static str] = &[$($symbol,)+];

            /// 全部槽位未解析的表
            pub(crate) fn empty() -> Self {
                Self { $($field: None,)+ }
            }

            /// 逐个解析目录中的符号，彼此独立，缺失的符号名记录在返回值中
            pub(crate) fn resolve(source: &impl SymbolSource) -> (Self, Vec<&'static str>) {
                let mut missing = Vec::new();
                let table = Self {
                    $($field: match source.lookup($symbol) {
                        // 槽位签名在编译期固定，这里只做地址到函数指针的转换
                        Some(raw) => Some(unsafe { std::mem::transmute::<RawFn, $pfn>(raw) }),
                        None => {
                            missing.push($symbol);
                            None
                        }
                    },)+
                };
                (table, missing)
            }
        }
    };
}

dispatch_table! {
    initialize: PfnInitialize = "CGE_Initialize",
    finalize: PfnFinalize = "CGE_Finalize",
    open: PfnOpen = "CGE_Open",
    close: PfnClose = "CGE_Close",
    get_opengl_information: PfnGetOpenGlInformation = "CGE_GetOpenGLInformation",
    get_engine_version: PfnGetCastleEngineVersion = "CGE_GetCastleEngineVersion",
    resize: PfnResize = "CGE_Resize",
    render: PfnRender = "CGE_Render",
    save_screenshot_to_file: PfnSaveScreenshotToFile = "CGE_SaveScreenshotToFile",
    set_library_callback_proc: PfnSetLibraryCallbackProc = "CGE_SetLibraryCallbackProc",
    update: PfnUpdate = "CGE_Update",
    mouse_down: PfnMouseDown = "CGE_MouseDown",
    motion: PfnMotion = "CGE_Motion",
    mouse_up: PfnMouseUp = "CGE_MouseUp",
    mouse_wheel: PfnMouseWheel = "CGE_MouseWheel",
    key_down: PfnKeyDown = "CGE_KeyDown",
    key_up: PfnKeyUp = "CGE_KeyUp",
    load_scene_from_file: PfnLoadSceneFromFile = "CGE_LoadSceneFromFile",
    save_scene_to_file: PfnSaveSceneToFile = "CGE_SaveSceneToFile",
    get_viewpoints_count: PfnGetViewpointsCount = "CGE_GetViewpointsCount",
    get_viewpoint_name: PfnGetViewpointName = "CGE_GetViewpointName",
    move_to_viewpoint: PfnMoveToViewpoint = "CGE_MoveToViewpoint",
    add_viewpoint_from_current_view: PfnAddViewpointFromCurrentView = "CGE_AddViewpointFromCurrentView",
    get_bounding_box: PfnGetBoundingBox = "CGE_GetBoundingBox",
    get_view_coords: PfnGetViewCoords = "CGE_GetViewCoords",
    move_view_to_coords: PfnMoveViewToCoords = "CGE_MoveViewToCoords",
    set_navigation_input_shortcut: PfnSetNavigationInputShortcut = "CGE_SetNavigationInputShortcut",
    get_navigation_type: PfnGetNavigationType = "CGE_GetNavigationType",
    set_navigation_type: PfnSetNavigationType = "CGE_SetNavigationType",
    set_touch_interface: PfnSetTouchInterface = "CGE_SetTouchInterface",
    set_auto_touch_interface: PfnSetAutoTouchInterface = "CGE_SetAutoTouchInterface",
    set_walk_navigation_mouse_drag_mode: PfnSetWalkNavigationMouseDragMode = "CGE_SetWalkNavigationMouseDragMode",
    set_variable_int: PfnSetVariableInt = "CGE_SetVariableInt",
    get_variable_int: PfnGetVariableInt = "CGE_GetVariableInt",
    set_node_field_sf_float: PfnSetNodeFieldSfFloat = "CGE_SetNodeFieldValue_SFFloat",
    set_node_field_sf_double: PfnSetNodeFieldSfDouble = "CGE_SetNodeFieldValue_SFDouble",
    set_node_field_sf_int32: PfnSetNodeFieldSfInt32 = "CGE_SetNodeFieldValue_SFInt32",
    set_node_field_sf_bool: PfnSetNodeFieldSfBool = "CGE_SetNodeFieldValue_SFBool",
    set_node_field_sf_vec2f: PfnSetNodeFieldSfVec2f = "CGE_SetNodeFieldValue_SFVec2f",
    set_node_field_sf_vec3f: PfnSetNodeFieldSfVec3f = "CGE_SetNodeFieldValue_SFVec3f",
    set_node_field_sf_vec4f: PfnSetNodeFieldSfVec4f = "CGE_SetNodeFieldValue_SFVec4f",
    set_node_field_sf_vec2d: PfnSetNodeFieldSfVec2d = "CGE_SetNodeFieldValue_SFVec2d",
    set_node_field_sf_vec3d: PfnSetNodeFieldSfVec3d = "CGE_SetNodeFieldValue_SFVec3d",
    set_node_field_sf_vec4d: PfnSetNodeFieldSfVec4d = "CGE_SetNodeFieldValue_SFVec4d",
    set_node_field_sf_rotation: PfnSetNodeFieldSfRotation = "CGE_SetNodeFieldValue_SFRotation",
    set_node_field_sf_string: PfnSetNodeFieldSfString = "CGE_SetNodeFieldValue_SFString",
    set_node_field_mf_float: PfnSetNodeFieldMfFloat = "CGE_SetNodeFieldValue_MFFloat",
    set_node_field_mf_double: PfnSetNodeFieldMfDouble = "CGE_SetNodeFieldValue_MFDouble",
    set_node_field_mf_int32: PfnSetNodeFieldMfInt32 = "CGE_SetNodeFieldValue_MFInt32",
    set_node_field_mf_bool: PfnSetNodeFieldMfBool = "CGE_SetNodeFieldValue_MFBool",
    set_node_field_mf_vec2f: PfnSetNodeFieldMfVec2f = "CGE_SetNodeFieldValue_MFVec2f",
    set_node_field_mf_vec3f: PfnSetNodeFieldMfVec3f = "CGE_SetNodeFieldValue_MFVec3f",
    set_node_field_mf_vec4f: PfnSetNodeFieldMfVec4f = "CGE_SetNodeFieldValue_MFVec4f",
    set_node_field_mf_vec2d: PfnSetNodeFieldMfVec2d = "CGE_SetNodeFieldValue_MFVec2d",
    set_node_field_mf_vec3d: PfnSetNodeFieldMfVec3d = "CGE_SetNodeFieldValue_MFVec3d",
    set_node_field_mf_vec4d: PfnSetNodeFieldMfVec4d = "CGE_SetNodeFieldValue_MFVec4d",
    set_node_field_mf_rotation: PfnSetNodeFieldMfRotation = "CGE_SetNodeFieldValue_MFRotation",
    set_node_field_mf_string: PfnSetNodeFieldMfString = "CGE_SetNodeFieldValue_MFString",
    increase_scene_time: PfnIncreaseSceneTime = "CGE_IncreaseSceneTime",
}
