//! 导出函数的指针类型
//!
//! 与动态库导出的 `CGE_*` 函数一一对应，每个符号的签名固定。
//! 加载器只负责按名称解析并透传参数，不解释语义。

use std::ffi::{c_char, c_double, c_float, c_int, c_uint};

/// 库到宿主的回调
///
/// `code` 见 [`crate::consts::callback_code`]，两个整型参数与一个
/// 字符串参数的含义由事件码决定。
pub type LibraryCallback =
    unsafe extern "C" fn(code: c_int, param1: c_int, param2: c_int, sz_param: *const c_char) -> c_int;

// 生命周期
pub type PfnInitialize = unsafe extern "C" fn(application_config_directory: *const c_char);
pub type PfnFinalize = unsafe extern "C" fn();
pub type PfnOpen = unsafe extern "C" fn(flags: c_uint, initial_width: c_uint, initial_height: c_uint, dpi: c_uint);
pub type PfnClose = unsafe extern "C" fn(quit_when_last_window_closed: bool);

// 信息查询，结果写入调用方提供的缓冲区
pub type PfnGetOpenGlInformation = unsafe extern "C" fn(buffer: *mut c_char, buf_size: c_int);
pub type PfnGetCastleEngineVersion = unsafe extern "C" fn(buffer: *mut c_char, buf_size: c_int);

// 窗口与渲染
pub type PfnResize = unsafe extern "C" fn(view_width: c_uint, view_height: c_uint);
pub type PfnRender = unsafe extern "C" fn();
pub type PfnSaveScreenshotToFile = unsafe extern "C" fn(file: *const c_char);
pub type PfnSetLibraryCallbackProc = unsafe extern "C" fn(callback: LibraryCallback);
pub type PfnUpdate = unsafe extern "C" fn();

// 输入事件
pub type PfnMouseDown = unsafe extern "C" fn(x: c_int, y: c_int, left_btn: bool, finger_idx: c_int);
pub type PfnMotion = unsafe extern "C" fn(x: c_int, y: c_int, finger_idx: c_int);
pub type PfnMouseUp = unsafe extern "C" fn(x: c_int, y: c_int, left_btn: bool, finger_idx: c_int);
pub type PfnMouseWheel = unsafe extern "C" fn(z_delta: c_float, vertical: bool);
pub type PfnKeyDown = unsafe extern "C" fn(key: c_int);
pub type PfnKeyUp = unsafe extern "C" fn(key: c_int);

// 场景
pub type PfnLoadSceneFromFile = unsafe extern "C" fn(file: *const c_char);
pub type PfnSaveSceneToFile = unsafe extern "C" fn(file: *const c_char);
pub type PfnIncreaseSceneTime = unsafe extern "C" fn(time_s: c_float);

// 视点与相机
pub type PfnGetViewpointsCount = unsafe extern "C" fn() -> c_int;
pub type PfnGetViewpointName = unsafe extern "C" fn(viewpoint_idx: c_int, name: *mut c_char, buf_size: c_int);
pub type PfnMoveToViewpoint = unsafe extern "C" fn(viewpoint_idx: c_int, animated: bool);
pub type PfnAddViewpointFromCurrentView = unsafe extern "C" fn(name: *const c_char);
pub type PfnGetBoundingBox = unsafe extern "C" fn(
    x_min: *mut c_float,
    x_max: *mut c_float,
    y_min: *mut c_float,
    y_max: *mut c_float,
    z_min: *mut c_float,
    z_max: *mut c_float,
);
pub type PfnGetViewCoords = unsafe extern "C" fn(
    pos_x: *mut c_float,
    pos_y: *mut c_float,
    pos_z: *mut c_float,
    dir_x: *mut c_float,
    dir_y: *mut c_float,
    dir_z: *mut c_float,
    up_x: *mut c_float,
    up_y: *mut c_float,
    up_z: *mut c_float,
    grav_x: *mut c_float,
    grav_y: *mut c_float,
    grav_z: *mut c_float,
);
pub type PfnMoveViewToCoords = unsafe extern "C" fn(
    pos_x: c_float,
    pos_y: c_float,
    pos_z: c_float,
    dir_x: c_float,
    dir_y: c_float,
    dir_z: c_float,
    up_x: c_float,
    up_y: c_float,
    up_z: c_float,
    grav_x: c_float,
    grav_y: c_float,
    grav_z: c_float,
    animated: bool,
);

// 导航配置
pub type PfnSetNavigationInputShortcut =
    unsafe extern "C" fn(input: c_int, key1: c_int, key2: c_int, mouse_button: c_int, mouse_wheel: c_int);
pub type PfnGetNavigationType = unsafe extern "C" fn() -> c_int;
pub type PfnSetNavigationType = unsafe extern "C" fn(new_type: c_int);
pub type PfnSetTouchInterface = unsafe extern "C" fn(mode: c_int);
pub type PfnSetAutoTouchInterface = unsafe extern "C" fn(automatic: bool);
pub type PfnSetWalkNavigationMouseDragMode = unsafe extern "C" fn(mode: c_int);

// 引擎整型变量
pub type PfnSetVariableInt = unsafe extern "C" fn(var: c_int, value: c_int);
pub type PfnGetVariableInt = unsafe extern "C" fn(var: c_int) -> c_int;

// 场景节点字段，单值 (SF*)
pub type PfnSetNodeFieldSfFloat =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, value: c_float);
pub type PfnSetNodeFieldSfDouble =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, value: c_double);
pub type PfnSetNodeFieldSfInt32 =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, value: c_int);
pub type PfnSetNodeFieldSfBool =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, value: bool);
pub type PfnSetNodeFieldSfVec2f =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, val1: c_float, val2: c_float);
pub type PfnSetNodeFieldSfVec3f = unsafe extern "C" fn(
    node_name: *const c_char,
    field_name: *const c_char,
    val1: c_float,
    val2: c_float,
    val3: c_float,
);
pub type PfnSetNodeFieldSfVec4f = unsafe extern "C" fn(
    node_name: *const c_char,
    field_name: *const c_char,
    val1: c_float,
    val2: c_float,
    val3: c_float,
    val4: c_float,
);
pub type PfnSetNodeFieldSfVec2d =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, val1: c_double, val2: c_double);
pub type PfnSetNodeFieldSfVec3d = unsafe extern "C" fn(
    node_name: *const c_char,
    field_name: *const c_char,
    val1: c_double,
    val2: c_double,
    val3: c_double,
);
pub type PfnSetNodeFieldSfVec4d = unsafe extern "C" fn(
    node_name: *const c_char,
    field_name: *const c_char,
    val1: c_double,
    val2: c_double,
    val3: c_double,
    val4: c_double,
);
pub type PfnSetNodeFieldSfRotation = unsafe extern "C" fn(
    node_name: *const c_char,
    field_name: *const c_char,
    axis_x: c_float,
    axis_y: c_float,
    axis_z: c_float,
    rotation: c_float,
);
pub type PfnSetNodeFieldSfString =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, value: *const c_char);

// 场景节点字段，数组值 (MF*)，以 count + 连续内存传递
pub type PfnSetNodeFieldMfFloat =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_float);
pub type PfnSetNodeFieldMfDouble =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_double);
pub type PfnSetNodeFieldMfInt32 =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_int);
pub type PfnSetNodeFieldMfBool =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const bool);
pub type PfnSetNodeFieldMfVec2f =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_float);
pub type PfnSetNodeFieldMfVec3f =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_float);
pub type PfnSetNodeFieldMfVec4f =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_float);
pub type PfnSetNodeFieldMfVec2d =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_double);
pub type PfnSetNodeFieldMfVec3d =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_double);
pub type PfnSetNodeFieldMfVec4d =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_double);
pub type PfnSetNodeFieldMfRotation =
    unsafe extern "C" fn(node_name: *const c_char, field_name: *const c_char, count: c_int, values: *const c_float);
pub type PfnSetNodeFieldMfString = unsafe extern "C" fn(
    node_name: *const c_char,
    field_name: *const c_char,
    count: c_int,
    values: *const *const c_char,
);
