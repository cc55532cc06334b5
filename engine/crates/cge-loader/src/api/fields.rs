use std::ffi::{CString, c_char, c_int};

use super::{to_c_count, to_c_string};
use crate::engine::CgeEngine;

fn node_field(node_name: &str, field_name: &str) -> (CString, CString) {
    (to_c_string(node_name), to_c_string(field_name))
}

// 场景节点字段，单值 (SF*)
//
// 节点与字段按名称寻址，名称或类型不匹配时由引擎侧忽略。
impl CgeEngine {
    pub fn set_node_field_sf_float(&self, node_name: &str, field_name: &str, value: f32) {
        if let Some(pfn) = self.table.set_node_field_sf_float {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value) };
        }
    }

    pub fn set_node_field_sf_double(&self, node_name: &str, field_name: &str, value: f64) {
        if let Some(pfn) = self.table.set_node_field_sf_double {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value) };
        }
    }

    pub fn set_node_field_sf_int32(&self, node_name: &str, field_name: &str, value: i32) {
        if let Some(pfn) = self.table.set_node_field_sf_int32 {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value) };
        }
    }

    pub fn set_node_field_sf_bool(&self, node_name: &str, field_name: &str, value: bool) {
        if let Some(pfn) = self.table.set_node_field_sf_bool {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value) };
        }
    }

    pub fn set_node_field_sf_vec2f(&self, node_name: &str, field_name: &str, value: [f32; 2]) {
        if let Some(pfn) = self.table.set_node_field_sf_vec2f {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value[0], value[1]) };
        }
    }

    pub fn set_node_field_sf_vec3f(&self, node_name: &str, field_name: &str, value: [f32; 3]) {
        if let Some(pfn) = self.table.set_node_field_sf_vec3f {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value[0], value[1], value[2]) };
        }
    }

    pub fn set_node_field_sf_vec4f(&self, node_name: &str, field_name: &str, value: [f32; 4]) {
        if let Some(pfn) = self.table.set_node_field_sf_vec4f {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value[0], value[1], value[2], value[3]) };
        }
    }

    pub fn set_node_field_sf_vec2d(&self, node_name: &str, field_name: &str, value: [f64; 2]) {
        if let Some(pfn) = self.table.set_node_field_sf_vec2d {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value[0], value[1]) };
        }
    }

    pub fn set_node_field_sf_vec3d(&self, node_name: &str, field_name: &str, value: [f64; 3]) {
        if let Some(pfn) = self.table.set_node_field_sf_vec3d {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value[0], value[1], value[2]) };
        }
    }

    pub fn set_node_field_sf_vec4d(&self, node_name: &str, field_name: &str, value: [f64; 4]) {
        if let Some(pfn) = self.table.set_node_field_sf_vec4d {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value[0], value[1], value[2], value[3]) };
        }
    }

    /// 旋转字段：旋转轴 + 弧度角
    pub fn set_node_field_sf_rotation(&self, node_name: &str, field_name: &str, axis: [f32; 3], rotation: f32) {
        if let Some(pfn) = self.table.set_node_field_sf_rotation {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), axis[0], axis[1], axis[2], rotation) };
        }
    }

    pub fn set_node_field_sf_string(&self, node_name: &str, field_name: &str, value: &str) {
        if let Some(pfn) = self.table.set_node_field_sf_string {
            let (node, field) = node_field(node_name, field_name);
            let value = to_c_string(value);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), value.as_ptr()) };
        }
    }
}

// 场景节点字段，数组值 (MF*)
//
// 数组按 count + 连续内存透传；向量字段的 count 是向量个数，
// 分量在内存中连续排列。
impl CgeEngine {
    pub fn set_node_field_mf_float(&self, node_name: &str, field_name: &str, values: &[f32]) {
        if let Some(pfn) = self.table.set_node_field_mf_float {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr()) };
        }
    }

    pub fn set_node_field_mf_double(&self, node_name: &str, field_name: &str, values: &[f64]) {
        if let Some(pfn) = self.table.set_node_field_mf_double {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr()) };
        }
    }

    pub fn set_node_field_mf_int32(&self, node_name: &str, field_name: &str, values: &[i32]) {
        if let Some(pfn) = self.table.set_node_field_mf_int32 {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr()) };
        }
    }

    pub fn set_node_field_mf_bool(&self, node_name: &str, field_name: &str, values: &[bool]) {
        if let Some(pfn) = self.table.set_node_field_mf_bool {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr()) };
        }
    }

    pub fn set_node_field_mf_vec2f(&self, node_name: &str, field_name: &str, values: &[[f32; 2]]) {
        if let Some(pfn) = self.table.set_node_field_mf_vec2f {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr().cast()) };
        }
    }

    pub fn set_node_field_mf_vec3f(&self, node_name: &str, field_name: &str, values: &[[f32; 3]]) {
        if let Some(pfn) = self.table.set_node_field_mf_vec3f {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr().cast()) };
        }
    }

    pub fn set_node_field_mf_vec4f(&self, node_name: &str, field_name: &str, values: &[[f32; 4]]) {
        if let Some(pfn) = self.table.set_node_field_mf_vec4f {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr().cast()) };
        }
    }

    pub fn set_node_field_mf_vec2d(&self, node_name: &str, field_name: &str, values: &[[f64; 2]]) {
        if let Some(pfn) = self.table.set_node_field_mf_vec2d {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr().cast()) };
        }
    }

    pub fn set_node_field_mf_vec3d(&self, node_name: &str, field_name: &str, values: &[[f64; 3]]) {
        if let Some(pfn) = self.table.set_node_field_mf_vec3d {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr().cast()) };
        }
    }

    pub fn set_node_field_mf_vec4d(&self, node_name: &str, field_name: &str, values: &[[f64; 4]]) {
        if let Some(pfn) = self.table.set_node_field_mf_vec4d {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr().cast()) };
        }
    }

    /// 旋转数组，每个元素为 (轴 x/y/z, 弧度角)
    pub fn set_node_field_mf_rotation(&self, node_name: &str, field_name: &str, values: &[[f32; 4]]) {
        if let Some(pfn) = self.table.set_node_field_mf_rotation {
            let (node, field) = node_field(node_name, field_name);
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(values.len()), values.as_ptr().cast()) };
        }
    }

    pub fn set_node_field_mf_string(&self, node_name: &str, field_name: &str, values: &[&str]) {
        if let Some(pfn) = self.table.set_node_field_mf_string {
            let (node, field) = node_field(node_name, field_name);
            let c_strings: Vec<CString> = values.iter().map(|s| to_c_string(s)).collect();
            let ptrs: Vec<*const c_char> = c_strings.iter().map(|s| s.as_ptr()).collect();
            unsafe { pfn(node.as_ptr(), field.as_ptr(), to_c_count(ptrs.len()), ptrs.as_ptr()) };
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::{CStr, c_float};
    use std::sync::Mutex;

    use super::*;
    use crate::symbol_source::RawFn;
    use crate::test_support::FakeExports;

    static VEC3F_CALLS: Mutex<Vec<(String, String, [f32; 3])>> = Mutex::new(Vec::new());
    unsafe extern "C" fn fake_sf_vec3f(
        node_name: *const c_char,
        field_name: *const c_char,
        val1: c_float,
        val2: c_float,
        val3: c_float,
    ) {
        let node = unsafe { CStr::from_ptr(node_name) }.to_string_lossy().into_owned();
        let field = unsafe { CStr::from_ptr(field_name) }.to_string_lossy().into_owned();
        VEC3F_CALLS.lock().unwrap().push((node, field, [val1, val2, val3]));
    }

    static MF_INT32_CALLS: Mutex<Vec<Vec<i32>>> = Mutex::new(Vec::new());
    unsafe extern "C" fn fake_mf_int32(
        _node_name: *const c_char,
        _field_name: *const c_char,
        count: c_int,
        values: *const c_int,
    ) {
        let values = unsafe { std::slice::from_raw_parts(values, count as usize) }.to_vec();
        MF_INT32_CALLS.lock().unwrap().push(values);
    }

    static MF_STRING_CALLS: Mutex<Vec<Vec<String>>> = Mutex::new(Vec::new());
    unsafe extern "C" fn fake_mf_string(
        _node_name: *const c_char,
        _field_name: *const c_char,
        count: c_int,
        values: *const *const c_char,
    ) {
        let ptrs = unsafe { std::slice::from_raw_parts(values, count as usize) };
        let strings = ptrs
            .iter()
            .map(|&p| unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned())
            .collect();
        MF_STRING_CALLS.lock().unwrap().push(strings);
    }

    static MF_VEC2F_CALLS: Mutex<Vec<Vec<[f32; 2]>>> = Mutex::new(Vec::new());
    unsafe extern "C" fn fake_mf_vec2f(
        _node_name: *const c_char,
        _field_name: *const c_char,
        count: c_int,
        values: *const c_float,
    ) {
        let flat = unsafe { std::slice::from_raw_parts(values, count as usize * 2) };
        let vecs = flat.chunks_exact(2).map(|c| [c[0], c[1]]).collect();
        MF_VEC2F_CALLS.lock().unwrap().push(vecs);
    }

    #[test]
    fn test_sf_vec3f_passes_names_and_components() {
        let fake = FakeExports::new().export("CGE_SetNodeFieldValue_SFVec3f", fake_sf_vec3f as RawFn);
        let mut engine = CgeEngine::new();
        unsafe { engine.load_symbols(&fake) };

        engine.set_node_field_sf_vec3f("MyMaterial", "diffuseColor", [0.5, 0.25, 1.0]);

        assert_eq!(
            VEC3F_CALLS.lock().unwrap().as_slice(),
            [("MyMaterial".to_string(), "diffuseColor".to_string(), [0.5, 0.25, 1.0])]
        );
    }

    #[test]
    fn test_mf_int32_passes_count_and_contents() {
        let fake = FakeExports::new().export("CGE_SetNodeFieldValue_MFInt32", fake_mf_int32 as RawFn);
        let mut engine = CgeEngine::new();
        unsafe { engine.load_symbols(&fake) };

        engine.set_node_field_mf_int32("MyIndex", "coordIndex", &[0, 1, 2, -1]);
        engine.set_node_field_mf_int32("MyIndex", "coordIndex", &[]);

        assert_eq!(MF_INT32_CALLS.lock().unwrap().as_slice(), [vec![0, 1, 2, -1], vec![]]);
    }

    #[test]
    fn test_mf_vec2f_count_is_vector_count() {
        let fake = FakeExports::new().export("CGE_SetNodeFieldValue_MFVec2f", fake_mf_vec2f as RawFn);
        let mut engine = CgeEngine::new();
        unsafe { engine.load_symbols(&fake) };

        engine.set_node_field_mf_vec2f("MyCoords", "point", &[[0.0, 1.0], [2.0, 3.0]]);

        assert_eq!(MF_VEC2F_CALLS.lock().unwrap().as_slice(), [vec![[0.0, 1.0], [2.0, 3.0]]]);
    }

    #[test]
    fn test_mf_string_marshals_each_element() {
        let fake = FakeExports::new().export("CGE_SetNodeFieldValue_MFString", fake_mf_string as RawFn);
        let mut engine = CgeEngine::new();
        unsafe { engine.load_symbols(&fake) };

        engine.set_node_field_mf_string("MyText", "string", &["hello", "世界"]);

        assert_eq!(
            MF_STRING_CALLS.lock().unwrap().as_slice(),
            [vec!["hello".to_string(), "世界".to_string()]]
        );
    }

    #[test]
    fn test_unresolved_field_setter_is_silent() {
        let engine = CgeEngine::new();
        // 不应该 panic，也没有任何副作用
        engine.set_node_field_sf_string("MyText", "string", "value");
        engine.set_node_field_mf_float("MyCoords", "point", &[1.0, 2.0]);
    }
}
