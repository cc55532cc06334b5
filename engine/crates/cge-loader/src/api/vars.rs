use cge_ffi::EngineVariable;

use crate::engine::CgeEngine;

// 引擎整型变量
//
// 布尔型开关也走这组接口，0/1 表示关/开。
impl CgeEngine {
    pub fn set_variable_int(&self, var: EngineVariable, value: i32) {
        if let Some(pfn) = self.table.set_variable_int {
            unsafe { pfn(var as i32, value) };
        }
    }

    /// 读取变量值，未加载时为 -1
    pub fn variable_int(&self, var: EngineVariable) -> i32 {
        match self.table.get_variable_int {
            Some(pfn) => unsafe { pfn(var as i32) },
            None => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::c_int;
    use std::sync::Mutex;

    use super::*;
    use crate::symbol_source::RawFn;
    use crate::test_support::FakeExports;

    static VARS: Mutex<Vec<(i32, i32)>> = Mutex::new(Vec::new());
    unsafe extern "C" fn fake_set_variable(var: c_int, value: c_int) {
        VARS.lock().unwrap().push((var, value));
    }

    unsafe extern "C" fn fake_get_variable(var: c_int) -> c_int {
        if var == EngineVariable::MouseLook as c_int { 1 } else { 0 }
    }

    #[test]
    fn test_variable_round_trip() {
        let fake = FakeExports::new()
            .export("CGE_SetVariableInt", fake_set_variable as RawFn)
            .export("CGE_GetVariableInt", fake_get_variable as RawFn);
        let mut engine = CgeEngine::new();
        unsafe { engine.load_symbols(&fake) };

        engine.set_variable_int(EngineVariable::MouseLook, 1);
        assert_eq!(VARS.lock().unwrap().as_slice(), [(EngineVariable::MouseLook as i32, 1)]);

        assert_eq!(engine.variable_int(EngineVariable::MouseLook), 1);
        assert_eq!(engine.variable_int(EngineVariable::Headlight), 0);
    }

    #[test]
    fn test_unresolved_variable_reads_minus_one() {
        let engine = CgeEngine::new();
        assert_eq!(engine.variable_int(EngineVariable::ScenePaused), -1);
    }
}
