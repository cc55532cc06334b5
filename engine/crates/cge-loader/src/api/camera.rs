use std::ffi::{c_char, c_int};

use super::{buffer_to_string, to_c_string};
use crate::engine::CgeEngine;

/// 视点名称缓冲区大小
const NAME_BUF_SIZE: usize = 512;

/// 场景的轴对齐包围盒
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// 相机位姿：位置、朝向、上方向与重力上方向
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewCoords {
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub up: [f32; 3],
    pub gravity_up: [f32; 3],
}

// 相机与视点
impl CgeEngine {
    /// 场景中定义的视点数量，未加载时为 0
    pub fn viewpoints_count(&self) -> i32 {
        match self.table.get_viewpoints_count {
            Some(pfn) => unsafe { pfn() },
            None => 0,
        }
    }

    /// 指定视点的名称，未加载时为空字符串
    pub fn viewpoint_name(&self, viewpoint_idx: i32) -> String {
        let Some(pfn) = self.table.get_viewpoint_name else {
            return String::new();
        };
        let mut buf = vec![0u8; NAME_BUF_SIZE];
        unsafe { pfn(viewpoint_idx, buf.as_mut_ptr() as *mut c_char, buf.len() as c_int) };
        buffer_to_string(&buf)
    }

    pub fn move_to_viewpoint(&self, viewpoint_idx: i32, animated: bool) {
        if let Some(pfn) = self.table.move_to_viewpoint {
            unsafe { pfn(viewpoint_idx, animated) };
        }
    }

    /// 把当前相机位姿存为一个新视点
    pub fn add_viewpoint_from_current_view(&self, name: &str) {
        if let Some(pfn) = self.table.add_viewpoint_from_current_view {
            let name = to_c_string(name);
            unsafe { pfn(name.as_ptr()) };
        }
    }

    /// 场景包围盒，未加载时为零盒
    pub fn bounding_box(&self) -> BoundingBox {
        let Some(pfn) = self.table.get_bounding_box else {
            return BoundingBox::default();
        };
        let (mut x_min, mut x_max) = (0f32, 0f32);
        let (mut y_min, mut y_max) = (0f32, 0f32);
        let (mut z_min, mut z_max) = (0f32, 0f32);
        unsafe { pfn(&mut x_min, &mut x_max, &mut y_min, &mut y_max, &mut z_min, &mut z_max) };
        BoundingBox {
            min: [x_min, y_min, z_min],
            max: [x_max, y_max, z_max],
        }
    }

    /// 当前相机位姿，未加载时为零位姿
    pub fn view_coords(&self) -> ViewCoords {
        let Some(pfn) = self.table.get_view_coords else {
            return ViewCoords::default();
        };
        let (mut pos_x, mut pos_y, mut pos_z) = (0f32, 0f32, 0f32);
        let (mut dir_x, mut dir_y, mut dir_z) = (0f32, 0f32, 0f32);
        let (mut up_x, mut up_y, mut up_z) = (0f32, 0f32, 0f32);
        let (mut grav_x, mut grav_y, mut grav_z) = (0f32, 0f32, 0f32);
        unsafe {
            pfn(
                &mut pos_x, &mut pos_y, &mut pos_z, &mut dir_x, &mut dir_y, &mut dir_z, &mut up_x, &mut up_y,
                &mut up_z, &mut grav_x, &mut grav_y, &mut grav_z,
            )
        };
        ViewCoords {
            position: [pos_x, pos_y, pos_z],
            direction: [dir_x, dir_y, dir_z],
            up: [up_x, up_y, up_z],
            gravity_up: [grav_x, grav_y, grav_z],
        }
    }

    /// 把相机移动到给定位姿
    pub fn move_view_to_coords(&self, coords: ViewCoords, animated: bool) {
        if let Some(pfn) = self.table.move_view_to_coords {
            let ViewCoords {
                position: pos,
                direction: dir,
                up,
                gravity_up: grav,
            } = coords;
            unsafe {
                pfn(
                    pos[0], pos[1], pos[2], dir[0], dir[1], dir[2], up[0], up[1], up[2], grav[0], grav[1], grav[2],
                    animated,
                )
            };
        }
    }
}
