use glam::Mat4;
use wgpu::{util::DeviceExt, Buffer, Device};

pub fn mat4_identity(device: &Device) -> Buffer {
    let mx_total = Mat4::IDENTITY;
    let mx_ref: &[f32; 16] = mx_total.as_ref();

    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Projection Matrix"),
        contents: bytemuck::cast_slice(mx_ref),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

/// Maps pixel coordinates (origin top-left, y down) to clip space.
pub fn screen_projection(width: u32, height: u32) -> Mat4 {
    Mat4::orthographic_rh(0., width as f32, height as f32, 0., -1., 1.)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    fn to_clip(projection: Mat4, x: f32, y: f32) -> Vec4 {
        projection * Vec4::new(x, y, 0., 1.)
    }

    #[test]
    fn test_screen_projection_corners() {
        let projection = screen_projection(640, 480);

        let top_left = to_clip(projection, 0., 0.);
        assert!((top_left.x + 1.).abs() < 1e-6);
        assert!((top_left.y - 1.).abs() < 1e-6);

        let bottom_right = to_clip(projection, 640., 480.);
        assert!((bottom_right.x - 1.).abs() < 1e-6);
        assert!((bottom_right.y + 1.).abs() < 1e-6);
    }
}
