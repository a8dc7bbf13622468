use glam::Vec3;
use std::f32::consts::PI;

/// Interleaved vertex uploaded as-is to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Generate a UV sphere centered at the origin.
///
/// Produces `(width_segments + 1) * (height_segments + 1)` vertices: the seam
/// column is duplicated so `u` runs 0..=1 across the texture. `v` is 0 at the
/// north pole (top row of the texture). Triangles touching a pole collapse to
/// a single fan and are emitted once, counter-clockwise seen from outside.
pub fn generate_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let radius = if radius <= 0.0 {
        log::warn!("generate_sphere: radius must be > 0.0, clamping to 0.001");
        0.001
    } else {
        radius
    };
    let clamped_w = width_segments.clamp(3, 256);
    let clamped_h = height_segments.clamp(2, 256);
    if clamped_w != width_segments || clamped_h != height_segments {
        log::warn!(
            "generate_sphere: segments {}x{} clamped to {}x{}",
            width_segments,
            height_segments,
            clamped_w,
            clamped_h
        );
    }
    let (ws, hs) = (clamped_w, clamped_h);

    let mut mesh = MeshData {
        vertices: Vec::with_capacity(((ws + 1) * (hs + 1)) as usize),
        indices: Vec::with_capacity((ws * hs * 6) as usize),
    };

    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        let phi = v * PI; // 0 at +Y
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let theta = u * 2.0 * PI;
            let position = Vec3::new(
                -radius * theta.cos() * phi.sin(),
                radius * phi.cos(),
                radius * theta.sin() * phi.sin(),
            );
            mesh.vertices.push(MeshVertex {
                position: position.to_array(),
                normal: position.normalize_or_zero().to_array(),
                uv: [u, v],
            });
        }
    }

    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    mesh
}
