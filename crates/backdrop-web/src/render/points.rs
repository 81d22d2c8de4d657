use super::helpers;
use backdrop_core::{ParticleField, PARTICLE_OPACITY};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleInstance {
    pub(crate) position: [f32; 3],
    pub(crate) color: [f32; 4],
}

// Two triangles per particle, expanded around the center in the vertex shader.
const QUAD_CORNERS: [[f32; 2]; 6] = [
    [-0.5, -0.5],
    [0.5, -0.5],
    [0.5, 0.5],
    [-0.5, -0.5],
    [0.5, 0.5],
    [-0.5, 0.5],
];

const CORNER_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![1 => Float32x3, 2 => Float32x4];

pub(crate) fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 2]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &CORNER_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ParticleInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ]
}

pub(crate) struct PointSprites {
    corners: wgpu::Buffer,
    pub(crate) instances: wgpu::Buffer,
    count: u32,
}

impl PointSprites {
    pub(crate) fn new(device: &wgpu::Device, count: usize) -> Self {
        let corners = helpers::create_init_buffer(
            device,
            "particle_corners",
            bytemuck::cast_slice(&QUAD_CORNERS),
            wgpu::BufferUsages::VERTEX,
        );
        let instances = helpers::create_array_buffer(
            device,
            "particle_instances",
            std::mem::size_of::<ParticleInstance>(),
            count,
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        );
        Self {
            corners,
            instances,
            count: count as u32,
        }
    }

    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        pass.set_vertex_buffer(0, self.corners.slice(..));
        pass.set_vertex_buffer(1, self.instances.slice(..));
        pass.draw(0..QUAD_CORNERS.len() as u32, 0..self.count);
    }
}

pub(crate) fn particle_instances(field: &ParticleField) -> Vec<ParticleInstance> {
    field
        .positions()
        .iter()
        .zip(field.colors())
        .map(|(p, c)| ParticleInstance {
            position: *p,
            color: [c[0], c[1], c[2], PARTICLE_OPACITY],
        })
        .collect()
}
