use super::helpers;
use backdrop_core::{
    icosahedron_wireframe, FloatingShape, WaveGrid, GRID_OPACITY, GRID_Y_OFFSET, SHAPE_OPACITY,
    SHAPE_RADIUS, WIRE_COLOR,
};
use glam::{Mat4, Vec3};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct WireInstance {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

impl WireInstance {
    fn new(model: Mat4, opacity: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [WIRE_COLOR[0], WIRE_COLOR[1], WIRE_COLOR[2], opacity],
        }
    }
}

const POSITION_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    1 => Float32x4,
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
];

pub(crate) fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &POSITION_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<WireInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ]
}

/// Indexed line mesh drawn once per instance.
pub(crate) struct WireMesh {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) instances: wgpu::Buffer,
    pub(crate) instance_count: u32,
}

impl WireMesh {
    pub(crate) fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.instance_count == 0 || self.index_count == 0 {
            return;
        }
        pass.set_vertex_buffer(0, self.vertices.slice(..));
        pass.set_vertex_buffer(1, self.instances.slice(..));
        pass.set_index_buffer(self.indices.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.index_count, 0, 0..self.instance_count);
    }
}

pub(crate) fn create_grid_mesh(device: &wgpu::Device, grid: &WaveGrid) -> WireMesh {
    let vertices = helpers::create_init_buffer(
        device,
        "grid_vertices",
        bytemuck::cast_slice(grid.positions()),
        wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    );
    let index_data = grid.wireframe_indices();
    let indices = helpers::create_init_buffer(
        device,
        "grid_indices",
        bytemuck::cast_slice(&index_data),
        wgpu::BufferUsages::INDEX,
    );
    let instance = WireInstance::new(
        Mat4::from_translation(Vec3::new(0.0, GRID_Y_OFFSET, 0.0)),
        GRID_OPACITY,
    );
    let instances = helpers::create_init_buffer(
        device,
        "grid_instance",
        bytemuck::bytes_of(&instance),
        wgpu::BufferUsages::VERTEX,
    );
    WireMesh {
        vertices,
        indices,
        index_count: index_data.len() as u32,
        instances,
        instance_count: 1,
    }
}

pub(crate) fn create_shape_mesh(device: &wgpu::Device, shape_count: usize) -> WireMesh {
    let (verts, index_data) = icosahedron_wireframe(SHAPE_RADIUS);
    let vertices = helpers::create_init_buffer(
        device,
        "icosahedron_vertices",
        bytemuck::cast_slice(&verts),
        wgpu::BufferUsages::VERTEX,
    );
    let indices = helpers::create_init_buffer(
        device,
        "icosahedron_indices",
        bytemuck::cast_slice(&index_data),
        wgpu::BufferUsages::INDEX,
    );
    let instances = helpers::create_array_buffer(
        device,
        "shape_instances",
        std::mem::size_of::<WireInstance>(),
        shape_count,
        wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    );
    WireMesh {
        vertices,
        indices,
        index_count: index_data.len() as u32,
        instances,
        instance_count: shape_count as u32,
    }
}

pub(crate) fn shape_instances(shapes: &[FloatingShape]) -> Vec<WireInstance> {
    shapes
        .iter()
        .map(|s| WireInstance::new(s.model_matrix(), SHAPE_OPACITY))
        .collect()
}
