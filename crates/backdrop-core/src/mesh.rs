//! Static wireframe meshes.

/// Vertices and line-list indices of a regular icosahedron of the given
/// circumradius (no subdivision).
pub fn icosahedron_wireframe(radius: f32) -> (Vec<[f32; 3]>, Vec<u32>) {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    let raw: [[f32; 3]; 12] = [
        [-1.0, t, 0.0],
        [1.0, t, 0.0],
        [-1.0, -t, 0.0],
        [1.0, -t, 0.0],
        [0.0, -1.0, t],
        [0.0, 1.0, t],
        [0.0, -1.0, -t],
        [0.0, 1.0, -t],
        [t, 0.0, -1.0],
        [t, 0.0, 1.0],
        [-t, 0.0, -1.0],
        [-t, 0.0, 1.0],
    ];
    let scale = radius / (1.0 + t * t).sqrt();
    let vertices = raw
        .iter()
        .map(|v| [v[0] * scale, v[1] * scale, v[2] * scale])
        .collect::<Vec<_>>();

    // Two vertices share an edge exactly when they sit at the shortest
    // distance (2 in unscaled units) from each other.
    let mut indices = Vec::with_capacity(60);
    for i in 0..raw.len() {
        for j in (i + 1)..raw.len() {
            let d2: f32 = (0..3).map(|k| (raw[i][k] - raw[j][k]).powi(2)).sum();
            if (d2 - 4.0).abs() < 1e-3 {
                indices.push(i as u32);
                indices.push(j as u32);
            }
        }
    }
    (vertices, indices)
}
