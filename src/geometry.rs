/// Pyramid over a fan-triangulated rim: center of the base is vertex 0, the
/// rim runs 1..=7 and the apex sits at z = 1.
pub const VERTICES: [[f32; 3]; 9] = [
    [0.0, 0.0, 0.0],
    [0.3536, 0.3536, 0.0],
    [0.5, 0.0, 0.0],
    [0.3536, -0.3536, 0.0],
    [0.0, -0.5, 0.0],
    [-0.3536, -0.3536, 0.0],
    [-0.5, 0.0, 0.0],
    [-0.3536, 0.3536, 0.0],
    [0.0, 0.0, 1.0],
];

#[rustfmt::skip]
pub const INDICES: [u16; 42] = [
    // base
    0, 1, 2,
    0, 2, 3,
    0, 3, 4,
    0, 4, 5,
    0, 5, 6,
    0, 6, 7,
    0, 7, 1,
    // sides
    1, 8, 2,
    2, 8, 3,
    3, 8, 4,
    4, 8, 5,
    5, 8, 6,
    6, 8, 7,
    7, 8, 1,
];

/// Line list with every undirected triangle edge once, in first-seen order.
pub fn edge_indices(triangles: &[u16]) -> Vec<u16> {
    let mut edges: Vec<(u16, u16)> = Vec::new();
    triangles.chunks_exact(3).for_each(|tri| {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            if !edges.contains(&key) {
                edges.push(key);
            }
        }
    });
    edges.into_iter().flat_map(|(a, b)| [a, b]).collect()
}
