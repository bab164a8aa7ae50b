// The 12 edge-midpoint directions of a cube.
// Only the x component is consumed by the 2D field.
pub const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

// x component of the gradient picked by a permutation value
#[inline]
pub fn gradient_x(v: u8) -> f64 {
    GRAD3[(v % 12) as usize][0]
}
