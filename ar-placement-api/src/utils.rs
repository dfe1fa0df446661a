use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering::SeqCst;

static SESSION_ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

// Generates a unique identifier for any AR session handle
pub fn new_id() -> u32 {
    SESSION_ID_COUNTER.fetch_add(1, SeqCst) as u32
}

// Returns the current time in milliseconds
#[cfg(feature = "utils")]
pub fn timestamp() -> f64 {
    let timespec = time::get_time();
    timespec.sec as f64 * 1000.0 + (timespec.nsec as f64 * 1e-6)
}

// Multiply 4x4 column-major matrices: out = a * b
pub fn multiply_matrix(a: &[f32; 16], b: &[f32; 16], out: &mut [f32; 16]) {
    let mut tmp = [0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            tmp[col * 4 + row] = a[row] * b[col * 4]
                + a[4 + row] * b[col * 4 + 1]
                + a[8 + row] * b[col * 4 + 2]
                + a[12 + row] * b[col * 4 + 3];
        }
    }
    *out = tmp;
}

// Adapted from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
// `m` is indexed as m[column][row] and must hold a pure rotation.
// Branches on the largest diagonal term so half-turns keep their axis.
pub fn matrix_to_quat(m: &[[f32; 4]; 4]) -> [f32; 4] {
    let trace = m[0][0] + m[1][1] + m[2][2];

    if trace > 0.0 {
        let s = (trace + 1.0).sqrt() * 2.0;
        [(m[1][2] - m[2][1]) / s,
         (m[2][0] - m[0][2]) / s,
         (m[0][1] - m[1][0]) / s,
         0.25 * s]
    } else if m[0][0] > m[1][1] && m[0][0] > m[2][2] {
        let s = (1.0 + m[0][0] - m[1][1] - m[2][2]).sqrt() * 2.0;
        [0.25 * s,
         (m[1][0] + m[0][1]) / s,
         (m[2][0] + m[0][2]) / s,
         (m[1][2] - m[2][1]) / s]
    } else if m[1][1] > m[2][2] {
        let s = (1.0 + m[1][1] - m[0][0] - m[2][2]).sqrt() * 2.0;
        [(m[1][0] + m[0][1]) / s,
         0.25 * s,
         (m[2][1] + m[1][2]) / s,
         (m[2][0] - m[0][2]) / s]
    } else {
        let s = (1.0 + m[2][2] - m[0][0] - m[1][1]).sqrt() * 2.0;
        [(m[2][0] + m[0][2]) / s,
         (m[2][1] + m[1][2]) / s,
         0.25 * s,
         (m[0][1] - m[1][0]) / s]
    }
}

// Column-major rotation matrix for a unit quaternion [x, y, z, w]
pub fn quat_to_matrix(q: &[f32; 4]) -> [f32; 16] {
    let [x, y, z, w] = *q;
    let (x2, y2, z2) = (x + x, y + y, z + z);
    let (xx, xy, xz) = (x * x2, x * y2, x * z2);
    let (yy, yz, zz) = (y * y2, y * z2, z * z2);
    let (wx, wy, wz) = (w * x2, w * y2, w * z2);

    [1.0 - (yy + zz), xy + wz, xz - wy, 0.0,
     xy - wz, 1.0 - (xx + zz), yz + wx, 0.0,
     xz + wy, yz - wx, 1.0 - (xx + yy), 0.0,
     0.0, 0.0, 0.0, 1.0]
}

// Splits a column-major affine matrix into translation, rotation and scale.
pub fn decompose_matrix(m: &[f32; 16]) -> ([f32; 3], [f32; 4], [f32; 3]) {
    let translation = [m[12], m[13], m[14]];

    let mut scale = [
        length(m[0], m[1], m[2]),
        length(m[4], m[5], m[6]),
        length(m[8], m[9], m[10]),
    ];
    if determinant3x3(m) < 0.0 {
        scale[0] = -scale[0];
    }

    let mut rotation = [[0f32; 4]; 4];
    for col in 0..3 {
        let s = if scale[col] == 0.0 { 1.0 } else { scale[col] };
        for row in 0..3 {
            rotation[col][row] = m[col * 4 + row] / s;
        }
    }
    rotation[3][3] = 1.0;

    (translation, normalize_quat(matrix_to_quat(&rotation)), scale)
}

pub fn normalize_quat(q: [f32; 4]) -> [f32; 4] {
    let len = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
    if len == 0.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    [q[0] / len, q[1] / len, q[2] / len, q[3] / len]
}

fn determinant3x3(m: &[f32; 16]) -> f32 {
    m[0] * (m[5] * m[10] - m[9] * m[6])
    - m[4] * (m[1] * m[10] - m[9] * m[2])
    + m[8] * (m[1] * m[6] - m[5] * m[2])
}

#[inline]
fn length(x: f32, y: f32, z: f32) -> f32 {
    (x * x + y * y + z * z).sqrt()
}
