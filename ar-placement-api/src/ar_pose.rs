use crate::utils;

/// A rigid transform reported by the platform's surface detection.
///
/// `ArPose` is `Copy`: storing one always stores a snapshot, never a live
/// reference to whatever produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct ArPose {
    // Position in meters, relative to the session's reference space.
    pub position: [f32; 3],

    // Orientation as a unit quaternion [x, y, z, w].
    pub orientation: [f32; 4],
}

impl Default for ArPose {
    fn default() -> ArPose {
        ArPose {
            position: [0.0, 0.0, 0.0],
            orientation: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl ArPose {
    pub fn new(position: [f32; 3], orientation: [f32; 4]) -> ArPose {
        ArPose {
            position: position,
            orientation: utils::normalize_quat(orientation),
        }
    }

    pub fn from_position(position: [f32; 3]) -> ArPose {
        ArPose {
            position: position,
            ..Default::default()
        }
    }

    /// Decomposes a column-major hit matrix. Any scale baked into the
    /// matrix is discarded.
    pub fn from_matrix(matrix: &[f32; 16]) -> ArPose {
        let (position, orientation, _) = utils::decompose_matrix(matrix);
        ArPose {
            position: position,
            orientation: orientation,
        }
    }

    /// Column-major rigid transform of this pose.
    pub fn to_matrix(&self) -> [f32; 16] {
        let mut matrix = utils::quat_to_matrix(&self.orientation);
        matrix[12] = self.position[0];
        matrix[13] = self.position[1];
        matrix[14] = self.position[2];
        matrix
    }
}
