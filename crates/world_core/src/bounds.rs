//! Axis-aligned boxes for pickup sweeps.

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[must_use]
    pub fn from_center_half(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_faces_count_as_overlap() {
        let a = Aabb::from_center_half(Vec3::ZERO, Vec3::splat(0.5));
        let b = Aabb::from_center_half(Vec3::new(1.0, 0.0, 0.0), Vec3::splat(0.5));
        assert!(a.overlaps(&b));
        let c = Aabb::from_center_half(Vec3::new(1.01, 0.0, 0.0), Vec3::splat(0.5));
        assert!(!a.overlaps(&c));
    }
}
