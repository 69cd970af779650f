use core::fmt::Debug;
use nalgebra::Vector3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MotionState<T> {
    pub acceleration: T,
    pub velocity: T,
    pub position: T,
}

impl<T: Copy + PartialEq + Debug + 'static> MotionState<T> {
    /// `[position, velocity, acceleration]`
    pub fn to_vector(&self) -> Vector3<T> {
        Vector3::new(self.position, self.velocity, self.acceleration)
    }
}

/// A one-dimensional profile that can be queried at any elapsed time.
pub trait MotionProfile<T> {
    fn get_duration(&self) -> T;
    fn get(&self, t: T) -> MotionState<T>;
}
