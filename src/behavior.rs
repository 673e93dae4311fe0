//! Built-in position update rules and the name lookup that selects them.

use crate::math::Vector3;

/// Forward speed along +z, in units per time unit.
pub const FORWARD_SPEED: f32 = 4.0;
/// Angular speed around the y axis, in radians per time unit.
pub const ORBIT_ANGULAR_SPEED: f32 = 1.2;
/// Smallest radius an orbiting entity is placed at.
pub const MIN_ORBIT_RADIUS: f32 = 0.001;

/// Closed set of update rules an entity can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    MoveForward,
    OrbitY,
    /// Fallback for names nothing is registered under.
    Identity,
}

impl Behavior {
    /// Resolves a behavior name. Matching is exact and case-sensitive; the
    /// host engine's script class names are accepted as aliases.
    pub fn resolve(name: &str) -> Self {
        match name {
            "MoveForward" | "MoveForwardScript" => Behavior::MoveForward,
            "OrbitY" | "OrbitYScript" => Behavior::OrbitY,
            _ => Behavior::Identity,
        }
    }

    /// Computes the position after one step of `dt`.
    pub fn apply(self, position: Vector3, dt: f32) -> Vector3 {
        match self {
            Behavior::MoveForward => move_forward(position, dt),
            Behavior::OrbitY => orbit_y(position, dt),
            Behavior::Identity => position,
        }
    }
}

fn move_forward(position: Vector3, dt: f32) -> Vector3 {
    Vector3 {
        z: position.z + FORWARD_SPEED * dt,
        ..position
    }
}

fn orbit_y(position: Vector3, dt: f32) -> Vector3 {
    let radius = position.horizontal_length().max(MIN_ORBIT_RADIUS);
    let angle = position.z.atan2(position.x) + ORBIT_ANGULAR_SPEED * dt;
    Vector3 {
        x: angle.cos() * radius,
        y: position.y,
        z: angle.sin() * radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn resolve_is_case_sensitive() {
        assert_eq!(Behavior::resolve("MoveForward"), Behavior::MoveForward);
        assert_eq!(Behavior::resolve("moveforward"), Behavior::Identity);
        assert_eq!(Behavior::resolve("OrbitY"), Behavior::OrbitY);
        assert_eq!(Behavior::resolve("ORBITY"), Behavior::Identity);
        assert_eq!(Behavior::resolve(""), Behavior::Identity);
    }

    #[test]
    fn resolve_accepts_script_class_names() {
        assert_eq!(Behavior::resolve("MoveForwardScript"), Behavior::MoveForward);
        assert_eq!(Behavior::resolve("OrbitYScript"), Behavior::OrbitY);
    }

    #[test]
    fn move_forward_only_changes_z() {
        let moved = Behavior::MoveForward.apply(Vector3::new(1.5, -2.0, 3.0), 0.25);
        assert_eq!(moved, Vector3::new(1.5, -2.0, 4.0));
    }

    #[test]
    fn orbit_rotates_about_y() {
        let rotated = Behavior::OrbitY.apply(Vector3::new(1.0, 7.0, 0.0), 0.5);
        assert_eq!(rotated.y, 7.0);
        assert_relative_eq!(rotated.x, 0.6_f32.cos(), epsilon = 1e-6);
        assert_relative_eq!(rotated.z, 0.6_f32.sin(), epsilon = 1e-6);
    }

    #[test]
    fn orbit_snaps_tiny_radius_outward() {
        let rotated = Behavior::OrbitY.apply(Vector3::new(0.0, 2.0, 0.0), 0.1);
        assert_eq!(rotated.y, 2.0);
        assert_relative_eq!(rotated.horizontal_length(), MIN_ORBIT_RADIUS, epsilon = 1e-7);
    }

    #[test]
    fn identity_returns_input() {
        let p = Vector3::new(-3.25, 0.5, 9.0);
        assert_eq!(Behavior::Identity.apply(p, 10.0), p);
    }

    #[test]
    fn zero_step_keeps_forward_position() {
        let p = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Behavior::MoveForward.apply(p, 0.0), p);
    }
}
