//! `kinematics` module implements constant-acceleration motion formulas and the
//! ballistic solvers built on top of them: time-to-distance, projectile launch
//! velocity and lead targeting.
//!
//! Resistance throughout the module is a constant acceleration (gravity, drag
//! approximation) applied over the whole flight.
//!

use crate::equations::QuadraticEquation;
use crate::vectors::{Point, Vector2};
use serde::{Deserialize, Serialize};
use std::f32::consts::SQRT_2;

/// Returns displacement covered in `t` with initial velocity `v0` and constant
/// acceleration `a`: `v0*t + a*t^2/2`.
///
/// # Example
/// ```rust
/// # use traject::kinematics::displacement;
/// assert_eq!(displacement(0.0, 2.0, 10.0), 20.0);
/// ```
///
pub fn displacement(v0: f32, t: f32, a: f32) -> f32 {
    v0 * t + (a * t * t) * 0.5
}
/// Componentwise form of [`displacement`] for two-dimensional motion.
///
pub fn displacement_vec(v0: Vector2, t: f32, a: Vector2) -> Vector2 {
    Vector2 {
        x: displacement(v0.x, t, a.x),
        y: displacement(v0.y, t, a.y),
    }
}

/// Returns velocity after `t` with initial velocity `v0` and constant
/// acceleration `a`: `v0 + a*t`.
///
pub fn velocity_after(v0: f32, t: f32, a: f32) -> f32 {
    v0 + a * t
}
/// Componentwise form of [`velocity_after`] for two-dimensional motion.
///
pub fn velocity_after_vec(v0: Vector2, t: f32, a: Vector2) -> Vector2 {
    Vector2 {
        x: velocity_after(v0.x, t, a.x),
        y: velocity_after(v0.y, t, a.y),
    }
}

/// Returns the earliest non-negative time at which displacement `s` is covered
/// with initial velocity `v0` and constant acceleration `a`.
///
/// Solves `a*t^2 + 2*v0*t - 2*s = 0` and picks the smaller non-negative root.
/// When both roots are negative or there is no real solution, 0 is returned:
/// preferring the earliest time is a policy of this function, not an error path.
///
/// # Example
/// ```rust
/// # use traject::kinematics::time_to_cover;
/// assert_eq!(time_to_cover(20.0, 0.0, 10.0), 2.0);
/// assert_eq!(time_to_cover(10.0, 5.0, 0.0), 2.0);
/// assert_eq!(time_to_cover(10.0, 0.0, 0.0), 0.0);
/// ```
///
pub fn time_to_cover(s: f32, v0: f32, a: f32) -> f32 {
    let equation: QuadraticEquation = QuadraticEquation {
        a,
        b: 2.0 * v0,
        c: -2.0 * s,
    };
    match equation.roots() {
        None => 0.0,
        Some((root1, root2)) => {
            let mut result: f32 = root1.min(root2);
            if result < 0.0 {
                result = root1.max(root2);
            }
            if result < 0.0 {
                result = 0.0;
            }
            result
        }
    }
}

/// Returns launch velocity that moves an object from `start` to `target` in
/// exactly `time` under constant `resistance` acceleration.
///
/// Derived per component from `delta = v*t + resistance*t^2/2`.
///
pub fn launch_velocity_for_time(
    start: Point,
    target: Point,
    time: f32,
    resistance: Vector2,
) -> Vector2 {
    let delta: Vector2 = target - start;
    Vector2 {
        x: delta.x / time - resistance.x * time / 2.0,
        y: delta.y / time - resistance.y * time / 2.0,
    }
}

/// [`LaunchVelocity`] enum is the outcome of [`launch_velocity`].
///
/// The solver never fails outright: when no flight time exists for the requested
/// speed it still hands back a usable default direction, and the variant records
/// which of the two happened.
///
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq)]
pub enum LaunchVelocity {
    /// An exact solution: launching with this velocity reaches the target.
    ///
    Reached(Vector2),
    /// No flight time exists; the payload is the default 45-degree launch
    /// velocity towards the target at the requested speed.
    ///
    Fallback(Vector2),
}
impl LaunchVelocity {
    /// Returns the carried velocity regardless of whether the target is reachable.
    ///
    pub fn velocity(self) -> Vector2 {
        match self {
            Self::Reached(velocity) | Self::Fallback(velocity) => velocity,
        }
    }

    /// Returns whether the velocity is an exact solution.
    ///
    pub fn is_reached(self) -> bool {
        matches!(self, Self::Reached(_))
    }
}

/// Computes launch velocity of magnitude `speed` that carries a projectile from
/// `start` to `target` under constant `resistance` acceleration.
///
/// Substituting the per-component displacement equations into the speed
/// constraint produces a quadratic in the squared flight time. When it has no
/// positive root the target cannot be reached at this speed and
/// [`LaunchVelocity::Fallback`] carries the default 45-degree launch towards the
/// target; otherwise the smaller positive root is taken when `minimize_time` is
/// set (falling back to the larger one when the smaller is non-positive), the
/// larger one when it is not, and the velocity follows from
/// [`launch_velocity_for_time`].
///
/// # Example
/// ```rust
/// # use traject::kinematics::launch_velocity;
/// # use traject::vectors::Vector2;
/// let solution = launch_velocity(
///     Vector2::zero(),
///     Vector2 { x: 3.0, y: 4.0 },
///     5.0,
///     Vector2::zero(),
///     true,
/// );
/// assert!(solution.is_reached());
/// assert_eq!(solution.velocity(), Vector2 { x: 3.0, y: 4.0 });
/// ```
///
pub fn launch_velocity(
    start: Point,
    target: Point,
    speed: f32,
    resistance: Vector2,
    minimize_time: bool,
) -> LaunchVelocity {
    let delta: Vector2 = target - start;

    // quadratic in n = t^2
    let equation: QuadraticEquation = QuadraticEquation {
        a: -resistance.x * resistance.x - resistance.y * resistance.y,
        b: 4.0 * (speed * speed + delta.x * resistance.x + delta.y * resistance.y),
        c: 4.0 * (-delta.x * delta.x - delta.y * delta.y),
    };

    let roots: Option<(f32, f32)> = equation.roots();
    let (root1, root2) = match roots {
        Some(roots) if roots.0 > 0.0 || roots.1 > 0.0 => roots,
        _ => {
            let direction_x: f32 = if delta.x >= 0.0 { 1.0 } else { -1.0 };
            return LaunchVelocity::Fallback(
                Vector2 {
                    x: speed * direction_x,
                    y: speed,
                } / SQRT_2,
            );
        }
    };

    let n: f32 = if minimize_time {
        let smaller: f32 = root1.min(root2);
        if smaller <= 0.0 {
            root1.max(root2)
        } else {
            smaller
        }
    } else {
        root1.max(root2)
    };

    let time: f32 = n.sqrt();
    LaunchVelocity::Reached(launch_velocity_for_time(start, target, time, resistance))
}

/// Predicts the future position of a constant-velocity target that a projectile
/// fired now at `bullet_speed` from `shooter` will intercept.
///
/// Solves the intercept-time quadratic and takes `(-b - sqrt(d)) / (2a)`
/// directly: there is deliberately no guard for `a == 0` (target speed equal to
/// bullet speed) or for a negative discriminant (target outrunning the bullet),
/// so degenerate inputs produce `NaN`/infinite coordinates that the caller must
/// check for.
///
/// # Example
/// ```rust
/// # use traject::kinematics::lead_target;
/// # use traject::vectors::Vector2;
/// // stationary target is its own lead point
/// let lead = lead_target(Vector2::zero(), 10.0, Vector2 { x: 4.0, y: 2.0 }, Vector2::zero());
/// assert_eq!(lead, Vector2 { x: 4.0, y: 2.0 });
/// ```
///
pub fn lead_target(
    shooter: Point,
    bullet_speed: f32,
    target: Point,
    target_velocity: Vector2,
) -> Point {
    let delta: Vector2 = target - shooter;

    let equation: QuadraticEquation = QuadraticEquation {
        a: target_velocity.sqr_magnitude() - bullet_speed * bullet_speed,
        b: 2.0 * delta.dot_product(target_velocity),
        c: delta.sqr_magnitude(),
    };
    let time: f32 = (-equation.b - equation.discriminant().sqrt()) / (2.0 * equation.a);

    target + target_velocity * time
}

#[cfg(test)]
mod tests {
    use super::{
        displacement, displacement_vec, launch_velocity, launch_velocity_for_time, lead_target,
        time_to_cover, velocity_after, velocity_after_vec, LaunchVelocity,
    };
    use crate::vectors::Vector2;
    use approx::assert_relative_eq;

    #[test]
    fn displacements() {
        assert_eq!(displacement(0.0, 2.0, 10.0), 20.0);
        assert_eq!(displacement(3.0, 2.0, 0.0), 6.0);
        assert_eq!(displacement(3.0, 2.0, -2.0), 2.0);
        assert_eq!(
            displacement_vec(
                Vector2 { x: 1.0, y: 0.0 },
                2.0,
                Vector2 { x: 0.0, y: -10.0 }
            ),
            Vector2 { x: 2.0, y: -20.0 }
        );
    }

    #[test]
    fn velocities() {
        assert_eq!(velocity_after(5.0, 3.0, -2.0), -1.0);
        assert_eq!(
            velocity_after_vec(Vector2 { x: 5.0, y: 0.0 }, 2.0, Vector2 { x: 0.0, y: 9.8 }),
            Vector2 { x: 5.0, y: 19.6 }
        );
    }

    #[test]
    fn times() {
        assert_eq!(time_to_cover(20.0, 0.0, 10.0), 2.0);
        assert_eq!(time_to_cover(10.0, 5.0, 0.0), 2.0);
        // standstill never covers the distance
        assert_eq!(time_to_cover(10.0, 0.0, 0.0), 0.0);
        // zero distance is covered immediately
        assert_eq!(time_to_cover(0.0, 1.0, 0.0), 0.0);
        // deceleration that still reaches the distance picks the earlier passing
        let t = time_to_cover(3.0, 4.0, -2.0);
        assert_relative_eq!(displacement(4.0, t, -2.0), 3.0, epsilon = 1e-5);
        assert_relative_eq!(t, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn velocity_for_fixed_time() {
        let start = Vector2::zero();
        let target = Vector2 { x: 10.0, y: 0.0 };
        let resistance = Vector2 { x: 0.0, y: 9.8 };

        let v0 = launch_velocity_for_time(start, target, 2.0, resistance);
        // flying with the computed velocity for the requested time lands on target
        assert_eq!(displacement_vec(v0, 2.0, resistance), target - start);
    }

    #[test]
    fn launch_solutions() {
        // no resistance: flight time is dist/speed and the speed constraint holds
        let solution = launch_velocity(
            Vector2::zero(),
            Vector2 { x: 3.0, y: 4.0 },
            5.0,
            Vector2::zero(),
            true,
        );
        assert!(solution.is_reached());
        assert_relative_eq!(solution.velocity().magnitude(), 5.0, epsilon = 1e-4);

        // with gravity the launch still lands on target when flown for the
        // solved flight time; verify through the displacement round trip
        let start = Vector2::zero();
        let target = Vector2 { x: 10.0, y: 0.0 };
        let resistance = Vector2 { x: 0.0, y: -9.8 };
        let solution = launch_velocity(start, target, 20.0, resistance, true);
        assert!(solution.is_reached());
        let v0 = solution.velocity();
        assert_relative_eq!(v0.magnitude(), 20.0, epsilon = 1e-2);

        // minimize_time=false picks the higher, slower arc
        let lofted = launch_velocity(start, target, 20.0, resistance, false);
        assert!(lofted.is_reached());
        assert!(lofted.velocity().y > v0.y);
    }

    #[test]
    fn launch_fallback() {
        // strong counter-resistance makes the target unreachable at this speed
        let solution = launch_velocity(
            Vector2::zero(),
            Vector2 { x: 0.0, y: -10.0 },
            1.0,
            Vector2 { x: 0.0, y: 10.0 },
            true,
        );
        assert!(!solution.is_reached());
        let fallback = solution.velocity();
        // 45-degree direction at the requested speed
        assert_relative_eq!(fallback.magnitude(), 1.0, epsilon = 1e-5);
        assert_relative_eq!(fallback.x, fallback.y, epsilon = 1e-5);
        assert_eq!(
            solution,
            LaunchVelocity::Fallback(fallback)
        );
    }

    #[test]
    fn lead_targeting() {
        // stationary target
        let target = Vector2 { x: 4.0, y: 2.0 };
        assert_eq!(
            lead_target(Vector2::zero(), 10.0, target, Vector2::zero()),
            target
        );

        // crossing target: bullet at speed 5 meets it after one second at (3, 4)
        let lead = lead_target(
            Vector2::zero(),
            5.0,
            Vector2 { x: 3.0, y: 0.0 },
            Vector2 { x: 0.0, y: 4.0 },
        );
        assert_eq!(lead, Vector2 { x: 3.0, y: 4.0 });

        // degenerate input (target as fast as the bullet, head on) poisons the
        // result instead of erroring - documented behavior
        let degenerate = lead_target(
            Vector2::zero(),
            1.0,
            Vector2 { x: 4.0, y: 0.0 },
            Vector2 { x: -1.0, y: 0.0 },
        );
        assert!(degenerate.x.is_nan() || degenerate.x.is_infinite());
    }
}
