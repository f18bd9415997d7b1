//! Serialization round trips for the public value types.

use traject::equations::{LineEquation, QuadraticEquation};
use traject::intervals::Interval;
use traject::kinematics::LaunchVelocity;
use traject::rects::Rect;
use traject::vectors::Vector2;

#[test]
fn value_types_round_trip_through_json() {
    let line = LineEquation { k: 2.0, b: -1.0 };
    let json = serde_json::to_string(&line).expect("serializes");
    let back: LineEquation = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(line, back);

    let equation = QuadraticEquation {
        a: 1.0,
        b: -3.0,
        c: 2.0,
    };
    let json = serde_json::to_string(&equation).expect("serializes");
    let back: QuadraticEquation = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(equation, back);

    let rect = Rect::new(0.5, -0.5, 2.0, 4.0);
    let json = serde_json::to_string(&rect).expect("serializes");
    let back: Rect = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(rect, back);

    let interval = Interval {
        start: 3.0,
        end: 1.0,
    };
    let json = serde_json::to_string(&interval).expect("serializes");
    let back: Interval = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(interval, back);

    let solution = LaunchVelocity::Fallback(Vector2 { x: 0.7, y: 0.7 });
    let json = serde_json::to_string(&solution).expect("serializes");
    let back: LaunchVelocity = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(solution, back);
}
