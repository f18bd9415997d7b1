//! Property tests for the analytic geometry and kinematics surface.

use proptest::prelude::*;

use traject::equations::{LineEquation, QuadraticEquation};
use traject::intervals::Interval;
use traject::kinematics::{displacement, time_to_cover};
use traject::rects::Rect;
use traject::vectors::Point;

/// Transliteration of the four-branch corner analysis that [`Rect::spanning`]
/// replaces with componentwise min/max. Kept here to prove the two agree on
/// every orientation.
fn four_branch_rect(first: Point, second: Point) -> Rect {
    if first.x <= second.x && first.y >= second.y {
        Rect::new(first.x, second.y, second.x - first.x, first.y - second.y)
    } else if first.x > second.x && first.y >= second.y {
        Rect::new(second.x, second.y, first.x - second.x, first.y - second.y)
    } else if first.x > second.x && first.y < second.y {
        Rect::new(second.x, first.y, first.x - second.x, second.y - first.y)
    } else {
        Rect::new(first.x, first.y, second.x - first.x, second.y - first.y)
    }
}

proptest! {
    #[test]
    fn degenerate_quadratic_has_no_roots(c in -100.0_f32..100.0) {
        let equation = QuadraticEquation { a: 0.0, b: 0.0, c };
        prop_assert!(equation.roots().is_none());
    }

    #[test]
    fn quadratic_roots_satisfy_equation(
        a in -100.0_f32..100.0,
        b in -100.0_f32..100.0,
        c in -100.0_f32..100.0,
    ) {
        prop_assume!(a.abs() > 0.1);
        prop_assume!(b * b - 4.0 * a * c > 0.01);

        let equation = QuadraticEquation { a, b, c };
        let (root1, root2) = equation.roots().expect("positive discriminant");

        prop_assert!(root1 <= root2);
        for root in [root1, root2] {
            // the |b|-scaled term absorbs the cancellation error of roots close
            // to a repeated one
            let tolerance = 1e-3
                * ((a * root * root).abs() + b.abs() * (root.abs() + 1.0) + c.abs() + 1.0);
            prop_assert!(equation.eval(root).abs() <= tolerance);
        }
    }

    #[test]
    fn line_is_vertical_iff_equal_x(
        x1 in -100.0_f32..100.0,
        x2 in -100.0_f32..100.0,
        y1 in -100.0_f32..100.0,
        y2 in -100.0_f32..100.0,
    ) {
        let line = LineEquation::through(Point { x: x1, y: y1 }, Point { x: x2, y: y2 });
        if x1 == x2 {
            prop_assert!(line.is_vertical());
            prop_assert_eq!(line.b, x1);
        } else {
            prop_assert!(line.k.is_finite());
        }
    }

    #[test]
    fn closest_point_of_point_on_line_is_itself(
        k in -10.0_f32..10.0,
        b in -50.0_f32..50.0,
        x in -50.0_f32..50.0,
    ) {
        prop_assume!(k.abs() > 0.01);

        let line = LineEquation { k, b };
        let on_line = Point { x, y: line.y_at(x) };
        let closest = line.closest_point_to(on_line);

        prop_assert!((closest - on_line).magnitude() <= 0.05);
    }

    #[test]
    fn overlap_width_is_symmetric_and_non_negative(
        a_start in -100.0_f32..100.0,
        a_end in -100.0_f32..100.0,
        b_start in -100.0_f32..100.0,
        b_end in -100.0_f32..100.0,
    ) {
        let a = Interval { start: a_start, end: a_end };
        let b = Interval { start: b_start, end: b_end };

        prop_assert_eq!(a.overlap_width(b), b.overlap_width(a));
        prop_assert!(a.overlap_width(b) >= 0.0);
        prop_assert_eq!(a.overlaps(b), b.overlaps(a));
    }

    #[test]
    fn spanning_matches_four_branch_normalization(
        fx in -100.0_f32..100.0,
        fy in -100.0_f32..100.0,
        sx in -100.0_f32..100.0,
        sy in -100.0_f32..100.0,
        px in -150.0_f32..150.0,
        py in -150.0_f32..150.0,
    ) {
        let first = Point { x: fx, y: fy };
        let second = Point { x: sx, y: sy };

        let spanned = Rect::spanning(first, second);
        let branched = four_branch_rect(first, second);
        prop_assert_eq!(spanned, branched);

        // containment agrees as well
        let point = Point { x: px, y: py };
        prop_assert_eq!(
            spanned.contains_point(point),
            branched.contains_point(point)
        );
    }

    #[test]
    fn time_to_cover_covers_the_distance(
        s in 0.1_f32..100.0,
        v0 in 0.1_f32..50.0,
        a in 0.1_f32..50.0,
    ) {
        let t = time_to_cover(s, v0, a);
        prop_assert!(t > 0.0);

        let covered = displacement(v0, t, a);
        let tolerance = 1e-3 * (s + v0 + a + 1.0);
        prop_assert!((covered - s).abs() <= tolerance);
    }
}
