use crate::rigid_body::Vec2;

/// Penetration between a circle and an obstacle.
/// `normal` points from the obstacle toward the circle centre.
#[derive(Clone, Copy, Debug)]
pub(super) struct Contact {
    pub normal: Vec2,
    pub depth: f32,
}

pub(super) fn circle_vs_box(center: Vec2, radius: f32, box_center: Vec2, half_w: f32, half_h: f32) -> Option<Contact> {
    let min = box_center - Vec2::new(half_w, half_h);
    let max = box_center + Vec2::new(half_w, half_h);

    let closest = Vec2::new(center.x.clamp(min.x, max.x), center.y.clamp(min.y, max.y));
    let d = center - closest;
    let dist2 = d.length_squared();

    if dist2 > radius * radius {
        return None;
    }

    if dist2 > 1e-8 {
        let dist = dist2.sqrt();
        return Some(Contact { normal: d * (1.0 / dist), depth: radius - dist });
    }

    // Centre inside the box: push out through the nearest face.
    let faces = [
        (center.x - min.x, Vec2::new(-1.0, 0.0)),
        (max.x - center.x, Vec2::new(1.0, 0.0)),
        (center.y - min.y, Vec2::new(0.0, -1.0)),
        (max.y - center.y, Vec2::new(0.0, 1.0)),
    ];
    let (gap, normal) = faces
        .iter()
        .copied()
        .fold((f32::INFINITY, Vec2::zero()), |best, f| if f.0 < best.0 { f } else { best });

    Some(Contact { normal, depth: gap + radius })
}

/// Contact of circle `a` against circle `b`; the normal points from b to a.
pub(super) fn circle_vs_circle(a: Vec2, ra: f32, b: Vec2, rb: f32) -> Option<Contact> {
    let d = a - b;
    let dist2 = d.length_squared();
    let reach = ra + rb;
    if dist2 >= reach * reach {
        return None;
    }

    let dist = dist2.sqrt();
    let normal = if dist > 1e-4 { d * (1.0 / dist) } else { Vec2::new(0.0, -1.0) };
    Some(Contact { normal, depth: reach - dist })
}

/// Reflect the approaching part of `velocity` off a surface with `normal`.
pub(super) fn bounce(velocity: Vec2, normal: Vec2, restitution: f32, friction: f32) -> Vec2 {
    let vn = velocity.dot(normal);
    if vn >= 0.0 {
        return velocity;
    }
    let normal_part = normal * vn;
    let tangent = velocity - normal_part;
    tangent * (1.0 - friction) - normal_part * restitution
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_resting_on_box_top_gets_upward_normal() {
        let c = circle_vs_box(Vec2::new(0.0, -9.0), 2.0, Vec2::zero(), 50.0, 10.0).unwrap();
        assert!((c.normal.y + 1.0).abs() < 1e-5);
        assert!((c.depth - 3.0).abs() < 1e-5);
    }

    #[test]
    fn circle_clear_of_box_has_no_contact() {
        assert!(circle_vs_box(Vec2::new(0.0, -20.0), 2.0, Vec2::zero(), 50.0, 10.0).is_none());
    }

    #[test]
    fn buried_circle_exits_through_nearest_face() {
        let c = circle_vs_box(Vec2::new(48.0, 0.0), 1.0, Vec2::zero(), 50.0, 10.0).unwrap();
        assert_eq!(c.normal, Vec2::new(1.0, 0.0));
        assert!((c.depth - 3.0).abs() < 1e-5);
    }

    #[test]
    fn bounce_flips_and_damps_normal_component() {
        let v = bounce(Vec2::new(4.0, 10.0), Vec2::new(0.0, -1.0), 0.5, 0.25);
        assert!((v.y + 5.0).abs() < 1e-5);
        assert!((v.x - 3.0).abs() < 1e-5);
    }

    #[test]
    fn bounce_ignores_separating_velocity() {
        let v = Vec2::new(1.0, -3.0);
        assert_eq!(bounce(v, Vec2::new(0.0, -1.0), 0.5, 0.5), v);
    }

    #[test]
    fn overlapping_circles_report_depth() {
        let c = circle_vs_circle(Vec2::new(3.0, 0.0), 2.0, Vec2::zero(), 2.0).unwrap();
        assert_eq!(c.normal, Vec2::new(1.0, 0.0));
        assert!((c.depth - 1.0).abs() < 1e-5);
    }
}
