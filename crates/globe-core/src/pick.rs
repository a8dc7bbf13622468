use crate::constants::{PICK_DIM_OPACITY, PICK_FULL_OPACITY};
use crate::scene::{Geometry, GlobeGroup, NodeId};
use fnv::FnvHashSet;
use glam::{Mat4, Vec3};
use smallvec::SmallVec;
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub node: NodeId,
    /// World-space distance from the ray origin.
    pub distance: f32,
    pub point: Vec3,
}

pub type Hits = SmallVec<[Hit; 4]>;

/// Opacities written by the hover highlight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickParams {
    pub dim_opacity: f32,
    pub full_opacity: f32,
}

impl Default for PickParams {
    fn default() -> Self {
        Self {
            dim_opacity: PICK_DIM_OPACITY,
            full_opacity: PICK_FULL_OPACITY,
        }
    }
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Slab test against a box of `size` centered on the origin of `world`.
///
/// The ray is moved into the box's local frame; since the direction is
/// transformed with the same matrix, the returned parameter is still the
/// world-space distance along `ray`. A ray starting inside the box reports no
/// hit, matching front-face-only triangle picking.
pub fn ray_box(ray: &Ray, world: Mat4, size: Vec3) -> Option<f32> {
    let inv = world.inverse();
    let o = inv.transform_point3(ray.origin);
    let d = inv.transform_vector3(ray.dir);
    let half = size * 0.5;

    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;
    for axis in 0..3 {
        let (o, d, h) = (o[axis], d[axis], half[axis]);
        if d.abs() < 1e-8 {
            if o < -h || o > h {
                return None;
            }
            continue;
        }
        let inv_d = 1.0 / d;
        let (mut t0, mut t1) = ((-h - o) * inv_d, (h - o) * inv_d);
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }
        t_min = t_min.max(t0);
        t_max = t_max.min(t1);
        if t_min > t_max {
            return None;
        }
    }
    (t_min >= 0.0).then_some(t_min)
}

/// Intersect `ray` with every box child of `group`, nearest first.
///
/// The sort is stable, so boxes at equal distance keep child order.
pub fn intersect_boxes(ray: &Ray, group: &GlobeGroup) -> Hits {
    let mut hits: Hits = group
        .children
        .iter()
        .filter_map(|n| {
            let Geometry::Box { size } = n.geometry else {
                return None;
            };
            ray_box(ray, group.world_transform(n), size).map(|t| Hit {
                node: n.id,
                distance: t,
                point: ray.at(t),
            })
        })
        .collect();
    hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
    hits
}

/// Whether `ray` hits the group's globe sphere.
pub fn hits_globe(ray: &Ray, group: &GlobeGroup) -> bool {
    let Some(globe) = group.globe() else {
        return false;
    };
    let Geometry::Sphere { radius } = globe.geometry else {
        return false;
    };
    let center = group.world_transform(globe).transform_point3(Vec3::ZERO);
    ray_sphere(ray.origin, ray.dir, center, radius).is_some()
}

/// Per-frame hover highlight.
///
/// Every child of the group is dimmed, then each box the ray hits is raised
/// to full opacity. Without a ray (pointer never moved) nothing is hit.
pub fn picking_pass(ray: Option<Ray>, group: &mut GlobeGroup, params: &PickParams) -> Hits {
    let hits = match ray {
        Some(ray) => intersect_boxes(&ray, group),
        None => Hits::new(),
    };
    let hit_ids: FnvHashSet<NodeId> = hits.iter().map(|h| h.node).collect();
    for child in &mut group.children {
        child.opacity = if hit_ids.contains(&child.id) {
            params.full_opacity
        } else {
            params.dim_opacity
        };
    }
    hits
}
