//! Scene description shared by picking and rendering.
//!
//! The scene holds three parts: the rotation-bearing globe group (the globe
//! sphere plus any pickable children), the atmosphere shell which does not
//! rotate, and the starfield backdrop.

use crate::constants::{
    ATMOSPHERE_SCALE, GLOBE_BASE_YAW, GLOBE_RADIUS, STAR_DEPTH, STAR_SPREAD,
};
use crate::pick::{self, Hits, PickParams, Ray};
use glam::{EulerRot, Mat4, Vec2, Vec3};
use rand::prelude::*;

pub type NodeId = u32;

/// Id of the globe sphere inside [`GlobeGroup`].
pub const GLOBE_NODE: NodeId = 0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Sphere { radius: f32 },
    Box { size: Vec3 },
    Points { count: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub id: NodeId,
    pub geometry: Geometry,
    /// Transform relative to the parent (group or scene root).
    pub transform: Mat4,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct GlobeGroup {
    /// Euler rotation (x = pitch, y = yaw) written by the rotation tween.
    pub rotation: Vec2,
    pub children: Vec<SceneNode>,
    next_id: NodeId,
}

impl GlobeGroup {
    pub fn new(globe_radius: f32) -> Self {
        let globe = SceneNode {
            id: GLOBE_NODE,
            geometry: Geometry::Sphere {
                radius: globe_radius,
            },
            transform: Mat4::from_rotation_y(GLOBE_BASE_YAW),
            opacity: 1.0,
        };
        Self {
            rotation: Vec2::ZERO,
            children: vec![globe],
            next_id: GLOBE_NODE + 1,
        }
    }

    pub fn add_child(&mut self, geometry: Geometry, transform: Mat4) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.children.push(SceneNode {
            id,
            geometry,
            transform,
            opacity: 1.0,
        });
        id
    }

    /// Group matrix; Euler order XYZ, no z rotation.
    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    #[inline]
    pub fn world_transform(&self, node: &SceneNode) -> Mat4 {
        self.matrix() * node.transform
    }

    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.children.iter().find(|n| n.id == id)
    }

    pub fn globe(&self) -> Option<&SceneNode> {
        self.node(GLOBE_NODE)
    }
}

#[derive(Clone, Debug)]
pub struct Starfield {
    pub positions: Vec<Vec3>,
}

impl Starfield {
    /// Scatter `count` stars in a slab behind the globe.
    ///
    /// x and y cover `[-spread/2, spread/2)`, z covers `(-depth, 0]`.
    pub fn generate(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..count)
            .map(|_| {
                let x = (rng.gen::<f32>() - 0.5) * STAR_SPREAD;
                let y = (rng.gen::<f32>() - 0.5) * STAR_SPREAD;
                let z = -rng.gen::<f32>() * STAR_DEPTH;
                Vec3::new(x, y, z)
            })
            .collect();
        Self { positions }
    }

    pub fn flat_positions(&self) -> Vec<[f32; 3]> {
        self.positions.iter().map(|p| p.to_array()).collect()
    }
}

pub struct Scene {
    pub group: GlobeGroup,
    pub atmosphere: SceneNode,
    pub stars: Starfield,
}

impl Scene {
    pub fn new(star_count: usize, star_seed: u64) -> Self {
        let scene = Self {
            group: GlobeGroup::new(GLOBE_RADIUS),
            atmosphere: SceneNode {
                id: NodeId::MAX,
                geometry: Geometry::Sphere {
                    radius: GLOBE_RADIUS,
                },
                transform: Mat4::from_scale(Vec3::splat(ATMOSPHERE_SCALE)),
                opacity: 1.0,
            },
            stars: Starfield::generate(star_count, star_seed),
        };
        log::info!(
            "[scene] globe r={:.1} atmosphere x{:.2} stars={}",
            GLOBE_RADIUS,
            ATMOSPHERE_SCALE,
            scene.stars.positions.len()
        );
        scene
    }

    /// Model matrix for the globe sphere including the group rotation.
    pub fn globe_model(&self) -> Mat4 {
        match self.group.globe() {
            Some(globe) => self.group.world_transform(globe),
            None => self.group.matrix(),
        }
    }

    /// Run the per-frame hover highlight over the group's children.
    pub fn highlight(&mut self, ray: Option<Ray>, params: &PickParams) -> Hits {
        pick::picking_pass(ray, &mut self.group, params)
    }
}
