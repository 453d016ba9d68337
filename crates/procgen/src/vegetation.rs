//! Trees and flowers scattered around the airfield.
//!
//! Candidates are drawn on an integer grid and thrown away when they land on
//! the airfield. Rejected candidates are not redrawn, so a scene usually ends
//! up with fewer props than candidates. Trees and flowers use different
//! keep-out margins.

use engine_core::{AIRPORT_POSITION, GROUND_LEVEL};
use glam::Vec3;
use rand::Rng;

/// Square region around the airfield where a prop may not stand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeepOut {
    pub center_x: f32,
    pub center_z: f32,
    /// Half side length. Points exactly on the edge are kept out.
    pub margin: f32,
}

impl KeepOut {
    pub fn around_airport(margin: f32) -> Self {
        Self {
            center_x: AIRPORT_POSITION.x,
            center_z: AIRPORT_POSITION.z,
            margin,
        }
    }

    /// True when a prop at (x, z) would stand on the airfield.
    pub fn excludes(&self, x: f32, z: f32) -> bool {
        (x - self.center_x).abs() <= self.margin && (z - self.center_z).abs() <= self.margin
    }
}

/// Generation settings.
#[derive(Debug, Clone)]
pub struct VegetationConfig {
    pub tree_candidates: usize,
    pub flower_candidates: usize,
    /// Inclusive x sampling range.
    pub x_range: (i32, i32),
    /// Inclusive z sampling range.
    pub z_range: (i32, i32),
    pub tree_keep_out: KeepOut,
    pub flower_keep_out: KeepOut,
}

impl Default for VegetationConfig {
    fn default() -> Self {
        Self {
            tree_candidates: 10,
            flower_candidates: 20,
            x_range: (-50, 50),
            z_range: (-50, 100),
            tree_keep_out: KeepOut::around_airport(10.0),
            flower_keep_out: KeepOut::around_airport(15.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tree {
    pub x: i32,
    pub z: i32,
}

impl Tree {
    /// Base of the trunk, on the ground.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x as f32, GROUND_LEVEL, self.z as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flower {
    pub x: i32,
    pub z: i32,
    /// Petal colour, each channel in [0, 1).
    pub color: [f32; 3],
}

impl Flower {
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x as f32, GROUND_LEVEL, self.z as f32)
    }
}

/// All props in the scene. Immutable once generated; replaced wholesale on reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vegetation {
    pub trees: Vec<Tree>,
    pub flowers: Vec<Flower>,
}

impl Vegetation {
    /// Generate with the default layout.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        Self::generate_with(&VegetationConfig::default(), rng)
    }

    pub fn generate_with<R: Rng>(config: &VegetationConfig, rng: &mut R) -> Self {
        let (x_min, x_max) = config.x_range;
        let (z_min, z_max) = config.z_range;

        let trees: Vec<Tree> = (0..config.tree_candidates)
            .filter_map(|_| {
                let x = rng.gen_range(x_min..=x_max);
                let z = rng.gen_range(z_min..=z_max);
                (!config.tree_keep_out.excludes(x as f32, z as f32)).then_some(Tree { x, z })
            })
            .collect();

        let flowers: Vec<Flower> = (0..config.flower_candidates)
            .filter_map(|_| {
                let x = rng.gen_range(x_min..=x_max);
                let z = rng.gen_range(z_min..=z_max);
                if config.flower_keep_out.excludes(x as f32, z as f32) {
                    return None;
                }
                let color = [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()];
                Some(Flower { x, z, color })
            })
            .collect();

        log::debug!(
            "Placed {}/{} trees and {}/{} flowers",
            trees.len(),
            config.tree_candidates,
            flowers.len(),
            config.flower_candidates
        );

        Self { trees, flowers }
    }
}
