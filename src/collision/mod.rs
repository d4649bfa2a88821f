pub mod aabb;
pub mod detection;
pub mod manifold;
pub mod resolution;

// Re-export key types
pub use aabb::AABB;
pub use detection::{check_ball_ball, find_capturing_hole, FALLBACK_NORMAL};
pub use manifold::CollisionManifold;
pub use resolution::{resolve_ball_collision, resolve_cushion, CushionHit, Resolution};
