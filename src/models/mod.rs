pub mod point;
pub mod scene;
pub mod walk;

pub use point::{pt, CombineHasher, Point};
pub use scene::Scene;
pub use walk::{Walk, WalkKind};
