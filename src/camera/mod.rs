//! Camera Module
//!
//! The third-person follow camera. Window-system agnostic: mouse deltas come
//! in, a camera pose comes out.

pub mod follow;

pub use follow::FollowCamera;
