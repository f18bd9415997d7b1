//! Prelude module: `traject::prelude` re-exports all `traject` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use traject::prelude::*;
//! ```
//!

// re-exports
pub use crate::bezier::*;
pub use crate::equations::*;
pub use crate::floats::*;
pub use crate::intervals::*;
pub use crate::kinematics::*;
pub use crate::rects::*;
pub use crate::vectors::*;
