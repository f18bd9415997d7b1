//! # traject
//!
//! **traject** - 2d analytic geometry and ballistics toolkit for game development.
//!
//! # Model
//! `traject` implements closed-form 2d math that commonly backs game logic:
//! line and quadratic equations, segment and rectangle predicates, bezier
//! interpolation and constant-acceleration kinematics (projectile launch
//! solving and lead targeting).
//!
//! Every operation is a pure function over its explicit inputs.
//! "No real solution" is never an error: it is communicated through `Option`
//! returns, through the documented `NaN` sentinels or through fallback
//! variants, and callers are expected to check before consuming results.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate rand;

extern crate serde;

// submodules
pub mod bezier;
pub mod equations;
pub mod floats;
pub mod intervals;
pub mod kinematics;
pub mod rects;
pub mod vectors;

// prelude
pub mod prelude;
