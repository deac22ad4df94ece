//! # Materials and Catalog Profiles
//!
//! Leaf inputs to the section engine: the steel material (yield stress) and
//! rolled channel profiles from the catalog.
//!
//! ## Example
//!
//! ```rust
//! use section_core::materials::{ChannelProfile, Material, SteelGrade};
//!
//! let steel = Material::from_grade(SteelGrade::S355);
//! let upe = ChannelProfile::lookup("UPE300").unwrap();
//! println!("fy = {} MPa, A = {} mm²", steel.yield_stress_mpa, upe.area_mm2);
//! ```

pub mod channel;
pub mod steel;

pub use channel::{ChannelProfile, ChannelSize, CHANNEL_SHAPE_FACTOR_ESTIMATE};
pub use steel::{Material, SteelGrade};
