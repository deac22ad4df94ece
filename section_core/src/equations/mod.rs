//! # Section Mechanics Equations
//!
//! All primitive formulas used by the section strategies live here so they
//! can be checked against references in one place.
//!
//! ## Modules
//!
//! - [`section`] - Rectangle and annulus properties, parallel-axis and centroid rules
//!
//! ## Sign Conventions
//!
//! - **Depth**: measured downward from the top face of a section
//! - **Offsets**: distances are absolute; the parallel-axis term uses d²
//!
//! ## References
//!
//! - EN 1993-1-1: Design of steel structures, general rules
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod section;

pub use section::{
    annulus_area,
    annulus_moment_of_inertia,
    annulus_plastic_modulus,
    centroid,
    elastic_modulus,
    parallel_axis,
    rectangle_first_moment_about,
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_plastic_modulus,
};
