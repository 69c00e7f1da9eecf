//! Animated particle backdrop: a layered 2D particle field with pointer
//! attraction, click shockwaves and proximity edges, drawn through a
//! host-provided [`render::Painter`].

pub mod config;
pub mod driver;
pub mod forces;
pub mod grid;
pub mod particle;
pub mod render;
pub mod simulation;
pub mod surface;
pub mod transition;
