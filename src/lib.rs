//! polysweep - Generate boustrophedon survey missions from a polygon area

pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod geometry;
pub mod mission;
