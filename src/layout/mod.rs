pub(crate) mod config;
pub(crate) mod geometry;
pub(crate) mod grid;
pub(crate) mod keycodes;
