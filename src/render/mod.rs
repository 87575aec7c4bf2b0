pub(crate) mod cpu;
pub(crate) mod fonts;
pub(crate) mod raster;
pub(crate) mod style;
pub(crate) mod text;
