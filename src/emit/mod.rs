pub(crate) mod cfg;
pub(crate) mod descriptor;
