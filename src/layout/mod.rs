pub(crate) mod fit;
pub(crate) mod geometry;
pub(crate) mod table;
