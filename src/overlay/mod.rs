pub(crate) mod builder;
pub(crate) mod paint;
pub(crate) mod shadow;
pub(crate) mod shape;
