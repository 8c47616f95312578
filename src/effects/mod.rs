pub(crate) mod blur;
pub(crate) mod color;
pub(crate) mod composite;
