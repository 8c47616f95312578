pub(crate) mod compositor;
pub(crate) mod pipeline;
pub(crate) mod templates;
