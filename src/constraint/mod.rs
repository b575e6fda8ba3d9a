pub(crate) mod batch;
pub(crate) mod model;
