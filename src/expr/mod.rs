pub(crate) mod anchor;
pub(crate) mod dimension;
pub(crate) mod edge;
