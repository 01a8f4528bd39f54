pub(crate) mod controller;
pub(crate) mod name;
pub(crate) mod plan;
