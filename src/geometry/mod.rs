pub(crate) mod flower;
pub(crate) mod petals;
pub(crate) mod seeds;
