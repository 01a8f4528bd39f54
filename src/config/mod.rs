pub(crate) mod flower;
pub(crate) mod settings;
pub(crate) mod timing;
