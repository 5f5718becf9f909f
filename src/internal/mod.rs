pub(crate) mod serde;
pub(crate) mod tower;
