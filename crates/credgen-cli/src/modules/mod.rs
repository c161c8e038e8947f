pub(crate) mod credentials;
pub(crate) mod shared;
pub(crate) mod system;
