pub mod fs_secure;
pub mod generator;
pub mod ports;
pub mod record;
pub mod secret_serde;
pub mod store;
