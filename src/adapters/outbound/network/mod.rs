mod sca_client;

pub use sca_client::ScaClient;
