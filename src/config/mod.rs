mod settings;

pub use settings::{ApiConfig, FcmConfig, ServerConfig, Settings, TokenStoreConfig};
