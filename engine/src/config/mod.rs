mod config_content_provider;
mod config_error;
mod config_manager;
mod config_serializer;
mod engine_config;
mod validate;

pub use config_content_provider::{
    ConfigContentProvider, FileContentConfigProvider, InMemoryContentProvider,
};
pub use config_error::ConfigError;
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use engine_config::{
    DEFAULT_CONFIG_FILE, EngineConfig, LoggingConfig, SearchConfig, SessionConfig,
};
pub use validate::Validate;
