use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads a config once, validates it, and caches it for later reads.
/// A missing source yields `TConfig::default()` without caching it.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: Arc<Mutex<Option<TConfig>>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentConfigProvider::new(file_path),
            YamlConfigSerializer::new(),
        )
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(
        config_content_provider: TConfigContentProvider,
        config_serializer: TConfigSerializer,
    ) -> Self {
        Self {
            config: Arc::new(Mutex::new(None)),
            config_content_provider,
            config_serializer,
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        let config_data_result = self.config_content_provider.get_config_content()?;
        if let Some(config_data) = config_data_result {
            let config = self.config_serializer.deserialize(&config_data)?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized_config = self.config_serializer.serialize(config)?;

        self.config_content_provider
            .set_config_content(&serialized_config)?;

        let mut current = self
            .config
            .lock()
            .map_err(|_| "Config cache lock poisoned".to_string())?;
        *current = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct TestConfig {
        name: String,
        games: u32,
    }

    impl Validate for TestConfig {
        fn validate(&self) -> Result<(), String> {
            if self.games > 100 {
                return Err("Too many games".to_string());
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryContentProvider {
        content: RefCell<Option<String>>,
        reads: RefCell<usize>,
    }

    impl ConfigContentProvider for MemoryContentProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            *self.reads.borrow_mut() += 1;
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn manager_with(content: Option<&str>) -> ConfigManager<MemoryContentProvider, TestConfig> {
        let provider = MemoryContentProvider {
            content: RefCell::new(content.map(str::to_string)),
            reads: RefCell::new(0),
        };
        ConfigManager::new(provider, YamlConfigSerializer::new())
    }

    #[test]
    fn test_missing_content_returns_default() {
        let manager = manager_with(None);

        assert_eq!(manager.get_config().unwrap(), TestConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let manager = manager_with(Some("name: cached\ngames: 3\n"));

        let first = manager.get_config().unwrap();
        let second = manager.get_config().unwrap();

        assert_eq!(first, second);
        assert_eq!(first.name, "cached");
        assert_eq!(*manager.config_content_provider.reads.borrow(), 1);
    }

    #[test]
    fn test_invalid_stored_config_is_rejected() {
        let manager = manager_with(Some("name: greedy\ngames: 500\n"));

        let result = manager.get_config();

        assert!(result.unwrap_err().contains("Config validation error"));
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let manager = manager_with(Some("name: [unclosed"));

        assert!(manager.get_config().is_err());
    }

    #[test]
    fn test_set_config_writes_and_caches() {
        let manager = manager_with(None);
        let config = TestConfig {
            name: "saved".to_string(),
            games: 7,
        };

        manager.set_config(&config).unwrap();

        assert!(manager.config_content_provider.content.borrow().is_some());
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_set_config_refuses_invalid_config() {
        let manager = manager_with(None);
        let config = TestConfig {
            name: "bad".to_string(),
            games: 1000,
        };

        assert!(manager.set_config(&config).is_err());
        assert!(manager.config_content_provider.content.borrow().is_none());
    }
}
