use std::cell::RefCell;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` means there is nothing stored yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryContentProvider {
    content: RefCell<Option<String>>,
}

impl InMemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: RefCell::new(Some(content.to_string())),
        }
    }
}

impl ConfigContentProvider for InMemoryContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.content.borrow().clone())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        *self.content.borrow_mut() = Some(content.to_string());
        Ok(())
    }
}
