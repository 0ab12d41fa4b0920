use crate::{
    config::{AppConfig, ConfigValidator, PasswordConfig},
    domain::{configuration::Configuration, properties::PropertySource, validation::FieldRegistry},
    infrastructure::adapters::FilePropertySource,
    shared::{error::AppResult, logging::LoggingUtils},
};
use tracing::info;

/// Use case for loading and validating the generator configuration
pub struct LoadConfigurationUseCase {
    source: Box<dyn PropertySource>,
    registry: FieldRegistry,
    validator: ConfigValidator,
}

impl LoadConfigurationUseCase {
    /// Create a new use case
    pub fn new(source: Box<dyn PropertySource>, registry: FieldRegistry, validator: ConfigValidator) -> Self {
        Self {
            source,
            registry,
            validator,
        }
    }

    /// Wire the file source, password schema and configured mode
    pub fn from_app_config(config: &AppConfig) -> AppResult<Self> {
        Ok(Self::new(
            Box::new(FilePropertySource::new(config.properties_path.clone())),
            FieldRegistry::password_fields()?,
            ConfigValidator::new(config.validation.mode),
        ))
    }

    /// Load the properties and validate them against the schema
    pub fn validate(&self) -> AppResult<Configuration> {
        let source = self.source.describe();
        info!(source = %source, mode = ?self.validator.mode(), "Validating configuration");

        let result = self
            .source
            .load()
            .and_then(|properties| self.validator.validate(&properties, self.registry.fields()));

        if let Err(e) = &result {
            LoggingUtils::log_validation_failure(&source, e);
        }
        result
    }

    /// Execute the use case, producing typed settings
    pub fn execute(&self) -> AppResult<PasswordConfig> {
        let configuration = self.validate()?;
        let settings = PasswordConfig::from_configuration(&configuration)?;
        LoggingUtils::log_password_config(&settings);
        Ok(settings)
    }
}
