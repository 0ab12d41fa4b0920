//! Use cases - Application business operations

pub mod load_configuration;

pub use load_configuration::LoadConfigurationUseCase;
