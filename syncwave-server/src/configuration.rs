use serde::Deserialize;
use std::fs::read_to_string;
use std::net::{Ipv4Addr, SocketAddr};
use std::num::ParseIntError;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const PORT_VARIABLE: &str = "PORT";
pub const DATABASE_URL_VARIABLE: &str = "DATABASE_URL";
pub const DATABASE_NAME_VARIABLE: &str = "DATABASE_NAME";

const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct Configuration {
	pub address: SocketAddr,
	pub log_filters: String,
	#[serde(with = "humantime_serde")]
	pub shutdown_timeout: Duration,
	pub database_url: Option<String>,
	pub database_name: Option<String>,
}

/// Connection details of the store, only available if both values are configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DatabaseConfiguration<'configuration> {
	pub url: &'configuration str,
	pub name: &'configuration str,
}

impl Default for Configuration {
	fn default() -> Self {
		Self {
			address: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
			log_filters: "info".to_owned(),
			shutdown_timeout: Duration::from_secs(5),
			database_url: None,
			database_name: None,
		}
	}
}

impl Configuration {
	/// Reads the configuration file if one was given and applies the process environment on top.
	pub fn load(path: Option<&Path>) -> Result<Configuration, ConfigurationError> {
		let configuration = match path {
			Some(path) => Configuration::from_file(path)?,
			None => Configuration::default(),
		};

		configuration.with_environment(|name| std::env::var(name).ok())
	}

	pub fn from_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
		let text = read_to_string(path)?;

		Ok(Configuration::try_from(text.as_str())?)
	}

	/// Overrides the port and database settings with the environment variables that are set.
	/// Empty variables count as unset.
	pub fn with_environment(
		mut self,
		variable: impl Fn(&str) -> Option<String>,
	) -> Result<Configuration, ConfigurationError> {
		let variable = |name: &str| variable(name).filter(|value| !value.trim().is_empty());

		if let Some(port) = variable(PORT_VARIABLE) {
			let port = port
				.trim()
				.parse()
				.map_err(|source| ConfigurationError::InvalidPort { value: port, source })?;
			self.address.set_port(port);
		}

		if let Some(database_url) = variable(DATABASE_URL_VARIABLE) {
			self.database_url = Some(database_url);
		}

		if let Some(database_name) = variable(DATABASE_NAME_VARIABLE) {
			self.database_name = Some(database_name);
		}

		Ok(self)
	}

	pub fn database(&self) -> Option<DatabaseConfiguration<'_>> {
		Some(DatabaseConfiguration {
			url: self.database_url.as_deref()?,
			name: self.database_name.as_deref()?,
		})
	}
}

impl TryFrom<&str> for Configuration {
	type Error = toml::de::Error;

	fn try_from(text: &str) -> Result<Self, Self::Error> {
		toml::from_str(text)
	}
}

#[derive(Error, Debug)]
pub enum ConfigurationError {
	#[error("Failed to deserialize with error: {0}")]
	DeserializationError(#[from] toml::de::Error),
	#[error("IO operation failed: {0}")]
	IoError(#[from] std::io::Error),
	#[error("Invalid port '{value}': {source}")]
	InvalidPort { value: String, source: ParseIntError },
}
