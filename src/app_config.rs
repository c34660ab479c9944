use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    directory: Directory,
    geocoding: Geocoding,
    routing: Routing,
    backend: Backend,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("NGO_MATCHER").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn geocoding(&self) -> &Geocoding {
        &self.geocoding
    }

    pub fn routing(&self) -> &Routing {
        &self.routing
    }

    pub fn backend(&self) -> &Backend {
        &self.backend
    }
}

#[derive(Debug, Deserialize)]
pub struct Directory {
    path: String,
}

impl Directory {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Debug, Deserialize)]
pub struct Geocoding {
    url: String,
    user_agent: String,
}

impl Geocoding {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Deserialize)]
pub struct Routing {
    url: String,
    profile: String,
    api_key: String,
}

impl Routing {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[derive(Debug, Deserialize)]
pub struct Backend {
    url: String,
}

impl Backend {
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                directory: Directory { path: "ngos.json".to_string() },
                geocoding: Geocoding {
                    url: "https://geocoding.url".to_string(),
                    user_agent: "ngo-matcher-test".to_string(),
                },
                routing: Routing {
                    url: "https://routing.url".to_string(),
                    profile: "driving-car".to_string(),
                    api_key: "key".to_string(),
                },
                backend: Backend {
                    url: "https://backend.url".to_string(),
                },
            },
        }
    }

    pub fn geocoding_url(mut self, url: String) -> Self {
        self.config.geocoding.url = url;
        self
    }

    pub fn routing_url(mut self, url: String) -> Self {
        self.config.routing.url = url;
        self
    }

    pub fn backend_url(mut self, url: String) -> Self {
        self.config.backend.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
