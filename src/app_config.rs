use crate::domain::Venue;
use crate::geocoding;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    geofence: Geofence,
    attendance: Attendance,
    nominatim: Nominatim,
    venue: Venue,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::with_prefix("ATTENDANCE").separator("__").try_parsing(true)),
        )
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn geofence(&self) -> &Geofence {
        &self.geofence
    }

    pub fn attendance(&self) -> &Attendance {
        &self.attendance
    }

    pub fn nominatim(&self) -> &Nominatim {
        &self.nominatim
    }

    pub fn default_venue(&self) -> &Venue {
        &self.venue
    }
}

#[derive(Debug, Deserialize)]
pub struct Geofence {
    radius_m: f64,
}

impl Geofence {
    pub fn radius_m(&self) -> f64 {
        self.radius_m
    }
}

#[derive(Debug, Deserialize)]
pub struct Attendance {
    base_url: String,
}

impl Attendance {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[derive(Debug, Deserialize)]
pub struct Nominatim {
    url: String,
    user_agent: String,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    retry_ms: u64,
    #[serde(with = "humantime_serde")]
    retry_max_delay: Duration,
    max_retries: usize,
}

impl Nominatim {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn retry_ms(&self) -> u64 {
        self.retry_ms
    }

    pub fn retry_max_delay(&self) -> Duration {
        self.retry_max_delay
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}

impl From<&Nominatim> for geocoding::Config {
    fn from(nominatim: &Nominatim) -> Self {
        geocoding::Config {
            url: nominatim.url.clone(),
            user_agent: nominatim.user_agent.clone(),
            timeout: nominatim.timeout,
            retry_ms: nominatim.retry_ms,
            retry_max_delay: nominatim.retry_max_delay,
            max_retries: nominatim.max_retries,
        }
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
                geofence: Geofence { radius_m: 60.0 },
                attendance: Attendance {
                    base_url: "https://attendance.test".to_string(),
                },
                nominatim: Nominatim {
                    url: "https://nominatim.test".to_string(),
                    user_agent: "attendance-gate-test".to_string(),
                    timeout: Duration::from_secs(1),
                    retry_ms: 1,
                    retry_max_delay: Duration::from_millis(5),
                    max_retries: 0,
                },
                venue: Venue::default_venue(),
            },
        }
    }

    pub fn nominatim_url(mut self, url: String) -> Self {
        self.config.nominatim.url = url;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
