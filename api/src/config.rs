use std::env;

use chrono::NaiveDate;

use crate::domain::entities::{parse_date, StationId};
use crate::error::ConfigError;

const DEFAULT_DATABASE_URL: &str = "sqlite://hawaii.sqlite?mode=ro";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Pins the latest known date instead of reading MAX(date) from the store
    pub latest_date: Option<NaiveDate>,
    /// Pins the most active station instead of counting observations
    pub most_active_station: Option<StationId>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                    var: "PORT",
                    value: value.clone(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_PORT,
        };

        let latest_date = match lookup("LATEST_DATE").filter(|v| !v.is_empty()) {
            Some(value) => Some(parse_date(&value).ok_or_else(|| ConfigError::InvalidValue {
                var: "LATEST_DATE",
                value: value.clone(),
                reason: "expected YYYY-MM-DD".to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port,
            latest_date,
            most_active_station: lookup("MOST_ACTIVE_STATION")
                .filter(|v| !v.is_empty())
                .map(StationId::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.port, 8080);
        assert!(config.latest_date.is_none());
        assert!(config.most_active_station.is_none());
    }

    #[test]
    fn reads_all_values() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://climate@localhost/hawaii"),
            ("PORT", "5000"),
            ("LATEST_DATE", "2017-08-23"),
            ("MOST_ACTIVE_STATION", "USC00519281"),
        ])
        .unwrap();

        assert_eq!(config.database_url, "postgres://climate@localhost/hawaii");
        assert_eq!(config.port, 5000);
        assert_eq!(config.latest_date, NaiveDate::from_ymd_opt(2017, 8, 23));
        assert_eq!(
            config.most_active_station,
            Some(StationId::from("USC00519281"))
        );
    }

    #[test]
    fn empty_pins_are_ignored() {
        let config = config_from(&[("LATEST_DATE", ""), ("MOST_ACTIVE_STATION", "")]).unwrap();
        assert!(config.latest_date.is_none());
        assert!(config.most_active_station.is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        let err = config_from(&[("PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn invalid_latest_date_is_rejected() {
        let err = config_from(&[("LATEST_DATE", "08/23/2017")]).unwrap_err();
        assert!(err.to_string().contains("LATEST_DATE"));
    }
}
