// Runtime configuration read from the environment.
//
// Every setting has a default, so an empty environment yields a working configuration.
// Parsing goes through a key lookup so tests never have to touch the process environment.

use crate::modules::customer_records::adapters::outbound::record_store::DEFAULT_RECORD_TTL;
use crate::shell::workers::item_count_refresher::DEFAULT_ITEM_COUNT_REFRESH_INTERVAL;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const BIND_ADDR_KEY: &str = "CUSTOMER_SYNC_BIND_ADDR";
pub const TABLE_NAME_KEY: &str = "CUSTOMER_SYNC_TABLE_NAME";
pub const RECORD_TTL_SECS_KEY: &str = "CUSTOMER_SYNC_RECORD_TTL_SECS";
pub const REFRESH_INTERVAL_SECS_KEY: &str = "CUSTOMER_SYNC_REFRESH_INTERVAL_SECS";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_TABLE_NAME: &str = "customer-records";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub table_name: String,
    pub record_ttl: Duration,
    pub item_count_refresh_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            record_ttl: DEFAULT_RECORD_TTL,
            item_count_refresh_interval: DEFAULT_ITEM_COUNT_REFRESH_INTERVAL,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_KEY).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                key: BIND_ADDR_KEY,
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        let table_name = lookup(TABLE_NAME_KEY)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());

        let record_ttl = match lookup(RECORD_TTL_SECS_KEY) {
            Some(raw) => Duration::from_secs(parse_secs(RECORD_TTL_SECS_KEY, &raw)?),
            None => DEFAULT_RECORD_TTL,
        };

        let item_count_refresh_interval = match lookup(REFRESH_INTERVAL_SECS_KEY) {
            Some(raw) => match parse_secs(REFRESH_INTERVAL_SECS_KEY, &raw)? {
                0 => {
                    return Err(ConfigError::Invalid {
                        key: REFRESH_INTERVAL_SECS_KEY,
                        value: raw,
                        reason: "must be greater than zero".into(),
                    });
                }
                secs => Duration::from_secs(secs),
            },
            None => DEFAULT_ITEM_COUNT_REFRESH_INTERVAL,
        };

        Ok(Self {
            bind_addr,
            table_name,
            record_ttl,
            item_count_refresh_interval,
        })
    }
}

fn parse_secs(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.trim().parse().map_err(|e: std::num::ParseIntError| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
