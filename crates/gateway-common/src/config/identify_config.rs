//! Identify configuration
//!
//! Loads the values a client sends in op 2 (Identify) from environment
//! variables and an optional `.env` file.

use gateway_model::{Identify, IdentifyProperties, Intents};
use std::env;
use std::fmt;
use std::str::FromStr;

const TOKEN: &str = "DISCORD_TOKEN";
const INTENTS: &str = "DISCORD_INTENTS";
const LARGE_THRESHOLD: &str = "DISCORD_LARGE_THRESHOLD";
const SHARD: &str = "DISCORD_SHARD";
const COMPRESS: &str = "DISCORD_COMPRESS";
const OS: &str = "DISCORD_OS";
const BROWSER: &str = "DISCORD_BROWSER";
const DEVICE: &str = "DISCORD_DEVICE";

/// Settings used to build an Identify payload
#[derive(Clone, PartialEq, Eq)]
pub struct IdentifyConfig {
    pub token: String,
    pub intents: Intents,
    pub large_threshold: Option<u8>,
    pub shard: Option<ShardConfig>,
    pub compress: Option<bool>,
    pub properties: IdentifyProperties,
}

/// Shard assignment as `(shard_id, num_shards)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShardConfig {
    pub id: u32,
    pub count: u32,
}

impl ShardConfig {
    #[must_use]
    pub fn as_array(&self) -> [u32; 2] {
        [self.id, self.count]
    }
}

impl FromStr for ShardConfig {
    type Err = ConfigError;

    /// Parses `"id,count"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidValue(SHARD, s.to_string());

        let (id, count) = s.split_once(',').ok_or_else(invalid)?;
        let id: u32 = id.trim().parse().map_err(|_| invalid())?;
        let count: u32 = count.trim().parse().map_err(|_| invalid())?;
        if count == 0 || id >= count {
            return Err(invalid());
        }

        Ok(Self { id, count })
    }
}

impl IdentifyConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if `DISCORD_TOKEN` is missing or a value is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// # Errors
    /// Returns an error if the token is missing or a value is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = IdentifyProperties::default();

        let config = Self {
            token: lookup(TOKEN)
                .filter(|token| !token.trim().is_empty())
                .ok_or(ConfigError::MissingVar(TOKEN))?,
            intents: lookup(INTENTS)
                .map(|raw| parse_intents(&raw))
                .transpose()?
                .unwrap_or_default(),
            large_threshold: lookup(LARGE_THRESHOLD)
                .map(|raw| parse_large_threshold(&raw))
                .transpose()?,
            shard: lookup(SHARD).map(|raw| raw.parse()).transpose()?,
            compress: lookup(COMPRESS)
                .map(|raw| parse_value(COMPRESS, &raw))
                .transpose()?,
            properties: IdentifyProperties {
                os: lookup(OS).unwrap_or(defaults.os),
                browser: lookup(BROWSER).unwrap_or(defaults.browser),
                device: lookup(DEVICE).unwrap_or(defaults.device),
            },
        };

        tracing::debug!(
            intents = %config.intents,
            large_threshold = ?config.large_threshold,
            shard = ?config.shard,
            compress = ?config.compress,
            "Loaded identify configuration"
        );
        if config.intents.is_privileged() {
            tracing::info!("Privileged intents requested; they must be enabled for the application");
        }

        Ok(config)
    }

    /// Build the Identify payload
    #[must_use]
    pub fn identify(&self) -> Identify {
        Identify {
            token: self.token.clone(),
            properties: self.properties.clone(),
            compress: self.compress,
            large_threshold: self.large_threshold,
            shard: self.shard.map(|shard| shard.as_array()),
            presence: None,
            intents: self.intents,
        }
    }
}

// Never print the token
impl fmt::Debug for IdentifyConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifyConfig")
            .field("token", &"<redacted>")
            .field("intents", &self.intents)
            .field("large_threshold", &self.large_threshold)
            .field("shard", &self.shard)
            .field("compress", &self.compress)
            .field("properties", &self.properties)
            .finish()
    }
}

fn parse_value<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(key, raw.to_string()))
}

fn parse_intents(raw: &str) -> Result<Intents, ConfigError> {
    let intents = Intents::from_bits_retain(parse_value(INTENTS, raw)?);
    if intents.unknown_bits() != 0 {
        tracing::warn!(
            unknown_bits = intents.unknown_bits(),
            "DISCORD_INTENTS contains bits with no known intent"
        );
    }
    Ok(intents)
}

fn parse_large_threshold(raw: &str) -> Result<u8, ConfigError> {
    let threshold: u8 = parse_value(LARGE_THRESHOLD, raw)?;
    if Identify::LARGE_THRESHOLD_RANGE.contains(&threshold) {
        Ok(threshold)
    } else {
        Err(ConfigError::InvalidValue(LARGE_THRESHOLD, raw.to_string()))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<IdentifyConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        IdentifyConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_token_is_required() {
        assert!(matches!(load(&[]), Err(ConfigError::MissingVar("DISCORD_TOKEN"))));
        assert!(matches!(
            load(&[("DISCORD_TOKEN", "  ")]),
            Err(ConfigError::MissingVar("DISCORD_TOKEN"))
        ));
    }

    #[test]
    fn test_defaults() {
        let config = load(&[("DISCORD_TOKEN", "abc")]).unwrap();
        assert_eq!(config.token, "abc");
        assert_eq!(config.intents, Intents::non_privileged());
        assert_eq!(config.large_threshold, None);
        assert_eq!(config.shard, None);
        assert_eq!(config.compress, None);
        assert_eq!(config.properties, IdentifyProperties::default());
    }

    #[test]
    fn test_full_configuration() {
        let config = load(&[
            ("DISCORD_TOKEN", "abc"),
            ("DISCORD_INTENTS", "513"),
            ("DISCORD_LARGE_THRESHOLD", "100"),
            ("DISCORD_SHARD", "1, 4"),
            ("DISCORD_COMPRESS", "false"),
            ("DISCORD_OS", "freebsd"),
            ("DISCORD_BROWSER", "bot"),
            ("DISCORD_DEVICE", "bot"),
        ])
        .unwrap();

        assert_eq!(config.intents, Intents::GUILDS | Intents::GUILD_MESSAGES);
        assert_eq!(config.large_threshold, Some(100));
        assert_eq!(config.shard, Some(ShardConfig { id: 1, count: 4 }));
        assert_eq!(config.compress, Some(false));
        assert_eq!(config.properties, IdentifyProperties::new("freebsd", "bot", "bot"));
    }

    #[test]
    fn test_large_threshold_bounds() {
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("DISCORD_LARGE_THRESHOLD", "50")]).is_ok());
        assert!(load(&[("DISCORD_TOKEN", "abc"), ("DISCORD_LARGE_THRESHOLD", "250")]).is_ok());

        for bad in ["49", "251", "1000", "many"] {
            let result = load(&[("DISCORD_TOKEN", "abc"), ("DISCORD_LARGE_THRESHOLD", bad)]);
            assert!(
                matches!(result, Err(ConfigError::InvalidValue("DISCORD_LARGE_THRESHOLD", _))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_shard_parsing() {
        assert_eq!("0,1".parse::<ShardConfig>().unwrap().as_array(), [0, 1]);
        for bad in ["1", "1,1", "2,1", "0,0", "a,b", "0;1"] {
            assert!(bad.parse::<ShardConfig>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_invalid_intents_and_compress() {
        assert!(matches!(
            load(&[("DISCORD_TOKEN", "abc"), ("DISCORD_INTENTS", "-1")]),
            Err(ConfigError::InvalidValue("DISCORD_INTENTS", _))
        ));
        assert!(matches!(
            load(&[("DISCORD_TOKEN", "abc"), ("DISCORD_COMPRESS", "yes")]),
            Err(ConfigError::InvalidValue("DISCORD_COMPRESS", _))
        ));
    }

    #[test]
    fn test_unknown_intent_bits_are_kept() {
        let config = load(&[("DISCORD_TOKEN", "abc"), ("DISCORD_INTENTS", "1073741825")]).unwrap();
        assert!(config.intents.contains(Intents::GUILDS));
        assert_eq!(config.intents.unknown_bits(), 1 << 30);
    }

    #[test]
    fn test_identify_payload() {
        let config = load(&[
            ("DISCORD_TOKEN", "abc"),
            ("DISCORD_SHARD", "0,2"),
            ("DISCORD_LARGE_THRESHOLD", "50"),
        ])
        .unwrap();

        let identify = config.identify();
        assert_eq!(identify.token, "abc");
        assert_eq!(identify.shard, Some([0, 2]));
        assert_eq!(identify.large_threshold, Some(50));
        assert_eq!(identify.presence, None);
        assert_eq!(identify.intents, config.intents);
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = load(&[("DISCORD_TOKEN", "super-secret")]).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
