use crate::error::config::ConfigError;

const DEFAULT_LANGUAGES: [&str; 2] = ["en", "pt"];
const DEFAULT_REBUILD_PAGE_SIZE: usize = 100;
const DEFAULT_INDEX_BATCH_SIZE: usize = 100;

pub struct Config {
    pub database_url: String,
    pub indexer: IndexerConfig,
}

/// Settings for the autocomplete indexer.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexerConfig {
    /// Languages to maintain autocomplete tables for. A language whose table hasn't been
    /// provisioned is skipped at write time.
    pub languages: Vec<String>,
    /// Places loaded per page during a bulk rebuild.
    pub rebuild_page_size: usize,
    /// Maximum rows written per upsert statement.
    pub batch_size: usize,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            rebuild_page_size: DEFAULT_REBUILD_PAGE_SIZE,
            batch_size: DEFAULT_INDEX_BATCH_SIZE,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let indexer = IndexerConfig::from_vars(
            std::env::var("AUTOCOMPLETE_LANGUAGES").ok().as_deref(),
            std::env::var("REBUILD_PAGE_SIZE").ok().as_deref(),
            std::env::var("INDEX_BATCH_SIZE").ok().as_deref(),
        )?;

        Ok(Self {
            database_url,
            indexer,
        })
    }
}

impl IndexerConfig {
    /// Builds the indexer settings from raw environment values, falling back to defaults
    /// for unset variables.
    pub fn from_vars(
        languages: Option<&str>,
        rebuild_page_size: Option<&str>,
        batch_size: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let languages = match languages {
            None => defaults.languages,
            Some(raw) => parse_languages(raw)?,
        };

        Ok(Self {
            languages,
            rebuild_page_size: parse_size(
                "REBUILD_PAGE_SIZE",
                rebuild_page_size,
                defaults.rebuild_page_size,
            )?,
            batch_size: parse_size("INDEX_BATCH_SIZE", batch_size, defaults.batch_size)?,
        })
    }
}

fn parse_languages(raw: &str) -> Result<Vec<String>, ConfigError> {
    let mut languages: Vec<String> = Vec::new();

    for tag in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let code = entity::autocomplete::language_code(tag);
        if code.len() != 2 {
            return Err(ConfigError::InvalidEnvValue {
                var: "AUTOCOMPLETE_LANGUAGES".to_string(),
                reason: format!("'{}' is not a two-letter language code", tag),
            });
        }
        if !languages.contains(&code) {
            languages.push(code);
        }
    }

    if languages.is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: "AUTOCOMPLETE_LANGUAGES".to_string(),
            reason: "at least one language is required".to_string(),
        });
    }

    Ok(languages)
}

fn parse_size(var: &str, raw: Option<&str>, default: usize) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        }),
    }
}
