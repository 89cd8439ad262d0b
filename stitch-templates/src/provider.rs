//! Database provider targets for the generated datasource block.

use std::{fmt, str::FromStr};

/// Supported database backends for the datasource block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    PostgreSql,
    MySql,
    SqlServer,
    Sqlite,
    MongoDb,
    CockroachDb,
}

impl Provider {
    /// Every supported provider, in prompt display order.
    pub const ALL: [Provider; 6] = [
        Provider::PostgreSql,
        Provider::MySql,
        Provider::SqlServer,
        Provider::Sqlite,
        Provider::MongoDb,
        Provider::CockroachDb,
    ];

    /// Returns the provider identifier as it appears in the datasource block.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::PostgreSql => "postgresql",
            Provider::MySql => "mysql",
            Provider::SqlServer => "sqlserver",
            Provider::Sqlite => "sqlite",
            Provider::MongoDb => "mongodb",
            Provider::CockroachDb => "cockroachdb",
        }
    }
}

impl Default for Provider {
    fn default() -> Self {
        Provider::PostgreSql
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(Provider::PostgreSql),
            "mysql" => Ok(Provider::MySql),
            "sqlserver" => Ok(Provider::SqlServer),
            "sqlite" => Ok(Provider::Sqlite),
            "mongodb" => Ok(Provider::MongoDb),
            "cockroachdb" => Ok(Provider::CockroachDb),
            _ => {
                let known: Vec<&str> = Provider::ALL.iter().map(Provider::as_str).collect();
                Err(format!(
                    "unknown provider '{}', expected one of: {}",
                    s,
                    known.join(", ")
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Provider::from_str("postgresql").unwrap(), Provider::PostgreSql);
        assert_eq!(Provider::from_str("postgres").unwrap(), Provider::PostgreSql);
        assert_eq!(Provider::from_str("MongoDB").unwrap(), Provider::MongoDb);
        assert_eq!(Provider::from_str("cockroachdb").unwrap(), Provider::CockroachDb);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = Provider::from_str("oracle").unwrap_err();
        assert!(err.contains("unknown provider 'oracle'"));
        assert!(err.contains("postgresql"));
    }

    #[test]
    fn test_round_trip() {
        for provider in Provider::ALL {
            assert_eq!(Provider::from_str(provider.as_str()).unwrap(), provider);
        }
    }
}
