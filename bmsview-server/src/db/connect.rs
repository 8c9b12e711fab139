//! Connection acquisition from an explicit [`DbConfig`]

use bmsview_core::{DataAccessError, DbConfig};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;
use tokio::time::timeout;

/// Build driver options from config. Nothing is read from the environment here.
pub fn connect_options(config: &DbConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.database)
        .username(&config.user)
        .password(&config.password)
        .application_name("bmsview");

    match &config.schema {
        Some(schema) => options.options([("search_path", schema.as_str())]),
        None => options,
    }
}

/// Open a single connection, bounded by `connect_timeout`.
///
/// # Errors
///
/// `DataAccessError::Connect` with the driver's message, or
/// `DataAccessError::Timeout` when the deadline passes first.
pub async fn connect(config: &DbConfig) -> Result<PgConnection, DataAccessError> {
    let options = connect_options(config);

    match timeout(config.connect_timeout(), PgConnection::connect_with(&options)).await {
        Ok(Ok(conn)) => Ok(conn),
        Ok(Err(e)) => Err(DataAccessError::connect(e)),
        Err(_) => Err(DataAccessError::Timeout {
            stage: "connect",
            seconds: config.connect_timeout_secs,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_follow_config() {
        let config = DbConfig {
            host: "db.internal".into(),
            port: 6543,
            database: "plant".into(),
            user: "viewer".into(),
            ..DbConfig::default()
        };

        let options = connect_options(&config);
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_database(), Some("plant"));
        assert_eq!(options.get_username(), "viewer");
    }

    #[test]
    fn schema_sets_search_path() {
        let config = DbConfig {
            schema: Some("plant".into()),
            ..DbConfig::default()
        };

        let options = connect_options(&config);
        assert!(options
            .get_options()
            .is_some_and(|opts| opts.contains("search_path=plant")));
    }

    #[tokio::test]
    async fn refused_connection_is_data_access_error() {
        // Port 1 on loopback has nothing listening
        let config = DbConfig {
            host: "127.0.0.1".into(),
            port: 1,
            connect_timeout_secs: 2,
            ..DbConfig::default()
        };

        let err = connect(&config).await.unwrap_err();
        assert!(matches!(
            err,
            DataAccessError::Connect { .. } | DataAccessError::Timeout { stage: "connect", .. }
        ));
    }
}
