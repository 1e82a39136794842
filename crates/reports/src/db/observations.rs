use async_trait::async_trait;
use log::{debug, info};
use regex::Regex;
use scooby::postgres::{select, Aliasable, Parameters};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions},
    Sqlite,
};
use std::{borrow::Cow, str::FromStr, sync::LazyLock, time::Duration};

use super::{ClimateDay, ClimateVariable, Error, MonthlyPrecip, ReportData, Station};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+)").expect("placeholder pattern is valid"));

/// Observation archive stored in SQLite: `stations`, one `summary_<year>`
/// table per year and the `climate` table.
pub struct ObservationDb {
    pool: SqlitePool,
}

impl ObservationDb {
    /// Opens a read-only pool on the database file at `path`
    pub async fn open(path: &str) -> Result<Self, Error> {
        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path))?
            .read_only(true)
            .pragma("busy_timeout", "5000");

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        info!("observation database opened read-only at: {}", path);
        Ok(Self { pool })
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Each query holds its own pooled connection, returned to the pool on drop
    async fn connection(&self) -> Result<PoolConnection<Sqlite>, Error> {
        Ok(self.pool.acquire().await?)
    }

    async fn year_table_exists(conn: &mut PoolConnection<Sqlite>, table: &str) -> Result<bool, Error> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
        )
        .bind(table)
        .fetch_one(&mut **conn)
        .await?;
        Ok(count > 0)
    }
}

/// scooby emits postgres style `$n` placeholders, SQLite wants `?n`
fn sqlite_placeholders(sql: &str) -> Cow<'_, str> {
    PLACEHOLDER.replace_all(sql, "?$1")
}

pub fn summary_table(year: i32) -> String {
    format!("summary_{}", year)
}

fn monthly_precip_query(table: &str) -> String {
    let mut placeholders = Parameters::new();
    select((
        "t.id".as_("station_id"),
        "CAST(strftime('%m', s.day) AS INTEGER)".as_("month"),
        "CAST(SUM(s.pday) AS REAL)".as_("precip"),
    ))
    .from(format!(
        "{} s JOIN stations t ON (t.iemid = s.iemid)",
        table
    ))
    .where_(format!("t.network = {}", placeholders.next_n(1)))
    .where_("s.pday >= 0")
    .group_by(("station_id", "month"))
    .to_string()
}

#[async_trait]
impl ReportData for ObservationDb {
    async fn monthly_precip(&self, year: i32, network: &str) -> Result<Vec<MonthlyPrecip>, Error> {
        let table = summary_table(year);
        let mut conn = self.connection().await?;
        if !Self::year_table_exists(&mut conn, &table).await? {
            return Err(Error::NoDataForYear(year));
        }

        let query = monthly_precip_query(&table);
        let query = sqlite_placeholders(&query);
        debug!("monthly precip query: {}", query);

        let rows: Vec<(String, i64, f64)> = sqlx::query_as(&query)
            .bind(network)
            .fetch_all(&mut *conn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(station_id, month, precip)| MonthlyPrecip {
                station_id,
                month: u32::try_from(month).unwrap_or_default(),
                precip,
            })
            .collect())
    }

    async fn network_stations(&self, network: &str) -> Result<Vec<Station>, Error> {
        let mut conn = self.connection().await?;
        let rows: Vec<(String, Option<String>, String, Option<String>)> = sqlx::query_as(
            "SELECT id, name, network, state FROM stations WHERE network = ?1 ORDER BY id ASC",
        )
        .bind(network)
        .fetch_all(&mut *conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(station_id, name, network, state)| Station {
                station_id,
                name: name.unwrap_or_default(),
                network,
                state: state.unwrap_or_default(),
            })
            .collect())
    }

    async fn daily_climate(
        &self,
        station_id: &str,
        variable: ClimateVariable,
    ) -> Result<Vec<ClimateDay>, Error> {
        let column = variable.column();
        let query = format!(
            "SELECT valid, max_{column} AS max_value, min_{column} AS min_value, \
             {column} AS avg_value, years FROM climate \
             WHERE station = ?1 ORDER BY valid ASC"
        );

        let mut conn = self.connection().await?;
        let rows: Vec<(String, Option<f64>, Option<f64>, Option<f64>, Option<i64>)> =
            sqlx::query_as(&query)
                .bind(station_id)
                .fetch_all(&mut *conn)
                .await?;

        Ok(rows
            .into_iter()
            .map(|(valid, max, min, avg, years)| ClimateDay {
                valid,
                max,
                min,
                avg,
                years,
            })
            .collect())
    }
}
