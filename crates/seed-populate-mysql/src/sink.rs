//! Destinations for generated INSERT statements.

use crate::config::DbConfig;
use crate::error::SeedError;
use crate::insert::Insert;
use async_trait::async_trait;
use mysql_async::{prelude::*, Conn, OptsBuilder, Params};
use seed_generator::Table;
use std::collections::HashMap;

/// Transactional statement sink driven by the seeding pipeline.
#[async_trait]
pub trait SeedSink: Send {
    /// Execute one INSERT, returning the auto-increment id it issued, if any.
    async fn execute(&mut self, insert: &Insert) -> Result<Option<u64>, SeedError>;

    /// Commit every statement executed since the last commit.
    async fn commit(&mut self) -> Result<(), SeedError>;

    /// Discard every statement executed since the last commit.
    async fn rollback(&mut self) -> Result<(), SeedError>;
}

/// A single MySQL connection with autocommit disabled.
pub struct MySqlSession {
    conn: Conn,
}

impl MySqlSession {
    pub async fn connect(config: &DbConfig) -> Result<Self, SeedError> {
        let opts = OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .tcp_port(config.port)
            .user(Some(config.user.clone()))
            .pass(Some(config.password.clone()))
            .db_name(Some(config.database.clone()))
            .init(vec!["SET autocommit = 0"]);

        let conn = Conn::new(opts).await?;
        tracing::debug!("Connected to {}", config.masked_url());
        Ok(Self { conn })
    }

    /// Close the connection. Uncommitted statements are discarded by the server.
    pub async fn close(self) -> Result<(), SeedError> {
        self.conn.disconnect().await?;
        Ok(())
    }
}

#[async_trait]
impl SeedSink for MySqlSession {
    async fn execute(&mut self, insert: &Insert) -> Result<Option<u64>, SeedError> {
        self.conn
            .exec_drop(insert.sql(), Params::Positional(insert.params.clone()))
            .await?;
        Ok(self.conn.last_insert_id())
    }

    async fn commit(&mut self) -> Result<(), SeedError> {
        self.conn.query_drop("COMMIT").await?;
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), SeedError> {
        self.conn.query_drop("ROLLBACK").await?;
        Ok(())
    }
}

/// Sink that discards statements and issues sequential ids per table.
#[derive(Debug, Default)]
pub struct DryRunSink {
    next_ids: HashMap<Table, u64>,
    statements: usize,
}

impl DryRunSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statements received so far.
    pub fn statements(&self) -> usize {
        self.statements
    }
}

#[async_trait]
impl SeedSink for DryRunSink {
    async fn execute(&mut self, insert: &Insert) -> Result<Option<u64>, SeedError> {
        self.statements += 1;
        let id = self.next_ids.entry(insert.table).or_insert(0);
        *id += 1;
        tracing::trace!("[DRY-RUN] {}", insert.sql());
        Ok(Some(*id))
    }

    async fn commit(&mut self) -> Result<(), SeedError> {
        Ok(())
    }

    async fn rollback(&mut self) -> Result<(), SeedError> {
        Ok(())
    }
}
