//! Docker container management for MySQL seeding tests

use crate::config::DbConfig;
use anyhow::{Context, Result};
use mysql_async::{prelude::*, Conn};
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};
use tracing::{debug, info};

const ROOT_PASSWORD: &str = "testpass";
const DATABASE: &str = "airport_db";

/// A throwaway `mysql:8.0` container
pub struct MySQLContainer {
    pub container_name: String,
    pub host_port: u16,
    pub image_name: String,
}

impl MySQLContainer {
    pub fn new(container_name: &str, host_port: u16) -> Self {
        Self {
            container_name: container_name.to_string(),
            host_port,
            image_name: "mysql:8.0".to_string(),
        }
    }

    /// Connection settings for the container's root account
    pub fn config(&self) -> DbConfig {
        DbConfig {
            host: "127.0.0.1".to_string(),
            port: self.host_port,
            user: "root".to_string(),
            password: ROOT_PASSWORD.to_string(),
            database: DATABASE.to_string(),
        }
    }

    /// Write an env file pointing at the container
    pub fn write_env_file(&self, path: &Path) -> Result<()> {
        let config = self.config();
        let content = format!(
            "DB_HOST={}\nDB_PORT={}\nDB_USER={}\nDB_PASSWORD={}\nDB_NAME={}\n",
            config.host, config.port, config.user, config.password, config.database
        );
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write env file {}", path.display()))
    }

    /// Starts the container, replacing any container with the same name
    pub fn start(&self) -> Result<()> {
        info!("Starting MySQL container: {}", self.container_name);

        for action in ["stop", "rm"] {
            let _ = Command::new("docker")
                .args([action, &self.container_name])
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .status();
        }

        let output = Command::new("docker")
            .args([
                "run",
                "--name",
                &self.container_name,
                "-e",
                &format!("MYSQL_ROOT_PASSWORD={ROOT_PASSWORD}"),
                "-e",
                &format!("MYSQL_DATABASE={DATABASE}"),
                "-p",
                &format!("{}:3306", self.host_port),
                "-d",
                &self.image_name,
            ])
            .output()
            .context("Failed to start Docker container")?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("Failed to start container: {stderr}");
        }

        let container_id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        info!("Started container: {}", container_id);
        Ok(())
    }

    /// Waits for MySQL to accept connections
    pub async fn wait_until_ready(&self, timeout_secs: u64) -> Result<()> {
        info!("Waiting for MySQL to be ready...");

        let start = Instant::now();
        let timeout = Duration::from_secs(timeout_secs);

        while start.elapsed() < timeout {
            match self.connect().await {
                Ok(conn) => {
                    let _ = conn.disconnect().await;
                    info!("MySQL is ready!");
                    return Ok(());
                }
                Err(e) => {
                    debug!("Connection attempt failed: {}", e);
                    tokio::time::sleep(Duration::from_millis(1000)).await;
                }
            }
        }

        anyhow::bail!("MySQL did not become ready within {timeout_secs} seconds")
    }

    /// Opens an autocommit connection to the container's database
    pub async fn connect(&self) -> Result<Conn> {
        let config = self.config();
        let opts = mysql_async::OptsBuilder::default()
            .ip_or_hostname(config.host)
            .tcp_port(config.port)
            .user(Some(config.user))
            .pass(Some(config.password))
            .db_name(Some(config.database));
        let mut conn = Conn::new(opts).await.context("Failed to connect")?;
        let _: Option<i32> = conn
            .query_first("SELECT 1")
            .await
            .context("Failed to execute test query")?;
        Ok(conn)
    }

    /// Runs each DDL statement in order
    pub async fn apply_schema(&self, statements: &[&str]) -> Result<()> {
        let mut conn = self.connect().await?;
        for statement in statements {
            conn.query_drop(*statement)
                .await
                .with_context(|| format!("Failed to apply: {statement}"))?;
        }
        conn.disconnect().await?;
        Ok(())
    }

    /// Stops and removes the container
    pub fn stop(&self) -> Result<()> {
        info!("Stopping container: {}", self.container_name);

        for action in ["stop", "rm"] {
            let output = Command::new("docker")
                .args([action, &self.container_name])
                .output()
                .with_context(|| format!("Failed to {action} container"))?;

            if !output.status.success() {
                let stderr = String::from_utf8_lossy(&output.stderr);
                debug!("docker {action} failed (may not exist): {}", stderr);
            }
        }

        info!("Container stopped and removed");
        Ok(())
    }

    pub fn get_logs(&self) -> Result<String> {
        let output = Command::new("docker")
            .args(["logs", &self.container_name])
            .output()
            .context("Failed to get container logs")?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        Ok(format!("STDOUT:\n{stdout}\n\nSTDERR:\n{stderr}"))
    }
}

impl Drop for MySQLContainer {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}
