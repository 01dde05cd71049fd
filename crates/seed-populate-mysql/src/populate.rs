//! The seeding pipeline: generate, insert and commit one table at a time.

use crate::error::SeedError;
use crate::insert::ToInsert;
use crate::sink::SeedSink;
use seed_generator::{IdCache, SeedGenerator, Table};
use std::time::{Duration, Instant};

/// Rows inserted into one table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableReport {
    pub table: Table,
    pub rows: usize,
    pub duration: Duration,
}

/// Outcome of a completed seeding run.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub seed: u64,
    pub tables: Vec<TableReport>,
}

impl SeedReport {
    fn new(seed: u64) -> Self {
        Self {
            seed,
            tables: Vec::with_capacity(Table::ALL.len()),
        }
    }

    /// Rows inserted into `table`, zero if it was never reached.
    pub fn rows(&self, table: Table) -> usize {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| t.rows)
            .unwrap_or(0)
    }

    pub fn total_rows(&self) -> usize {
        self.tables.iter().map(|t| t.rows).sum()
    }

    pub fn total_duration(&self) -> Duration {
        self.tables.iter().map(|t| t.duration).sum()
    }
}

/// Seed every table in dependency order.
///
/// Each table is committed once all of its rows are in. If anything fails,
/// the open transaction is rolled back and the error is returned; tables
/// committed earlier stay in place.
pub async fn populate<S>(
    sink: &mut S,
    generator: &mut SeedGenerator,
) -> Result<SeedReport, SeedError>
where
    S: SeedSink + ?Sized,
{
    let mut report = SeedReport::new(generator.seed());
    let mut cache = IdCache::new();

    for table in Table::ALL {
        tracing::info!("Inserting {table} ...");
        let started = Instant::now();

        let result = match seed_table(sink, generator, &mut cache, table).await {
            Ok(rows) => sink.commit().await.map(|_| rows),
            Err(e) => Err(e),
        };

        match result {
            Ok(rows) => {
                let duration = started.elapsed();
                tracing::info!("Populated {table}: {rows} rows in {duration:?}");
                report.tables.push(TableReport {
                    table,
                    rows,
                    duration,
                });
            }
            Err(e) => {
                tracing::error!("Failed to populate table '{table}': {e}");
                if let Err(rollback_err) = sink.rollback().await {
                    tracing::warn!("Rollback after failure on '{table}' failed: {rollback_err}");
                }
                return Err(e);
            }
        }
    }

    tracing::info!(
        "Seeding complete: {} rows across {} tables in {:?} (seed={})",
        report.total_rows(),
        report.tables.len(),
        report.total_duration(),
        report.seed
    );
    Ok(report)
}

async fn insert_all<S, R>(sink: &mut S, rows: &[R]) -> Result<usize, SeedError>
where
    S: SeedSink + ?Sized,
    R: ToInsert,
{
    for row in rows {
        sink.execute(&row.to_insert()).await?;
    }
    Ok(rows.len())
}

/// Insert into an auto-increment table and collect the issued ids.
async fn insert_returning_ids<S, R>(
    sink: &mut S,
    table: Table,
    rows: &[R],
) -> Result<Vec<u64>, SeedError>
where
    S: SeedSink + ?Sized,
    R: ToInsert,
{
    let mut ids = Vec::with_capacity(rows.len());
    for row in rows {
        let id = sink
            .execute(&row.to_insert())
            .await?
            .ok_or(SeedError::MissingInsertId(table))?;
        ids.push(id);
    }
    Ok(ids)
}

async fn seed_table<S>(
    sink: &mut S,
    generator: &mut SeedGenerator,
    cache: &mut IdCache,
    table: Table,
) -> Result<usize, SeedError>
where
    S: SeedSink + ?Sized,
{
    let rows = match table {
        Table::Users => {
            let users = generator.users();
            for id in insert_returning_ids(sink, table, &users).await? {
                cache.record_user(id);
            }
            users.len()
        }
        Table::Airport => insert_all(sink, generator.airports()).await?,
        Table::Airlines => {
            let airlines = generator.airlines();
            insert_all(sink, &airlines).await?;
            airlines.iter().for_each(|a| cache.record_airline(a));
            airlines.len()
        }
        Table::Bus => insert_all(sink, &generator.buses()).await?,
        Table::Commuters => {
            let commuters = generator.commuters(&cache.user_ids);
            insert_all(sink, &commuters).await?;
            commuters.iter().for_each(|c| cache.record_commuter(c));
            commuters.len()
        }
        Table::CommuterPhone => {
            let phones = generator.commuter_phones(&cache.passenger_nos());
            insert_all(sink, &phones).await?
        }
        Table::Flights => {
            let flights = generator.flights(&cache.airline_ids)?;
            insert_all(sink, &flights).await?;
            flights.iter().for_each(|f| cache.record_flight(f));
            flights.len()
        }
        Table::Staff => {
            let staff = generator.staff();
            insert_all(sink, &staff).await?;
            staff.iter().for_each(|s| cache.record_staff(s));
            staff.len()
        }
        Table::StaffPhone => {
            let phones = generator.staff_phones(&cache.staff_ids);
            insert_all(sink, &phones).await?
        }
        Table::Stalls => insert_all(sink, &generator.stalls()).await?,
        Table::Ticket => {
            let tickets = generator.tickets(&cache.commuters, &cache.flights)?;
            for id in insert_returning_ids(sink, table, &tickets).await? {
                cache.record_ticket(id);
            }
            tickets.len()
        }
        Table::LoyaltyPoints => {
            let rows = generator.loyalty_points(&cache.user_ids);
            insert_all(sink, &rows).await?
        }
        Table::PointTransactions => {
            let rows = generator.point_transactions(&cache.user_ids, &cache.ticket_ids)?;
            insert_all(sink, &rows).await?
        }
        Table::Waitlist => {
            let rows = generator.waitlist(&cache.user_ids, &cache.flight_ids())?;
            insert_all(sink, &rows).await?
        }
    };
    Ok(rows)
}
