// used for persistence
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::error::{CardkeeperError, Result};

/// Where the card table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceMode {
    InMemory,
    File(String),
}

// ------------- Persistence -------------
/// Owns the SQLite connection for the lifetime of the process. Every
/// mutation runs in autocommit mode (or an explicit transaction) so it is
/// durable before the call returns.
pub struct Persistor {
    db: Connection,
}
impl Persistor {
    pub fn open(mode: &PersistenceMode) -> Result<Persistor> {
        let connection = match mode {
            PersistenceMode::InMemory => Connection::open_in_memory()?,
            PersistenceMode::File(path) => Connection::open(path)
                .map_err(|e| CardkeeperError::Storage(format!("could not open '{}': {}", path, e)))?,
        };
        connection.execute_batch(
            "
            create table if not exists Card (
                Card_Number integer not null,
                Card_Count integer not null default 0,
                constraint unique_and_referenceable_Card_Number primary key (
                    Card_Number
                )
            );
            ",
        )?;
        debug!(?mode, "card table ready");
        Ok(Persistor { db: connection })
    }

    /// Makes sure every number in `1..=total_cards` has a row. Existing rows
    /// are left alone, only the tail above the current maximum is added.
    pub fn initialize(&mut self, total_cards: i64) -> Result<usize> {
        let tx = self.db.transaction()?;
        let current: i64 = tx.query_row(
            "
            select ifnull(max(Card_Number), 0)
                from Card
            ",
            [],
            |r| r.get(0),
        )?;
        let mut added = 0;
        if current < total_cards {
            let mut insert = tx.prepare(
                "
                insert or ignore into Card (
                    Card_Number,
                    Card_Count
                ) values (?, 0)
                ",
            )?;
            for number in (current + 1)..=total_cards {
                added += insert.execute(params![number])?;
            }
        }
        tx.commit()?;
        if added > 0 {
            info!(from = current + 1, to = total_cards, added, "initialized cards");
        }
        Ok(added)
    }

    pub fn get_count(&self, number: i64) -> Result<i64> {
        let count = self
            .db
            .prepare_cached(
                "
                select Card_Count
                    from Card
                    where Card_Number = ?
                ",
            )?
            .query_row(params![number], |r| r.get(0))
            .optional()?;
        Ok(count.unwrap_or(0))
    }

    pub fn set_count(&self, number: i64, count: i64) -> Result<()> {
        self.db
            .prepare_cached(
                "
                update Card
                    set Card_Count = ?
                    where Card_Number = ?
                ",
            )?
            .execute(params![count, number])?;
        debug!(number, count, "count stored");
        Ok(())
    }

    pub fn missing(&self) -> Result<Vec<i64>> {
        self.numbers(
            "
            select Card_Number
                from Card
                where Card_Count = 0
                order by Card_Number
            ",
        )
    }

    pub fn duplicates(&self) -> Result<Vec<i64>> {
        self.numbers(
            "
            select Card_Number
                from Card
                where Card_Count > 1
                order by Card_Number
            ",
        )
    }

    pub fn count_missing(&self) -> Result<i64> {
        self.scalar(
            "
            select count(*)
                from Card
                where Card_Count = 0
            ",
        )
    }

    /// Copies beyond the first one, summed over every duplicated card.
    pub fn sum_excess_over_one(&self) -> Result<i64> {
        self.scalar(
            "
            select ifnull(sum(Card_Count), 0) - count(*)
                from Card
                where Card_Count > 1
            ",
        )
    }

    pub fn sum_all_counts(&self) -> Result<i64> {
        self.scalar(
            "
            select ifnull(sum(Card_Count), 0)
                from Card
            ",
        )
    }

    pub fn count_records(&self) -> Result<i64> {
        self.scalar(
            "
            select count(*)
                from Card
            ",
        )
    }

    pub fn export_all(&self) -> Result<Vec<(i64, i64)>> {
        let mut statement = self.db.prepare_cached(
            "
            select Card_Number, Card_Count
                from Card
                order by Card_Number
            ",
        )?;
        let rows = statement.query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?)))?;
        let mut all = Vec::new();
        for row in rows {
            all.push(row?);
        }
        Ok(all)
    }

    /// Releases the connection and reports anything SQLite had to say about
    /// it. Dropping the persistor releases it too, silently.
    pub fn close(self) -> Result<()> {
        self.db.close().map_err(|(_, e)| CardkeeperError::from(e))
    }

    fn scalar(&self, query: &str) -> Result<i64> {
        Ok(self.db.prepare_cached(query)?.query_row([], |r| r.get(0))?)
    }

    fn numbers(&self, query: &str) -> Result<Vec<i64>> {
        let mut statement = self.db.prepare_cached(query)?;
        let rows = statement.query_map([], |r| r.get::<_, i64>(0))?;
        let mut numbers = Vec::new();
        for number in rows {
            numbers.push(number?);
        }
        Ok(numbers)
    }
}
