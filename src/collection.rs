use std::path::Path;

use tracing::debug;

use crate::error::{CardkeeperError, Result};
use crate::export;
use crate::persist::Persistor;
use crate::position::Position;
use crate::settings::Settings;

// ------------- Results -------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Added {
    pub count: i64,
    pub is_new: bool,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub count: i64,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    pub owned: i64,
    pub missing: i64,
    pub total_copies: i64,
    pub duplicate_copies: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listings {
    pub missing: Vec<i64>,
    pub duplicates: Vec<i64>,
}
impl Listings {
    pub fn render_missing(&self) -> String {
        join(&self.missing)
    }
    pub fn render_duplicates(&self) -> String {
        join(&self.duplicates)
    }
}

fn join(numbers: &[i64]) -> String {
    numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
}

// ------------- Collection -------------
/// The album as seen by one run of the program: the settings it was started
/// with and the store it keeps its counts in.
pub struct Collection<'p> {
    persistor: &'p mut Persistor,
    settings: Settings,
}
impl<'p> Collection<'p> {
    pub fn new(persistor: &'p mut Persistor, settings: Settings) -> Self {
        Self { persistor, settings }
    }

    /// Fills the store up to `total_cards`. Returns how many cards were added.
    pub fn initialize(&mut self) -> Result<usize> {
        self.persistor.initialize(self.settings.total_cards)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn persistor(&self) -> &Persistor {
        &*self.persistor
    }

    pub fn add(&mut self, number: i64) -> Result<Added> {
        self.check_writable()?;
        self.check_range(number)?;
        let count = self.persistor.get_count(number)?;
        self.persistor.set_count(number, count + 1)?;
        debug!(number, count = count + 1, "card added");
        Ok(Added {
            count: count + 1,
            is_new: count == 0,
            position: self.position_of(number),
        })
    }

    pub fn remove(&mut self, number: i64) -> Result<()> {
        self.check_writable()?;
        self.check_range(number)?;
        let count = self.persistor.get_count(number)?;
        if count <= 0 {
            debug!(number, "remove of a card that is not owned");
            return Err(CardkeeperError::NotOwned { number });
        }
        self.persistor.set_count(number, count - 1)?;
        debug!(number, count = count - 1, "card removed");
        Ok(())
    }

    pub fn read(&self, number: i64) -> Result<Reading> {
        self.check_range(number)?;
        Ok(Reading {
            count: self.persistor.get_count(number)?,
            position: self.position_of(number),
        })
    }

    pub fn stats(&self) -> Result<Stats> {
        let missing = self.persistor.count_missing()?;
        Ok(Stats {
            owned: self.settings.total_cards - missing,
            missing,
            total_copies: self.persistor.sum_all_counts()?,
            duplicate_copies: self.persistor.sum_excess_over_one()?,
        })
    }

    pub fn listings(&self) -> Result<Listings> {
        Ok(Listings {
            missing: self.persistor.missing()?,
            duplicates: self.persistor.duplicates()?,
        })
    }

    /// Writes every card with its count to `path` as CSV.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<usize> {
        let rows = self.persistor.export_all()?;
        export::export_to_path(&rows, path.as_ref())?;
        Ok(rows.len())
    }

    /// Display position of a card, taking the configured offset into account.
    pub fn position_of(&self, number: i64) -> Position {
        let s = &self.settings;
        s.layout.map(number + s.name_offset, s.rows_in_page, s.columns_in_page)
    }

    fn check_writable(&self) -> Result<()> {
        if self.settings.read_only {
            debug!("mutation refused in read only mode");
            return Err(CardkeeperError::ReadOnly);
        }
        Ok(())
    }

    fn check_range(&self, number: i64) -> Result<()> {
        if number <= 0 || number > self.settings.total_cards {
            debug!(number, max = self.settings.total_cards, "card out of range");
            return Err(CardkeeperError::OutOfRange { max: self.settings.total_cards });
        }
        Ok(())
    }
}
