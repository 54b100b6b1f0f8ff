//! Cardkeeper – keeps count of the cards (or stickers) owned for a numbered album.
//!
//! An album holds the cards `1..=total_cards`. For every card the number of
//! owned copies is stored: a count of zero means the card is missing, more
//! than one means there are duplicates to trade.
//!
//! ## Modules
//! * [`persist`] – SQLite persistence of the card counts.
//! * [`position`] – Maps a card number onto page, row and column of the album.
//! * [`collection`] – The [`collection::Collection`] enforcing range and
//!   read-only rules on top of the store and deriving statistics.
//! * [`export`] – CSV snapshot of the whole store.
//! * [`output`] – Structured, printable results.
//! * [`interface`] – The interactive menu.
//! * [`settings`] – Startup configuration read from an INI file.
//!
//! ## Quick Start
//! ```
//! use cardkeeper::{collection::Collection, persist::{PersistenceMode, Persistor}, settings::Settings};
//! let mut persistor = Persistor::open(&PersistenceMode::InMemory).unwrap();
//! let mut album = Collection::new(&mut persistor, Settings::new(10, 5, 4));
//! album.initialize().unwrap();
//! assert!(album.add(3).unwrap().is_new);
//! assert_eq!(album.stats().unwrap().missing, 9);
//! ```

pub mod collection;
pub mod error;
pub mod export;
pub mod interface;
pub mod output;
pub mod persist;
pub mod position;
pub mod settings;
