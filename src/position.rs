//! Maps a card number onto the page grid of the album.
//!
//! All coordinates are 1-based. The classic formula derives the row by
//! dividing the in-page position by the number of *rows*, so within a page a
//! new row starts every `rows_in_page` cards. Albums printed row by row can
//! opt into [`GridLayout::RowMajor`] instead.
//!
//! Numbers before the first card (negative offsets) use floor division, so
//! they land on page 0 and below. Only positive page geometry is meaningful;
//! negative rows or columns give unspecified coordinates.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub page: i64,
    pub row: i64,
    pub column: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridLayout {
    #[default]
    Legacy,
    RowMajor,
}

impl GridLayout {
    pub fn map(self, display_number: i64, rows_in_page: i64, columns_in_page: i64) -> Position {
        match self {
            GridLayout::Legacy => map_position(display_number, rows_in_page, columns_in_page),
            GridLayout::RowMajor => map_position_row_major(display_number, rows_in_page, columns_in_page),
        }
    }
}

pub fn map_position(display_number: i64, rows_in_page: i64, columns_in_page: i64) -> Position {
    locate(display_number, rows_in_page, columns_in_page, rows_in_page)
}

pub fn map_position_row_major(display_number: i64, rows_in_page: i64, columns_in_page: i64) -> Position {
    locate(display_number, rows_in_page, columns_in_page, columns_in_page)
}

fn locate(display_number: i64, rows_in_page: i64, columns_in_page: i64, row_width: i64) -> Position {
    let cards_in_page = rows_in_page * columns_in_page;
    // degenerate geometry is the configuration's problem, not a panic
    if cards_in_page == 0 || row_width == 0 {
        return Position::default();
    }
    let index = display_number - 1;
    let position_in_page = index.rem_euclid(cards_in_page);
    Position {
        page: index.div_euclid(cards_in_page) + 1,
        row: position_in_page.div_euclid(row_width) + 1,
        column: position_in_page.rem_euclid(columns_in_page) + 1,
    }
}
