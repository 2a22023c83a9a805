use super::{Columns, TilesError};
use serde::Serialize;
use std::fmt;

/// One horizontal group of cells in a tiled grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row<T> {
    /// Position of this row in the partition (0-based)
    index: usize,
    /// Cells in arrival order; never longer than the column count
    items: Vec<T>,
    #[serde(skip)]
    columns: usize,
}

impl<T> Row<T> {
    fn new(index: usize, columns: usize) -> Self {
        Self {
            index,
            items: Vec::with_capacity(columns),
            columns,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether every column of this row is occupied
    pub fn is_full(&self) -> bool {
        self.items.len() == self.columns
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }
}

/// Stable key for a single cell, used by renderers to key grid children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellKey {
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Ordered rows produced by [`chunk`]
///
/// Concatenating the rows in order yields the original item sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition<T> {
    columns: usize,
    rows: Vec<Row<T>>,
}

impl<T> Partition<T> {
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> &[Row<T>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Total number of items across all rows
    pub fn item_count(&self) -> usize {
        self.rows.iter().map(Row::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate every cell with its grid key, row-major
    pub fn cells(&self) -> impl Iterator<Item = (CellKey, &T)> {
        self.rows.iter().flat_map(|row| {
            row.items.iter().enumerate().map(move |(column, item)| {
                (
                    CellKey {
                        row: row.index,
                        column,
                    },
                    item,
                )
            })
        })
    }

    /// Borrowing flatten, in original order
    pub fn flatten(&self) -> Vec<&T> {
        self.rows.iter().flat_map(|row| row.items.iter()).collect()
    }

    /// Consume the partition and give back the original sequence
    pub fn into_items(self) -> Vec<T> {
        self.rows.into_iter().flat_map(Row::into_items).collect()
    }
}

impl<T> IntoIterator for Partition<T> {
    type Item = Row<T>;
    type IntoIter = std::vec::IntoIter<Row<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Partition<T> {
    type Item = &'a Row<T>;
    type IntoIter = std::slice::Iter<'a, Row<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Partition `items` into rows of `columns` cells for grid layout.
///
/// Fails with [`TilesError::InvalidArgument`] when `columns` is zero or
/// negative. Empty input yields an empty partition.
pub fn chunk<T, I>(items: I, columns: i64) -> Result<Partition<T>, TilesError>
where
    I: IntoIterator<Item = T>,
{
    let columns = Columns::new(columns)?;
    Ok(chunk_with(items, columns))
}

/// Infallible form of [`chunk`] for an already validated column count
pub fn chunk_with<T, I>(items: I, columns: Columns) -> Partition<T>
where
    I: IntoIterator<Item = T>,
{
    let width = columns.get();
    let mut rows: Vec<Row<T>> = Vec::new();

    for (position, item) in items.into_iter().enumerate() {
        // Integer division on a positive divisor is floor division
        let row_index = position / width;

        if row_index == rows.len() {
            rows.push(Row::new(row_index, width));
        }

        rows[row_index].items.push(item);
    }

    tracing::trace!(
        columns = width,
        rows = rows.len(),
        "partitioned items into tile rows"
    );

    Partition {
        columns: width,
        rows,
    }
}
