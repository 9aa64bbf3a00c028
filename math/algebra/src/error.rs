/// A request that falls outside the declared dimensions of a matrix.
///
/// Every variant carries the declared dimensions next to the offending index
/// or size, so the message alone is enough to diagnose the call site.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OutOfRange {
  #[error("index ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
  Index {
    rows: usize,
    cols: usize,
    row: usize,
    col: usize,
  },
  #[error("{len} elements do not fit a {rows}x{cols} matrix")]
  Elements { rows: usize, cols: usize, len: usize },
  #[error("{len} rows do not fit a {rows}x{cols} matrix")]
  Rows { rows: usize, cols: usize, len: usize },
  #[error("row {row} holds {len} elements but a {rows}x{cols} matrix has {cols} columns")]
  RowWidth {
    rows: usize,
    cols: usize,
    row: usize,
    len: usize,
  },
}
