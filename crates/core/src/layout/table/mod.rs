//! Tabular reconstruction: columns, grids and label triage.

mod columns;
mod grid;
mod triage;

pub use columns::{Column, WordRef, build_columns};
pub use grid::{Cell, Row, Table, TableGrid};
pub use triage::Triage;
