use crate::error::{ExplorerError, Result};
use crate::models::PresampledPoint;
use crate::utils::constants::{POINTS_TABLE, POINT_COLUMNS};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, Row};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::info;

/// Read-only view of the `presampled_points` table.
pub struct PointStore {
    conn: Connection,
    path: PathBuf,
}

impl PointStore {
    /// Open `path` read-only and check the table schema.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(ExplorerError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let store = Self {
            conn,
            path: path.to_path_buf(),
        };
        store.check_schema()?;

        Ok(store)
    }

    fn check_schema(&self) -> Result<()> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_table_info(?1)")?;
        let columns: HashSet<String> = stmt
            .query_map([POINTS_TABLE], |row| row.get(0))?
            .collect::<rusqlite::Result<_>>()?;

        if columns.is_empty() {
            return Err(ExplorerError::NotFound {
                path: self.path.join(POINTS_TABLE),
            });
        }

        for column in POINT_COLUMNS {
            if !columns.contains(column) {
                return Err(ExplorerError::MissingColumn(column.to_string()));
            }
        }

        Ok(())
    }

    /// Every point in the table, ordered by building type.
    pub fn load_all(&self) -> Result<Vec<PresampledPoint>> {
        let sql = format!(
            "SELECT {} FROM {} ORDER BY building_type",
            POINT_COLUMNS.join(", "),
            POINTS_TABLE
        );
        let mut stmt = self.conn.prepare(&sql)?;

        let mut points = Vec::new();
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let row_number = points.len() + 1;
            let cell = |index: usize| Cell::read(row, index, row_number);

            points.push(PresampledPoint {
                units: cell(0)?.integer()?,
                vacant: cell(1)?.flag()?,
                zip_code: cell(2)?.text_or_empty()?,
                x: cell(3)?.real()?,
                y: cell(4)?.real()?,
                building_type: cell(5)?.text()?,
            });
        }

        info!("Loaded {} points from {}", points.len(), self.path.display());
        Ok(points)
    }
}

/// One column value. SQLite columns carry no fixed type, so each read
/// accepts any storage class that converts cleanly.
struct Cell<'a> {
    column: &'static str,
    row: usize,
    value: ValueRef<'a>,
}

impl<'a> Cell<'a> {
    fn read(row: &'a Row<'_>, index: usize, row_number: usize) -> Result<Self> {
        Ok(Self {
            column: POINT_COLUMNS[index],
            row: row_number,
            value: row.get_ref(index)?,
        })
    }

    fn invalid(&self, expected: &str) -> ExplorerError {
        let found = match self.value {
            ValueRef::Null => "NULL".to_string(),
            ValueRef::Integer(i) => i.to_string(),
            ValueRef::Real(f) => f.to_string(),
            ValueRef::Text(t) => format!("'{}'", String::from_utf8_lossy(t)),
            ValueRef::Blob(_) => "BLOB".to_string(),
        };
        ExplorerError::InvalidFormat(format!(
            "{} row {}: column {} expected {}, found {}",
            POINTS_TABLE, self.row, self.column, expected, found
        ))
    }

    fn as_str(&self) -> Option<&str> {
        match self.value {
            ValueRef::Text(t) => std::str::from_utf8(t).ok().map(str::trim),
            _ => None,
        }
    }

    fn integer(&self) -> Result<i64> {
        match self.value {
            ValueRef::Integer(i) => Ok(i),
            ValueRef::Real(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
            ValueRef::Text(_) => self
                .as_str()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| self.invalid("an integer")),
            _ => Err(self.invalid("an integer")),
        }
    }

    fn real(&self) -> Result<f64> {
        let value = match self.value {
            ValueRef::Integer(i) => Some(i as f64),
            ValueRef::Real(f) => Some(f),
            ValueRef::Text(_) => self.as_str().and_then(|s| s.parse().ok()),
            _ => None,
        };
        value
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| self.invalid("a finite number"))
    }

    fn flag(&self) -> Result<bool> {
        match self.value {
            ValueRef::Integer(i) => Ok(i != 0),
            ValueRef::Real(f) => Ok(f != 0.0),
            ValueRef::Text(_) => match self.as_str().map(str::to_ascii_lowercase).as_deref() {
                Some("1" | "true") => Ok(true),
                Some("0" | "false") => Ok(false),
                _ => Err(self.invalid("a boolean")),
            },
            _ => Err(self.invalid("a boolean")),
        }
    }

    fn text(&self) -> Result<String> {
        match self.value {
            ValueRef::Integer(i) => Ok(i.to_string()),
            ValueRef::Real(f) if f.fract() == 0.0 && f.is_finite() => Ok(format!("{}", f as i64)),
            ValueRef::Real(f) => Ok(f.to_string()),
            ValueRef::Text(_) => self
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| self.invalid("UTF-8 text")),
            _ => Err(self.invalid("text")),
        }
    }

    /// Like `text`, but a missing value reads as "".
    fn text_or_empty(&self) -> Result<String> {
        match self.value {
            ValueRef::Null => Ok(String::new()),
            _ => self.text(),
        }
    }
}
