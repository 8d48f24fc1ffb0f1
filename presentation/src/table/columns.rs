//! Column definitions

use advocates_domain::Advocate;

/// One column of a table over rows of type `T`
pub struct Column<T> {
    /// Stable identifier (used as the JSON-ish key in logs and tests)
    pub key: &'static str,
    /// Header label
    pub header: &'static str,
    /// Cell renderer; wrapped columns put one item per line
    pub render: fn(&T) -> String,
    /// Whether the cell may span several lines
    pub wrap: bool,
}

impl<T> Column<T> {
    pub const fn new(key: &'static str, header: &'static str, render: fn(&T) -> String) -> Self {
        Self {
            key,
            header,
            render,
            wrap: false,
        }
    }

    pub const fn wrapped(mut self) -> Self {
        self.wrap = true;
        self
    }

    /// Render `row` as the lines of one cell
    pub fn lines(&self, row: &T) -> Vec<String> {
        let text = (self.render)(row);
        if self.wrap {
            text.lines().map(str::to_string).collect()
        } else {
            vec![text.replace('\n', " ")]
        }
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("header", &self.header)
            .field("wrap", &self.wrap)
            .finish()
    }
}

/// Message shown when no rows match
pub const EMPTY_MESSAGE: &str = "No advocates found";

/// Cell lines for every row: `cells[row][column]` is one cell's lines
pub fn cell_lines<T>(columns: &[Column<T>], rows: &[T]) -> Vec<Vec<Vec<String>>> {
    rows.iter()
        .map(|row| columns.iter().map(|c| c.lines(row)).collect())
        .collect()
}

/// Width of each column in characters: its widest line, header included
pub fn column_widths<T>(columns: &[Column<T>], cells: &[Vec<Vec<String>>]) -> Vec<usize> {
    columns
        .iter()
        .enumerate()
        .map(|(i, column)| {
            cells
                .iter()
                .flat_map(|row| row[i].iter())
                .map(|line| line.chars().count())
                .chain(std::iter::once(column.header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect()
}

/// Columns of the advocate directory table, in display order
pub fn advocate_columns() -> [Column<Advocate>; 7] {
    [
        Column::new("firstName", "First Name", |a: &Advocate| a.first_name.clone()),
        Column::new("lastName", "Last Name", |a: &Advocate| a.last_name.clone()),
        Column::new("city", "City", |a: &Advocate| a.city.clone()),
        Column::new("degree", "Degree", |a: &Advocate| a.degree.clone()),
        Column::new("specialties", "Specialties", |a: &Advocate| {
            a.specialties.join("\n")
        })
        .wrapped(),
        Column::new("yearsOfExperience", "Years of Experience", |a: &Advocate| {
            a.years_of_experience.to_string()
        }),
        Column::new("phoneNumber", "Phone Number", |a: &Advocate| a.formatted_phone()),
    ]
}
