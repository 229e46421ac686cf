//! Line grid - the logical buffer of numbered lines and fixed-width columns
//!
//! Identity is positional: a line is addressed by its index in the buffer.
//! The displayed line number is a derived label that is re-derived after
//! every insertion.

use serde::Serialize;

use crate::view::geometry::PixelPoint;

/// Errors for indices that address a nonexistent line or column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    LineOutOfRange { index: usize, line_count: usize },
    ColumnOutOfRange {
        line: usize,
        column: usize,
        column_count: usize,
    },
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LineOutOfRange { index, line_count } => write!(
                f,
                "line index {} out of range (buffer has {} lines)",
                index, line_count
            ),
            Self::ColumnOutOfRange {
                line,
                column,
                column_count,
            } => write!(
                f,
                "column index {} out of range on line {} ({} columns)",
                column, line, column_count
            ),
        }
    }
}

impl std::error::Error for GridError {}

/// A position in the grid (line and column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct GridPosition {
    /// Line index (0-indexed)
    pub line: usize,
    /// Column index (0-indexed); may equal the line length
    pub column: usize,
}

impl GridPosition {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Reference to an existing column, in document order
pub type TokenRef = GridPosition;

/// One addressable glyph cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub glyph: char,
}

/// A numbered line of columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    number: usize,
    columns: Vec<Column>,
}

impl Line {
    fn empty(number: usize) -> Self {
        Self {
            number,
            columns: Vec::new(),
        }
    }

    fn from_text(number: usize, text: &str) -> Self {
        Self {
            number,
            columns: text.chars().map(|glyph| Column { glyph }).collect(),
        }
    }

    /// Displayed 1-based line number
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The line's glyphs as a string
    pub fn text(&self) -> String {
        self.columns.iter().map(|c| c.glyph).collect()
    }
}

/// The buffer: an ordered, never-empty sequence of lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridModel {
    lines: Vec<Line>,
    /// Top-left of the first line's code area
    origin: PixelPoint,
}

impl GridModel {
    /// A buffer with a single empty line
    pub fn new(origin: PixelPoint) -> Self {
        Self {
            lines: vec![Line::empty(1)],
            origin,
        }
    }

    /// Build a buffer from `\n`-separated text; every line becomes one row
    pub fn from_text(origin: PixelPoint, text: &str) -> Self {
        let lines = text
            .split('\n')
            .enumerate()
            .map(|(i, l)| Line::from_text(i + 1, l.strip_suffix('\r').unwrap_or(l)))
            .collect();
        Self { lines, origin }
    }

    /// Fallback/reset target for navigation that leaves the grid
    #[inline]
    pub fn minimum_position(&self) -> PixelPoint {
        self.origin
    }

    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn line_at(&self, line: usize) -> Result<&Line, GridError> {
        self.lines.get(line).ok_or(GridError::LineOutOfRange {
            index: line,
            line_count: self.lines.len(),
        })
    }

    pub fn column_count(&self, line: usize) -> Result<usize, GridError> {
        self.line_at(line).map(Line::len)
    }

    pub fn column_at(&self, line: usize, column: usize) -> Result<&Column, GridError> {
        let l = self.line_at(line)?;
        l.columns.get(column).ok_or(GridError::ColumnOutOfRange {
            line,
            column,
            column_count: l.len(),
        })
    }

    /// Index of the last line
    #[inline]
    pub fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Insert an empty line right after `line` and return its index.
    ///
    /// Every line from the insertion point onward is renumbered.
    pub fn insert_line_after(&mut self, line: usize) -> Result<usize, GridError> {
        self.line_at(line)?;
        let new_index = line + 1;
        self.lines.insert(new_index, Line::empty(new_index + 1));
        self.renumber_from(new_index);
        tracing::debug!(
            after = line,
            new_index,
            line_count = self.lines.len(),
            "Inserted line"
        );
        debug_assert!(self.numbering_is_contiguous());
        Ok(new_index)
    }

    /// Re-derive displayed numbers for `start..` so that number == index + 1
    pub fn renumber_from(&mut self, start: usize) {
        for (index, line) in self.lines.iter_mut().enumerate().skip(start) {
            line.number = index + 1;
        }
    }

    /// Whether every displayed number equals its position + 1
    pub fn numbering_is_contiguous(&self) -> bool {
        self.lines
            .iter()
            .enumerate()
            .all(|(i, line)| line.number == i + 1)
    }

    // =========================================================================
    // Document-order traversal
    // =========================================================================

    /// The column following `token`, crossing into later lines
    pub fn token_after(&self, token: TokenRef) -> Option<TokenRef> {
        let line = self.lines.get(token.line)?;
        if token.column + 1 < line.len() {
            return Some(TokenRef::new(token.line, token.column + 1));
        }
        self.first_token_from_line(token.line + 1)
    }

    /// The column preceding `token`, crossing into earlier lines
    pub fn token_before(&self, token: TokenRef) -> Option<TokenRef> {
        if token.column > 0 && token.line < self.lines.len() {
            return Some(TokenRef::new(token.line, token.column - 1));
        }
        self.last_token_before_line(token.line)
    }

    /// First column of the first non-empty line at or after `line`
    pub fn first_token_from_line(&self, line: usize) -> Option<TokenRef> {
        self.lines
            .iter()
            .enumerate()
            .skip(line)
            .find(|(_, l)| !l.is_empty())
            .map(|(i, _)| TokenRef::new(i, 0))
    }

    /// Last column of the last non-empty line strictly before `line`
    pub fn last_token_before_line(&self, line: usize) -> Option<TokenRef> {
        let end = line.min(self.lines.len());
        self.lines[..end]
            .iter()
            .enumerate()
            .rev()
            .find(|(_, l)| !l.is_empty())
            .map(|(i, l)| TokenRef::new(i, l.len() - 1))
    }

    /// Position just after the last column of `line`
    pub fn line_end(&self, line: usize) -> Result<GridPosition, GridError> {
        Ok(GridPosition::new(line, self.column_count(line)?))
    }

    /// Position just after the last column of the last line
    pub fn buffer_end(&self) -> GridPosition {
        let last = self.last_line();
        GridPosition::new(last, self.lines[last].len())
    }
}
