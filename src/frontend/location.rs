use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::sync::Arc;

/// A position in a source file. Lines and columns start at 1; the default value has both set to
/// 0 and marks a location that is not known. Comparing locations from different files yields no
/// ordering.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Location {
    file: Option<Arc<Path>>,
    line: u32,
    column: u32,
}

impl Location {
    pub fn new(file: Arc<Path>, line: u32, column: u32) -> Location {
        debug_assert!(line != 0 && column != 0, "location must start at 1:1");
        Location {
            file: Some(file),
            line,
            column,
        }
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn is_valid(&self) -> bool {
        self.line != 0 && self.column != 0
    }

    /// Returns the location `n` columns to the right on the same line.
    pub fn shifted(&self, n: u32) -> Location {
        Location {
            file: self.file.clone(),
            line: self.line,
            column: self.column + n,
        }
    }
}

impl PartialOrd for Location {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.file != other.file {
            return None;
        }
        Some((self.line, self.column).cmp(&(other.line, other.column)))
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file.display(), self.line, self.column),
            None => write!(f, "<unknown>:{}:{}", self.line, self.column),
        }
    }
}

/// A half-open region `[begin, end)` of a single source file.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct LocationRange {
    begin: Location,
    end: Location,
}

impl LocationRange {
    pub fn new(begin: Location, end: Location) -> LocationRange {
        assert!(begin < end, "empty or inverted range {begin} .. {end}");
        LocationRange { begin, end }
    }

    pub fn begin(&self) -> &Location {
        &self.begin
    }

    pub fn end(&self) -> &Location {
        &self.end
    }

    /// Number of columns covered, counting only the first line.
    pub fn width(&self) -> u32 {
        if self.begin.line == self.end.line {
            self.end.column - self.begin.column
        } else {
            1
        }
    }
}
