use std::{iter::Enumerate, str::Lines};
use tracing::trace;

/// The two substrings that bound the keyword range of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Markers {
    pub const DEFAULT_START: &'static str = "Keyword";
    pub const DEFAULT_END: &'static str = "TEOF";

    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::new(Self::DEFAULT_START, Self::DEFAULT_END)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanState {
    #[default]
    Inactive,
    Active,
}

impl ScanState {
    pub fn is_active(self) -> bool {
        self == ScanState::Active
    }
}

/// One line of the source together with its range membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannedLine<'a> {
    /// 1-based line number.
    pub number: usize,
    pub text: &'a str,
    pub in_range: bool,
}

/// Walks the source line by line and flags every line that sits strictly
/// between a start marker line and the next end marker line.
///
/// For each line the end marker is checked first, then membership is
/// decided, then the start marker is checked. Both marker lines are
/// therefore outside the range. Nothing is validated: a missing start
/// marker yields no range, and a start marker after the end marker opens
/// a range that runs to the end of the input.
#[derive(Debug)]
pub struct MarkerScanner<'a> {
    lines: Enumerate<Lines<'a>>,
    markers: &'a Markers,
    state: ScanState,
}

impl<'a> MarkerScanner<'a> {
    pub fn new(source: &'a str, markers: &'a Markers) -> Self {
        Self {
            lines: source.lines().enumerate(),
            markers,
            state: ScanState::Inactive,
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Only the lines inside the range.
    pub fn in_range(self) -> impl Iterator<Item = ScannedLine<'a>> {
        self.filter(|line| line.in_range)
    }
}

impl<'a> Iterator for MarkerScanner<'a> {
    type Item = ScannedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, text) = self.lines.next()?;
        let number = index + 1;

        if text.contains(self.markers.end.as_str()) {
            if self.state.is_active() {
                trace!(line = number, "end marker closes keyword range");
            }
            self.state = ScanState::Inactive;
        }

        let in_range = self.state.is_active();

        if text.contains(self.markers.start.as_str()) {
            trace!(line = number, "start marker opens keyword range");
            self.state = ScanState::Active;
        }

        Some(ScannedLine {
            number,
            text,
            in_range,
        })
    }
}
