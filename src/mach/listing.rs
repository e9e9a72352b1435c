use crate::error;
use crate::lang::{Error, Line};
use std::collections::{btree_map::Values, BTreeMap};

/// Source lines as entered, ordered by line code.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    source: BTreeMap<u16, Line>,
}

impl Listing {
    pub fn clear(&mut self) {
        self.source.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Adds, replaces or, when the line has no statements, deletes a line.
    pub fn insert(&mut self, line: Line) -> Result<Option<Line>, Error> {
        let number = match line.number() {
            Some(number) => number,
            None => return Err(error!(IllegalDirect)),
        };
        if line.is_empty() {
            Ok(self.source.remove(&number))
        } else {
            Ok(self.source.insert(number, line))
        }
    }

    pub fn remove(&mut self, number: u16) -> Option<Line> {
        self.source.remove(&number)
    }

    pub fn line(&self, number: u16) -> Option<&Line> {
        self.source.get(&number)
    }

    pub fn lines(&self) -> Values<'_, u16, Line> {
        self.source.values()
    }

    /// Used for loading a new Listing from a file. Blank lines are skipped.
    pub fn load_str(&mut self, line: &str) -> Result<(), Error> {
        if line.trim().is_empty() {
            return Ok(());
        }
        let line = Line::new(line);
        if line.is_direct() {
            return Err(error!(IllegalDirect; "LINE NUMBER EXPECTED"));
        }
        self.insert(line)?;
        Ok(())
    }

    /// Parses every line and collects the syntax errors.
    pub fn check(&self) -> Vec<Error> {
        self.lines().filter_map(|line| line.ast().err()).collect()
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
