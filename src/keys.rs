//! Primary key resolution.
//!
//! The declared key comes straight from `is_primary_key`. Independently, the
//! first column whose name ends with the key suffix (`_id` by default) is
//! taken as the guessed key: replication sources often omit constraints, and
//! `<prefix>_id` columns act as keys anyway.

use crate::source::SourceColumn;

/// Suffix that marks a column as a key candidate.
pub const DEFAULT_KEY_SUFFIX: &str = "_id";

/// Declared and guessed primary keys of a column list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyResolution {
    /// Columns flagged `is_primary_key`, in input order.
    pub primary_key: Vec<String>,

    /// First column whose name ends with the suffix, if any.
    pub guessed_primary_key: Option<String>,

    guessed_index: Option<usize>,
}

impl KeyResolution {
    /// Whether the column at `index` is the guessed key.
    pub fn is_guessed(&self, index: usize) -> bool {
        self.guessed_index == Some(index)
    }

    /// The guessed key as a 0 or 1 element list.
    pub fn guessed_list(&self) -> Vec<String> {
        self.guessed_primary_key.iter().cloned().collect()
    }
}

/// Accumulator threaded through one pass over the columns.
#[derive(Debug)]
pub struct KeyAccumulator<'a> {
    suffix: Option<&'a str>,
    resolution: KeyResolution,
}

impl<'a> KeyAccumulator<'a> {
    /// Start a pass. `None` or an empty suffix disables guessing.
    pub fn new(suffix: Option<&'a str>) -> Self {
        Self {
            suffix: suffix.filter(|s| !s.is_empty()),
            resolution: KeyResolution::default(),
        }
    }

    /// Record the column at `index`. Returns whether it is the guessed key.
    ///
    /// Columns must be pushed in input order.
    pub fn push(&mut self, index: usize, column: &SourceColumn) -> bool {
        if column.is_primary_key {
            self.resolution.primary_key.push(column.name.clone());
        }

        let Some(suffix) = self.suffix else {
            return false;
        };

        if self.resolution.guessed_index.is_none() && column.name.ends_with(suffix) {
            self.resolution.guessed_index = Some(index);
            self.resolution.guessed_primary_key = Some(column.name.clone());
            return true;
        }

        false
    }

    /// Finish the pass.
    pub fn finish(self) -> KeyResolution {
        self.resolution
    }
}

/// Resolve declared and guessed keys for `columns`.
///
/// # Examples
///
/// ```
/// use psql2ch::keys::resolve_keys;
/// use psql2ch::source::SourceColumn;
///
/// let columns = vec![
///     SourceColumn::new("name", "text"),
///     SourceColumn::new("user_id", "int8"),
///     SourceColumn::new("group_id", "int8"),
/// ];
/// let keys = resolve_keys(&columns, Some("_id"));
/// assert!(keys.primary_key.is_empty());
/// assert_eq!(keys.guessed_primary_key.as_deref(), Some("user_id"));
/// assert!(keys.is_guessed(1));
/// assert!(!keys.is_guessed(2));
/// ```
pub fn resolve_keys(columns: &[SourceColumn], suffix: Option<&str>) -> KeyResolution {
    let mut acc = KeyAccumulator::new(suffix);
    for (index, column) in columns.iter().enumerate() {
        acc.push(index, column);
    }
    acc.finish()
}
