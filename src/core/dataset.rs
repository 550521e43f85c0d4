use serde::Serialize;

use crate::core::entry::Entry;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Smallest vertex count that still forms a closed polygon.
pub const MIN_VERTEX_COUNT: usize = 3;

/// Number of placeholder entries shown in preview mode.
pub const PREVIEW_ENTRY_COUNT: usize = 5;

/// Magnitude of every placeholder entry shown in preview mode.
pub const PREVIEW_MAGNITUDE: f64 = 0.8;

/// Data-provider capability consumed by the chart.
///
/// Any source can back a chart as long as it reports its size and yields an
/// [`Entry`] per index. The chart reads it once per assignment.
pub trait ValueAdapter {
    fn size(&self) -> usize;

    /// Returns the entry at `index`, or `None` when the index is out of range.
    fn entry_at(&self, index: usize) -> Option<Entry>;
}

impl ValueAdapter for [Entry] {
    fn size(&self) -> usize {
        self.len()
    }

    fn entry_at(&self, index: usize) -> Option<Entry> {
        self.get(index).cloned()
    }
}

impl ValueAdapter for Vec<Entry> {
    fn size(&self) -> usize {
        self.len()
    }

    fn entry_at(&self, index: usize) -> Option<Entry> {
        self.get(index).cloned()
    }
}

impl<T: ValueAdapter + ?Sized> ValueAdapter for &T {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn entry_at(&self, index: usize) -> Option<Entry> {
        (**self).entry_at(index)
    }
}

/// Adapter built from a length and a per-index factory closure.
pub struct FnAdapter<F> {
    size: usize,
    factory: F,
}

impl<F> std::fmt::Debug for FnAdapter<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnAdapter").field("size", &self.size).finish()
    }
}

impl<F: Fn(usize) -> Entry> ValueAdapter for FnAdapter<F> {
    fn size(&self) -> usize {
        self.size
    }

    fn entry_at(&self, index: usize) -> Option<Entry> {
        (index < self.size).then(|| (self.factory)(index))
    }
}

/// Builds an adapter that creates entry `i` by calling `factory(i)`.
#[must_use]
pub fn adapter_from_fn<F: Fn(usize) -> Entry>(size: usize, factory: F) -> FnAdapter<F> {
    FnAdapter { size, factory }
}

/// Immutable snapshot of the entries assigned to a chart.
///
/// Order is significant: entry 0 sits at the top and indices advance
/// clockwise.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDataset {
    entries: Vec<Entry>,
}

impl ChartDataset {
    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Materializes every entry of `adapter`.
    ///
    /// The adapter is queried exactly once per index; later changes to its
    /// backing data do not reach this snapshot.
    pub fn from_adapter<A: ValueAdapter + ?Sized>(adapter: &A) -> ChartResult<Self> {
        let size = adapter.size();
        let mut entries = Vec::with_capacity(size);
        for index in 0..size {
            let entry = adapter.entry_at(index).ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "adapter reported size {size} but has no entry at index {index}"
                ))
            })?;
            entries.push(entry);
        }
        Ok(Self { entries })
    }

    /// Placeholder dataset used when no real adapter is attached.
    #[must_use]
    pub fn preview() -> Self {
        let entries = (0..PREVIEW_ENTRY_COUNT)
            .map(|index| Entry::new(format!("label{index}"), PREVIEW_MAGNITUDE, Color::BLACK))
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    /// Fails with [`ChartError::InsufficientEntries`] when the dataset cannot
    /// form a polygon.
    pub fn ensure_drawable(&self) -> ChartResult<()> {
        ensure_vertex_count(self.entries.len())
    }
}

pub(crate) fn ensure_vertex_count(count: usize) -> ChartResult<()> {
    if count < MIN_VERTEX_COUNT {
        return Err(ChartError::InsufficientEntries {
            count,
            min: MIN_VERTEX_COUNT,
        });
    }
    Ok(())
}
