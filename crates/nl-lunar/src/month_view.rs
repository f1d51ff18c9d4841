//! Month page model: the cells of one calendar page, labelled with lunar
//! days and festivals, plus a shared cache of built pages.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, RwLock};

use nl_core::errors::Result;
use nl_core::utilities::data_formatters::zero_pad;
use nl_time::{Date, Weekday};

use crate::converter::{is_supported, to_lunar};
use crate::festival::FestivalResolver;
use crate::label::label_for;

/// An inclusive span of selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateRange {
    /// First selectable date.
    pub begin: Date,
    /// Last selectable date.
    pub end: Date,
}

impl Default for DateRange {
    /// 1900-01-01 through 2100-12-31.
    fn default() -> Self {
        DateRange {
            begin: Date::MIN,
            end: Date::from_ymd(2100, 12, 31).unwrap_or(Date::MAX),
        }
    }
}

impl DateRange {
    /// Create a range, rejecting `begin > end`.
    pub fn new(begin: Date, end: Date) -> Result<Self> {
        nl_core::ensure!(begin <= end, "range begins {begin} after it ends {end}");
        Ok(DateRange { begin, end })
    }

    /// Return `true` if `date` lies within the range.
    pub fn contains(&self, date: Date) -> bool {
        (self.begin..=self.end).contains(&date)
    }

    /// Clamp `date` into the range.
    pub fn clamp(&self, date: Date) -> Date {
        date.clamp(self.begin, self.end)
    }
}

/// Options for [`MonthView::build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthViewOptions {
    /// Weekday shown in the first column.
    pub first_day: Weekday,
    /// Selectable dates; cells outside are flagged `in_range == false`.
    pub range: DateRange,
}

impl Default for MonthViewOptions {
    fn default() -> Self {
        MonthViewOptions {
            first_day: Weekday::Sunday,
            range: DateRange::default(),
        }
    }
}

/// Which month a cell belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Trailing day of the previous month.
    Previous,
    /// Day of the displayed month.
    Current,
    /// Leading day of the next month.
    Next,
}

/// One day on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// Gregorian date.
    pub date: Date,
    /// Month membership.
    pub kind: CellKind,
    /// Column, 0–6, counted from `first_day`.
    pub column: u8,
    /// Festival, lunar month or lunar day label; empty outside the
    /// conversion window.
    pub label: String,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Inside the configured [`DateRange`].
    pub in_range: bool,
}

/// A built month page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    year: u16,
    month: u8,
    first_day: Weekday,
    cells: Vec<DayCell>,
}

fn column_of(date: Date, first_day: Weekday) -> u8 {
    (date.weekday().days_from_sunday() + 7 - first_day.days_from_sunday()) % 7
}

impl MonthView {
    /// Build the page for `year`/`month` (1–12).
    ///
    /// The first row starts on `options.first_day` and is filled with the
    /// tail of the previous month; the last row is completed with the head
    /// of the next month.  Days that cannot be represented as a [`Date`]
    /// (before 1900-01-01 or after 2199-12-31) are left out, so `column`
    /// rather than position gives a cell's place in its row.
    ///
    /// # Errors
    /// [`Error::Date`](nl_core::Error::Date) if `year`/`month` is not a valid Gregorian month.
    pub fn build(year: u16, month: u8, options: &MonthViewOptions) -> Result<Self> {
        let first = Date::from_ymd(year, month, 1)?;
        let last = first.end_of_month();
        let lead = i32::from(column_of(first, options.first_day));
        let trail = 6 - i32::from(column_of(last, options.first_day));

        let resolver = FestivalResolver::standard();
        let mut cells = Vec::with_capacity(42);
        for offset in -lead..=(last - first) + trail {
            let Ok(date) = first.add_days(offset) else {
                continue;
            };
            let kind = if date < first {
                CellKind::Previous
            } else if date > last {
                CellKind::Next
            } else {
                CellKind::Current
            };
            let label = if is_supported(date) {
                label_for(resolver, &to_lunar(date)?)?
            } else {
                tracing::trace!(%date, "outside lunar conversion window, no label");
                String::new()
            };
            cells.push(DayCell {
                date,
                kind,
                column: column_of(date, options.first_day),
                label,
                is_weekend: date.weekday().is_weekend(),
                in_range: options.range.contains(date),
            });
        }
        tracing::debug!(year, month, cells = cells.len(), "month view built");
        Ok(MonthView {
            year,
            month,
            first_day: options.first_day,
            cells,
        })
    }

    /// Displayed year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Displayed month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Weekday of column 0.
    pub fn first_day(&self) -> Weekday {
        self.first_day
    }

    /// All cells in display order.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Cells of the displayed month only.
    pub fn current_days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter(|c| c.kind == CellKind::Current)
    }

    /// Return the cell for `date`, if shown on this page.
    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        self.cells.iter().find(|c| c.date == date)
    }

    /// Cells grouped into rows of up to seven.
    ///
    /// Rows split where a cell's column wraps back to 0.
    pub fn weeks(&self) -> Vec<&[DayCell]> {
        let mut rows = Vec::new();
        let mut start = 0;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > start && cell.column == 0 {
                rows.push(&self.cells[start..i]);
                start = i;
            }
        }
        if start < self.cells.len() {
            rows.push(&self.cells[start..]);
        }
        rows
    }
}

/// Return the `"yyyyMM"` cache key.
pub fn cache_key(year: u16, month: u8) -> String {
    format!("{}{}", zero_pad(u32::from(year), 4), zero_pad(u32::from(month), 2))
}

static GLOBAL: LazyLock<MonthCache> = LazyLock::new(MonthCache::new);

/// Built month pages keyed by `"yyyyMM"`.
///
/// Pages are immutable once built and handed out as `Arc`s, so repeated
/// requests for a month return the same allocation.  Only pages built with
/// one set of options should share a cache.
#[derive(Debug, Default)]
pub struct MonthCache {
    views: RwLock<HashMap<String, Arc<MonthView>>>,
}

impl MonthCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the process-wide cache used with default options.
    pub fn global() -> &'static MonthCache {
        &GLOBAL
    }

    /// Return the cached page for `year`/`month`, building it with
    /// `options` on a miss.
    pub fn get_or_build(
        &self,
        year: u16,
        month: u8,
        options: &MonthViewOptions,
    ) -> Result<Arc<MonthView>> {
        let key = cache_key(year, month);
        if let Some(view) = self.get(&key) {
            tracing::debug!(%key, "month cache hit");
            return Ok(view);
        }
        tracing::debug!(%key, "month cache miss");
        let built = Arc::new(MonthView::build(year, month, options)?);

        let mut views = self
            .views
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        // Another thread may have stored the same page meanwhile; keep the
        // first one.
        Ok(Arc::clone(views.entry(key).or_insert(built)))
    }

    /// Look up a page by its `"yyyyMM"` key.
    pub fn get(&self, key: &str) -> Option<Arc<MonthView>> {
        self.views
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    /// Number of cached pages.
    pub fn len(&self) -> usize {
        self.views
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every cached page.
    pub fn clear(&self) {
        self.views
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}
