use crate::model::{Department, Intern, Performance, Placement, PlacementStatus, SheetStatus};

/// Rows-per-page options offered by both tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    TwentyFive,
    Fifty,
    Hundred,
}

impl PageSize {
    pub const ALL: &'static [PageSize] = &[PageSize::TwentyFive, PageSize::Fifty, PageSize::Hundred];

    pub fn rows(&self) -> usize {
        match self {
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "25" => Some(PageSize::TwentyFive),
            "50" => Some(PageSize::Fifty),
            "100" => Some(PageSize::Hundred),
            _ => None,
        }
    }
}

/// Transient selections that parameterize the tracker table. Never part of
/// record data.
#[derive(Debug, Clone)]
pub struct InternViewState {
    pub query: String,
    pub sheet_status: Option<SheetStatus>,
    pub performance: Option<Performance>,
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for InternViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            sheet_status: None,
            performance: None,
            page: 1,
            page_size: PageSize::TwentyFive,
        }
    }
}

impl InternViewState {
    /// Switching row count always jumps back to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

/// Transient selections for the placement directory.
#[derive(Debug, Clone)]
pub struct PlacementViewState {
    pub query: String,
    pub department: Option<Department>,
    pub status: Option<PlacementStatus>,
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for PlacementViewState {
    fn default() -> Self {
        Self {
            query: String::new(),
            department: None,
            status: None,
            page: 1,
            page_size: PageSize::TwentyFive,
        }
    }
}

impl PlacementViewState {
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page > 1 {
            self.page -= 1;
        }
    }
}

/// One page of a filtered table.
#[derive(Debug, Clone)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    pub total_pages: usize,
    pub total_matching: usize,
}

/// Filters, sorts, and pages the tracker roster. Sort order is descending by
/// the id sequence, i.e. newest first.
pub fn intern_view(records: &[Intern], view: &InternViewState) -> ListView<Intern> {
    paginate(&matching_interns(records, view), view.page, view.page_size)
}

/// The full filtered and sorted tracker row set, unpaged. This is what an
/// export covers.
pub fn filtered_interns(records: &[Intern], view: &InternViewState) -> Vec<Intern> {
    matching_interns(records, view)
        .into_iter()
        .cloned()
        .collect()
}

/// Filters, sorts, and pages the placement directory. Sort order is
/// descending by start date.
pub fn placement_view(records: &[Placement], view: &PlacementViewState) -> ListView<Placement> {
    paginate(&matching_placements(records, view), view.page, view.page_size)
}

/// The full filtered and sorted directory row set, unpaged.
pub fn filtered_placements(records: &[Placement], view: &PlacementViewState) -> Vec<Placement> {
    matching_placements(records, view)
        .into_iter()
        .cloned()
        .collect()
}

fn matching_interns<'a>(records: &'a [Intern], view: &InternViewState) -> Vec<&'a Intern> {
    let mut matching: Vec<&Intern> = records.iter().filter(|i| matches_intern(i, view)).collect();
    matching.sort_by(|a, b| b.id.sequence().cmp(&a.id.sequence()));
    matching
}

fn matching_placements<'a>(
    records: &'a [Placement],
    view: &PlacementViewState,
) -> Vec<&'a Placement> {
    let mut matching: Vec<&Placement> = records
        .iter()
        .filter(|p| matches_placement(p, view))
        .collect();
    matching.sort_by(|a, b| b.start_date.cmp(&a.start_date));
    matching
}

fn matches_intern(intern: &Intern, view: &InternViewState) -> bool {
    if let Some(status) = view.sheet_status {
        if intern.sheet_status != status {
            return false;
        }
    }
    if let Some(performance) = view.performance {
        if intern.performance != performance {
            return false;
        }
    }

    let query = view.query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    let segregation = intern
        .segregation
        .map(|s| s.display_name())
        .unwrap_or_default();
    intern.name.to_lowercase().contains(&query)
        || intern.email.to_lowercase().contains(&query)
        || segregation.to_lowercase().contains(&query)
}

fn matches_placement(placement: &Placement, view: &PlacementViewState) -> bool {
    if let Some(department) = view.department {
        if placement.department != department {
            return false;
        }
    }
    if let Some(status) = view.status {
        if placement.status != status {
            return false;
        }
    }

    let query = view.query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    placement.name.to_lowercase().contains(&query)
        || placement.email.to_lowercase().contains(&query)
        || placement.mentor.to_lowercase().contains(&query)
        || placement
            .department
            .display_name()
            .to_lowercase()
            .contains(&query)
}

fn paginate<T: Clone>(matching: &[&T], page: usize, page_size: PageSize) -> ListView<T> {
    let size = page_size.rows();
    let total_pages = (matching.len().div_ceil(size)).max(1);
    let start = page.saturating_sub(1) * size;
    let rows = matching
        .iter()
        .skip(start)
        .take(size)
        .map(|record| (*record).clone())
        .collect();

    ListView {
        rows,
        total_pages,
        total_matching: matching.len(),
    }
}
