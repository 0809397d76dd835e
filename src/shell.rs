// 🖥️ Presentation Shell - the single owner of UI state
//
// Holds the filter state, the memoized visible subset, the grid cursor, the open detail
// record and the hero search box. Front-ends read from it and forward input events to it;
// every transition is a synchronous update.

use crate::catalog::Catalog;
use crate::filter::{filter_indices, Facet, FilterState, ALL_DISTRICTS, ALL_TYPES};
use crate::place::Place;
use crate::stats::CatalogStats;
use tracing::debug;

pub const EMPTY_STATE_TITLE: &str = "No places found matching your criteria";
pub const EMPTY_STATE_HINT: &str = "Try adjusting your search or filters";

/// Rows skipped by page up / page down
const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellPhase {
    Idle,
    FiltersActive,
    DetailOpen,
}

/// Which part of the page is in view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Hero,
    Listing,
}

pub struct Shell {
    catalog: Catalog,
    district_options: Vec<String>,
    type_options: Vec<String>,
    stats: CatalogStats,
    filter: FilterState,
    visible: Vec<usize>,
    cursor: Option<usize>,
    detail: Option<usize>,
    view: View,
    hero_input: String,
}

impl Shell {
    pub fn new(catalog: Catalog) -> Self {
        let district_options = catalog.district_options();
        let type_options = Catalog::type_options();
        let stats = CatalogStats::compute(catalog.places());

        let mut shell = Shell {
            catalog,
            district_options,
            type_options,
            stats,
            filter: FilterState::default(),
            visible: Vec::new(),
            cursor: None,
            detail: None,
            view: View::Hero,
            hero_input: String::new(),
        };
        shell.refresh();
        shell
    }

    // ========================================================================
    // READ ACCESS
    // ========================================================================

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn hero_input(&self) -> &str {
        &self.hero_input
    }

    pub fn district_options(&self) -> &[String] {
        &self.district_options
    }

    pub fn type_options(&self) -> &[String] {
        &self.type_options
    }

    pub fn phase(&self) -> ShellPhase {
        if self.detail.is_some() {
            ShellPhase::DetailOpen
        } else if self.filter.is_idle() {
            ShellPhase::Idle
        } else {
            ShellPhase::FiltersActive
        }
    }

    /// Places currently in the grid, in catalog order
    pub fn visible(&self) -> Vec<&Place> {
        let places = self.catalog.places();
        self.visible.iter().map(|&i| &places[i]).collect()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Place under the grid cursor
    pub fn selected_place(&self) -> Option<&Place> {
        self.cursor
            .and_then(|c| self.visible.get(c))
            .map(|&i| &self.catalog.places()[i])
    }

    /// Place shown in the detail view
    pub fn detail_place(&self) -> Option<&Place> {
        self.detail.map(|i| &self.catalog.places()[i])
    }

    pub fn results_line(&self) -> String {
        self.filter.describe(self.visible.len())
    }

    // ========================================================================
    // HERO BANNER
    // ========================================================================

    pub fn hero_push_char(&mut self, c: char) {
        self.hero_input.push(c);
    }

    pub fn hero_pop_char(&mut self) {
        self.hero_input.pop();
    }

    /// Hand the hero query to the listing and bring the listing into view.
    ///
    /// One-way: later edits to the listing's query do not touch the hero box.
    /// A blank query only scrolls.
    pub fn submit_hero_search(&mut self) {
        self.view = View::Listing;

        let query = self.hero_input.trim().to_string();
        if !query.is_empty() {
            debug!(query = %query, "hero search submitted");
            self.set_query(&query);
        }
    }

    pub fn show_hero(&mut self) {
        self.view = View::Hero;
    }

    pub fn show_listing(&mut self) {
        self.view = View::Listing;
    }

    // ========================================================================
    // FILTERS
    // ========================================================================

    pub fn set_query(&mut self, query: &str) {
        if self.filter.query != query {
            self.filter.query = query.to_string();
            self.refresh();
        }
    }

    pub fn push_query_char(&mut self, c: char) {
        self.filter.query.push(c);
        self.refresh();
    }

    pub fn pop_query_char(&mut self) {
        if self.filter.query.pop().is_some() {
            self.refresh();
        }
    }

    pub fn select_district(&mut self, label: &str) {
        let facet = Facet::from_label(label, ALL_DISTRICTS);
        if self.filter.district != facet {
            self.filter.district = facet;
            self.refresh();
        }
    }

    pub fn select_type(&mut self, label: &str) {
        let facet = Facet::from_label(label, ALL_TYPES);
        if self.filter.place_type != facet {
            self.filter.place_type = facet;
            self.refresh();
        }
    }

    /// Step the district selector through its options, wrapping around
    pub fn cycle_district(&mut self, forward: bool) {
        let next = step_option(&self.district_options, self.filter.district_label(), forward);
        self.select_district(&next);
    }

    /// Step the type selector through its options, wrapping around
    pub fn cycle_type(&mut self, forward: bool) {
        let next = step_option(&self.type_options, self.filter.type_label(), forward);
        self.select_type(&next);
    }

    pub fn reset_filters(&mut self) {
        if !self.filter.is_idle() {
            self.filter = FilterState::default();
            self.refresh();
        }
    }

    /// Recompute the visible subset; only called when the filter state changed
    fn refresh(&mut self) {
        self.visible = filter_indices(self.catalog.places(), &self.filter);
        self.cursor = if self.visible.is_empty() { None } else { Some(0) };
        debug!(
            district = self.filter.district_label(),
            place_type = self.filter.type_label(),
            query = %self.filter.query,
            visible = self.visible.len(),
            "filters applied"
        );
    }

    // ========================================================================
    // GRID CURSOR
    // ========================================================================

    pub fn next(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        });
    }

    pub fn previous(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        self.cursor = Some(match self.cursor {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn page_down(&mut self) {
        let len = self.visible.len();
        if len == 0 {
            return;
        }
        let i = self.cursor.map_or(0, |i| (i + PAGE_SIZE).min(len - 1));
        self.cursor = Some(i);
    }

    pub fn page_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        let i = self.cursor.map_or(0, |i| i.saturating_sub(PAGE_SIZE));
        self.cursor = Some(i);
    }

    pub fn first(&mut self) {
        if !self.visible.is_empty() {
            self.cursor = Some(0);
        }
    }

    pub fn last(&mut self) {
        if !self.visible.is_empty() {
            self.cursor = Some(self.visible.len() - 1);
        }
    }

    // ========================================================================
    // DETAIL VIEW
    // ========================================================================

    /// Open the detail view for the card under the cursor
    pub fn open_detail(&mut self) -> bool {
        match self.cursor.and_then(|c| self.visible.get(c)).copied() {
            Some(index) => {
                self.detail = Some(index);
                debug!(place = %self.catalog.places()[index].id, "detail opened");
                true
            }
            None => false,
        }
    }

    /// Open the detail view for a place by id, moving the cursor onto it when visible
    pub fn open_detail_by_id(&mut self, id: &str) -> bool {
        match self.catalog.position(id) {
            Some(index) => {
                if let Some(pos) = self.visible.iter().position(|&i| i == index) {
                    self.cursor = Some(pos);
                }
                self.detail = Some(index);
                true
            }
            None => false,
        }
    }

    /// Close the detail view; filters and cursor are left as they were
    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}

fn step_option(options: &[String], current: &str, forward: bool) -> String {
    if options.is_empty() {
        return current.to_string();
    }
    let len = options.len();
    let pos = options.iter().position(|o| o == current).unwrap_or(0);
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    options[next].clone()
}
