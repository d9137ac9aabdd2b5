//! Application State Management
//!
//! This module manages the global application state for the TUI: route
//! navigation with a back stack, per-screen state machines, and the key
//! dispatch that turns user input into state transitions.

use chrono::NaiveDateTime;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::backend::crossterm::EventHandler as InputEventHandler;
use tui_input::Input;

use crate::chart::ChartError;
use crate::config::AppConfig;
use crate::fetch::{Clock, ScreenState};
use crate::filter::{BookingTab, FilterSelection, TimeBucket};
use crate::model::{ScheduledShift, Shift, ShiftDetails};
use crate::store::{Action, DataStore};
use crate::tui::events::Event;
use crate::Error;

/// Navigation targets. Detail routes carry the id of the record they show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Shifts,
    ShiftDetails(String),
    Schedule,
    ScheduleDetails(String),
    Bookings,
    Filters,
    Wallet,
    Profile,
}

impl Route {
    /// Display name for headers and the status bar
    pub fn display_name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Shifts => "Shifts",
            Route::ShiftDetails(_) => "Shift Details",
            Route::Schedule => "Schedule",
            Route::ScheduleDetails(_) => "Shift Details",
            Route::Bookings => "My Bookings",
            Route::Filters => "Filters",
            Route::Wallet => "Wallet",
            Route::Profile => "Profile",
        }
    }

    /// The four top-level tab screens, in navigation order
    pub fn tabs() -> [Route; 4] {
        [Route::Home, Route::Shifts, Route::Schedule, Route::Profile]
    }

    /// Position within the tab bar, if this is a tab screen
    pub fn tab_index(&self) -> Option<usize> {
        Route::tabs().iter().position(|t| t == self)
    }
}

/// Home dashboard state: a loading gate plus the three chart sections
pub struct HomeState {
    pub state: ScreenState<()>,
    pub sections: Vec<crate::chart::ChartSection>,
    /// Which chart section owns arrow/enter input
    pub focus: usize,
}

impl HomeState {
    fn new(store: &DataStore, now: NaiveDateTime) -> Result<Self, ChartError> {
        Ok(Self {
            state: ScreenState::Idle,
            sections: vec![
                crate::mock::shifts_worked_section(&store.stats, now)?,
                crate::mock::distribution_section()?,
                crate::mock::earnings_section(&store.stats)?,
            ],
            focus: 0,
        })
    }
}

/// Shifts marketplace state
#[derive(Default)]
pub struct ShiftsState {
    pub state: ScreenState<Vec<Shift>>,
    pub selected: usize,
}

/// Booking confirmation flow on the shift detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingPrompt {
    #[default]
    Idle,
    Confirming,
    Booked,
}

/// Shift detail state
#[derive(Default)]
pub struct ShiftDetailsState {
    pub state: ScreenState<ShiftDetails>,
    pub prompt: BookingPrompt,
}

/// Schedule calendar state
pub struct ScheduleState {
    pub state: ScreenState<Vec<ScheduledShift>>,
    pub tab: TimeBucket,
    pub selected: usize,
}

impl Default for ScheduleState {
    fn default() -> Self {
        Self {
            state: ScreenState::Idle,
            tab: TimeBucket::All,
            selected: 0,
        }
    }
}

/// Schedule detail state
#[derive(Default)]
pub struct ScheduleDetailsState {
    pub state: ScreenState<ScheduledShift>,
}

/// Bookings list state (reads the store directly, no simulated fetch)
pub struct BookingsState {
    pub tab: BookingTab,
    pub selected: usize,
}

impl Default for BookingsState {
    fn default() -> Self {
        Self {
            tab: BookingTab::All,
            selected: 0,
        }
    }
}

/// Category focus on the Filters view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFocus {
    Search,
    Distance,
    Licenses,
    JobType,
    Day,
}

impl FilterFocus {
    pub const ALL: [FilterFocus; 5] = [
        FilterFocus::Search,
        FilterFocus::Distance,
        FilterFocus::Licenses,
        FilterFocus::JobType,
        FilterFocus::Day,
    ];

    fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Filters view state: a draft selection edited in place, committed on apply
pub struct FiltersState {
    pub draft: FilterSelection,
    pub focus: FilterFocus,
    pub option_cursor: usize,
    pub search_input: Input,
    pub editing_search: bool,
}

impl Default for FiltersState {
    fn default() -> Self {
        Self {
            draft: FilterSelection::new(),
            focus: FilterFocus::Search,
            option_cursor: 0,
            search_input: Input::default(),
            editing_search: false,
        }
    }
}

/// Profile view state
#[derive(Default)]
pub struct ProfileState {
    pub selected: usize,
}

/// Global application state
pub struct AppState {
    /// Current active route
    pub route: Route,
    /// Back stack for pushed routes
    pub stack: Vec<Route>,
    /// All domain data
    pub store: DataStore,
    /// The filter selection applied to the shifts list, once the user has
    /// committed one on the Filters view
    pub filters: Option<FilterSelection>,
    pub home: HomeState,
    pub shifts: ShiftsState,
    pub shift_details: ShiftDetailsState,
    pub schedule: ScheduleState,
    pub schedule_details: ScheduleDetailsState,
    pub bookings: BookingsState,
    pub filters_screen: FiltersState,
    pub profile: ProfileState,
    /// Status message to display
    pub status_message: Option<String>,
    /// Whether the app should quit
    pub should_quit: bool,
}

/// The TUI application
pub struct App {
    pub state: AppState,
    pub config: AppConfig,
    clock: Box<dyn Clock>,
}

impl App {
    /// Create the application over a seeded store
    pub fn new(
        config: AppConfig,
        store: DataStore,
        clock: Box<dyn Clock>,
    ) -> Result<Self, Error> {
        let now = clock.now();
        let home = HomeState::new(&store, now)?;
        let mut app = Self {
            state: AppState {
                route: Route::Home,
                stack: Vec::new(),
                store,
                filters: None,
                home,
                shifts: ShiftsState::default(),
                shift_details: ShiftDetailsState::default(),
                schedule: ScheduleState::default(),
                schedule_details: ScheduleDetailsState::default(),
                bookings: BookingsState::default(),
                filters_screen: FiltersState::default(),
                profile: ProfileState::default(),
                status_message: None,
                should_quit: false,
            },
            config,
            clock,
        };
        app.enter_route();
        Ok(app)
    }

    /// Current time from the injected clock
    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    pub fn set_status(&mut self, message: String) {
        self.state.status_message = Some(message);
    }

    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    /// The shifts visible on the marketplace list after applying filters
    pub fn visible_shifts(&self) -> Vec<Shift> {
        match self.state.shifts.state.loaded() {
            Some(shifts) => match &self.state.filters {
                Some(filters) => filters.apply(shifts).into_iter().cloned().collect(),
                None => shifts.clone(),
            },
            None => Vec::new(),
        }
    }

    /// The schedule rows visible under the active time bucket
    pub fn visible_schedule(&self) -> Vec<ScheduledShift> {
        match self.state.schedule.state.loaded() {
            Some(shifts) => {
                crate::filter::filter_schedule(shifts, self.state.schedule.tab, self.now())
                    .into_iter()
                    .cloned()
                    .collect()
            }
            None => Vec::new(),
        }
    }

    /// The bookings visible under the active bookings tab
    pub fn visible_bookings(&self) -> Vec<crate::model::BookedShift> {
        crate::filter::filter_bookings(&self.state.store.bookings, self.state.bookings.tab)
            .into_iter()
            .cloned()
            .collect()
    }

    // === Navigation ===

    /// Push a route onto the stack and enter it
    pub fn push_route(&mut self, route: Route) {
        let previous = std::mem::replace(&mut self.state.route, route);
        self.state.stack.push(previous);
        self.enter_route();
    }

    /// Pop back to the previous route, resetting the screen being left
    pub fn pop_route(&mut self) -> bool {
        match self.state.stack.pop() {
            Some(previous) => {
                self.leave_route();
                self.state.route = previous;
                true
            }
            None => false,
        }
    }

    /// Jump to a top-level tab screen, clearing the back stack
    pub fn go_to_tab(&mut self, route: Route) {
        if self.state.route == route {
            return;
        }
        self.leave_route();
        self.state.stack.clear();
        self.state.route = route;
        self.enter_route();
    }

    /// Cycle through the tab screens
    fn cycle_tab(&mut self, forward: bool) {
        let tabs = Route::tabs();
        let current = self.state.route.tab_index().unwrap_or(0);
        let next = if forward {
            (current + 1) % tabs.len()
        } else {
            (current + tabs.len() - 1) % tabs.len()
        };
        self.go_to_tab(tabs[next].clone());
    }

    /// Kick off whatever the route being entered needs
    fn enter_route(&mut self) {
        let latency = self.config.fetch_latency();
        match self.state.route.clone() {
            Route::Home => {
                self.state.home.state.start(self.clock.as_ref(), latency);
            }
            Route::Shifts => {
                self.state.shifts.state.start(self.clock.as_ref(), latency);
            }
            Route::ShiftDetails(_) => {
                self.state.shift_details.prompt = BookingPrompt::Idle;
                self.state
                    .shift_details
                    .state
                    .start(self.clock.as_ref(), latency);
            }
            Route::Schedule => {
                self.state.schedule.state.start(self.clock.as_ref(), latency);
            }
            Route::ScheduleDetails(_) => {
                self.state
                    .schedule_details
                    .state
                    .start(self.clock.as_ref(), latency);
            }
            Route::Filters => {
                // Edit a copy; nothing applies until the user commits
                let draft = self.state.filters.clone().unwrap_or_default();
                self.state.filters_screen = FiltersState {
                    search_input: Input::new(draft.search.clone()),
                    draft,
                    ..FiltersState::default()
                };
            }
            Route::Bookings | Route::Wallet | Route::Profile => {}
        }
    }

    /// Reset the state owned by the route being left. In-flight simulated
    /// fetches die with their screen.
    fn leave_route(&mut self) {
        match self.state.route {
            Route::ShiftDetails(_) => {
                self.state.shift_details.state.reset();
                self.state.shift_details.prompt = BookingPrompt::Idle;
            }
            Route::ScheduleDetails(_) => {
                self.state.schedule_details.state.reset();
            }
            Route::Shifts => self.state.shifts.state.reset(),
            Route::Schedule => self.state.schedule.state.reset(),
            Route::Home => self.state.home.state.reset(),
            _ => {}
        }
    }

    // === Event handling ===

    /// Handle one event. Returns `Ok(true)` when the app should quit.
    pub fn handle_event(&mut self, event: Event) -> Result<bool, Error> {
        match event {
            Event::Tick => self.on_tick(),
            Event::Key(key) => self.on_key(key)?,
            Event::Resize(_, _) => {}
        }
        Ok(self.state.should_quit)
    }

    /// Advance the active screen's fetch machine against the clock
    pub fn on_tick(&mut self) {
        let clock = self.clock.as_ref();
        match self.state.route.clone() {
            Route::Home => {
                self.state.home.state.tick(clock, || Some(()));
            }
            Route::Shifts => {
                let store = &self.state.store;
                self.state
                    .shifts
                    .state
                    .tick(clock, || Some(store.shift_list()));
            }
            Route::ShiftDetails(id) => {
                let store = &self.state.store;
                self.state
                    .shift_details
                    .state
                    .tick(clock, || store.shift_details(&id));
            }
            Route::Schedule => {
                let store = &self.state.store;
                self.state
                    .schedule
                    .state
                    .tick(clock, || Some(store.scheduled_list()));
            }
            Route::ScheduleDetails(id) => {
                let store = &self.state.store;
                self.state
                    .schedule_details
                    .state
                    .tick(clock, || store.scheduled_shift(&id));
            }
            _ => {}
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Result<(), Error> {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return Ok(());
        }

        // The search editor on the Filters view swallows everything except
        // its own exit keys
        if self.state.route == Route::Filters && self.state.filters_screen.editing_search {
            return self.on_search_key(key);
        }

        match key.code {
            KeyCode::Char('q') => {
                self.quit();
                return Ok(());
            }
            KeyCode::Esc => {
                self.handle_escape();
                return Ok(());
            }
            KeyCode::Tab => {
                if self.state.route.tab_index().is_some() {
                    self.cycle_tab(true);
                    return Ok(());
                }
            }
            KeyCode::BackTab => {
                if self.state.route.tab_index().is_some() {
                    self.cycle_tab(false);
                    return Ok(());
                }
            }
            KeyCode::Char(c @ '1'..='4') => {
                let index = (c as usize) - ('1' as usize);
                self.go_to_tab(Route::tabs()[index].clone());
                return Ok(());
            }
            KeyCode::Char('r') => {
                // Refresh is only meaningful on data screens
                if matches!(
                    self.state.route,
                    Route::Home
                        | Route::Shifts
                        | Route::Schedule
                        | Route::ShiftDetails(_)
                        | Route::ScheduleDetails(_)
                ) {
                    self.enter_route();
                    return Ok(());
                }
            }
            _ => {}
        }

        match self.state.route.clone() {
            Route::Home => self.on_key_home(key),
            Route::Shifts => self.on_key_shifts(key),
            Route::ShiftDetails(id) => self.on_key_shift_details(key, &id),
            Route::Schedule => self.on_key_schedule(key),
            Route::ScheduleDetails(_) => Ok(()),
            Route::Bookings => self.on_key_bookings(key),
            Route::Filters => self.on_key_filters(key),
            Route::Wallet => Ok(()),
            Route::Profile => self.on_key_profile(key),
        }
    }

    /// Escape: dismiss prompts first, then pop the stack
    fn handle_escape(&mut self) -> bool {
        if self.state.route_is_shift_details() {
            match self.state.shift_details.prompt {
                BookingPrompt::Confirming | BookingPrompt::Booked => {
                    self.state.shift_details.prompt = BookingPrompt::Idle;
                    return true;
                }
                BookingPrompt::Idle => {}
            }
        }
        self.pop_route()
    }

    fn on_key_home(&mut self, key: KeyEvent) -> Result<(), Error> {
        let home = &mut self.state.home;
        match key.code {
            KeyCode::Up => {
                home.focus = home.focus.saturating_sub(1);
            }
            KeyCode::Down => {
                home.focus = (home.focus + 1).min(home.sections.len().saturating_sub(1));
            }
            KeyCode::Left => {
                if let Some(section) = home.sections.get_mut(home.focus) {
                    section.move_cursor(-1);
                }
            }
            KeyCode::Right => {
                if let Some(section) = home.sections.get_mut(home.focus) {
                    section.move_cursor(1);
                }
            }
            KeyCode::Char('c') => {
                if let Some(section) = home.sections.get_mut(home.focus) {
                    section.next_kind();
                }
            }
            KeyCode::Enter => {
                if let Some(section) = home.sections.get_mut(home.focus) {
                    let press = section.press_cursor()?;
                    // The shifts chart drives the month badge and the
                    // current-month stat
                    if home.focus == 0 {
                        section.set_badge_value(format!("{}", press.value as u32));
                        self.state.store.stats.current_month_shifts = press.value as u32;
                    }
                }
            }
            KeyCode::Char('w') => self.push_route(Route::Wallet),
            KeyCode::Char('b') => self.push_route(Route::Bookings),
            _ => {}
        }
        Ok(())
    }

    fn on_key_shifts(&mut self, key: KeyEvent) -> Result<(), Error> {
        let visible = self.visible_shifts();
        match key.code {
            KeyCode::Up => {
                self.state.shifts.selected = self.state.shifts.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if !visible.is_empty() {
                    self.state.shifts.selected =
                        (self.state.shifts.selected + 1).min(visible.len() - 1);
                }
            }
            KeyCode::Enter => {
                if let Some(shift) = visible.get(self.state.shifts.selected) {
                    let id = shift.id.clone();
                    self.push_route(Route::ShiftDetails(id));
                }
            }
            KeyCode::Char('f') => {
                if let Some(shift) = visible.get(self.state.shifts.selected) {
                    let id = shift.id.clone();
                    self.apply_action(Action::ToggleShiftFavorite(id));
                }
            }
            KeyCode::Char('o') | KeyCode::Char('/') => {
                self.push_route(Route::Filters);
            }
            _ => {}
        }
        Ok(())
    }

    fn on_key_shift_details(&mut self, key: KeyEvent, id: &str) -> Result<(), Error> {
        match self.state.shift_details.prompt {
            BookingPrompt::Idle => match key.code {
                KeyCode::Char('b') => {
                    if self.state.shift_details.state.loaded().is_some() {
                        self.state.shift_details.prompt = BookingPrompt::Confirming;
                    }
                }
                KeyCode::Char('f') => {
                    self.apply_action(Action::ToggleShiftFavorite(id.to_string()));
                    // Refresh the loaded detail copy
                    let details = self.state.store.shift_details(id);
                    if let (Some(slot), Some(fresh)) =
                        (self.state.shift_details.state.loaded_mut(), details)
                    {
                        *slot = fresh;
                    }
                }
                _ => {}
            },
            BookingPrompt::Confirming => match key.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    self.apply_action(Action::BookShift(id.to_string()));
                    self.state.shift_details.prompt = BookingPrompt::Booked;
                    self.set_status("Shift booked - added to your schedule".to_string());
                }
                KeyCode::Char('n') => {
                    self.state.shift_details.prompt = BookingPrompt::Idle;
                }
                _ => {}
            },
            BookingPrompt::Booked => match key.code {
                KeyCode::Char('v') => {
                    self.state.shift_details.prompt = BookingPrompt::Idle;
                    self.push_route(Route::Bookings);
                }
                KeyCode::Enter => {
                    self.state.shift_details.prompt = BookingPrompt::Idle;
                    self.pop_route();
                }
                _ => {}
            },
        }
        Ok(())
    }

    fn on_key_schedule(&mut self, key: KeyEvent) -> Result<(), Error> {
        let visible = self.visible_schedule();
        match key.code {
            KeyCode::Left => {
                let tabs = TimeBucket::ALL;
                let pos = tabs
                    .iter()
                    .position(|t| *t == self.state.schedule.tab)
                    .unwrap_or(0);
                self.state.schedule.tab = tabs[(pos + tabs.len() - 1) % tabs.len()];
                self.state.schedule.selected = 0;
            }
            KeyCode::Right => {
                let tabs = TimeBucket::ALL;
                let pos = tabs
                    .iter()
                    .position(|t| *t == self.state.schedule.tab)
                    .unwrap_or(0);
                self.state.schedule.tab = tabs[(pos + 1) % tabs.len()];
                self.state.schedule.selected = 0;
            }
            KeyCode::Up => {
                self.state.schedule.selected = self.state.schedule.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if !visible.is_empty() {
                    self.state.schedule.selected =
                        (self.state.schedule.selected + 1).min(visible.len() - 1);
                }
            }
            KeyCode::Enter => {
                if let Some(shift) = visible.get(self.state.schedule.selected) {
                    let id = shift.id.clone();
                    self.push_route(Route::ScheduleDetails(id));
                }
            }
            KeyCode::Char('f') => {
                if let Some(shift) = visible.get(self.state.schedule.selected) {
                    let id = shift.id.clone();
                    self.apply_action(Action::ToggleScheduledFavorite(id));
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn on_key_bookings(&mut self, key: KeyEvent) -> Result<(), Error> {
        let visible = self.visible_bookings();
        match key.code {
            KeyCode::Left => {
                let tabs = BookingTab::ALL;
                let pos = tabs
                    .iter()
                    .position(|t| *t == self.state.bookings.tab)
                    .unwrap_or(0);
                self.state.bookings.tab = tabs[(pos + tabs.len() - 1) % tabs.len()];
                self.state.bookings.selected = 0;
            }
            KeyCode::Right => {
                let tabs = BookingTab::ALL;
                let pos = tabs
                    .iter()
                    .position(|t| *t == self.state.bookings.tab)
                    .unwrap_or(0);
                self.state.bookings.tab = tabs[(pos + 1) % tabs.len()];
                self.state.bookings.selected = 0;
            }
            KeyCode::Up => {
                self.state.bookings.selected = self.state.bookings.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if !visible.is_empty() {
                    self.state.bookings.selected =
                        (self.state.bookings.selected + 1).min(visible.len() - 1);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn on_key_filters(&mut self, key: KeyEvent) -> Result<(), Error> {
        let screen = &mut self.state.filters_screen;
        match key.code {
            KeyCode::Up => {
                screen.focus = screen.focus.prev();
                screen.option_cursor = 0;
            }
            KeyCode::Down => {
                screen.focus = screen.focus.next();
                screen.option_cursor = 0;
            }
            KeyCode::Left => {
                screen.option_cursor = screen.option_cursor.saturating_sub(1);
            }
            KeyCode::Right => {
                let len = filter_option_count(screen);
                if len > 0 {
                    screen.option_cursor = (screen.option_cursor + 1).min(len - 1);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => match screen.focus {
                FilterFocus::Search => {
                    screen.editing_search = true;
                }
                FilterFocus::Distance => {
                    screen.draft.distance.select_index(screen.option_cursor);
                }
                FilterFocus::Licenses => {
                    screen.draft.licenses.toggle_index(screen.option_cursor);
                }
                FilterFocus::JobType => {
                    screen.draft.job_type.select_index(screen.option_cursor);
                }
                FilterFocus::Day => {
                    screen.draft.day.select_index(screen.option_cursor);
                }
            },
            KeyCode::Char('a') => {
                // Commit the draft and return to the shifts list
                screen.draft.search = screen.search_input.value().to_string();
                self.state.filters = Some(screen.draft.clone());
                self.state.shifts.selected = 0;
                self.pop_route();
                self.set_status("Filters applied".to_string());
            }
            KeyCode::Char('x') => {
                screen.draft.reset();
                screen.search_input = Input::default();
                screen.option_cursor = 0;
            }
            _ => {}
        }
        Ok(())
    }

    fn on_search_key(&mut self, key: KeyEvent) -> Result<(), Error> {
        let screen = &mut self.state.filters_screen;
        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                screen.editing_search = false;
                screen.draft.search = screen.search_input.value().to_string();
            }
            _ => {
                screen
                    .search_input
                    .handle_event(&crossterm::event::Event::Key(key));
            }
        }
        Ok(())
    }

    fn on_key_profile(&mut self, key: KeyEvent) -> Result<(), Error> {
        let rows = crate::tui::screens::profile::setting_rows();
        match key.code {
            KeyCode::Up => {
                self.state.profile.selected = self.state.profile.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                self.state.profile.selected =
                    (self.state.profile.selected + 1).min(rows.len().saturating_sub(1));
            }
            KeyCode::Enter => {
                if let Some(row) = rows.get(self.state.profile.selected) {
                    match row.target {
                        Some(ref route) => self.push_route(route.clone()),
                        None => {
                            self.set_status(format!("{} is not available yet", row.title));
                        }
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Run one action through the store reducer and refresh any loaded
    /// copies that mirror the store
    fn apply_action(&mut self, action: Action) {
        let store = std::mem::take(&mut self.state.store);
        self.state.store = store.apply(action);

        let store = &self.state.store;
        if let Some(list) = self.state.shifts.state.loaded_mut() {
            *list = store.shift_list();
        }
        if let Some(list) = self.state.schedule.state.loaded_mut() {
            *list = store.scheduled_list();
        }
    }
}

impl AppState {
    fn route_is_shift_details(&self) -> bool {
        matches!(self.route, Route::ShiftDetails(_))
    }
}

fn filter_option_count(screen: &FiltersState) -> usize {
    match screen.focus {
        FilterFocus::Search => 0,
        FilterFocus::Distance => screen.draft.distance.options().len(),
        FilterFocus::Licenses => screen.draft.licenses.options().len(),
        FilterFocus::JobType => screen.draft.job_type.options().len(),
        FilterFocus::Day => screen.draft.day.options().len(),
    }
}
