use crate::links::{website_target, LinkAction};
use crate::navigator::{perform, Navigator};
use crate::palette::{badge_style, BadgeStyle};
use crate::place::Place;
use crate::shell::{Shell, ShellPhase, View, EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
use crate::stats::HERO_HEADLINES;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Wrap},
    Frame, Terminal,
};
use std::borrow::Cow;
use std::io;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Search,
}

pub struct App {
    pub shell: Shell,
    pub state: TableState,
    pub focus: Focus,
    pub status: Option<String>,
    navigator: Box<dyn Navigator>,
}

impl App {
    pub fn new(shell: Shell, navigator: Box<dyn Navigator>) -> Self {
        let mut app = Self {
            shell,
            state: TableState::default(),
            focus: Focus::Grid,
            status: None,
            navigator,
        };
        app.sync_selection();
        app
    }

    fn sync_selection(&mut self) {
        self.state.select(self.shell.cursor());
    }

    fn open_link(&mut self, action: LinkAction) {
        if let Some(place) = self.shell.detail_place() {
            let outcome = perform(self.navigator.as_ref(), place, action);
            self.status = Some(outcome.message());
        }
    }

    /// Apply one key press; returns false when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        let keep_running = match (self.shell.view(), self.shell.phase()) {
            (View::Hero, _) => self.handle_hero_key(key),
            (View::Listing, ShellPhase::DetailOpen) => self.handle_detail_key(key),
            (View::Listing, _) => match self.focus {
                Focus::Search => self.handle_search_key(key),
                Focus::Grid => self.handle_grid_key(key),
            },
        };

        self.sync_selection();
        keep_running
    }

    fn handle_hero_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc => return false,
            KeyCode::Enter => self.shell.submit_hero_search(),
            KeyCode::Tab | KeyCode::Down => self.shell.show_listing(),
            KeyCode::Backspace => self.shell.hero_pop_char(),
            KeyCode::Char(c) => self.shell.hero_push_char(c),
            _ => {}
        }
        true
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Down => self.focus = Focus::Grid,
            KeyCode::Backspace => self.shell.pop_query_char(),
            KeyCode::Char(c) => self.shell.push_query_char(c),
            _ => {}
        }
        true
    }

    fn handle_grid_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Enter => {
                self.shell.open_detail();
            }
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('h') => self.shell.show_hero(),
            KeyCode::Char('d') => self.shell.cycle_district(true),
            KeyCode::Char('D') => self.shell.cycle_district(false),
            KeyCode::Char('t') => self.shell.cycle_type(true),
            KeyCode::Char('T') => self.shell.cycle_type(false),
            KeyCode::Char('c') => self.shell.reset_filters(),
            KeyCode::Down | KeyCode::Char('j') => self.shell.next(),
            KeyCode::Up | KeyCode::Char('k') => self.shell.previous(),
            KeyCode::PageDown => self.shell.page_down(),
            KeyCode::PageUp => self.shell.page_up(),
            KeyCode::Home => self.shell.first(),
            KeyCode::End => self.shell.last(),
            _ => {}
        }
        true
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('x') => {
                self.shell.close_detail();
                self.status = None;
            }
            KeyCode::Char('q') => return false,
            KeyCode::Char('g') => self.open_link(LinkAction::Directions),
            KeyCode::Char('m') => self.open_link(LinkAction::Map),
            KeyCode::Char('w') => self.open_link(LinkAction::Website),
            KeyCode::Char('p') => self.open_link(LinkAction::Call),
            _ => {}
        }
        true
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    info!("terminal UI closed");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if !app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let area = f.size();
    match app.shell.view() {
        View::Hero => render_hero(f, area, app),
        View::Listing => render_listing(f, area, app),
    }
}

fn badge_span(label: &str, style: BadgeStyle) -> Span<'static> {
    let (br, bg, bb) = style.background;
    let (fr, fg, fb) = style.foreground;
    Span::styled(
        format!(" {} ", label),
        Style::default()
            .bg(Color::Rgb(br, bg, bb))
            .fg(Color::Rgb(fr, fg, fb))
            .add_modifier(Modifier::BOLD),
    )
}

fn key_hint(key: &'static str, text: impl Into<Cow<'static, str>>) -> [Span<'static>; 2] {
    [
        Span::styled(key, Style::default().fg(Color::Yellow)),
        Span::raw(text),
    ]
}

// ============================================================================
// HERO BANNER
// ============================================================================

fn render_hero(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(7),    // Title
            Constraint::Length(3), // Search box
            Constraint::Length(4), // Headline figures
            Constraint::Length(3), // Hints
        ])
        .split(area);

    let gold = Style::default().fg(Color::Rgb(212, 160, 23)).add_modifier(Modifier::BOLD);
    let title = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("Discover ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("Andhra States", gold),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Explore sacred temples, historic churches, magnificent mosques, and breathtaking \
             tourist destinations across the cultural heart of South India",
            Style::default().fg(Color::Gray),
        )),
    ];
    let title = Paragraph::new(title)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Yellow)));
    f.render_widget(title, chunks[0]);

    let input = if app.shell.hero_input().is_empty() {
        Span::styled(
            "Search temples, churches, mosques, or places...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(app.shell.hero_input().to_string())
    };
    let search = Paragraph::new(Line::from(vec![Span::raw("🔍 "), input, Span::raw("▏")])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Search "),
    );
    f.render_widget(search, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(chunks[2]);
    for (column, (value, caption)) in columns.iter().zip(HERO_HEADLINES.iter()) {
        let figure = Paragraph::new(vec![
            Line::from(Span::styled(*value, gold)),
            Line::from(Span::styled(*caption, Style::default().fg(Color::Gray))),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(figure, *column);
    }

    let mut hints = vec![];
    hints.extend(key_hint("Enter", " Explore | "));
    hints.extend(key_hint("Tab", " Browse all | "));
    hints.extend(key_hint("Esc", " Quit"));
    let hints = Paragraph::new(Line::from(hints))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(hints, chunks[3]);
}

// ============================================================================
// LISTING
// ============================================================================

fn render_listing(f: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Statistics
            Constraint::Length(3), // Search and selectors
            Constraint::Length(1), // Results line
            Constraint::Min(0),    // Grid
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_stats(f, chunks[0], app);
    render_controls(f, chunks[1], app);

    let results = Paragraph::new(app.shell.results_line())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(results, chunks[2]);

    if app.shell.visible_len() == 0 {
        render_empty_state(f, chunks[3]);
    } else {
        render_table(f, chunks[3], app);
    }

    render_status_bar(f, chunks[4], app);

    if let Some(place) = app.shell.detail_place() {
        render_detail(f, centered(area, 80, 85), place, app.status.as_deref());
    }
}

fn render_stats(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        "Explore Amazing Places  ",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )];
    for (i, (value, caption)) in app.shell.stats().counters().into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" │ "));
        }
        spans.push(Span::styled(
            value,
            Style::default().fg(Color::Rgb(212, 160, 23)).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(" {}", caption)));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));
    f.render_widget(header, area);
}

fn render_controls(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let query = &app.shell.filter().query;
    let editing = app.focus == Focus::Search;
    let search_text = if query.is_empty() && !editing {
        Span::styled(
            "Search places by name, district, or tags...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(format!("{}{}", query, if editing { "▏" } else { "" }))
    };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if editing {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            })
            .title(" / Search "),
    );
    f.render_widget(search, columns[0]);

    let district = Paragraph::new(app.shell.filter().district_label().to_string())
        .block(Block::default().borders(Borders::ALL).title(" d District "));
    f.render_widget(district, columns[1]);

    let place_type = Paragraph::new(app.shell.filter().type_label().to_string())
        .block(Block::default().borders(Borders::ALL).title(" t Type "));
    f.render_widget(place_type, columns[2]);
}

fn render_empty_state(f: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(""),
        Line::from("🔍"),
        Line::from(Span::styled(EMPTY_STATE_TITLE, Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(EMPTY_STATE_HINT, Style::default().fg(Color::DarkGray))),
    ];
    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Places "));
    f.render_widget(paragraph, area);
}

fn render_table(f: &mut Frame, area: Rect, app: &mut App) {
    let header_cells = ["Name", "Type", "District", "State", "Best Time", "Tags"]
        .iter()
        .map(|h| Cell::from(*h).style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)));

    let header = Row::new(header_cells)
        .style(Style::default().bg(Color::DarkGray))
        .height(1);

    let rows: Vec<Row> = app
        .shell
        .visible()
        .into_iter()
        .map(|place| {
            let (shown, hidden) = place.card_tags();
            let mut tags = shown.join(", ");
            if hidden > 0 {
                tags.push_str(&format!(" +{} more", hidden));
            }

            Row::new(vec![
                Cell::from(truncate(&place.name, 34)),
                Cell::from(Line::from(badge_span(
                    place.place_type.label(),
                    badge_style(place.place_type),
                ))),
                Cell::from(truncate(&place.district, 20)),
                Cell::from(place.state.code()),
                Cell::from(truncate(&place.best_time_to_visit, 22)),
                Cell::from(tags),
            ])
            .height(1)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(36),
            Constraint::Length(22),
            Constraint::Length(22),
            Constraint::Length(6),
            Constraint::Length(24),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Places "),
    )
    .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol("→ ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.shell.cursor().map(|i| i + 1).unwrap_or(0);
    let total = app.shell.visible_len();

    let mut status_spans = vec![Span::styled(
        format!(" Card: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(place) = app.shell.selected_place() {
        status_spans.push(Span::styled(
            truncate(&place.name, 30),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    }

    if app.shell.phase() == ShellPhase::FiltersActive {
        status_spans.push(Span::raw(" | "));
        status_spans.extend(key_hint("c", " Clear filters"));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.extend(key_hint("Enter", " Details | "));
    status_spans.extend(key_hint("/", " Search | "));
    status_spans.extend(key_hint("d/t", " District/Type | "));
    status_spans.extend(key_hint("h", " Home | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(Line::from(status_spans))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::White)));

    f.render_widget(status_bar, area);
}

// ============================================================================
// DETAIL VIEW
// ============================================================================

/// Key hints for the links of the open place; the website caption follows the contact field
fn detail_actions(place: &Place) -> Line<'static> {
    let mut actions = vec![Span::raw("  ")];
    for (key, action) in [("g", LinkAction::Directions), ("m", LinkAction::Map)] {
        actions.extend(key_hint(key, format!(" {} | ", action.label())));
    }
    actions.extend(key_hint("w", format!(" {}", website_target(place).caption())));
    if let Some(phone) = place.phone() {
        actions.push(Span::raw(" | "));
        actions.extend(key_hint("p", format!(" {} {}", LinkAction::Call.label(), phone)));
    }
    Line::from(actions)
}

fn render_detail(f: &mut Frame, area: Rect, place: &Place, status: Option<&str>) {
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let section = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    let field = |name: &'static str, value: &str| {
        Line::from(vec![Span::styled(format!("  {}: ", name), label), Span::raw(value.to_string())])
    };

    let mut content = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            badge_span(place.place_type.label(), badge_style(place.place_type)),
            Span::raw("  "),
            Span::styled(place.state.name(), Style::default().fg(Color::Gray)),
        ]),
        Line::from(""),
        field("District", &format!("{} District", place.district)),
        field("Location", &place.location_details),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", place.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        field("Tags", &place.tags.join(", ")),
        field("Image", place.display_image()),
        Line::from(""),
        Line::from(Span::styled("  VISIT INFORMATION", section)),
        field("Best Time", &place.best_time_to_visit),
        field("Timings", &place.timings),
        field("Entry Fee", &place.entry_fee),
        Line::from(""),
        Line::from(Span::styled("  HOW TO REACH", section)),
        field("Nearest Railway", &place.nearest_railway_station),
        field("Nearest Airport", &place.nearest_airport),
        field("Coordinates", &format!("{}, {}", place.coordinates.lat, place.coordinates.lng)),
        Line::from(""),
    ];

    content.push(detail_actions(place));

    if let Some(status) = status {
        content.push(Line::from(""));
        content.push(Line::from(Span::styled(
            format!("  {}", status),
            Style::default().fg(Color::Green),
        )));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "  Press Esc to close",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let detail = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", place.name)),
    );

    f.render_widget(Clear, area);
    f.render_widget(detail, area);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::error::NavigationError;
    use crate::place::tests::sample_place;
    use crate::place::PlaceType;

    struct NoopNavigator;

    impl Navigator for NoopNavigator {
        fn open(&self, _url: &str) -> Result<(), NavigationError> {
            Ok(())
        }
    }

    fn new_app() -> App {
        App::new(Shell::new(Catalog::builtin().unwrap()), Box::new(NoopNavigator))
    }

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_hero_search_seeds_listing() {
        let mut app = new_app();
        type_text(&mut app, "beach");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.shell.view(), View::Listing);
        assert_eq!(app.shell.filter().query, "beach");
        assert_eq!(app.state.selected(), app.shell.cursor());
    }

    #[test]
    fn test_search_focus_edits_query() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "qd");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focus, Focus::Grid);
        assert_eq!(app.shell.filter().query, "q");
    }

    #[test]
    fn test_detail_open_link_and_close() {
        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.shell.phase(), ShellPhase::DetailOpen);

        press(&mut app, KeyCode::Char('g'));
        assert!(app.status.as_deref().unwrap_or_default().starts_with("Opened https://www.google.com/maps/dir//"));

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.shell.phase(), ShellPhase::Idle);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app();
        assert!(!press(&mut app, KeyCode::Esc));

        let mut app = new_app();
        press(&mut app, KeyCode::Tab);
        assert!(!press(&mut app, KeyCode::Char('q')));
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_detail_actions_use_link_labels() {
        let app = new_app();
        let place = app.shell.catalog().get("tirumala-venkateswara").unwrap();
        let text = line_text(&detail_actions(place));

        assert!(text.contains("g Get Directions | "));
        assert!(text.contains("m View on Map | "));
        assert!(text.contains(&format!("w {}", website_target(place).caption())));
    }

    #[test]
    fn test_detail_actions_offer_call_only_with_phone() {
        let mut place = sample_place("x", "Kondapalli Fort", "Krishna", PlaceType::Fort);
        assert!(!line_text(&detail_actions(&place)).contains("Call"));

        place.contact_info = Some("0866-2574299".to_string());
        assert!(line_text(&detail_actions(&place)).contains("p Call 0866-2574299"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("Araku", 10), "Araku");
        assert_eq!(truncate("Sri Venkateswara Swamy Temple", 10), "Sri Ven...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }
}
