use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use discover_andhra::links::PlaceLinks;
use discover_andhra::{
    filter_places, logging, perform, Catalog, CatalogStats, Config, FilterState, LinkAction,
    NavigationOutcome, Place, SystemNavigator, ALL_DISTRICTS, ALL_TYPES,
};
use discover_andhra::shell::{EMPTY_STATE_HINT, EMPTY_STATE_TITLE};
use std::path::PathBuf;
use tracing::info;

/// Discover temples, churches, mosques and tourist places across Andhra Pradesh and Telangana
#[derive(Parser, Debug)]
#[command(name = "discover-andhra", version, about)]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON or CSV catalog to use instead of the builtin dataset
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive browser (default)
    Browse {
        /// Start on the listing with this search already applied
        #[arg(short, long)]
        query: Option<String>,
        /// Start with the detail view of this place open
        #[arg(long, value_name = "ID")]
        open: Option<String>,
    },
    #[command(flatten)]
    Report(Report),
}

/// One-shot commands that print and exit
#[derive(Subcommand, Debug)]
enum Report {
    /// Print the places matching the given filters
    List {
        #[arg(short, long, default_value = ALL_DISTRICTS)]
        district: String,
        #[arg(short = 't', long = "type", default_value = ALL_TYPES)]
        place_type: String,
        #[arg(short, long, default_value = "")]
        query: String,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show every detail of one place
    Show { id: String },
    /// Catalog statistics by group
    Stats,
    /// Open a link for a place: directions, map, website or call
    Open { id: String, action: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(args.config.as_deref());
    let catalog_path = args.catalog.clone().or_else(|| config.catalog.path.clone());

    let command = args.command.unwrap_or(Command::Browse {
        query: None,
        open: None,
    });

    match command {
        Command::Browse { query, open } => {
            logging::init_for_terminal_ui(&config.logging).context("Failed to open log file")?;
            let catalog = load_catalog(catalog_path)?;
            run_ui_mode(catalog, &config, query, open)
        }
        Command::Report(report) => {
            logging::init_stderr(&config.logging);
            let catalog = load_catalog(catalog_path)?;
            run_report(report, &catalog, &config)
        }
    }
}

fn load_catalog(path: Option<PathBuf>) -> Result<Catalog> {
    let catalog = Catalog::load_or_builtin(path.as_deref()).context("Failed to load catalog")?;
    info!(places = catalog.len(), districts = catalog.districts().len(), "catalog ready");
    Ok(catalog)
}

fn find<'a>(catalog: &'a Catalog, id: &str) -> Result<&'a Place> {
    catalog
        .get(id)
        .with_context(|| format!("No place with id '{}'", id))
}

fn run_report(report: Report, catalog: &Catalog, config: &Config) -> Result<()> {
    match report {
        Report::List {
            district,
            place_type,
            query,
            json,
        } => {
            let filter = FilterState::new(&district, &place_type, &query);
            let visible = filter_places(catalog.places(), &filter);

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
                return Ok(());
            }

            for line in listing_lines(&filter, &visible) {
                println!("{}", line);
            }
        }
        Report::Show { id } => print_place(find(catalog, &id)?),
        Report::Stats => {
            let stats = CatalogStats::compute(catalog.places());
            println!("{} places", stats.total);
            for (value, caption) in stats.counters() {
                println!("  {:>6}  {}", value, caption);
            }
        }
        Report::Open { id, action } => {
            let place = find(catalog, &id)?;
            let action = match LinkAction::parse(&action) {
                Some(action) => action,
                None => bail!("Unknown action '{}' (use directions, map, website or call)", action),
            };

            let navigator = SystemNavigator::new(config.navigation.enabled);
            let outcome = perform(&navigator, place, action);
            println!("{}", outcome.message());
            if matches!(outcome, NavigationOutcome::Failed | NavigationOutcome::Unavailable) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// Results line, then one row per place or the empty-state message
fn listing_lines(filter: &FilterState, visible: &[&Place]) -> Vec<String> {
    let mut lines = vec![filter.describe(visible.len())];
    if visible.is_empty() {
        lines.push(EMPTY_STATE_TITLE.to_string());
        lines.push(EMPTY_STATE_HINT.to_string());
    }
    lines.extend(visible.iter().map(|place| {
        format!(
            "  {:<28} {:<36} {:<18} {}",
            place.id,
            place.name,
            place.place_type.label(),
            place.district
        )
    }));
    lines
}

fn print_place(place: &Place) {
    let links = PlaceLinks::for_place(place);

    println!("{}", place.name);
    println!("  {} · {} · {} District", place.place_type, place.state.name(), place.district);
    println!("  {}", place.location_details);
    println!();
    println!("  {}", place.description);
    println!();
    println!("  Tags:             {}", place.tags.join(", "));
    println!("  Best time:        {}", place.best_time_to_visit);
    println!("  Timings:          {}", place.timings);
    println!("  Entry fee:        {}", place.entry_fee);
    println!("  Nearest railway:  {}", place.nearest_railway_station);
    println!("  Nearest airport:  {}", place.nearest_airport);
    if let Some(phone) = place.phone() {
        println!("  Phone:            {}", phone);
    }
    println!("  Coordinates:      {}, {}", place.coordinates.lat, place.coordinates.lng);
    println!();
    println!("  Directions:       {}", links.directions);
    println!("  Map:              {}", links.map);
    println!("  {:<17} {}", format!("{}:", links.website.caption()), links.website.url());
}

#[cfg(feature = "tui")]
fn run_ui_mode(
    catalog: Catalog,
    config: &Config,
    query: Option<String>,
    open: Option<String>,
) -> Result<()> {
    use discover_andhra::ui;
    use discover_andhra::Shell;

    let mut shell = Shell::new(catalog);
    if let Some(query) = query {
        for c in query.chars() {
            shell.hero_push_char(c);
        }
        shell.submit_hero_search();
    }
    if let Some(id) = open {
        shell.show_listing();
        if !shell.open_detail_by_id(&id) {
            bail!("No place with id '{}'", id);
        }
    }

    let navigator = Box::new(SystemNavigator::new(config.navigation.enabled));
    let mut app = ui::App::new(shell, navigator);
    ui::run_ui(&mut app)?;

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(
    _catalog: Catalog,
    _config: &Config,
    _query: Option<String>,
    _open: Option<String>,
) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web UI: cargo run --bin discover-server --features server");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_browse() {
        let args = Args::try_parse_from(["discover-andhra"]).unwrap();
        assert!(args.command.is_none());

        let args = Args::try_parse_from(["discover-andhra", "browse", "--open", "araku-valley"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Browse { open: Some(ref id), .. }) if id == "araku-valley"
        ));
    }

    #[test]
    fn test_one_shot_commands_parse_as_reports() {
        let args = Args::try_parse_from(["discover-andhra", "stats"]).unwrap();
        assert!(matches!(args.command, Some(Command::Report(Report::Stats))));

        let args = Args::try_parse_from(["discover-andhra", "list", "--type", "Temple"]).unwrap();
        match args.command {
            Some(Command::Report(Report::List { district, place_type, query, json })) => {
                assert_eq!(district, ALL_DISTRICTS);
                assert_eq!(place_type, "Temple");
                assert!(query.is_empty());
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_listing_lines_show_empty_state() {
        let catalog = Catalog::builtin().unwrap();
        let filter = FilterState::new(ALL_DISTRICTS, ALL_TYPES, "xyz-no-match");
        let visible = filter_places(catalog.places(), &filter);

        let lines = listing_lines(&filter, &visible);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], EMPTY_STATE_TITLE);
        assert_eq!(lines[2], EMPTY_STATE_HINT);
    }

    #[test]
    fn test_listing_lines_one_row_per_place() {
        let catalog = Catalog::builtin().unwrap();
        let filter = FilterState::new(ALL_DISTRICTS, "Mosque", "");
        let visible = filter_places(catalog.places(), &filter);

        let lines = listing_lines(&filter, &visible);
        assert_eq!(lines.len(), visible.len() + 1);
        assert!(lines.iter().any(|line| line.contains("Mecca Masjid")));
    }
}
