// 🧭 Navigator - hands URLs to the browser environment
//
// Opening is fire-and-forget: the opener is spawned and reaped on a background thread.
// Map actions that fail to open retry once with the coordinate-only fallback link.

use crate::error::NavigationError;
use crate::links::{self, LinkAction};
use crate::place::Place;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use tracing::{error, info, warn};

pub trait Navigator {
    fn open(&self, url: &str) -> Result<(), NavigationError>;
}

// ============================================================================
// SYSTEM NAVIGATOR
// ============================================================================

/// Opens URLs with the platform's default handler
#[derive(Debug, Clone)]
pub struct SystemNavigator {
    enabled: bool,
}

impl SystemNavigator {
    /// A disabled navigator only logs the URLs it is asked to open
    pub fn new(enabled: bool) -> Self {
        SystemNavigator { enabled }
    }

    fn opener_command(url: &str) -> Result<Command, NavigationError> {
        let command = if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", ""]).arg(url);
            cmd
        } else if cfg!(unix) {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        } else {
            return Err(NavigationError::Unsupported(url.to_string()));
        };
        Ok(command)
    }
}

impl Navigator for SystemNavigator {
    fn open(&self, url: &str) -> Result<(), NavigationError> {
        if !self.enabled {
            info!(url, "navigation disabled, not opening");
            return Ok(());
        }

        launch(Self::opener_command(url)?, url)?;
        info!(url, "opened");
        Ok(())
    }
}

/// Spawn the opener and reap it on a background thread so no zombie outlives the call.
/// The exit status arrives after the caller has moved on, so a failing opener is only logged.
fn launch(mut command: Command, url: &str) -> Result<JoinHandle<Option<ExitStatus>>, NavigationError> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|source| NavigationError::Launch {
            url: url.to_string(),
            source,
        })?;

    let url = url.to_string();
    Ok(thread::spawn(move || match child.wait() {
        Ok(status) => {
            if !status.success() {
                warn!(url = %url, %status, "opener exited with failure");
            }
            Some(status)
        }
        Err(err) => {
            warn!(url = %url, error = %err, "could not wait for opener");
            None
        }
    }))
}

// ============================================================================
// ACTION DISPATCH
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Opened(String),
    /// The primary link failed and the fallback map query was opened instead
    FellBack(String),
    /// Nothing to open for this action (no phone number)
    Unavailable,
    Failed,
}

impl NavigationOutcome {
    /// Status line for the front-ends
    pub fn message(&self) -> String {
        match self {
            NavigationOutcome::Opened(url) => format!("Opened {}", url),
            NavigationOutcome::FellBack(url) => format!("Opened fallback {}", url),
            NavigationOutcome::Unavailable => "No phone number for this place".to_string(),
            NavigationOutcome::Failed => "Could not open link".to_string(),
        }
    }
}

/// Open the link behind `action` for `place`, never surfacing an error
pub fn perform<N: Navigator + ?Sized>(
    navigator: &N,
    place: &Place,
    action: LinkAction,
) -> NavigationOutcome {
    let url = match links::url_for(place, action) {
        Some(url) => url,
        None => return NavigationOutcome::Unavailable,
    };

    match navigator.open(&url) {
        Ok(()) => NavigationOutcome::Opened(url),
        Err(err) => match action {
            LinkAction::Directions | LinkAction::Map => {
                warn!(place = %place.id, error = %err, "map link failed, trying fallback");
                let fallback = links::fallback_map_url(&place.coordinates);
                match navigator.open(&fallback) {
                    Ok(()) => NavigationOutcome::FellBack(fallback),
                    Err(err) => {
                        error!(place = %place.id, error = %err, "fallback map link failed");
                        NavigationOutcome::Failed
                    }
                }
            }
            LinkAction::Website | LinkAction::Call => {
                error!(place = %place.id, ?action, error = %err, "failed to open link");
                NavigationOutcome::Failed
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::tests::sample_place;
    use crate::place::{Coordinates, PlaceType};
    use std::cell::RefCell;

    /// Records every URL and rejects those starting with one of `failing`
    struct RecordingNavigator {
        opened: RefCell<Vec<String>>,
        failing: Vec<&'static str>,
    }

    impl RecordingNavigator {
        fn new(failing: Vec<&'static str>) -> Self {
            RecordingNavigator {
                opened: RefCell::new(Vec::new()),
                failing,
            }
        }
    }

    impl Navigator for RecordingNavigator {
        fn open(&self, url: &str) -> Result<(), NavigationError> {
            self.opened.borrow_mut().push(url.to_string());
            if self.failing.iter().any(|prefix| url.starts_with(prefix)) {
                return Err(NavigationError::Unsupported(url.to_string()));
            }
            Ok(())
        }
    }

    fn place() -> Place {
        let mut place = sample_place("rk", "RK Beach", "Visakhapatnam", PlaceType::Beach);
        place.coordinates = Coordinates::new(17.7142, 83.3237);
        place
    }

    #[test]
    fn test_directions_opened() {
        let nav = RecordingNavigator::new(vec![]);
        let outcome = perform(&nav, &place(), LinkAction::Directions);
        assert_eq!(
            outcome,
            NavigationOutcome::Opened("https://www.google.com/maps/dir//17.7142,83.3237".to_string())
        );
        assert_eq!(nav.opened.borrow().len(), 1);
    }

    #[test]
    fn test_map_failure_uses_fallback() {
        let nav = RecordingNavigator::new(vec!["https://www.google.com/maps"]);
        let outcome = perform(&nav, &place(), LinkAction::Map);
        assert_eq!(
            outcome,
            NavigationOutcome::FellBack("https://maps.google.com/?q=17.7142,83.3237".to_string())
        );
        assert_eq!(nav.opened.borrow().len(), 2);
    }

    #[test]
    fn test_website_failure_has_no_fallback() {
        let nav = RecordingNavigator::new(vec!["https://www.google.com/search"]);
        let outcome = perform(&nav, &place(), LinkAction::Website);
        assert_eq!(outcome, NavigationOutcome::Failed);
        assert_eq!(nav.opened.borrow().len(), 1);
    }

    #[test]
    fn test_everything_failing() {
        let nav = RecordingNavigator::new(vec!["https://"]);
        assert_eq!(perform(&nav, &place(), LinkAction::Directions), NavigationOutcome::Failed);
    }

    #[test]
    fn test_call_without_phone() {
        let nav = RecordingNavigator::new(vec![]);
        assert_eq!(perform(&nav, &place(), LinkAction::Call), NavigationOutcome::Unavailable);
        assert!(nav.opened.borrow().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_launched_opener_is_reaped() {
        let handle = launch(Command::new("true"), "https://example.org").unwrap();
        let status = handle.join().unwrap();
        assert!(status.is_some_and(|status| status.success()));

        let handle = launch(Command::new("false"), "https://example.org").unwrap();
        let status = handle.join().unwrap();
        assert!(status.is_some_and(|status| !status.success()));
    }

    #[test]
    fn test_missing_opener_is_a_launch_error() {
        let err = launch(Command::new("discover-andhra-no-such-opener"), "https://example.org").unwrap_err();
        assert!(matches!(err, NavigationError::Launch { .. }));
    }

    #[test]
    fn test_disabled_system_navigator_succeeds_without_spawning() {
        let nav = SystemNavigator::new(false);
        assert!(nav.open("https://example.org").is_ok());
    }
}
