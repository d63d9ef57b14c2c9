//! Event script replay: `jobtrack replay`.
//!
//! Each non-blank line of the script is one JSON `UiEvent`, for example:
//!
//! ```text
//! {"event":"route_changed","fragment":"#/dashboard"}
//! {"event":"filter_changed","field":"keyword","value":"engineer"}
//! {"event":"toggle_save","id":2}
//! {"event":"route_changed","fragment":"#/saved"}
//! ```
//!
//! Lines starting with `//` are comments.

use anyhow::{Context, Result};
use std::path::Path;

use jobtrack::controller::{BufferSurface, NavigationController, UiEvent};
use jobtrack::saved::SavedJobs;
use jobtrack::storage::{KeyValueStore, MemoryStore};

use super::super::Cli;
use super::{controller, document, open_tracker};

pub fn parse_script(content: &str) -> Result<Vec<UiEvent>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with("//")
        })
        .map(|(index, line)| {
            serde_json::from_str(line.trim())
                .with_context(|| format!("Invalid event on line {}", index + 1))
        })
        .collect()
}

pub fn cmd_replay(
    project_dir: &Path,
    cli: &Cli,
    file: &Path,
    ephemeral: bool,
    as_document: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read event script {}", file.display()))?;
    let events = parse_script(&content)?;

    let tracker = open_tracker(project_dir, cli)?;
    let hamburger = tracker.config.hamburger;

    if ephemeral {
        let saved = SavedJobs::with_key(MemoryStore::new(), tracker.saved.key().to_string());
        let controller = controller(tracker.catalog, saved, hamburger);
        run(controller, events, as_document)
    } else {
        let controller = controller(tracker.catalog, tracker.saved, hamburger);
        run(controller, events, as_document)
    }
}

fn run<S: KeyValueStore>(
    mut controller: NavigationController<S, BufferSurface>,
    events: Vec<UiEvent>,
    as_document: bool,
) -> Result<()> {
    // A page always loads before the first user event.
    if !matches!(events.first(), Some(UiEvent::RouteChanged { .. })) {
        controller.start(None)?;
    }

    let count = events.len();
    for event in events {
        controller.handle(event)?;
    }
    tracing::info!(events = count, route = %controller.current_route(), "Replayed event script");

    if as_document {
        println!("{}", document(&controller)?);
        return Ok(());
    }

    println!("{}", controller.surface().body);
    if let Some(modal) = &controller.surface().modal {
        println!("{}", modal);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script_skips_blank_and_comment_lines() {
        let script = r##"
// open the saved page
{"event":"route_changed","fragment":"#/saved"}

{"event":"toggle_save","id":3}
"##;
        let events = parse_script(script).unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], UiEvent::ToggleSave { id: 3 });
    }

    #[test]
    fn test_parse_script_reports_line_number() {
        let err = parse_script("{\"event\":\"close_modal\"}\n{\"event\":\"fly\"}").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
