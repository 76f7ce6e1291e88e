//! Location and status display.

use super::data::{description, menu_options};
use super::types::Location;
use crate::core::game_state::PlayerState;
use crate::io::OutputSink;

/// Everything shown on arriving at (or returning to) a location menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationView {
    pub title: String,
    pub description: &'static str,
    pub options: Vec<&'static str>,
}

impl LocationView {
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("\n=== {} ===", self.title),
            self.description.to_string(),
            "\nWhat would you like to do?".to_string(),
        ];
        lines.extend(
            self.options
                .iter()
                .enumerate()
                .map(|(i, label)| format!("{}: {}", i + 1, label)),
        );
        lines
    }
}

pub fn render_location(location: Location) -> LocationView {
    LocationView {
        title: location.name().to_uppercase(),
        description: description(location),
        options: menu_options(location).iter().map(|o| o.label).collect(),
    }
}

pub fn show_location(location: Location, out: &mut impl OutputSink) {
    for line in render_location(location).lines() {
        out.write_line(&line);
    }
}

pub fn status_lines(player: &PlayerState) -> Vec<String> {
    vec![
        format!("\n=== {}'s Status ===", player.name),
        format!("Health: {}", player.health),
        format!("Gold: {}", player.gold),
        format!("Location: {}", player.location),
    ]
}

pub fn show_status(player: &PlayerState, out: &mut impl OutputSink) {
    for line in status_lines(player) {
        out.write_line(&line);
    }
}
