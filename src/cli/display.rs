//! Text rendering of rolled dice.

use crossterm::style::{style, Color, Stylize};

use crate::dice::{Category, RolledDie};

/// Terminal colour of a die category.
#[must_use]
pub fn category_color(category: Category) -> Color {
    match category {
        Category::Easy => Color::Green,
        Category::Hard => Color::Red,
        Category::Medium => Color::Yellow,
    }
}

/// Render one die: its face in the category colour, or `Category: Face`
/// when colour is off.
#[must_use]
pub fn render_die(die: &RolledDie, color: bool) -> String {
    if color {
        style(die.face).with(category_color(die.category)).to_string()
    } else {
        format!("{}: {}", die.category, die.face)
    }
}
