//! Glyphs and colors for map cells and message kinds.
use game_core::TileType;
use ratatui::style::{Color, Modifier, Style};
use runtime::MessageKind;

pub fn tile(tile: TileType) -> (char, Style) {
    let (glyph, color) = match tile.name {
        "grass" => ('.', Color::Green),
        "water" => ('~', Color::Blue),
        "dirt" => (',', Color::Yellow),
        "tree" => ('T', Color::LightGreen),
        "stone" => ('o', Color::Gray),
        "path" => ('=', Color::Yellow),
        "wall" => ('#', Color::DarkGray),
        "bridge" => ('b', Color::LightYellow),
        "sand" => (':', Color::LightYellow),
        "ruins" => ('%', Color::Gray),
        "field" => ('"', Color::LightGreen),
        "ramp_up" => ('^', Color::White),
        "ramp_down" => ('v', Color::White),
        "gate_floor" => ('_', Color::DarkGray),
        _ => ('?', Color::Magenta),
    };
    (glyph, Style::default().fg(color))
}

pub fn cursor(is_blinking: bool) -> Style {
    let style = Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD);
    if is_blinking {
        style.add_modifier(Modifier::SLOW_BLINK)
    } else {
        style
    }
}

pub fn key() -> Style {
    Style::default()
        .fg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

pub fn collectible() -> Style {
    Style::default().fg(Color::LightYellow)
}

pub fn npc() -> Style {
    Style::default()
        .fg(Color::LightMagenta)
        .add_modifier(Modifier::BOLD)
}

pub fn gate(open: bool) -> Style {
    let color = if open { Color::LightGreen } else { Color::Red };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

pub fn label() -> Style {
    Style::default().fg(Color::White).add_modifier(Modifier::ITALIC)
}

pub fn message(kind: MessageKind) -> Style {
    match kind {
        MessageKind::Info => Style::default(),
        MessageKind::Success => Style::default().fg(Color::LightGreen),
        MessageKind::Warning => Style::default().fg(Color::Yellow),
        MessageKind::Dialogue => Style::default().fg(Color::LightMagenta),
    }
}
