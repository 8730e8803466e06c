//! Frame layout: header, map with side panel, messages and footer.
//!
//! Rendering is a pure function of [`ViewModel`]; nothing here touches game
//! state or the runtime.
use std::collections::HashMap;

use game_core::{Position, StateSnapshot, VimKey};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListDirection, ListItem, Paragraph, Wrap},
};

use super::message::MessageLog;
use super::theme;
use super::view::{CutsceneView, ViewModel};

pub const SIDE_PANEL_WIDTH: u16 = 32;

pub fn render_frame(frame: &mut Frame, view: &ViewModel, message_panel_height: u16) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(message_panel_height),
            Constraint::Length(1),
        ])
        .split(frame.area());

    match &view.snapshot {
        Some(snapshot) => {
            render_header(frame, chunks[0], snapshot);
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Min(0), Constraint::Length(SIDE_PANEL_WIDTH)])
                .split(chunks[1]);
            render_map(frame, body[0], snapshot);
            render_side_panel(frame, body[1], snapshot, view.last_key.as_ref());
        }
        None => {
            let loading = Paragraph::new("Loading...")
                .block(Block::default().borders(Borders::ALL).title("Vim Quest"));
            frame.render_widget(loading, chunks[0]);
        }
    }

    render_messages(frame, chunks[2], &view.messages);
    render_footer(frame, chunks[3]);

    if let Some(cutscene) = &view.cutscene {
        render_cutscene(frame, chunks[1], cutscene);
    }
}

fn render_header(frame: &mut Frame, area: Rect, snapshot: &StateSnapshot) {
    let progress = &snapshot.progress;
    let mut spans = vec![
        Span::styled(
            format!(" {} ", snapshot.game_id),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("| {} ", snapshot.level_id)),
        Span::raw(format!(
            "| Zone {}/{}: {} ",
            progress.zone_index + 1,
            progress.zone_count,
            snapshot.zone_name
        )),
        Span::raw(format!(
            "| Keys {}/{}",
            progress.keys_collected, progress.keys_total
        )),
    ];
    if progress.level_complete {
        spans.push(Span::styled(" | Level complete", theme::gate(true)));
    }

    let header = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Vim Quest"));
    frame.render_widget(header, area);
}

fn render_map(frame: &mut Frame, area: Rect, snapshot: &StateSnapshot) {
    let map = Paragraph::new(map_lines(snapshot)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(snapshot.zone_name.as_str()),
    );
    frame.render_widget(map, area);
}

/// One line per map row. Later overlays win over earlier ones; the cursor
/// is drawn over everything.
pub fn map_lines(snapshot: &StateSnapshot) -> Vec<Line<'static>> {
    let mut overlays: HashMap<Position, (char, Style)> = HashMap::new();

    for label in &snapshot.text_labels {
        for (offset, ch) in label.text.chars().enumerate() {
            let position = Position::new(label.position.x + offset as i32, label.position.y);
            overlays.insert(position, (ch, theme::label()));
        }
    }
    for gate in &snapshot.secondary_gates {
        let glyph = if gate.is_open() { 'd' } else { 'D' };
        overlays.insert(gate.position(), (glyph, theme::gate(gate.is_open())));
    }
    let gate = &snapshot.gate;
    let glyph = if gate.is_open() { 'O' } else { 'X' };
    overlays.insert(gate.position(), (glyph, theme::gate(gate.is_open())));
    for collectible in &snapshot.collectible_keys {
        overlays.insert(collectible.position, ('*', theme::collectible()));
    }
    for key in &snapshot.available_keys {
        let glyph = key.key.chars().next().unwrap_or('?');
        overlays.insert(key.position, (glyph, theme::key()));
    }
    for npc in &snapshot.npcs {
        overlays.insert(npc.position, ('&', theme::npc()));
    }

    let dimensions = snapshot.map.dimensions();
    let cursor = snapshot.cursor.position();
    (0..dimensions.height as i32)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..dimensions.width as i32)
                .map(|x| {
                    let position = Position::new(x, y);
                    let (glyph, style) = overlays
                        .get(&position)
                        .copied()
                        .unwrap_or_else(|| theme::tile(snapshot.map.tile_at(position)));
                    let style = if position == cursor {
                        theme::cursor(snapshot.cursor.is_blinking())
                    } else {
                        style
                    };
                    Span::styled(glyph.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_side_panel(
    frame: &mut Frame,
    area: Rect,
    snapshot: &StateSnapshot,
    last_key: Option<&VimKey>,
) {
    let mut lines = vec![Line::from(Span::styled(
        snapshot.zone_description.clone(),
        Style::default().add_modifier(Modifier::ITALIC),
    ))];
    lines.push(Line::raw(""));

    lines.push(Line::raw("Keys to find:"));
    if snapshot.available_keys.is_empty() {
        lines.push(Line::raw("  (none)"));
    }
    for key in &snapshot.available_keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", key.key), theme::key()),
            Span::raw(key.name.clone()),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::raw(format!(
        "Collected: {}",
        snapshot.collected_keys.join(" ")
    )));
    if snapshot.collectible_keys_held > 0 || !snapshot.collectible_keys.is_empty() {
        lines.push(Line::raw(format!(
            "Spare keys held: {}",
            snapshot.collectible_keys_held
        )));
    }

    let gate_status = if snapshot.gate.is_open() {
        "Gate: open"
    } else {
        "Gate: closed"
    };
    lines.push(Line::styled(gate_status, theme::gate(snapshot.gate.is_open())));

    if let Some(key) = last_key {
        lines.push(Line::raw(""));
        lines.push(Line::from(vec![
            Span::raw("Last learned: "),
            Span::styled(key.key.clone(), theme::key()),
        ]));
        lines.push(Line::raw(key.description.clone()));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Zone"));
    frame.render_widget(panel, area);
}

fn render_messages(frame: &mut Frame, area: Rect, messages: &MessageLog) {
    let rows = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = messages
        .recent(rows)
        .map(|entry| ListItem::new(entry.display_text()).style(theme::message(entry.kind)))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Messages"))
        .direction(ListDirection::BottomToTop);
    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(vec![
        Span::raw("[hjkl/Arrows] Move | "),
        Span::raw("[Esc] Confirm | "),
        Span::raw("[q] Quit"),
    ]));
    frame.render_widget(footer, area);
}

fn render_cutscene(frame: &mut Frame, area: Rect, cutscene: &CutsceneView) {
    let popup = centered(area, 70, 60);
    let lines: Vec<Line> = cutscene
        .visible_lines()
        .iter()
        .map(|line| Line::raw(line.as_str()))
        .collect();

    let story = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(cutscene.title.as_str()),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(story, popup);
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

#[cfg(test)]
mod tests {
    use game_content::ContentFactory;
    use ratatui::{Terminal, backend::TestBackend};
    use runtime::{MessageKind, SelectGameUseCase};

    use super::*;
    use crate::presentation::message::MessageEntry;

    fn meadow() -> StateSnapshot {
        let content = ContentFactory::builtin().expect("builtin content");
        let selector = SelectGameUseCase::new(content.levels(), content.zones.clone());
        selector
            .select(Some("vim_quest"), Some("level_1"))
            .expect("level_1")
            .snapshot()
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn map_has_one_line_per_row() {
        let snapshot = meadow();
        let lines = map_lines(&snapshot);
        assert_eq!(lines.len(), snapshot.map.dimensions().height as usize);
        assert!(
            lines
                .iter()
                .all(|line| line.spans.len() == snapshot.map.dimensions().width as usize)
        );
    }

    #[test]
    fn cursor_overrides_everything_else() {
        let snapshot = meadow();
        let cursor = snapshot.cursor.position();
        let lines = map_lines(&snapshot);
        let span = &lines[cursor.y as usize].spans[cursor.x as usize];
        assert_eq!(span.style, theme::cursor(true));
    }

    #[test]
    fn steady_cursor_is_drawn_without_blink() {
        let mut snapshot = meadow();
        snapshot.cursor = snapshot.cursor.with_blinking(false);
        let cursor = snapshot.cursor.position();
        let lines = map_lines(&snapshot);
        let span = &lines[cursor.y as usize].spans[cursor.x as usize];
        assert_eq!(span.style, theme::cursor(false));
        assert!(!span.style.add_modifier.contains(Modifier::SLOW_BLINK));
    }

    #[test]
    fn frame_shows_zone_and_messages() {
        let mut view = ViewModel::new(8);
        view.snapshot = Some(meadow());
        view.push_message(MessageEntry::new("Welcome aboard", MessageKind::Info));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        terminal
            .draw(|frame| render_frame(frame, &view, 6))
            .expect("draw");

        let text = screen_text(&terminal);
        assert!(text.contains("Meadow"));
        assert!(text.contains("Welcome aboard"));
        assert!(text.contains("Keys 0/"));
    }

    #[test]
    fn cutscene_overlays_the_map() {
        let mut view = ViewModel::new(8);
        view.snapshot = Some(meadow());
        view.cutscene = Some(CutsceneView {
            title: "Dawn".to_string(),
            lines: vec!["The sun rises.".to_string(), "Hidden".to_string()],
            revealed: 1,
        });

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
        terminal
            .draw(|frame| render_frame(frame, &view, 6))
            .expect("draw");

        let text = screen_text(&terminal);
        assert!(text.contains("The sun rises."));
        assert!(!text.contains("Hidden"));
    }
}
