use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use route_nexus::{Action, Component, Context, Event, EventContext, RouteEntry};

use crate::pages::View;
use crate::routes::build_routes;

/// Landing page listing every registered map.
pub struct HomePage {
    selected: usize,
    routes: Vec<RouteEntry<View>>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            selected: 0,
            routes: build_routes(),
        }
    }
}

impl HomePage {
    fn selected_route(&self) -> Option<&RouteEntry<View>> {
        self.routes.get(self.selected)
    }
}

impl Component for HomePage {
    fn on_enter(&mut self, _cx: &mut Context<Self>) {
        tracing::debug!(selected = self.selected, "home entered");
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(cx.area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Map Explorer", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {} routes", self.routes.len()),
                Style::default().fg(Color::DarkGray),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .routes
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let is_selected = i == self.selected;
                let prefix = if is_selected { "> " } else { "  " };
                let style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![
                    Span::styled(prefix, style),
                    Span::styled(format!("{:<16}", entry.name()), style),
                    Span::styled(entry.path().to_string(), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .title(" Routes ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(list, chunks[1]);
    }

    fn handle_event(&mut self, event: Event, _cx: &mut EventContext<Self>) -> Option<Action> {
        match event {
            Event::Key(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    if self.selected > 0 {
                        self.selected -= 1;
                    } else {
                        self.selected = self.routes.len().saturating_sub(1);
                    }
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if self.selected + 1 < self.routes.len() {
                        self.selected += 1;
                    } else {
                        self.selected = 0;
                    }
                    None
                }
                KeyCode::Enter => self
                    .selected_route()
                    .map(|entry| Action::Navigate(entry.name().to_string())),
                _ => None,
            },
            _ => None,
        }
    }
}
