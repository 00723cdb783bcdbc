use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use route_nexus::{Action, AppRouter, Component, Context, Event, EventContext};

use crate::pages::{View, Views};

/// Root component: the location bar, the routed view, and the key hints.
///
/// The router is handed in at construction and owned here; nothing else holds it.
pub struct Root {
    router: AppRouter<View>,
    views: Views,
}

impl Root {
    pub fn new(router: AppRouter<View>) -> Self {
        Self {
            router,
            views: Views::new(),
        }
    }

    /// Run a router change, firing `on_exit`/`on_enter` if the location moved.
    fn transition<F>(&mut self, cx: &mut Context<Self>, change: F)
    where
        F: FnOnce(&mut AppRouter<View>) -> bool,
    {
        let from_view = self.router.current_view();
        let from = self.router.current().clone();

        if !change(&mut self.router) || self.router.current() == &from {
            return;
        }

        if let Some(view) = from_view {
            self.views.exit(view, cx);
        }
        if let Some(view) = self.router.current_view() {
            self.views.enter(view, cx);
        }
    }

    fn apply(&mut self, action: Action, cx: &mut Context<Self>) -> Option<Action> {
        match action {
            Action::Navigate(name) => {
                self.transition(cx, |router| match router.navigate_to(&name) {
                    Ok(_) => true,
                    Err(e) => {
                        tracing::warn!(error = %e, "navigation failed");
                        false
                    }
                });
                None
            }
            Action::Push(path) => {
                self.transition(cx, |router| {
                    router.push(&path);
                    true
                });
                None
            }
            Action::Back => {
                self.transition(cx, AppRouter::back);
                None
            }
            Action::Forward => {
                self.transition(cx, AppRouter::forward);
                None
            }
            Action::Quit => Some(Action::Quit),
            Action::Noop => None,
        }
    }

    fn render_location_bar(&self, frame: &mut ratatui::Frame, area: Rect) {
        let status = match self.router.current_route() {
            Some(entry) => Span::styled(entry.name().to_string(), Style::default().fg(Color::Green)),
            None => Span::styled("no match", Style::default().fg(Color::Red)),
        };
        let line = Line::from(vec![
            Span::styled(self.router.current_url(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            status,
        ]);
        let bar = Paragraph::new(line).block(
            Block::default()
                .title(format!(" {} ", self.router.root()))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(bar, area);
    }

    fn render_not_found(&self, frame: &mut ratatui::Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::styled("404", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Line::from(format!("No route matches {}", self.router.current().path())),
            Line::from(""),
            Line::styled("h home  Esc back", Style::default().fg(Color::DarkGray)),
        ];
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title(" Not Found ").borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}

impl Component for Root {
    fn on_mount(&mut self, cx: &mut Context<Self>) {
        self.views.mount(cx);
        tracing::info!(url = %self.router.current_url(), routes = self.router.routes().len(), "mounted");
    }

    fn on_enter(&mut self, cx: &mut Context<Self>) {
        if let Some(view) = self.router.current_view() {
            self.views.enter(view, cx);
        }
    }

    fn on_shutdown(&mut self, cx: &mut Context<Self>) {
        self.views.shutdown(cx);
    }

    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(cx.area);

        self.render_location_bar(frame, chunks[0]);

        match self.router.current_view() {
            Some(view) => self.views.render(view, frame, &mut cx.with_area(chunks[1])),
            None => self.render_not_found(frame, chunks[1]),
        }

        let footer = Paragraph::new(" Esc back │ Tab forward │ h home │ [ ] prev/next │ q quit ")
            .style(Style::default().bg(Color::Cyan).fg(Color::Black))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[2]);
    }

    fn handle_event(&mut self, event: Event, cx: &mut EventContext<Self>) -> Option<Action> {
        let current = self.router.current_view();

        let action = match &event {
            Event::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Backspace => Some(Action::Back),
                KeyCode::Tab => Some(Action::Forward),
                KeyCode::Char('q') => Some(Action::Quit),
                KeyCode::Char('h') if current.is_none() => Some(Action::Navigate("home".to_string())),
                _ => None,
            },
            _ => None,
        };

        let action = match (action, current) {
            (Some(action), _) => Some(action),
            (None, Some(view)) => self.views.handle_event(view, event, cx),
            (None, None) => None,
        };

        action.and_then(|action| self.apply(action, cx))
    }
}
