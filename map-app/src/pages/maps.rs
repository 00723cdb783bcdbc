//! Map pages.
//!
//! Each map is an opaque view as far as routing is concerned. These pages only
//! show which route is mounted; map rendering lives elsewhere.

use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use route_nexus::{Action, Event};

use crate::routes::step_from;

/// Path pushed by `x` to show the not-found fallback.
pub const UNREGISTERED_PATH: &str = "/nosuchmap";

/// Keys shared by every map page.
fn map_keys(name: &str, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => match key.code {
            KeyCode::Char('h') => Some(Action::Navigate("home".to_string())),
            KeyCode::Char(']') => step_from(name, 1).map(Action::Navigate),
            KeyCode::Char('[') => step_from(name, -1).map(Action::Navigate),
            KeyCode::Char('x') => Some(Action::Push(UNREGISTERED_PATH.to_string())),
            _ => None,
        },
        _ => None,
    }
}

fn render_map(frame: &mut ratatui::Frame, area: Rect, title: &str, name: &str, path: &str, blurb: &str, visits: u32) {
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("route  ", Style::default().fg(Color::DarkGray)),
            Span::styled(name.to_string(), Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("path   ", Style::default().fg(Color::DarkGray)),
            Span::raw(path.to_string()),
        ]),
        Line::from(vec![
            Span::styled("visits ", Style::default().fg(Color::DarkGray)),
            Span::raw(visits.to_string()),
        ]),
        Line::from(""),
        Line::styled(blurb.to_string(), Style::default().add_modifier(Modifier::ITALIC)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {title} "))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    frame.render_widget(paragraph, area);
}

macro_rules! map_page {
    ($page:ident, $title:literal, $name:literal, $path:literal, $blurb:literal) => {
        #[derive(Default)]
        pub struct $page {
            visits: u32,
        }

        impl $page {
            pub const NAME: &'static str = $name;
            pub const PATH: &'static str = $path;
        }

        impl route_nexus::Component for $page {
            fn on_enter(&mut self, _cx: &mut route_nexus::Context<Self>) {
                self.visits += 1;
                tracing::debug!(view = Self::NAME, visits = self.visits, "map entered");
            }

            fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut route_nexus::Context<Self>) {
                render_map(frame, cx.area, $title, Self::NAME, Self::PATH, $blurb, self.visits);
            }

            fn handle_event(
                &mut self,
                event: Event,
                _cx: &mut route_nexus::EventContext<Self>,
            ) -> Option<Action> {
                map_keys(Self::NAME, event)
            }
        }
    };
}

map_page!(ClusterMapPage, "Cluster Map", "ClusterMap", "/clustermap", "Point clusters are drawn by the map layer.");
map_page!(VectorMapPage, "Vector Map", "VectorMap", "/vectormap", "Vector tiles are drawn by the map layer.");
map_page!(FeatureMapPage, "Feature Map", "FeatureMap", "/featuremap", "Feature selection is handled by the map layer.");
map_page!(MeasureMapPage, "Measure Map", "MeasureMap", "/measuremap", "Distance and area tools live in the map layer.");
map_page!(NewMeasureMapPage, "New Measure Map", "NewMeasureMap", "/newmeasuremap", "Reworked measuring tools live in the map layer.");
map_page!(BaseMapPage, "Base Map", "BaseMap", "/basemap", "The base tile layer is drawn by the map layer.");
map_page!(TestMapPage, "Test Map", "TestMap", "/testmap", "Scratch page for trying map settings.");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::build_routes;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use route_nexus::{AppContext, Component, Context, EventContext};

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn test_page_constants_match_route_table() {
        let routes = build_routes();
        let pages = [
            (ClusterMapPage::NAME, ClusterMapPage::PATH),
            (VectorMapPage::NAME, VectorMapPage::PATH),
            (FeatureMapPage::NAME, FeatureMapPage::PATH),
            (MeasureMapPage::NAME, MeasureMapPage::PATH),
            (NewMeasureMapPage::NAME, NewMeasureMapPage::PATH),
            (BaseMapPage::NAME, BaseMapPage::PATH),
            (TestMapPage::NAME, TestMapPage::PATH),
        ];
        for (name, path) in pages {
            let entry = routes.iter().find(|e| e.name() == name).unwrap();
            assert_eq!(entry.path(), path);
        }
    }

    #[test]
    fn test_map_keys() {
        let mut page = VectorMapPage::default();
        let mut cx = EventContext::<VectorMapPage>::new(AppContext::headless(), Rect::new(0, 0, 80, 24));

        assert_eq!(page.handle_event(key('h'), &mut cx), Some(Action::Navigate("home".into())));
        assert_eq!(page.handle_event(key(']'), &mut cx), Some(Action::Navigate("FeatureMap".into())));
        assert_eq!(page.handle_event(key('['), &mut cx), Some(Action::Navigate("ClusterMap".into())));
        assert_eq!(page.handle_event(key('x'), &mut cx), Some(Action::Push("/nosuchmap".into())));
        assert_eq!(page.handle_event(key('z'), &mut cx), None);
    }

    #[test]
    fn test_on_enter_counts_visits() {
        let mut page = BaseMapPage::default();
        let mut cx = Context::<BaseMapPage>::new(AppContext::headless(), Rect::new(0, 0, 80, 24));
        page.on_enter(&mut cx);
        page.on_enter(&mut cx);
        assert_eq!(page.visits, 2);
    }
}
