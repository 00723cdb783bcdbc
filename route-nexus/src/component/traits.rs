use crate::application::{Context, EventContext};
use std::any::Any;

/// Event type for component interactions.
#[derive(Debug, Clone)]
pub enum Event {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize(u16, u16),
    FocusGained,
    FocusLost,
    Paste(String),
}

/// Action that a component can return after handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Navigate to a route by name.
    Navigate(String),
    /// Navigate to an app-relative path, matched or not.
    Push(String),
    Back,
    Forward,
    Quit,
    Noop,
}

/// The core Component trait for implementers.
pub trait Component: Send + Sync + 'static {
    /// Called once when the component tree is mounted.
    fn on_mount(&mut self, cx: &mut Context<Self>) {
        let _ = cx;
    }

    /// Called each time navigation makes this component the active view.
    fn on_enter(&mut self, cx: &mut Context<Self>) {
        let _ = cx;
    }

    /// Called when navigation moves away from this component.
    fn on_exit(&mut self, cx: &mut Context<Self>) {
        let _ = cx;
    }

    /// Called when the application is about to shut down.
    fn on_shutdown(&mut self, cx: &mut Context<Self>) {
        let _ = cx;
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>);

    /// Handle an event, returning an optional action.
    fn handle_event(&mut self, event: Event, cx: &mut EventContext<Self>) -> Option<Action> {
        let _ = event;
        let _ = cx;
        None
    }
}

/// A dyn-compatible version of the Component trait.
pub trait AnyComponent: Any + Send + Sync + 'static {
    fn on_mount_any(&mut self, cx: &mut Context<dyn AnyComponent>);
    fn on_shutdown_any(&mut self, cx: &mut Context<dyn AnyComponent>);
    fn render_any(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<dyn AnyComponent>);
    fn handle_event_any(&mut self, event: Event, cx: &mut EventContext<dyn AnyComponent>) -> Option<Action>;
}

impl<T: Component> AnyComponent for T {
    fn on_mount_any(&mut self, cx: &mut Context<dyn AnyComponent>) {
        let mut cx = cx.cast::<Self>();
        self.on_mount(&mut cx);
        self.on_enter(&mut cx);
    }

    fn on_shutdown_any(&mut self, cx: &mut Context<dyn AnyComponent>) {
        let mut cx = cx.cast::<Self>();
        self.on_shutdown(&mut cx);
    }

    fn render_any(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<dyn AnyComponent>) {
        let mut cx = cx.cast::<Self>();
        self.render(frame, &mut cx);
    }

    fn handle_event_any(&mut self, event: Event, cx: &mut EventContext<dyn AnyComponent>) -> Option<Action> {
        let mut cx = cx.cast::<Self>();
        self.handle_event(event, &mut cx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::AppContext;
    use ratatui::layout::Rect;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl Component for Recorder {
        fn on_mount(&mut self, _cx: &mut Context<Self>) {
            self.calls.push("mount");
        }

        fn on_enter(&mut self, _cx: &mut Context<Self>) {
            self.calls.push("enter");
        }

        fn on_exit(&mut self, _cx: &mut Context<Self>) {
            self.calls.push("exit");
        }

        fn on_shutdown(&mut self, _cx: &mut Context<Self>) {
            self.calls.push("shutdown");
        }

        fn render(&mut self, _frame: &mut ratatui::Frame, _cx: &mut Context<Self>) {}
    }

    fn context() -> Context<dyn AnyComponent> {
        Context::new(AppContext::headless(), Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_mount_enters_initial_view() {
        let mut recorder = Recorder::default();
        recorder.on_mount_any(&mut context());
        assert_eq!(recorder.calls, ["mount", "enter"]);
    }

    #[test]
    fn test_shutdown_runs_once_without_exit() {
        let mut recorder = Recorder::default();
        let mut cx = context();
        recorder.on_mount_any(&mut cx);
        recorder.on_shutdown_any(&mut cx);
        assert_eq!(recorder.calls, ["mount", "enter", "shutdown"]);
    }

    #[test]
    fn test_default_event_handler_ignores_events() {
        let mut recorder = Recorder::default();
        assert_eq!(recorder.handle_event_any(Event::FocusGained, &mut context()), None);
        assert!(recorder.calls.is_empty());
    }
}
