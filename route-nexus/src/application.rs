//! Terminal application loop.
//!
//! The loop owns the terminal and a root component. It redraws when asked to
//! and forwards crossterm events to the root until the root returns `Quit`.

use crate::component::traits::{Action, AnyComponent, Component, Event};
use crate::error::TerminalSnafu;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use snafu::prelude::*;
use std::io::{self, stdout};
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

type SharedRoot = Arc<Mutex<dyn AnyComponent>>;
type Term = Terminal<CrosstermBackend<io::Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Handle shared by the setup closure and every component context.
#[derive(Clone)]
pub struct AppContext {
    root: Arc<Mutex<Option<SharedRoot>>>,
    redraw: mpsc::UnboundedSender<()>,
}

impl AppContext {
    fn with_channel(redraw: mpsc::UnboundedSender<()>) -> Self {
        Self {
            root: Arc::new(Mutex::new(None)),
            redraw,
        }
    }

    /// A context with no running loop behind it. Refresh requests go nowhere.
    ///
    /// Lets components be driven directly, e.g. against a ratatui `TestBackend`.
    pub fn headless() -> Self {
        let (redraw, _) = mpsc::unbounded_channel();
        Self::with_channel(redraw)
    }

    /// Install the component the loop renders and dispatches to.
    pub fn set_root<C: Component>(&self, root: C) -> crate::Result<()> {
        let root: SharedRoot = Arc::new(Mutex::new(root));
        *self.root.lock().map_err(|_| crate::Error::LockPoisoned)? = Some(root);
        self.refresh();
        Ok(())
    }

    /// Ask the loop for a redraw.
    pub fn refresh(&self) {
        let _ = self.redraw.send(());
    }

    fn take_root(&self) -> crate::Result<Option<SharedRoot>> {
        let guard = self.root.lock().map_err(|_| crate::Error::LockPoisoned)?;
        Ok(guard.clone())
    }
}

/// Per-call context handed to a component, typed by the component it targets.
pub struct Context<V: ?Sized> {
    pub app: AppContext,
    pub area: Rect,
    _view: PhantomData<fn(&V)>,
}

impl<V: ?Sized> Context<V> {
    pub fn new(app: AppContext, area: Rect) -> Self {
        Self {
            app,
            area,
            _view: PhantomData,
        }
    }

    /// Re-target this context at a child component.
    pub fn cast<U: ?Sized>(&self) -> Context<U> {
        Context::new(self.app.clone(), self.area)
    }

    /// Same context, narrowed to a sub-area.
    pub fn with_area(&self, area: Rect) -> Self {
        Context::new(self.app.clone(), area)
    }
}

pub type EventContext<V> = Context<V>;

/// Main application handle.
#[derive(Default)]
pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    /// Start the runtime, let `setup` install a root, then run until `Quit`.
    pub fn run<F>(self, setup: F) -> anyhow::Result<()>
    where
        F: FnOnce(&AppContext) -> anyhow::Result<()>,
    {
        let rt = Runtime::new().map_err(|e| anyhow::anyhow!("Failed to start tokio: {}", e))?;
        let (redraw_tx, redraw_rx) = mpsc::unbounded_channel();
        let app = AppContext::with_channel(redraw_tx);

        {
            let _entered = rt.enter();
            setup(&app)?;
        }

        let root: SharedRoot = match app.take_root()? {
            Some(root) => root,
            None => Arc::new(Mutex::new(Placeholder)),
        };

        rt.block_on(self.run_loop(app, root, redraw_rx))
    }

    /// Owns the terminal for the whole session; it is restored on every exit path.
    async fn run_loop(
        &self,
        app: AppContext,
        root: SharedRoot,
        redraw_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        let mut terminal = setup_terminal()?;
        tracing::debug!("terminal ready");

        let result = match mount(&terminal, &app, &root) {
            Ok(()) => self.event_loop(&app, &mut terminal, &root, redraw_rx).await,
            Err(e) => Err(e),
        };

        restore_terminal(&mut terminal)?;
        tracing::debug!("terminal restored");
        result
    }

    async fn event_loop(
        &self,
        app: &AppContext,
        terminal: &mut Term,
        root: &SharedRoot,
        mut redraw_rx: mpsc::UnboundedReceiver<()>,
    ) -> anyhow::Result<()> {
        app.refresh();

        loop {
            tokio::select! {
                _ = redraw_rx.recv() => {
                    terminal.draw(|frame| {
                        let mut cx = Context::<dyn AnyComponent>::new(app.clone(), frame.area());
                        if let Ok(mut guard) = root.lock() {
                            guard.render_any(frame, &mut cx);
                        }
                    })?;
                }
                ready = async { event::poll(POLL_INTERVAL) } => {
                    if !matches!(ready, Ok(true)) {
                        continue;
                    }
                    let Some(event) = translate(event::read()?) else {
                        continue;
                    };

                    let mut cx = EventContext::<dyn AnyComponent>::new(app.clone(), full_area(terminal)?);
                    let mut guard = root.lock().map_err(|_| crate::Error::LockPoisoned)?;
                    let action = guard.handle_event_any(event, &mut cx);
                    app.refresh();

                    if action == Some(Action::Quit) {
                        tracing::info!("quit requested");
                        guard.on_shutdown_any(&mut cx);
                        return Ok(());
                    }
                }
            }
        }
    }
}

/// Mount the root and enter its initial view.
fn mount(terminal: &Term, app: &AppContext, root: &SharedRoot) -> anyhow::Result<()> {
    let mut cx = Context::<dyn AnyComponent>::new(app.clone(), full_area(terminal)?);
    let mut guard = root.lock().map_err(|_| crate::Error::LockPoisoned)?;
    guard.on_mount_any(&mut cx);
    Ok(())
}

fn full_area(terminal: &Term) -> crate::Result<Rect> {
    let size = terminal.size().context(TerminalSnafu)?;
    Ok(Rect::new(0, 0, size.width, size.height))
}

/// Map a crossterm event onto the framework's event type. Key releases and repeats are dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Mouse(mouse) => Some(Event::Mouse(mouse)),
        CrosstermEvent::Resize(w, h) => Some(Event::Resize(w, h)),
        CrosstermEvent::FocusGained => Some(Event::FocusGained),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
        _ => None,
    }
}

fn setup_terminal() -> crate::Result<Term> {
    enable_raw_mode().context(TerminalSnafu)?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, event::EnableFocusChange)
        .context(TerminalSnafu)?;
    Terminal::new(CrosstermBackend::new(stdout)).context(TerminalSnafu)
}

fn restore_terminal(terminal: &mut Term) -> crate::Result<()> {
    disable_raw_mode().context(TerminalSnafu)?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        event::DisableFocusChange
    )
    .context(TerminalSnafu)?;
    terminal.show_cursor().context(TerminalSnafu)
}

/// Rendered when setup installs no root.
struct Placeholder;

impl Component for Placeholder {
    fn render(&mut self, frame: &mut ratatui::Frame, cx: &mut Context<Self>) {
        let paragraph = ratatui::widgets::Paragraph::new("No component set")
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(paragraph, cx.area);
    }
}
