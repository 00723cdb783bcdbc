//! View registry macro.
//!
//! `define_views!` turns a list of `Variant => PageType` pairs into a tagged
//! `View` enum (the opaque handle stored in route entries) and a `Views`
//! struct that owns one page per variant and dispatches lifecycle, render and
//! event calls by tag.

/// Define the view enum and its page dispatcher.
///
/// Every page type must implement `Component` and `Default`. Field names are
/// the snake-cased variant names.
///
/// # Example
/// ```ignore
/// use route_nexus::define_views;
/// use crate::pages::{HomePage, BaseMapPage};
///
/// define_views! {
///     HomeView => HomePage,
///     BaseMap => BaseMapPage,
/// }
///
/// // Generates:
/// // - `enum View { HomeView, BaseMap }` with Display / FromStr / ALL
/// // - `struct Views { home_view: HomePage, base_map: BaseMapPage }`
/// // - `Views::{mount, enter, exit, shutdown, render, handle_event}`
/// ```
#[macro_export]
macro_rules! define_views {
    (
        $(
            $view:ident => $page:ty
        ),* $(,)?
    ) => {
        $crate::paste::paste! {
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub enum View {
                $($view),*
            }

            impl View {
                /// Every view, in declaration order.
                pub const ALL: &'static [View] = &[$(View::$view),*];

                pub fn as_str(&self) -> &'static str {
                    match self {
                        $(View::$view => stringify!($view)),*
                    }
                }
            }

            impl std::fmt::Display for View {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            /// Parse a view from its variant name, ignoring case.
            impl std::str::FromStr for View {
                type Err = String;

                fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                    View::ALL
                        .iter()
                        .copied()
                        .find(|view| view.as_str().eq_ignore_ascii_case(s))
                        .ok_or_else(|| format!(
                            "Unknown view: '{}'. Available views: {}",
                            s,
                            [$(stringify!($view)),*].join(", ")
                        ))
                }
            }

            /// One page per view, constructed with `Default`.
            pub struct Views {
                $([<$view:snake>]: $page),*
            }

            impl Default for Views {
                fn default() -> Self {
                    Self {
                        $([<$view:snake>]: <$page>::default()),*
                    }
                }
            }

            #[allow(dead_code)]
            impl Views {
                pub fn new() -> Self {
                    Self::default()
                }

                /// Mount every page once.
                pub fn mount<R: ?Sized>(&mut self, cx: &mut $crate::Context<R>) {
                    use $crate::Component as _;
                    $(self.[<$view:snake>].on_mount(&mut cx.cast());)*
                }

                pub fn enter<R: ?Sized>(&mut self, view: View, cx: &mut $crate::Context<R>) {
                    use $crate::Component as _;
                    match view {
                        $(View::$view => self.[<$view:snake>].on_enter(&mut cx.cast())),*
                    }
                }

                pub fn exit<R: ?Sized>(&mut self, view: View, cx: &mut $crate::Context<R>) {
                    use $crate::Component as _;
                    match view {
                        $(View::$view => self.[<$view:snake>].on_exit(&mut cx.cast())),*
                    }
                }

                pub fn shutdown<R: ?Sized>(&mut self, cx: &mut $crate::Context<R>) {
                    use $crate::Component as _;
                    $(self.[<$view:snake>].on_shutdown(&mut cx.cast());)*
                }

                pub fn render<R: ?Sized>(
                    &mut self,
                    view: View,
                    frame: &mut ratatui::Frame,
                    cx: &mut $crate::Context<R>,
                ) {
                    use $crate::Component as _;
                    match view {
                        $(View::$view => self.[<$view:snake>].render(frame, &mut cx.cast())),*
                    }
                }

                pub fn handle_event<R: ?Sized>(
                    &mut self,
                    view: View,
                    event: $crate::Event,
                    cx: &mut $crate::EventContext<R>,
                ) -> Option<$crate::Action> {
                    use $crate::Component as _;
                    match view {
                        $(View::$view => self.[<$view:snake>].handle_event(event, &mut cx.cast())),*
                    }
                }
            }
        }
    };
}
