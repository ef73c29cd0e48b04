// CarCare - core/layout.rs
//
// Responsive sidebar state machine.
//
// All open/close behaviour funnels through a single dispatcher
// (`SidebarMachine::handle`) instead of being scattered across input
// handlers, so the full Open/Closed x Desktop/Mobile matrix is testable
// without a UI context. Chrome that only exists on narrow viewports (the
// toggle affordance and the backdrop) is modelled as `Option` handles:
// an operation that needs a capability pattern-matches on it and degrades
// to a no-op when it is absent.

use crate::core::gesture::{self, SwipeIntent};
use crate::util::constants::{MOBILE_BREAKPOINT, SIDEBAR_WIDTH};

/// Desktop vs mobile classification of the window width.
///
/// Derived from the current width each time a decision is needed, never
/// cached across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    Desktop,
    Mobile,
}

impl ViewportMode {
    /// Classify a window width against the fixed breakpoint.
    pub fn classify(width: f32) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// The two terminal states of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarState {
    Closed,
    Open,
}

/// The collapsible-sidebar toggle button. Present only on mobile viewports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAffordance {
    /// Accessibility flag mirroring the sidebar state (the aria-expanded
    /// equivalent). Drives the glyph and the accessible label.
    pub expanded: bool,
}

impl ToggleAffordance {
    /// Glyph shown on the button: bars when collapsed, a close mark when
    /// expanded.
    pub fn glyph(&self) -> &'static str {
        if self.expanded {
            "\u{2715}" // ✕
        } else {
            "\u{2630}" // ☰
        }
    }

    /// Accessible label for the button.
    pub fn label(&self) -> &'static str {
        if self.expanded {
            "Close navigation"
        } else {
            "Open navigation"
        }
    }
}

/// The dimming overlay behind an open mobile sidebar. Present only on
/// mobile viewports; visible only while the sidebar is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Backdrop {
    pub visible: bool,
}

/// Render-ready description of the navigation chrome.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarChrome {
    /// Toggle button handle; `None` on desktop viewports.
    pub toggle: Option<ToggleAffordance>,

    /// Backdrop handle; `None` on desktop viewports.
    pub backdrop: Option<Backdrop>,

    /// Left offset of the main content: the docked sidebar width on
    /// desktop, zero on mobile where the sidebar overlays the content.
    pub content_left_offset: f32,

    /// Content scrolling is suppressed while the mobile sidebar is open.
    pub scroll_locked: bool,
}

impl SidebarChrome {
    fn desktop() -> Self {
        Self {
            toggle: None,
            backdrop: None,
            content_left_offset: SIDEBAR_WIDTH,
            scroll_locked: false,
        }
    }
}

/// Every input the sidebar reacts to, funnelled through one dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// The window was resized (or the first frame measured it).
    ViewportChanged { width: f32 },

    /// The toggle button was activated by click or keyboard.
    ToggleActivated,

    /// The backdrop behind the open sidebar was pressed.
    BackdropPressed,

    /// A press landed outside the open sidebar but not on the backdrop.
    OutsidePressed,

    /// A touch gesture completed with these screen-x coordinates.
    SwipeEnded { start_x: f32, end_x: f32 },
}

/// The sidebar state machine: Open/Closed crossed with Desktop/Mobile.
///
/// Invariant: on desktop the state is always `Closed` and neither the
/// toggle affordance nor the backdrop exists (the sidebar is permanently
/// docked instead).
#[derive(Debug)]
pub struct SidebarMachine {
    state: SidebarState,
    mode: ViewportMode,
    chrome: SidebarChrome,
}

impl Default for SidebarMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarMachine {
    /// Starts closed on a desktop viewport; the first `ViewportChanged`
    /// event corrects the mode before anything renders.
    pub fn new() -> Self {
        Self {
            state: SidebarState::Closed,
            mode: ViewportMode::Desktop,
            chrome: SidebarChrome::desktop(),
        }
    }

    pub fn state(&self) -> SidebarState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == SidebarState::Open
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn chrome(&self) -> &SidebarChrome {
        &self.chrome
    }

    /// Central dispatcher: apply one input event to the machine.
    pub fn handle(&mut self, event: UiEvent) {
        match event {
            UiEvent::ViewportChanged { width } => self.sync_viewport(width),
            UiEvent::ToggleActivated => match self.state {
                SidebarState::Closed => self.open(),
                SidebarState::Open => self.close(),
            },
            UiEvent::BackdropPressed | UiEvent::OutsidePressed => self.close(),
            UiEvent::SwipeEnded { start_x, end_x } => {
                match gesture::classify(start_x, end_x) {
                    Some(SwipeIntent::Open) => self.open(),
                    Some(SwipeIntent::Close) => self.close(),
                    None => {}
                }
            }
        }
    }

    /// Re-derive the viewport mode and bring the chrome in line with it.
    ///
    /// Idempotent: on mobile the toggle and backdrop are created only when
    /// absent, so repeated calls never duplicate them. Switching to desktop
    /// force-closes the sidebar, removes both capabilities, restores the
    /// docked content offset, and clears any scroll lock.
    fn sync_viewport(&mut self, width: f32) {
        self.mode = ViewportMode::classify(width);
        match self.mode {
            ViewportMode::Mobile => {
                self.chrome.content_left_offset = 0.0;
                let open = self.is_open();
                if self.chrome.toggle.is_none() {
                    self.chrome.toggle = Some(ToggleAffordance { expanded: open });
                }
                if self.chrome.backdrop.is_none() {
                    self.chrome.backdrop = Some(Backdrop { visible: open });
                }
            }
            ViewportMode::Desktop => {
                self.state = SidebarState::Closed;
                self.chrome = SidebarChrome::desktop();
            }
        }
    }

    /// Transition to `Open`. Idempotent; a no-op without the toggle
    /// capability (i.e. on desktop, where the sidebar is docked).
    fn open(&mut self) {
        let Some(toggle) = self.chrome.toggle.as_mut() else {
            return;
        };
        self.state = SidebarState::Open;
        toggle.expanded = true;
        if let Some(backdrop) = self.chrome.backdrop.as_mut() {
            backdrop.visible = true;
        }
        self.chrome.scroll_locked = true;
    }

    /// Transition to `Closed`, restoring every open-effect to its
    /// pre-open value. Idempotent; a no-op without the toggle capability.
    fn close(&mut self) {
        let Some(toggle) = self.chrome.toggle.as_mut() else {
            return;
        };
        self.state = SidebarState::Closed;
        toggle.expanded = false;
        if let Some(backdrop) = self.chrome.backdrop.as_mut() {
            backdrop.visible = false;
        }
        self.chrome.scroll_locked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::MOBILE_BREAKPOINT;

    fn mobile_machine() -> SidebarMachine {
        let mut m = SidebarMachine::new();
        m.handle(UiEvent::ViewportChanged { width: 400.0 });
        m
    }

    /// Widths at and above the breakpoint classify as desktop; below, mobile.
    #[test]
    fn test_viewport_classification_at_breakpoint() {
        assert_eq!(
            ViewportMode::classify(MOBILE_BREAKPOINT),
            ViewportMode::Desktop
        );
        assert_eq!(
            ViewportMode::classify(MOBILE_BREAKPOINT - 1.0),
            ViewportMode::Mobile
        );
        assert_eq!(ViewportMode::classify(1920.0), ViewportMode::Desktop);
    }

    /// Desktop viewports never expose a toggle affordance or backdrop and
    /// the state is forced closed.
    #[test]
    fn test_desktop_forces_closed_with_no_chrome() {
        let mut m = mobile_machine();
        m.handle(UiEvent::ToggleActivated);
        assert!(m.is_open());

        m.handle(UiEvent::ViewportChanged { width: 1280.0 });
        assert_eq!(m.state(), SidebarState::Closed);
        assert!(m.chrome().toggle.is_none());
        assert!(m.chrome().backdrop.is_none());
        assert!(!m.chrome().scroll_locked);
        assert_eq!(m.chrome().content_left_offset, crate::util::constants::SIDEBAR_WIDTH);
    }

    /// Repeated viewport syncs on mobile never duplicate chrome: exactly
    /// one toggle and one backdrop exist afterwards.
    #[test]
    fn test_mobile_sync_is_idempotent() {
        let mut m = SidebarMachine::new();
        for _ in 0..5 {
            m.handle(UiEvent::ViewportChanged { width: 600.0 });
        }
        assert!(m.chrome().toggle.is_some());
        assert!(m.chrome().backdrop.is_some());
        assert_eq!(m.chrome().content_left_offset, 0.0);
    }

    /// A viewport sync while open must not clobber the open-state chrome.
    #[test]
    fn test_mobile_resync_preserves_open_state() {
        let mut m = mobile_machine();
        m.handle(UiEvent::ToggleActivated);
        m.handle(UiEvent::ViewportChanged { width: 500.0 });

        assert!(m.is_open());
        assert!(m.chrome().toggle.unwrap().expanded);
        assert!(m.chrome().backdrop.unwrap().visible);
        assert!(m.chrome().scroll_locked);
    }

    /// Open-then-close restores every chrome attribute to its pre-open value.
    #[test]
    fn test_open_close_round_trip_restores_chrome() {
        let mut m = mobile_machine();
        let before = m.chrome().clone();

        m.handle(UiEvent::ToggleActivated);
        assert!(m.is_open());
        assert!(m.chrome().scroll_locked);
        assert_eq!(m.chrome().toggle.unwrap().glyph(), "\u{2715}");

        m.handle(UiEvent::ToggleActivated);
        assert_eq!(m.state(), SidebarState::Closed);
        assert_eq!(*m.chrome(), before);
        assert_eq!(m.chrome().toggle.unwrap().glyph(), "\u{2630}");
    }

    /// Backdrop and outside presses both close an open sidebar; on a closed
    /// sidebar they are no-ops.
    #[test]
    fn test_backdrop_and_outside_press_close() {
        let mut m = mobile_machine();
        m.handle(UiEvent::ToggleActivated);
        m.handle(UiEvent::BackdropPressed);
        assert_eq!(m.state(), SidebarState::Closed);

        m.handle(UiEvent::OutsidePressed);
        assert_eq!(m.state(), SidebarState::Closed);

        m.handle(UiEvent::ToggleActivated);
        m.handle(UiEvent::OutsidePressed);
        assert_eq!(m.state(), SidebarState::Closed);
    }

    /// An edge swipe (30 -> 150) opens a closed sidebar; the same swipe on
    /// an already-open sidebar leaves it open.
    #[test]
    fn test_opening_swipe_never_toggles_off() {
        let mut m = mobile_machine();
        m.handle(UiEvent::SwipeEnded {
            start_x: 30.0,
            end_x: 150.0,
        });
        assert!(m.is_open());

        m.handle(UiEvent::SwipeEnded {
            start_x: 30.0,
            end_x: 150.0,
        });
        assert!(m.is_open(), "opening-direction swipe must not close");
    }

    /// A closing swipe (500 -> 400) closes an open sidebar.
    #[test]
    fn test_closing_swipe_closes() {
        let mut m = mobile_machine();
        m.handle(UiEvent::ToggleActivated);
        m.handle(UiEvent::SwipeEnded {
            start_x: 500.0,
            end_x: 400.0,
        });
        assert_eq!(m.state(), SidebarState::Closed);
    }

    /// Swipes and toggles are no-ops on desktop where no toggle exists.
    #[test]
    fn test_events_are_noops_on_desktop() {
        let mut m = SidebarMachine::new();
        m.handle(UiEvent::ViewportChanged { width: 1400.0 });

        m.handle(UiEvent::ToggleActivated);
        assert_eq!(m.state(), SidebarState::Closed);

        m.handle(UiEvent::SwipeEnded {
            start_x: 10.0,
            end_x: 200.0,
        });
        assert_eq!(m.state(), SidebarState::Closed);
        assert!(m.chrome().toggle.is_none());
    }
}
