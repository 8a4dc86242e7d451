//! View State
//!
//! Reactive state for navigation and the sidebar, managed with Leptos
//! signals. Nothing here is persisted; a reload starts back at the
//! dashboard with the sidebar open.

use leptos::*;

use crate::pages::PageId;

/// Sidebar auto-closes after navigation below this viewport width.
#[cfg(target_arch = "wasm32")]
const NARROW_VIEWPORT_PX: f64 = 1024.0;

/// View state provided to all components
#[derive(Clone)]
pub struct ViewState {
    /// Page currently shown in the main region
    pub active_page: RwSignal<PageId>,
    /// Whether the side navigation is visible
    pub sidebar_open: RwSignal<bool>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            active_page: create_rw_signal(PageId::Dashboard),
            sidebar_open: create_rw_signal(true),
            success: create_rw_signal(None),
        }
    }

    /// Switch to the given page. Transitions are unconditional: any page is
    /// reachable from any page. On narrow viewports the sidebar overlays the
    /// content, so it closes after navigating.
    pub fn navigate_to(&self, page: PageId) {
        self.active_page.set(page);
        if is_narrow_viewport() {
            self.sidebar_open.set(false);
        }
    }

    /// Flip sidebar visibility
    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        #[cfg(target_arch = "wasm32")]
        {
            let success_signal = self.success;
            gloo_timers::callback::Timeout::new(3000, move || {
                success_signal.set(None);
            })
            .forget();
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide view state to the component tree
pub fn provide_view_state() {
    provide_context(ViewState::new());
}

#[cfg(target_arch = "wasm32")]
fn is_narrow_viewport() -> bool {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|width| width < NARROW_VIEWPORT_PX)
        .unwrap_or(false)
}

// Viewport queries only exist in the browser.
#[cfg(not(target_arch = "wasm32"))]
fn is_narrow_viewport() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let runtime = create_runtime();
        let state = ViewState::new();
        assert_eq!(state.active_page.get_untracked(), PageId::Dashboard);
        assert!(state.sidebar_open.get_untracked());
        assert!(state.success.get_untracked().is_none());
        runtime.dispose();
    }

    #[test]
    fn test_navigation_is_unconditional() {
        let runtime = create_runtime();
        let state = ViewState::new();

        state.navigate_to(PageId::Settings);
        assert_eq!(state.active_page.get_untracked(), PageId::Settings);

        state.navigate_to(PageId::Dashboard);
        assert_eq!(state.active_page.get_untracked(), PageId::Dashboard);

        // Every page is reachable from every other page.
        for &from in PageId::ALL.iter() {
            for &to in PageId::ALL.iter() {
                state.navigate_to(from);
                state.navigate_to(to);
                assert_eq!(state.active_page.get_untracked(), to);
            }
        }
        runtime.dispose();
    }

    #[test]
    fn test_double_toggle_restores_sidebar() {
        let runtime = create_runtime();
        let state = ViewState::new();
        let before = state.sidebar_open.get_untracked();

        state.toggle_sidebar();
        assert_eq!(state.sidebar_open.get_untracked(), !before);

        state.toggle_sidebar();
        assert_eq!(state.sidebar_open.get_untracked(), before);
        runtime.dispose();
    }

    #[test]
    fn test_show_success_sets_message() {
        let runtime = create_runtime();
        let state = ViewState::new();
        state.show_success("Saved");
        assert_eq!(state.success.get_untracked().as_deref(), Some("Saved"));
        runtime.dispose();
    }
}
