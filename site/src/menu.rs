//! Responsive sidebar menu state.

/// Viewport width at and below which the overlay menu takes over.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Which overlay triggers should be visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerVisibility {
    pub open_trigger: bool,
    pub close_trigger: bool,
}

/// Sidebar open/closed state plus the viewport width it was last evaluated
/// against. Above the breakpoint the sidebar is forced closed regardless of
/// prior state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    viewport_width: u32,
    open: bool,
}

impl MenuState {
    pub fn new(viewport_width: u32) -> Self {
        Self {
            viewport_width,
            open: false,
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport_width <= MOBILE_BREAKPOINT_PX
    }

    pub fn is_open(&self) -> bool {
        self.open && self.is_mobile()
    }

    pub fn open(&mut self) {
        if self.is_mobile() {
            self.open = true;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Re-evaluate against a new viewport width. Crossing above the
    /// breakpoint closes the sidebar.
    pub fn resize(&mut self, viewport_width: u32) {
        self.viewport_width = viewport_width;
        if !self.is_mobile() {
            self.open = false;
        }
    }

    /// Trigger visibility, recomputed from current state on every call.
    pub fn triggers(&self) -> TriggerVisibility {
        if !self.is_mobile() {
            TriggerVisibility {
                open_trigger: false,
                close_trigger: false,
            }
        } else if self.open {
            TriggerVisibility {
                open_trigger: false,
                close_trigger: true,
            }
        } else {
            TriggerVisibility {
                open_trigger: true,
                close_trigger: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_hides_both_triggers() {
        let state = MenuState::new(1200);
        assert_eq!(
            state.triggers(),
            TriggerVisibility {
                open_trigger: false,
                close_trigger: false,
            }
        );
    }

    #[test]
    fn test_mobile_closed_shows_open_trigger() {
        let state = MenuState::new(400);
        let triggers = state.triggers();
        assert!(triggers.open_trigger);
        assert!(!triggers.close_trigger);
    }

    #[test]
    fn test_mobile_open_shows_close_trigger() {
        let mut state = MenuState::new(400);
        state.open();
        assert!(state.is_open());
        let triggers = state.triggers();
        assert!(!triggers.open_trigger);
        assert!(triggers.close_trigger);
    }

    #[test]
    fn test_resize_above_breakpoint_forces_closed() {
        let mut state = MenuState::new(400);
        state.open();
        state.resize(900);
        assert!(!state.is_open());
        assert_eq!(
            state.triggers(),
            TriggerVisibility {
                open_trigger: false,
                close_trigger: false,
            }
        );
    }

    #[test]
    fn test_open_is_ignored_on_desktop() {
        let mut state = MenuState::new(900);
        state.open();
        assert!(!state.is_open());
    }

    #[test]
    fn test_breakpoint_is_inclusive() {
        let state = MenuState::new(MOBILE_BREAKPOINT_PX);
        assert!(state.is_mobile());
    }
}
