//! Open/closed state and the icon pair derived from it.
//!
//! The state machine has two states, `Closed` (initial) and `Open`. Only the
//! trigger moves `Closed -> Open`; every other gesture is a dismissal and is
//! ignored while closed.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// Inline `display` value applied to an icon indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Flex,
    None,
}

impl Display {
    /// CSS value for the `display` property.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Flex => "flex",
            Self::None => "none",
        }
    }
}

/// Which icon display each indicator should carry for a given state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconVisibility {
    pub open_icon: Display,
    pub close_icon: Display,
}

/// User gesture fed to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Click on the trigger control.
    Trigger,
    /// A menu item was activated and its close delay elapsed.
    ItemSelected,
    /// Click landing outside both the panel and the trigger.
    Outside,
}

impl Gesture {
    /// Whether this gesture only ever closes the menu.
    #[must_use]
    pub fn is_dismissal(self) -> bool {
        matches!(self, Self::ItemSelected | Self::Outside)
    }
}

/// Navigation menu state owned by a single controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.is_open
    }

    /// Flip between open and closed.
    pub(crate) fn flip(&mut self) {
        self.is_open = !self.is_open;
    }

    /// State after `gesture`, without applying it.
    #[must_use]
    pub fn next(self, gesture: Gesture) -> Self {
        match gesture {
            Gesture::Trigger => Self { is_open: !self.is_open },
            Gesture::ItemSelected | Gesture::Outside => Self { is_open: false },
        }
    }

    /// Icon displays for this state. Exactly one icon is ever `Flex`.
    #[must_use]
    pub fn icons(self) -> IconVisibility {
        if self.is_open {
            IconVisibility { open_icon: Display::None, close_icon: Display::Flex }
        } else {
            IconVisibility { open_icon: Display::Flex, close_icon: Display::None }
        }
    }
}
