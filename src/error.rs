//! Reasons the menu controller abstains from installing itself.
//!
//! None of these are user-visible. Public entry points log them at `debug`
//! and carry on; a page without a working menu must still render.

/// Why [`crate::menu::MenuController::try_initialize`] declined to install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// A toggle implementation was already present; defer to it.
    #[error("a menu toggle is already installed")]
    AlreadyInstalled,
    #[error("menu panel not found")]
    MissingPanel,
    #[error("menu trigger not found")]
    MissingTrigger,
    /// A structural name in the supplied config was blank.
    #[error("invalid menu config: {0}")]
    InvalidConfig(#[from] crate::config::ConfigError),
    /// No browser document is available (e.g. during SSR).
    #[error("no document available")]
    NoDocument,
}
