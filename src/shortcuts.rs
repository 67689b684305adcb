//! Centralized shortcut and action system.
//!
//! This module provides a unified system for keyboard shortcuts and actions,
//! connecting help text definitions with actual event handling logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// All possible actions in the main view.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === WHEEL ===
    Spin,

    // === GRINDER ===
    CycleGrinder,
    OpenGrinderPicker,

    // === BREW TIMER ===
    ToggleTimer,
    ResetTimer,

    // === SHARING ===
    CopyRecipe,
    CopyLink,

    // === NAVIGATION ===
    FocusNext,
    FocusPrevious,
    ScrollDown,
    ScrollUp,

    // === HELP ===
    ToggleHelp,

    // === GENERAL ===
    Quit,
    Cancel,
}

impl Action {
    /// Stable action id
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Spin => "spin",
            Self::CycleGrinder => "cycle_grinder",
            Self::OpenGrinderPicker => "open_grinder_picker",
            Self::ToggleTimer => "toggle_timer",
            Self::ResetTimer => "reset_timer",
            Self::CopyRecipe => "copy_recipe",
            Self::CopyLink => "copy_link",
            Self::FocusNext => "focus_next",
            Self::FocusPrevious => "focus_previous",
            Self::ScrollDown => "scroll_down",
            Self::ScrollUp => "scroll_up",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }

    /// One-line description for the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Spin => "Spin the method wheel",
            Self::CycleGrinder => "Switch to the next grinder",
            Self::OpenGrinderPicker => "Choose a grinder from a list",
            Self::ToggleTimer => "Start or pause the brew timer",
            Self::ResetTimer => "Reset the brew timer",
            Self::CopyRecipe => "Copy the recipe card",
            Self::CopyLink => "Copy a share link",
            Self::FocusNext => "Focus next panel",
            Self::FocusPrevious => "Focus previous panel",
            Self::ScrollDown => "Scroll the focused panel down",
            Self::ScrollUp => "Scroll the focused panel up",
            Self::ToggleHelp => "Show or hide this help",
            Self::Quit => "Quit",
            Self::Cancel => "Close popup / clear message",
        }
    }
}

/// Key labels and actions listed in the help overlay, in display order.
pub const HELP_ENTRIES: [(&str, Action); 14] = [
    ("Space / Enter", Action::Spin),
    ("g", Action::CycleGrinder),
    ("G", Action::OpenGrinderPicker),
    ("s", Action::ToggleTimer),
    ("r", Action::ResetTimer),
    ("y", Action::CopyRecipe),
    ("u", Action::CopyLink),
    ("Tab", Action::FocusNext),
    ("Shift+Tab", Action::FocusPrevious),
    ("j / Down", Action::ScrollDown),
    ("k / Up", Action::ScrollUp),
    ("?", Action::ToggleHelp),
    ("q / Ctrl+C", Action::Quit),
    ("Esc", Action::Cancel),
];

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = "main";

        // === WHEEL ===
        self.register(ctx, K::Char(' '), M::NONE, Action::Spin);
        self.register(ctx, K::Enter, M::NONE, Action::Spin);

        // === GRINDER ===
        self.register(ctx, K::Char('g'), M::NONE, Action::CycleGrinder);
        self.register(ctx, K::Char('G'), M::SHIFT, Action::OpenGrinderPicker);
        self.register(ctx, K::Char('G'), M::NONE, Action::OpenGrinderPicker);

        // === BREW TIMER ===
        self.register(ctx, K::Char('s'), M::NONE, Action::ToggleTimer);
        self.register(ctx, K::Char('r'), M::NONE, Action::ResetTimer);

        // === SHARING ===
        self.register(ctx, K::Char('y'), M::NONE, Action::CopyRecipe);
        self.register(ctx, K::Char('u'), M::NONE, Action::CopyLink);

        // === NAVIGATION ===
        self.register(ctx, K::Tab, M::NONE, Action::FocusNext);
        self.register(ctx, K::BackTab, M::SHIFT, Action::FocusPrevious);
        self.register(ctx, K::BackTab, M::NONE, Action::FocusPrevious);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Char('?'), M::SHIFT, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
