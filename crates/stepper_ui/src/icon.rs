//! Centralized icon API for the primitive set.
//!
//! Glyphs are inline SVG paths on a 20x20 grid drawn with `currentColor`, so
//! icons inherit tone from the surrounding primitive.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named glyphs available to primitives and consuming apps.
pub enum IconName {
    /// Completed/confirmed checkmark.
    Checkmark,
    /// Indeterminate busy ring.
    Spinner,
    /// Backward navigation chevron.
    ChevronLeft,
    /// Forward navigation chevron.
    ChevronRight,
}

impl IconName {
    fn token(self) -> &'static str {
        match self {
            Self::Checkmark => "checkmark",
            Self::Spinner => "spinner",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::Checkmark => "M4 10.5l4 4 8-9",
            Self::Spinner => "M10 3a7 7 0 1 1-7 7",
            Self::ChevronLeft => "M12.5 4.5L7 10l5.5 5.5",
            Self::ChevronRight => "M7.5 4.5L13 10l-5.5 5.5",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px glyph.
    Xs,
    /// 16px glyph.
    Sm,
    /// 20px glyph.
    Md,
    /// 24px glyph.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn pixels(self) -> u16 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative inline icon. Always hidden from assistive technology.
pub fn Icon(icon: IconName, #[prop(default = IconSize::Md)] size: IconSize) -> impl IntoView {
    let pixels = size.pixels();
    view! {
        <svg
            class="ui-icon"
            width=pixels
            height=pixels
            viewBox="0 0 20 20"
            fill="none"
            stroke="currentColor"
            stroke-width="1.75"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path d=icon.path() />
        </svg>
    }
}
