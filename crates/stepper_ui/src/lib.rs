//! Presentational Leptos primitives for guided multi-step flows.
//!
//! The crate owns the stepper family (controller handle, derived step state,
//! triggers, indicators, separators, badges, and content panels) together with
//! the small set of atoms it composes. Every primitive emits the stable
//! `data-ui-*` DOM contract consumed by external style sheets; no styling is
//! shipped from here.
//!
//! Stepper consumers never look their controller up implicitly. A host builds
//! one [`StepperContext`] and passes it to every stepper primitive it renders.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;
mod stepper;

pub use icon::{Icon, IconName, IconSize};
pub use primitives::{
    Badge, BadgeStatus, Button, ButtonSize, ButtonVariant, Cluster, LayoutAlign, LayoutGap,
    LayoutJustify, Stack,
};
pub use stepper::{
    badge_visible, is_activation_key, CompletedColor, IndicatorOverrides, IndicatorSource,
    StepNode, StepState, StepValue, Stepper, StepperBadge, StepperConfig, StepperContent,
    StepperContext, StepperDescription, StepperIndicator, StepperItem, StepperOrientation,
    StepperSeparator, StepperSize, StepperTitle, StepperTrigger,
};

/// Convenience imports for crates consuming the stepper primitives.
pub mod prelude {
    pub use crate::{
        Badge, BadgeStatus, Button, ButtonSize, ButtonVariant, Cluster, CompletedColor, Icon,
        IconName, IconSize, IndicatorOverrides, LayoutAlign, LayoutGap, LayoutJustify, Stack,
        StepNode, StepState, StepValue, Stepper, StepperBadge, StepperConfig, StepperContent,
        StepperContext, StepperDescription, StepperIndicator, StepperItem, StepperOrientation,
        StepperSeparator, StepperSize, StepperTitle, StepperTrigger,
    };
}
