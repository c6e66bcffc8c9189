//! Stepper state model and the primitives that render it.
//!
//! A [`StepperContext`] is a controlled handle: it reflects the current step
//! supplied by its host and forwards change requests to the host's
//! `on_value_change` callback, but never stores a new value itself. Hosts
//! that ignore the callback leave the stepper showing the old step.
//!
//! Per-node state is never stored. [`StepState::derive`] recomputes it from
//! `(step, current)` every time a primitive reads it.

use std::cmp::Ordering;
use std::fmt;

use leptos::*;
use serde::{Deserialize, Serialize};

use crate::BadgeStatus;

mod components;

pub use components::{
    Stepper, StepperBadge, StepperContent, StepperDescription, StepperIndicator, StepperItem,
    StepperSeparator, StepperTitle, StepperTrigger,
};

/// Step position. Steps are 1-indexed by convention, but any integer is accepted.
pub type StepValue = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Derived state of one step relative to the current value.
pub enum StepState {
    /// The step equals the current value.
    Active,
    /// The step precedes the current value.
    Completed,
    /// The step follows the current value.
    Inactive,
}

impl StepState {
    /// Classifies `step` against `current`.
    pub fn derive(step: StepValue, current: StepValue) -> Self {
        match step.cmp(&current) {
            Ordering::Equal => Self::Active,
            Ordering::Less => Self::Completed,
            Ordering::Greater => Self::Inactive,
        }
    }

    /// Returns the `data-ui-state` token.
    pub fn token(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Inactive => "inactive",
        }
    }

    /// Badge status shown for this state. The mapping is fixed.
    pub fn badge_status(self) -> BadgeStatus {
        match self {
            Self::Active => BadgeStatus::Warning,
            Self::Completed => BadgeStatus::Success,
            Self::Inactive => BadgeStatus::Default,
        }
    }
}

impl fmt::Display for StepState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Returns whether a badge declared with `declared` is shown for a node in `state`.
pub fn badge_visible(declared: BadgeStatus, state: StepState) -> bool {
    declared == state.badge_status()
}

/// Returns whether `key` (a `KeyboardEvent::key` value) is a primary activation key.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Returns whether a keydown starts an activation. Auto-repeated keydowns never do.
pub(crate) fn keydown_activates(key: &str, repeat: bool) -> bool {
    !repeat && is_activation_key(key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A step position paired with its derived state.
pub struct StepNode {
    /// Step position.
    pub step: StepValue,
    /// State derived from the current value.
    pub state: StepState,
}

impl StepNode {
    /// Builds the node for `step` under `current`.
    pub fn derive(step: StepValue, current: StepValue) -> Self {
        Self {
            step,
            state: StepState::derive(step, current),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Layout axis of a stepper.
pub enum StepperOrientation {
    /// Steps laid out left to right.
    Horizontal,
    /// Steps laid out top to bottom.
    Vertical,
}

impl Default for StepperOrientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl StepperOrientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Stepper sizing tokens.
pub enum StepperSize {
    /// Dense stepper.
    Sm,
    /// Default stepper.
    Md,
    /// Large stepper.
    Lg,
}

impl Default for StepperSize {
    fn default() -> Self {
        Self::Md
    }
}

impl StepperSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Accent used for completed indicators and connectors.
pub enum CompletedColor {
    /// Orange accent.
    Orange,
    /// Green accent.
    Green,
}

impl Default for CompletedColor {
    fn default() -> Self {
        Self::Orange
    }
}

impl CompletedColor {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Shared stepper configuration broadcast to every stepper primitive.
pub struct StepperConfig {
    /// Layout axis. Fixed for the lifetime of a context.
    pub orientation: StepperOrientation,
    /// Whether triggers accept direct navigation.
    pub clickable: bool,
    /// Advisory step count. Never used to reject values.
    pub total_steps: Option<u32>,
    /// Presentational size.
    pub size: StepperSize,
    /// Whether separators render between steps.
    pub show_connector: bool,
    /// Accent for completed steps.
    pub completed_color: CompletedColor,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            orientation: StepperOrientation::Horizontal,
            clickable: false,
            total_steps: None,
            size: StepperSize::Md,
            show_connector: true,
            completed_color: CompletedColor::Orange,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which content an indicator renders.
pub enum IndicatorSource {
    /// The `loading` override.
    Loading,
    /// The `completed` override.
    Completed,
    /// The caller-provided default content.
    Default,
}

#[derive(Clone, Default)]
/// Optional replacement content for step indicators.
pub struct IndicatorOverrides {
    completed: Option<ViewFn>,
    loading: Option<ViewFn>,
}

impl IndicatorOverrides {
    /// Content shown in place of the default for completed steps.
    pub fn completed(mut self, view: impl Into<ViewFn>) -> Self {
        self.completed = Some(view.into());
        self
    }

    /// Content shown in place of the default for loading steps.
    pub fn loading(mut self, view: impl Into<ViewFn>) -> Self {
        self.loading = Some(view.into());
        self
    }

    /// Resolves which content a node renders.
    ///
    /// A loading node with a loading override wins, then a completed node with
    /// a completed override, then the default content.
    pub fn resolve(&self, state: StepState, loading: bool) -> IndicatorSource {
        if loading && self.loading.is_some() {
            IndicatorSource::Loading
        } else if state == StepState::Completed && self.completed.is_some() {
            IndicatorSource::Completed
        } else {
            IndicatorSource::Default
        }
    }

    fn view_for(&self, source: IndicatorSource) -> Option<ViewFn> {
        match source {
            IndicatorSource::Loading => self.loading.clone(),
            IndicatorSource::Completed => self.completed.clone(),
            IndicatorSource::Default => None,
        }
    }
}

impl fmt::Debug for IndicatorOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndicatorOverrides")
            .field("completed", &self.completed.is_some())
            .field("loading", &self.loading.is_some())
            .finish()
    }
}

#[derive(Clone, Copy)]
/// Controlled stepper handle passed explicitly to every stepper primitive.
///
/// The handle is `Copy`; primitives read it during render and route
/// activations back through it. It performs no mutation of its own.
pub struct StepperContext {
    value: MaybeSignal<StepValue>,
    config: StepperConfig,
    overrides: Option<StoredValue<IndicatorOverrides>>,
    on_value_change: Option<Callback<StepValue>>,
}

impl StepperContext {
    /// Creates a handle reflecting `value`. The value is not checked against
    /// `config.total_steps`.
    pub fn new(value: impl Into<MaybeSignal<StepValue>>, config: StepperConfig) -> Self {
        Self {
            value: value.into(),
            config,
            overrides: None,
            on_value_change: None,
        }
    }

    /// Registers the host callback receiving requested values.
    pub fn with_on_value_change(mut self, on_value_change: Callback<StepValue>) -> Self {
        self.on_value_change = Some(on_value_change);
        self
    }

    /// Installs indicator overrides.
    pub fn with_indicator_overrides(mut self, overrides: IndicatorOverrides) -> Self {
        self.overrides = Some(store_value(overrides));
        self
    }

    /// Current step value (tracked).
    pub fn value(&self) -> StepValue {
        self.value.get()
    }

    /// Shared configuration.
    pub fn config(&self) -> StepperConfig {
        self.config
    }

    /// Derived state of `step` against the current value (tracked).
    pub fn state_of(&self, step: StepValue) -> StepState {
        StepState::derive(step, self.value())
    }

    /// Derived node for `step` (tracked).
    pub fn node(&self, step: StepValue) -> StepNode {
        StepNode::derive(step, self.value())
    }

    /// Whether `step` is the advisory last step.
    pub fn is_last(&self, step: StepValue) -> bool {
        self.config
            .total_steps
            .map_or(false, |total| i64::from(total) == i64::from(step))
    }

    /// Forwards `value` to the host callback.
    ///
    /// Returns the forwarded value, or `None` when no callback is registered
    /// and the request is dropped. The handle's own value never changes.
    pub fn request_value_change(&self, value: StepValue) -> Option<StepValue> {
        match self.on_value_change {
            Some(on_value_change) => {
                on_value_change.call(value);
                Some(value)
            }
            None => {
                logging::debug_warn!(
                    "stepper value change to {value} dropped: no on_value_change handler"
                );
                None
            }
        }
    }

    /// Handles activation of the trigger for `step`.
    ///
    /// Inert (returns `None`, forwards nothing) unless the stepper is clickable.
    pub fn activate(&self, step: StepValue) -> Option<StepValue> {
        if !self.config.clickable {
            return None;
        }
        self.request_value_change(step)
    }

    /// Requests the step after the current one. Not gated by `clickable`.
    pub fn request_next(&self) -> Option<StepValue> {
        self.request_value_change(self.value.get_untracked().saturating_add(1))
    }

    /// Requests the step before the current one. Not gated by `clickable`.
    pub fn request_previous(&self) -> Option<StepValue> {
        self.request_value_change(self.value.get_untracked().saturating_sub(1))
    }

    /// Indicator content source for `step` (tracked).
    pub fn indicator_source(&self, step: StepValue, loading: bool) -> IndicatorSource {
        let state = self.state_of(step);
        self.overrides
            .map(|overrides| overrides.with_value(|overrides| overrides.resolve(state, loading)))
            .unwrap_or(IndicatorSource::Default)
    }

    fn indicator_override(&self, step: StepValue, loading: bool) -> Option<ViewFn> {
        let source = self.indicator_source(step, loading);
        self.overrides?
            .with_value(|overrides| overrides.view_for(source))
    }

    /// Whether separators render at all.
    pub fn separator_visible(&self) -> bool {
        self.config.show_connector
    }

    /// Whether the content panel for `step` is mounted (tracked).
    pub fn content_visible(&self, step: StepValue) -> bool {
        step == self.value()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn recorder() -> (Rc<RefCell<Vec<StepValue>>>, Callback<StepValue>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let callback = Callback::new(move |value| sink.borrow_mut().push(value));
        (calls, callback)
    }

    fn clickable() -> StepperConfig {
        StepperConfig {
            clickable: true,
            ..StepperConfig::default()
        }
    }

    #[test]
    fn nodes_around_current_value_derive_expected_states() {
        let states: Vec<_> = (1..=4).map(|step| StepState::derive(step, 2)).collect();
        assert_eq!(
            states,
            vec![
                StepState::Completed,
                StepState::Active,
                StepState::Inactive,
                StepState::Inactive
            ]
        );
    }

    #[test]
    fn derived_states_follow_step_order() {
        fn rank(state: StepState) -> u8 {
            match state {
                StepState::Completed => 0,
                StepState::Active => 1,
                StepState::Inactive => 2,
            }
        }

        for current in -3..=6 {
            for a in -4..=7 {
                for b in a..=7 {
                    let (left, right) = (StepState::derive(a, current), StepState::derive(b, current));
                    assert!(
                        rank(left) <= rank(right),
                        "step {a} is {left} but step {b} is {right} at {current}"
                    );
                }
                assert_eq!(StepState::derive(a, current), StepState::derive(a, current));
            }
        }
    }

    #[test]
    fn derive_accepts_extreme_values() {
        assert_eq!(StepState::derive(StepValue::MIN, StepValue::MAX), StepState::Completed);
        assert_eq!(StepState::derive(StepValue::MAX, StepValue::MIN), StepState::Inactive);
        assert_eq!(StepNode::derive(0, 0).state, StepState::Active);
    }

    #[test]
    fn non_clickable_stepper_ignores_every_activation() {
        let runtime = create_runtime();
        let (calls, callback) = recorder();
        let stepper = StepperContext::new(1, StepperConfig::default()).with_on_value_change(callback);

        for step in 1..=4 {
            for _ in 0..3 {
                assert_eq!(stepper.activate(step), None);
            }
        }

        assert!(calls.borrow().is_empty());
        let states: Vec<_> = (1..=4).map(|step| stepper.state_of(step)).collect();
        assert_eq!(
            states,
            vec![
                StepState::Active,
                StepState::Inactive,
                StepState::Inactive,
                StepState::Inactive
            ]
        );
        runtime.dispose();
    }

    #[test]
    fn clickable_activation_forwards_step_once_without_mutating() {
        let runtime = create_runtime();
        let (calls, callback) = recorder();
        let stepper = StepperContext::new(1, clickable()).with_on_value_change(callback);

        assert_eq!(stepper.activate(3), Some(3));

        assert_eq!(*calls.borrow(), vec![3]);
        assert_eq!(stepper.value(), 1);
        runtime.dispose();
    }

    #[test]
    fn activation_without_callback_is_dropped() {
        let runtime = create_runtime();
        let stepper = StepperContext::new(2, clickable());

        assert_eq!(stepper.activate(4), None);
        assert_eq!(stepper.request_value_change(3), None);
        assert_eq!(stepper.value(), 2);
        runtime.dispose();
    }

    #[test]
    fn next_and_previous_request_neighbours_without_bounds() {
        let runtime = create_runtime();
        let (calls, callback) = recorder();
        let config = StepperConfig {
            total_steps: Some(1),
            ..StepperConfig::default()
        };
        let stepper = StepperContext::new(1, config).with_on_value_change(callback);

        assert_eq!(stepper.request_next(), Some(2));
        assert_eq!(stepper.request_previous(), Some(0));
        assert_eq!(*calls.borrow(), vec![2, 0]);
        runtime.dispose();
    }

    #[test]
    fn host_owned_signal_drives_derived_states() {
        let runtime = create_runtime();
        let value = create_rw_signal(1);
        let stepper = StepperContext::new(value, clickable())
            .with_on_value_change(Callback::new(move |next| value.set(next)));

        stepper.activate(3);

        assert_eq!(stepper.value(), 3);
        assert_eq!(stepper.node(2), StepNode { step: 2, state: StepState::Completed });
        assert_eq!(stepper.node(3).state, StepState::Active);
        runtime.dispose();
    }

    #[test]
    fn out_of_range_value_is_not_rejected() {
        let runtime = create_runtime();
        let config = StepperConfig {
            total_steps: Some(4),
            ..StepperConfig::default()
        };
        let stepper = StepperContext::new(9, config);

        assert_eq!(stepper.value(), 9);
        assert!((1..=4).all(|step| stepper.state_of(step) == StepState::Completed));
        assert!(stepper.is_last(4));
        assert!(!stepper.is_last(9));
        runtime.dispose();
    }

    #[test]
    fn badge_is_visible_only_for_mapped_status() {
        let statuses = [
            BadgeStatus::Default,
            BadgeStatus::Success,
            BadgeStatus::Warning,
            BadgeStatus::Danger,
            BadgeStatus::Info,
        ];
        for state in [StepState::Active, StepState::Completed, StepState::Inactive] {
            let visible: Vec<_> = statuses
                .iter()
                .copied()
                .filter(|status| badge_visible(*status, state))
                .collect();
            let expected = match state {
                StepState::Active => BadgeStatus::Warning,
                StepState::Completed => BadgeStatus::Success,
                StepState::Inactive => BadgeStatus::Default,
            };
            assert_eq!(visible, vec![expected]);
        }
    }

    #[test]
    fn completed_override_replaces_default_for_completed_step() {
        let runtime = create_runtime();
        let stepper = StepperContext::new(3, StepperConfig::default())
            .with_indicator_overrides(IndicatorOverrides::default().completed(|| "done"));

        assert_eq!(stepper.indicator_source(1, false), IndicatorSource::Completed);
        assert!(stepper.indicator_override(1, false).is_some());
        assert_eq!(stepper.indicator_source(3, false), IndicatorSource::Default);
        assert!(stepper.indicator_override(3, false).is_none());
        runtime.dispose();
    }

    #[test]
    fn loading_override_takes_precedence_when_flagged() {
        let overrides = IndicatorOverrides::default()
            .completed(|| "done")
            .loading(|| "busy");

        assert_eq!(overrides.resolve(StepState::Completed, true), IndicatorSource::Loading);
        assert_eq!(overrides.resolve(StepState::Inactive, true), IndicatorSource::Loading);
        assert_eq!(overrides.resolve(StepState::Completed, false), IndicatorSource::Completed);

        let completed_only = IndicatorOverrides::default().completed(|| "done");
        assert_eq!(
            completed_only.resolve(StepState::Completed, true),
            IndicatorSource::Completed
        );
        assert_eq!(
            IndicatorOverrides::default().resolve(StepState::Completed, true),
            IndicatorSource::Default
        );
    }

    #[test]
    fn exactly_one_content_panel_matches_current_value() {
        let runtime = create_runtime();
        for current in 0..=5 {
            let stepper = StepperContext::new(current, StepperConfig::default());
            let mounted: Vec<_> = (1..=4).filter(|step| stepper.content_visible(*step)).collect();
            if (1..=4).contains(&current) {
                assert_eq!(mounted, vec![current]);
            } else {
                assert!(mounted.is_empty());
            }
        }
        runtime.dispose();
    }

    #[test]
    fn separators_follow_connector_flag() {
        let runtime = create_runtime();
        let hidden = StepperContext::new(
            2,
            StepperConfig {
                show_connector: false,
                ..StepperConfig::default()
            },
        );
        assert!(!hidden.separator_visible());
        assert!(StepperContext::new(2, StepperConfig::default()).separator_visible());
        runtime.dispose();
    }

    #[test]
    fn activation_keys_are_enter_and_space() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(is_activation_key("Spacebar"));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("ArrowRight"));
    }

    #[test]
    fn held_activation_key_forwards_one_request() {
        let runtime = create_runtime();
        let (calls, callback) = recorder();
        let stepper = StepperContext::new(1, clickable()).with_on_value_change(callback);

        for (key, repeat) in [("Enter", false), ("Enter", true), ("Enter", true), ("Tab", false)] {
            if keydown_activates(key, repeat) {
                stepper.activate(2);
            }
        }

        assert_eq!(*calls.borrow(), vec![2]);
        assert!(keydown_activates(" ", false));
        assert!(!keydown_activates(" ", true));
        runtime.dispose();
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: StepperConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config, StepperConfig::default());

        let config: StepperConfig = serde_json::from_str(
            r#"{"orientation":"vertical","clickable":true,"total_steps":4,"completed_color":"green"}"#,
        )
        .expect("partial config");
        assert_eq!(config.orientation, StepperOrientation::Vertical);
        assert!(config.clickable);
        assert_eq!(config.total_steps, Some(4));
        assert_eq!(config.size, StepperSize::Md);
        assert!(config.show_connector);
        assert_eq!(config.completed_color, CompletedColor::Green);
    }
}
