use leptos::ev::{KeyboardEvent, MouseEvent};

use super::*;
use crate::primitives::{bool_token, merge_layout_class};
use crate::Badge;

#[component]
/// Root container of a stepper.
pub fn Stepper(
    stepper: StepperContext,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let config = stepper.config();
    view! {
        <div
            class=merge_layout_class("ui-stepper", layout_class)
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="stepper"
            data-ui-orientation=config.orientation.token()
            data-ui-size=config.size.token()
            data-ui-clickable=bool_token(config.clickable)
            data-ui-connector=bool_token(config.show_connector)
            data-ui-completed-color=config.completed_color.token()
            data-ui-total=config.total_steps
            data-ui-value=move || stepper.value()
        >
            {children()}
        </div>
    }
}

#[component]
/// One step of a stepper.
pub fn StepperItem(
    stepper: StepperContext,
    step: StepValue,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stepper-item", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stepper-item"
            data-ui-orientation=stepper.config().orientation.token()
            data-ui-step=step
            data-ui-state=move || stepper.state_of(step).token()
            data-ui-last=bool_token(stepper.is_last(step))
        >
            {children()}
        </div>
    }
}

#[component]
/// Interactive surface of a step.
///
/// Pointer activation and the primary activation keys route through
/// [`StepperContext::activate`]. A non-clickable stepper keeps the trigger
/// rendered but inert.
pub fn StepperTrigger(
    stepper: StepperContext,
    step: StepValue,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let clickable = stepper.config().clickable;
    let on_click = move |_: MouseEvent| {
        let _ = stepper.activate(step);
    };
    // Suppress the click the browser would synthesize from Enter/Space,
    // including auto-repeats, so a held key is forwarded once.
    let on_keydown = move |ev: KeyboardEvent| {
        let key = ev.key();
        if !is_activation_key(&key) {
            return;
        }
        ev.prevent_default();
        if keydown_activates(&key, ev.repeat()) {
            let _ = stepper.activate(step);
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-stepper-trigger", layout_class)
            aria-label=aria_label
            aria-current=move || (stepper.state_of(step) == StepState::Active).then_some("step")
            aria-disabled=bool_token(!clickable)
            tabindex=if clickable { 0 } else { -1 }
            data-ui-primitive="true"
            data-ui-kind="stepper-trigger"
            data-ui-step=step
            data-ui-state=move || stepper.state_of(step).token()
            data-ui-clickable=bool_token(clickable)
            on:click=on_click
            on:keydown=on_keydown
        >
            {children()}
        </button>
    }
}

#[component]
/// Visual marker of a step.
///
/// Renders the loading or completed override when one applies, otherwise the
/// caller-provided children (usually the step number).
pub fn StepperIndicator(
    stepper: StepperContext,
    step: StepValue,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let content = move || match stepper.indicator_override(step, loading.get()) {
        Some(view_fn) => view_fn.run(),
        None => children().into_view(),
    };

    view! {
        <span
            class=merge_layout_class("ui-stepper-indicator", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="stepper-indicator"
            data-ui-size=stepper.config().size.token()
            data-ui-state=move || stepper.state_of(step).token()
            data-ui-completed-color=stepper.config().completed_color.token()
            data-ui-loading=move || bool_token(loading.get())
        >
            {content}
        </span>
    }
}

#[component]
/// Connector drawn after a step. Contributes nothing when connectors are off.
pub fn StepperSeparator(
    stepper: StepperContext,
    step: StepValue,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let config = stepper.config();
    stepper.separator_visible().then(|| {
        view! {
            <div
                class=merge_layout_class("ui-stepper-separator", layout_class)
                role="separator"
                aria-orientation=config.orientation.token()
                data-ui-primitive="true"
                data-ui-kind="stepper-separator"
                data-ui-orientation=config.orientation.token()
                data-ui-state=move || stepper.state_of(step).token()
                data-ui-completed-color=config.completed_color.token()
            ></div>
        }
    })
}

#[component]
/// Step title slot.
pub fn StepperTitle(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-stepper-title", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stepper-title"
        >
            {children()}
        </span>
    }
}

#[component]
/// Step description slot.
pub fn StepperDescription(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-stepper-description", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stepper-description"
        >
            {children()}
        </span>
    }
}

#[component]
/// Badge shown only while `status` matches the step's derived state.
pub fn StepperBadge(
    stepper: StepperContext,
    step: StepValue,
    status: BadgeStatus,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || badge_visible(status, stepper.state_of(step)) fallback=|| ()>
            {
                let children = children.clone();
                view! {
                    <Badge status layout_class=layout_class.unwrap_or("") ui_slot="stepper-badge">
                        {children()}
                    </Badge>
                }
            }
        </Show>
    }
}

#[component]
/// Per-step content, mounted only while `step` is the current value.
pub fn StepperContent(
    stepper: StepperContext,
    step: StepValue,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || stepper.content_visible(step) fallback=|| ()>
            <div
                class=merge_layout_class("ui-stepper-content", layout_class)
                role="region"
                data-ui-primitive="true"
                data-ui-kind="stepper-content"
                data-ui-step=step
            >
                {children()}
            </div>
        </Show>
    }
}
