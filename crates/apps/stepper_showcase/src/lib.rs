//! Live-preview sandbox for the stepper primitives.
//!
//! The sandbox is the host side of the controlled stepper contract: it owns
//! the authoritative step value, feeds it into a [`StepperContext`], and writes
//! requested values back from `on_value_change`. Configuration toggles let QA
//! review every stepper variant, and the whole snapshot can be persisted and
//! restored as JSON.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod snapshot;

use leptos::ev::MouseEvent;
use leptos::*;
use serde_json::Value;
use stepper_ui::prelude::*;

pub use snapshot::{
    encode_snapshot, restore_snapshot, ShowcaseSnapshot, SnapshotError, SHOWCASE_STEPS,
    SNAPSHOT_SCHEMA_VERSION,
};

struct StepCopy {
    title: &'static str,
    description: &'static str,
    body: &'static str,
}

const STEP_COPY: [StepCopy; SHOWCASE_STEPS as usize] = [
    StepCopy {
        title: "Account",
        description: "Sign-in details",
        body: "Choose the email address and password used to sign in.",
    },
    StepCopy {
        title: "Profile",
        description: "How others see you",
        body: "Add a display name and an optional avatar.",
    },
    StepCopy {
        title: "Billing",
        description: "Payment method",
        body: "Attach a card or pick invoicing for team plans.",
    },
    StepCopy {
        title: "Review",
        description: "Confirm and finish",
        body: "Check every detail before creating the workspace.",
    },
];

fn step_copy(step: StepValue) -> Option<&'static StepCopy> {
    step.checked_sub(1)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| STEP_COPY.get(index))
}

fn indicator_overrides() -> IndicatorOverrides {
    IndicatorOverrides::default()
        .completed(|| view! { <Icon icon=IconName::Checkmark size=IconSize::Sm /> })
        .loading(|| view! { <Icon icon=IconName::Spinner size=IconSize::Sm /> })
}

#[component]
/// Stepper sandbox contents.
pub fn StepperShowcase(
    /// Previously persisted snapshot payload.
    #[prop(optional)]
    restored_state: Option<Value>,
    /// Receives the encoded snapshot whenever it changes.
    #[prop(optional)]
    on_persist: Option<Callback<Value>>,
) -> impl IntoView {
    let state = create_rw_signal(ShowcaseSnapshot::default());
    let last_saved = create_rw_signal::<Option<String>>(None);

    if let Some(restored_state) = restored_state {
        match restore_snapshot(restored_state) {
            Ok(restored) => {
                last_saved.set(serde_json::to_string(&restored).ok());
                state.set(restored);
            }
            Err(err) => logging::warn!("stepper showcase restore failed: {err}"),
        }
    }

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("stepper showcase serialize failed: {err}");
                return;
            }
        };

        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        last_saved.set(Some(serialized));

        if let Some(on_persist) = on_persist {
            match encode_snapshot(&snapshot) {
                Ok(value) => on_persist.call(value),
                Err(err) => logging::warn!("stepper showcase persist failed: {err}"),
            }
        }
    });

    let value = Signal::derive(move || state.with(|snapshot| snapshot.value));
    let config = create_memo(move |_| state.with(|snapshot| snapshot.config));

    // Orientation and the other settings are fixed per context, so a config
    // change rebuilds the stepper while value changes only re-derive states.
    let stepper_view = move || {
        let stepper = StepperContext::new(value, config.get())
            .with_on_value_change(Callback::new(move |next| {
                state.update(|snapshot| snapshot.value = next);
            }))
            .with_indicator_overrides(indicator_overrides());
        view! { <ShowcaseFlow stepper state /> }
    };

    view! {
        <Stack gap=LayoutGap::Lg layout_class="stepper-showcase">
            <Cluster justify=LayoutJustify::Between>
                <span data-ui-slot="title">"Stepper"</span>
                <Badge status=BadgeStatus::Info>
                    {move || format!("step {} of {}", value.get(), SHOWCASE_STEPS)}
                </Badge>
            </Cluster>
            <ShowcaseToggles state />
            {stepper_view}
        </Stack>
    }
}

#[component]
fn ShowcaseFlow(stepper: StepperContext, state: RwSignal<ShowcaseSnapshot>) -> impl IntoView {
    let last_step = SHOWCASE_STEPS as StepValue;

    view! {
        <Stack gap=LayoutGap::Md>
            <Stepper stepper aria_label="Workspace setup">
                <For each=move || 1..=last_step key=|step| *step let:step>
                    <StepperItem stepper step>
                        <StepperTrigger stepper step>
                            <StepperIndicator
                                stepper
                                step
                                loading=Signal::derive(move || {
                                    state.with(|snapshot| snapshot.loading && snapshot.value == step)
                                })
                            >
                                {step}
                            </StepperIndicator>
                            <Stack gap=LayoutGap::None align=LayoutAlign::Start>
                                <StepperTitle>
                                    {step_copy(step).map(|copy| copy.title)}
                                </StepperTitle>
                                <StepperDescription>
                                    {step_copy(step).map(|copy| copy.description)}
                                </StepperDescription>
                            </Stack>
                        </StepperTrigger>
                        <StepperBadge stepper step status=BadgeStatus::Success>"Done"</StepperBadge>
                        <StepperBadge stepper step status=BadgeStatus::Warning>"In progress"</StepperBadge>
                        <StepperBadge stepper step status=BadgeStatus::Default>"Up next"</StepperBadge>
                        {(step < last_step).then(|| view! { <StepperSeparator stepper step /> })}
                    </StepperItem>
                </For>
            </Stepper>

            <For each=move || 1..=last_step key=|step| *step let:step>
                <StepperContent stepper step>
                    <p>{step_copy(step).map(|copy| copy.body)}</p>
                </StepperContent>
            </For>

            <Cluster justify=LayoutJustify::Between>
                <Button
                    leading_icon=IconName::ChevronLeft
                    disabled=Signal::derive(move || !state.with(ShowcaseSnapshot::can_go_back))
                    on_click=Callback::new(move |_| {
                        let _ = stepper.request_previous();
                    })
                >
                    "Back"
                </Button>
                <Button
                    variant=ButtonVariant::Primary
                    trailing_icon=IconName::ChevronRight
                    disabled=Signal::derive(move || !state.with(ShowcaseSnapshot::can_go_forward))
                    on_click=Callback::new(move |_| {
                        let _ = stepper.request_next();
                    })
                >
                    "Next"
                </Button>
            </Cluster>
        </Stack>
    }
}

#[component]
fn ShowcaseToggles(state: RwSignal<ShowcaseSnapshot>) -> impl IntoView {
    let toggle = move |apply: fn(&mut ShowcaseSnapshot)| {
        Callback::new(move |_: MouseEvent| state.update(|snapshot| apply(snapshot)))
    };
    let selected = move |read: fn(&ShowcaseSnapshot) -> bool| {
        Signal::derive(move || state.with(|snapshot| read(snapshot)))
    };

    view! {
        <Cluster gap=LayoutGap::Sm ui_slot="toggles">
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                selected=selected(|snapshot| snapshot.config.clickable)
                on_click=toggle(|snapshot| snapshot.config.clickable = !snapshot.config.clickable)
            >
                "Clickable"
            </Button>
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                selected=selected(|snapshot| snapshot.config.show_connector)
                on_click=toggle(|snapshot| {
                    snapshot.config.show_connector = !snapshot.config.show_connector;
                })
            >
                "Connectors"
            </Button>
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                selected=selected(|snapshot| {
                    snapshot.config.orientation == StepperOrientation::Vertical
                })
                on_click=toggle(|snapshot| {
                    snapshot.config.orientation = match snapshot.config.orientation {
                        StepperOrientation::Horizontal => StepperOrientation::Vertical,
                        StepperOrientation::Vertical => StepperOrientation::Horizontal,
                    };
                })
            >
                "Vertical"
            </Button>
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                selected=selected(|snapshot| snapshot.config.completed_color == CompletedColor::Green)
                on_click=toggle(|snapshot| {
                    snapshot.config.completed_color = match snapshot.config.completed_color {
                        CompletedColor::Orange => CompletedColor::Green,
                        CompletedColor::Green => CompletedColor::Orange,
                    };
                })
            >
                "Green"
            </Button>
            <Button
                variant=ButtonVariant::Quiet
                size=ButtonSize::Sm
                selected=selected(|snapshot| snapshot.loading)
                on_click=toggle(|snapshot| snapshot.loading = !snapshot.loading)
            >
                "Loading"
            </Button>
        </Cluster>
    }
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the sandbox into the document body.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| view! { <StepperShowcase /> })
}
