use super::*;

#[component]
/// Compact status badge primitive.
pub fn Badge(
    #[prop(default = BadgeStatus::Default)] status: BadgeStatus,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-slot=ui_slot
            data-ui-status=status.token()
        >
            {children()}
        </span>
    }
}
