use yew::prelude::*;

use crate::capture::{
    CaptureStatus, CaptureView, FormStyle, CONFIRMATION_MESSAGE, EMAIL_PLACEHOLDER, ERROR_MESSAGE,
    LOADING_LABEL, SUBMIT_LABEL,
};

const DARK_INPUT: &str = "flex-1 px-4 py-3 rounded-lg bg-white/10 border border-white/20 text-white placeholder-white/50 focus:outline-none focus:ring-2 focus:ring-accent-green focus:border-transparent text-base";
const LIGHT_INPUT: &str = "flex-1 px-4 py-3 rounded-lg bg-white border border-slate-300 text-primary placeholder-slate-400 focus:outline-none focus:ring-2 focus:ring-secondary focus:border-transparent text-base shadow-sm";

#[derive(Properties, PartialEq, Clone)]
pub struct EmailFormProps {
    pub view: CaptureView,
    /// Page route the form posts back to.
    pub action: &'static str,
}

#[function_component(EmailForm)]
pub fn email_form(props: &EmailFormProps) -> Html {
    let view = &props.view;
    if view.status == CaptureStatus::Success {
        return html! {
            <p class="text-accent-green font-semibold text-lg">{CONFIRMATION_MESSAGE}</p>
        };
    }
    let input_class = match view.style {
        FormStyle::Dark => DARK_INPUT,
        FormStyle::Light => LIGHT_INPUT,
    };
    let loading = view.status == CaptureStatus::Loading;
    let button_label = if loading { LOADING_LABEL } else { SUBMIT_LABEL };
    html! {
        <form
            method="post"
            action={props.action}
            class="flex flex-col sm:flex-row gap-3 w-full max-w-md"
            id={view.slot.html_id()}
            data-capture={view.slot.as_str()}
            data-loading-label={LOADING_LABEL}
        >
            <input type="hidden" name="form" value={view.slot.as_str()} />
            <input
                type="email"
                name="email"
                required={true}
                placeholder={EMAIL_PLACEHOLDER}
                value={view.email.clone()}
                class={input_class}
            />
            <button
                type="submit"
                disabled={loading}
                class="px-6 py-3 bg-accent-green hover:bg-accent-green-dark text-white font-semibold rounded-lg transition-colors disabled:opacity-50 cursor-pointer whitespace-nowrap shadow-md"
            >
                {button_label}
            </button>
            if view.status == CaptureStatus::Error {
                <p class="text-red-500 text-sm sm:col-span-2">{ERROR_MESSAGE}</p>
            }
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::FormSlot;

    async fn render(status: CaptureStatus, email: &str) -> String {
        let props = EmailFormProps {
            view: CaptureView {
                slot: FormSlot::Hero,
                style: FormStyle::Dark,
                email: email.to_string(),
                status,
            },
            action: "/",
        };
        yew::ServerRenderer::<EmailForm>::with_props(move || props)
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn idle_renders_form_with_submit_label() {
        let html = render(CaptureStatus::Idle, "").await;
        assert!(html.contains(r#"id="hero-form""#));
        assert!(html.contains(r#"name="email""#));
        assert!(html.contains(SUBMIT_LABEL));
        assert!(!html.contains(ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn form_is_marked_for_the_submit_guard() {
        let html = render(CaptureStatus::Idle, "").await;
        assert!(html.contains(r#"data-capture="hero""#));
        assert!(html.contains(r#"data-loading-label="...""#));
    }

    #[tokio::test]
    async fn loading_swaps_button_label() {
        let html = render(CaptureStatus::Loading, "test@example.com").await;
        assert!(html.contains(LOADING_LABEL));
        assert!(!html.contains(SUBMIT_LABEL));
    }

    #[tokio::test]
    async fn error_keeps_value_and_shows_message() {
        let html = render(CaptureStatus::Error, "test@example.com").await;
        assert!(html.contains("test@example.com"));
        assert!(html.contains(ERROR_MESSAGE));
        assert!(html.contains(SUBMIT_LABEL));
    }

    #[tokio::test]
    async fn success_replaces_the_form() {
        let html = render(CaptureStatus::Success, "").await;
        assert!(html.contains(CONFIRMATION_MESSAGE));
        assert!(!html.contains("<form"));
        assert!(!html.contains("<input"));
        assert!(!html.contains("<button"));
    }
}
