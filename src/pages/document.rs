use chrono::{Datelike, Utc};

use crate::capture::LandingForms;
use crate::pages::content::{PageMeta, PageVariant};
use crate::pages::landing::{Landing, LandingProps};

const SITE_URL: &str = "https://simupatri.fr";
const SITE_NAME: &str = "Simupatri";

const TAILWIND_THEME: &str = r##"tailwind.config = {
  theme: {
    extend: {
      colors: {
        primary: { DEFAULT: "#1e3a5f", light: "#2c5282" },
        secondary: { DEFAULT: "#3182ce", light: "#90cdf4" },
        "accent-green": { DEFAULT: "#10b981", dark: "#059669" },
        "accent-orange": "#f97316"
      }
    }
  }
};"##;

/// Disables a capture form's submit button as soon as its native POST
/// leaves, and swallows any further submit (double click, Enter) from
/// that form until the response page replaces it.
pub const SUBMIT_GUARD_SCRIPT: &str = r#"document.querySelectorAll("form[data-capture]").forEach(function (form) {
  form.addEventListener("submit", function (event) {
    if (form.dataset.submitting === "true") {
      event.preventDefault();
      return;
    }
    form.dataset.submitting = "true";
    var button = form.querySelector("button[type=submit]");
    if (button) {
      button.disabled = true;
      button.textContent = form.dataset.loadingLabel;
    }
  });
});"#;

/// Renders one landing variant with the given form states into a full
/// HTML document.
pub async fn render_page(variant: PageVariant, forms: &LandingForms) -> String {
    let props = LandingProps {
        variant,
        hero: forms.hero.view(),
        cta: forms.cta.view(),
        year: Utc::now().year(),
    };
    let body = yew::ServerRenderer::<Landing>::with_props(move || props)
        .hydratable(false)
        .render()
        .await;
    wrap_document(&variant.copy().meta, variant.path(), &body)
}

fn wrap_document(meta: &PageMeta, path: &str, body: &str) -> String {
    let url = format!("{}{}", SITE_URL, path.trim_end_matches('/'));
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{og_description}">
<meta property="og:url" content="{url}">
<meta property="og:site_name" content="{site_name}">
<meta property="og:locale" content="fr_FR">
<meta property="og:type" content="website">
<link rel="preconnect" href="https://fonts.googleapis.com">
<link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap">
<script src="https://cdn.tailwindcss.com"></script>
<script>{theme}</script>
</head>
<body style="font-family: Inter, sans-serif">
{body}
<script>{guard}</script>
</body>
</html>
"#,
        title = meta.title,
        description = meta.description,
        og_description = meta.og_description,
        url = url,
        site_name = SITE_NAME,
        theme = TAILWIND_THEME,
        body = body,
        guard = SUBMIT_GUARD_SCRIPT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{
        CaptureStatus, FormSlot, CONFIRMATION_MESSAGE, ERROR_MESSAGE, SUBMIT_LABEL,
    };

    #[tokio::test]
    async fn idle_page_has_both_forms_and_metadata() {
        let html = render_page(PageVariant::Comparateur, &LandingForms::new()).await;

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="fr">"#));
        assert!(html.contains(r#"<meta property="og:locale" content="fr_FR">"#));
        assert!(html.contains(r#"<meta property="og:url" content="https://simupatri.fr">"#));
        assert!(html.contains(r#"id="hero-form""#));
        assert!(html.contains(r#"id="cta-form""#));
        assert!(html.contains(r#"id="cta""#));
        assert_eq!(html.matches(SUBMIT_LABEL).count(), 3); // nav link + two buttons
        assert!(html.contains(&format!("© {} Simupatri", Utc::now().year())));
    }

    #[tokio::test]
    async fn page_ships_the_in_flight_submit_guard() {
        let html = render_page(PageVariant::Comparateur, &LandingForms::new()).await;

        assert!(html.contains(&format!("<script>{}</script>", SUBMIT_GUARD_SCRIPT)));
        assert!(SUBMIT_GUARD_SCRIPT.contains("form[data-capture]"));
        assert!(SUBMIT_GUARD_SCRIPT.contains("button.disabled = true"));
        assert!(SUBMIT_GUARD_SCRIPT.contains("event.preventDefault()"));
        // the guard runs after both forms exist in the document
        let guard_at = html.find(SUBMIT_GUARD_SCRIPT).unwrap();
        assert!(html.find(r#"data-capture="hero""#).unwrap() < guard_at);
        assert!(html.find(r#"data-capture="cta""#).unwrap() < guard_at);
    }

    #[tokio::test]
    async fn forms_post_back_to_their_own_route() {
        let html = render_page(PageVariant::Simulateurs, &LandingForms::new()).await;
        assert_eq!(html.matches(r#"action="/simulateurs""#).count(), 2);
        assert!(html.contains(r#"<meta property="og:url" content="https://simupatri.fr/simulateurs">"#));
        assert!(html.contains(PageVariant::Simulateurs.copy().cta_intro));
    }

    #[tokio::test]
    async fn each_form_renders_its_own_state() {
        let mut forms = LandingForms::new();
        let hero = forms.slot_mut(FormSlot::Hero);
        hero.set_email("test@example.com");
        hero.begin_submit().unwrap();
        hero.finish_submit::<(), ()>(Ok(()));
        let cta = forms.slot_mut(FormSlot::Cta);
        cta.set_email("other@example.com");
        cta.begin_submit().unwrap();
        cta.finish_submit::<(), ()>(Err(()));
        assert_eq!(forms.hero.status(), CaptureStatus::Success);

        let html = render_page(PageVariant::Comparateur, &forms).await;
        assert!(html.contains(CONFIRMATION_MESSAGE));
        assert!(!html.contains(r#"id="hero-form""#));
        assert!(html.contains(r#"id="cta-form""#));
        assert!(html.contains(ERROR_MESSAGE));
        assert!(html.contains("other@example.com"));
    }
}
