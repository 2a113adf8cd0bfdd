//! Contact form section.
//!
//! Field limits are emitted as HTML constraint attributes from the same
//! constants the submission validator uses, so browser-side checks, the
//! runtime script and any server handling the endpoint all agree on what a
//! valid submission is.

use crate::content::ContactFormConfig;
use crate::primitives::section_header;
use crate::registry::RenderContext;
use crate::validate::{MESSAGE_MAX, MESSAGE_MIN, NAME_MAX, NAME_MIN, PHONE_MIN, SUBJECT_MIN};
use maud::{Markup, html};

pub fn render(ctx: &RenderContext, cfg: &ContactFormConfig) -> Option<Markup> {
    Some(html! {
        section.contact {
            (section_header(&cfg.title, &cfg.subtitle))
            form.contact-form
                method="post"
                action=(cfg.form.submit_endpoint)
                data-endpoint=(cfg.form.submit_endpoint)
                novalidate
            {
                div.form-field {
                    label for="contact-name" { "Name" }
                    input id="contact-name" name="name" type="text"
                        required minlength=(NAME_MIN) maxlength=(NAME_MAX)
                        autocomplete="name";
                    span.field-error data-for="name" {}
                }
                div.form-field {
                    label for="contact-email" { "Email" }
                    input id="contact-email" name="email" type="email"
                        required autocomplete="email";
                    span.field-error data-for="email" {}
                }
                div.form-field {
                    label for="contact-phone" { "Phone (optional)" }
                    input id="contact-phone" name="phone" type="tel"
                        minlength=(PHONE_MIN) autocomplete="tel";
                    span.field-error data-for="phone" {}
                }
                div.form-field {
                    label for="contact-subject" { "Subject (optional)" }
                    input id="contact-subject" name="subject" type="text"
                        minlength=(SUBJECT_MIN);
                    span.field-error data-for="subject" {}
                }
                div.form-field {
                    label for="contact-message" { "Message" }
                    textarea id="contact-message" name="message" rows="6"
                        required minlength=(MESSAGE_MIN) maxlength=(MESSAGE_MAX) {}
                    span.field-error data-for="message" {}
                }
                button.btn.btn-primary type="submit" { (cfg.form.submit_text) }
                p.form-status role="status" {}
            }
            @if !ctx.site.contact.email.is_empty() {
                p.contact-direct {
                    "Or email us directly at "
                    a href=(format!("mailto:{}", ctx.site.contact.email)) {
                        (ctx.site.contact.email)
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_ctx::with_ctx;

    #[test]
    fn default_config_renders_complete_form() {
        with_ctx(|ctx| {
            let html = render(ctx, &ContactFormConfig::default())
                .unwrap()
                .into_string();
            assert!(html.contains("Get in touch"));
            assert!(html.contains(r#"name="name""#));
            assert!(html.contains(r#"name="email""#));
            assert!(html.contains(r#"name="message""#));
            assert!(html.contains("Send Message"));
            assert!(html.contains(r#"data-endpoint="/api/contact""#));
        });
    }

    #[test]
    fn constraint_attributes_match_validator_limits() {
        with_ctx(|ctx| {
            let html = render(ctx, &ContactFormConfig::default())
                .unwrap()
                .into_string();
            assert!(html.contains(&format!(r#"minlength="{NAME_MIN}""#)));
            assert!(html.contains(&format!(r#"maxlength="{MESSAGE_MAX}""#)));
            assert!(html.contains(&format!(r#"minlength="{MESSAGE_MIN}""#)));
        });
    }

    #[test]
    fn phone_and_subject_are_not_required() {
        with_ctx(|ctx| {
            let html = render(ctx, &ContactFormConfig::default())
                .unwrap()
                .into_string();
            let phone = html
                .split(r#"id="contact-phone""#)
                .nth(1)
                .unwrap()
                .split('>')
                .next()
                .unwrap();
            assert!(!phone.contains("required"));
        });
    }

    #[test]
    fn custom_endpoint_and_label() {
        let cfg: ContactFormConfig = serde_json::from_value(serde_json::json!({
            "title": "Say Hello",
            "form": { "submit_text": "Go", "submit_endpoint": "/api/hello" }
        }))
        .unwrap();
        with_ctx(|ctx| {
            let html = render(ctx, &cfg).unwrap().into_string();
            assert!(html.contains("Say Hello"));
            assert!(html.contains(r#"action="/api/hello""#));
            assert!(html.contains(">Go</button>"));
        });
    }
}
