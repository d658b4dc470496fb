//! Contact section and form.

use dioxus::prelude::*;
use portfolio_core::{ContactField, LogSink};
use portfolio_ui::{Button, ButtonVariant, Input, SectionHeader, TextArea};

use crate::content::CONTACT_KEY;
use crate::context::{spawn_notification_timers, use_page};

#[component]
pub fn Contact() -> Element {
    let mut page = use_page();

    let (class, form) = {
        let page = page.read();
        (page.reveal().class_for(CONTACT_KEY), page.form().clone())
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = page.write().submit(&LogSink);
        spawn_notification_timers(page, outcome.notification);
    };

    rsx! {
        section { id: "contact", class: "contact",
            SectionHeader {
                title: "Get In Touch".to_string(),
                subtitle: "Have a project in mind? Let's talk.".to_string(),
            }
            div { id: CONTACT_KEY, class: "contact-content {class}",
                div { class: "contact-info",
                    div { class: "contact-item",
                        i { class: "fas fa-envelope" }
                        span { "hello@portfolio.dev" }
                    }
                    div { class: "contact-item",
                        i { class: "fas fa-map-marker-alt" }
                        span { "Hyderabad, India" }
                    }
                }

                form {
                    id: "contactForm",
                    class: "contact-form",
                    onsubmit: on_submit,
                    Input {
                        id: "name".to_string(),
                        value: form.name,
                        label: "Your Name".to_string(),
                        oninput: move |value| page.write().set_field(ContactField::Name, value),
                    }
                    Input {
                        id: "email".to_string(),
                        input_type: "email".to_string(),
                        value: form.email,
                        label: "Your Email".to_string(),
                        oninput: move |value| page.write().set_field(ContactField::Email, value),
                    }
                    TextArea {
                        id: "message".to_string(),
                        value: form.message,
                        label: "Your Message".to_string(),
                        oninput: move |value| page.write().set_field(ContactField::Message, value),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        button_type: "submit".to_string(),
                        "Send Message"
                    }
                }
            }
        }
    }
}
