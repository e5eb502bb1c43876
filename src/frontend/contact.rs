//! Contact section. The form never leaves the page; submitting swaps
//! it for an inline confirmation.

use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::frontend::reveal;

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let section_ref = use_node_ref();
    reveal::use_section_reveal(section_ref.clone());

    let submitted = use_state(|| false);
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let submitted = submitted.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let message_ref = message_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            // No backend receives these yet; read and drop.
            let name = name_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let message = message_ref
                .cast::<HtmlTextAreaElement>()
                .map(|area| area.value())
                .unwrap_or_default();
            log::debug!(
                "contact form submitted ({} field characters)",
                name.len() + email.len() + message.len()
            );
            submitted.set(true);
        })
    };

    html! {
        <section id="contact" class="section" ref={section_ref}>
            <div class="section-heading">
                <h2>{"Get in touch"}</h2>
                <p>{"Tell us what you are making."}</p>
            </div>
            if *submitted {
                <div class="form-success">
                    <h3>{"Thanks for writing!"}</h3>
                    <p>{"We read everything and reply within two working days."}</p>
                </div>
            } else {
                <form class="contact-form" {onsubmit}>
                    <label class="form-field">
                        {"Name"}
                        <input ref={name_ref.clone()} type="text" name="name" />
                    </label>
                    <label class="form-field">
                        {"Email"}
                        <input ref={email_ref.clone()} type="email" name="email" />
                    </label>
                    <label class="form-field">
                        {"What are you making?"}
                        <textarea ref={message_ref.clone()} name="message" rows="5"></textarea>
                    </label>
                    <button type="submit" class="button">{"Send"}</button>
                </form>
            }
        </section>
    }
}
