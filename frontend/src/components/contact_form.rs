use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use log::{info, warn};

use crate::api::{self, ContactError, ContactRequest};

pub const SENT_MESSAGE: &str = "✅ Thanks! I’ll reply within one business day.";
pub const ERROR_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Error,
}

/// Field values and submission phase, independent of any rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub name: String,
    pub email: String,
    pub message: String,
    status: SubmissionStatus,
}

impl ContactFormState {
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Moves to `Submitting` and hands back the payload to send. Returns `None`
    /// while a request is in flight or after the message went through.
    pub fn begin_submit(&mut self, company: String) -> Option<ContactRequest> {
        match self.status {
            SubmissionStatus::Submitting | SubmissionStatus::Sent => None,
            SubmissionStatus::Idle | SubmissionStatus::Error => {
                self.status = SubmissionStatus::Submitting;
                Some(ContactRequest {
                    name: self.name.clone(),
                    email: self.email.clone(),
                    message: self.message.clone(),
                    company,
                })
            }
        }
    }

    /// Applies the outcome of the request started by `begin_submit`.
    pub fn finish(&mut self, outcome: Result<(), ContactError>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = SubmissionStatus::Sent;
            }
            Err(_) => self.status = SubmissionStatus::Error,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl ContactFormState {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

pub enum Msg {
    SetField(Field, String),
    Submit,
    Resolved(Result<(), ContactError>),
}

pub struct ContactForm {
    state: ContactFormState,
    company_ref: NodeRef,
}

impl Component for ContactForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: ContactFormState::default(),
            company_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetField(field, value) => {
                self.state.set(field, value);
                true
            }
            Msg::Submit => {
                // Read straight from the DOM: bots fill inputs without firing events.
                let company = self
                    .company_ref
                    .cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default();

                let Some(request) = self.state.begin_submit(company) else {
                    return false;
                };
                ctx.link().send_future(async move {
                    Msg::Resolved(api::send_contact(&request).await)
                });
                true
            }
            Msg::Resolved(outcome) => {
                match &outcome {
                    Ok(()) => info!("Contact message sent"),
                    Err(e) => warn!("Contact message failed: {}", e),
                }
                self.state.finish(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        render_form(
            &self.state,
            &self.company_ref,
            ctx.link().callback(|_: ()| Msg::Submit),
            ctx.link().callback(|(field, value): (Field, String)| Msg::SetField(field, value)),
        )
    }
}

/// Markup for every status. `Sent` replaces the form with the confirmation.
pub fn render_form(
    state: &ContactFormState,
    company_ref: &NodeRef,
    on_submit: Callback<()>,
    on_field: Callback<(Field, String)>,
) -> Html {
    let status = state.status();

    if status == SubmissionStatus::Sent {
        return html! {
            <p class="contact-sent">{ SENT_MESSAGE }</p>
        };
    }

    let submitting = status == SubmissionStatus::Submitting;
    let onsubmit = Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        on_submit.emit(());
    });
    let input_for = |field: Field| {
        on_field.reform(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            (field, input.value())
        })
    };
    let on_message = on_field.reform(|e: InputEvent| {
        let input: HtmlTextAreaElement = e.target_unchecked_into();
        (Field::Message, input.value())
    });

    html! {
        <form class="contact-form" {onsubmit}>
            <input
                ref={company_ref.clone()}
                type="text"
                name="company"
                class="hidden"
                tabindex="-1"
                autocomplete="off"
            />

            <div class="form-field">
                <label for="name">{"Name"}</label>
                <input
                    id="name"
                    name="name"
                    type="text"
                    required=true
                    autocomplete="name"
                    value={state.name.clone()}
                    oninput={input_for(Field::Name)}
                />
            </div>

            <div class="form-field">
                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    required=true
                    autocomplete="email"
                    value={state.email.clone()}
                    oninput={input_for(Field::Email)}
                />
            </div>

            <div class="form-field">
                <label for="message">{"Message"}</label>
                <textarea
                    id="message"
                    name="message"
                    required=true
                    rows="5"
                    value={state.message.clone()}
                    oninput={on_message}
                />
            </div>

            if status == SubmissionStatus::Error {
                <p class="contact-error">{ ERROR_MESSAGE }</p>
            }

            <button type="submit" class="primary-button" disabled={submitting}>
                { if submitting { "Sending…" } else { "Send Message" } }
            </button>

            <p class="privacy-note">
                {"🔒 Your information is private and will never be shared."}
            </p>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        ContactFormState {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            message: "Hello".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn submit_sends_fields_and_locks_the_form() {
        let mut state = filled();
        let request = state.begin_submit(String::new()).expect("request");
        assert_eq!(state.status(), SubmissionStatus::Submitting);
        assert_eq!(
            request,
            ContactRequest {
                name: "Jo".to_string(),
                email: "jo@x.com".to_string(),
                message: "Hello".to_string(),
                company: String::new(),
            }
        );
    }

    #[test]
    fn second_submit_while_in_flight_sends_nothing() {
        let mut state = filled();
        assert!(state.begin_submit(String::new()).is_some());
        assert!(state.begin_submit(String::new()).is_none());
        assert_eq!(state.status(), SubmissionStatus::Submitting);
    }

    #[test]
    fn success_clears_fields_and_is_final() {
        let mut state = filled();
        state.begin_submit(String::new());
        state.finish(Ok(()));

        assert_eq!(state.status(), SubmissionStatus::Sent);
        assert!(state.name.is_empty());
        assert!(state.email.is_empty());
        assert!(state.message.is_empty());

        state.name = "Again".to_string();
        assert!(state.begin_submit(String::new()).is_none());
        assert_eq!(state.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn failure_keeps_what_the_user_typed() {
        for error in [ContactError::Status(500), ContactError::Network("offline".to_string())] {
            let mut state = filled();
            state.begin_submit(String::new());
            state.finish(Err(error));

            assert_eq!(state.status(), SubmissionStatus::Error);
            assert_eq!(state.name, "Jo");
            assert_eq!(state.email, "jo@x.com");
            assert_eq!(state.message, "Hello");
        }
    }

    #[test]
    fn retry_after_error_is_allowed() {
        let mut state = filled();
        state.begin_submit(String::new());
        state.finish(Err(ContactError::Status(502)));

        let retry = state.begin_submit(String::new()).expect("retry");
        assert_eq!(retry.message, "Hello");
        state.finish(Ok(()));
        assert_eq!(state.status(), SubmissionStatus::Sent);
    }

    #[test]
    fn honeypot_value_is_passed_through() {
        let mut state = filled();
        let request = state.begin_submit("ACME".to_string()).expect("request");
        assert_eq!(request.company, "ACME");
    }

    #[test]
    fn stray_outcome_without_submit_is_ignored() {
        let mut state = filled();
        state.finish(Ok(()));
        assert_eq!(state, filled());
    }

    #[derive(Properties, PartialEq)]
    struct FormHarnessProps {
        state: ContactFormState,
    }

    #[function_component]
    fn FormHarness(props: &FormHarnessProps) -> Html {
        render_form(
            &props.state,
            &NodeRef::default(),
            Callback::from(|_: ()| ()),
            Callback::from(|_: (Field, String)| ()),
        )
    }

    async fn render(state: ContactFormState) -> String {
        yew::ServerRenderer::<FormHarness>::with_props(move || FormHarnessProps { state })
            .render()
            .await
    }

    fn with_status(status: SubmissionStatus) -> ContactFormState {
        ContactFormState { status, ..filled() }
    }

    #[test]
    fn set_updates_the_named_field() {
        let mut state = ContactFormState::default();
        state.set(Field::Name, "Jo".to_string());
        state.set(Field::Email, "jo@x.com".to_string());
        state.set(Field::Message, "Hello".to_string());
        assert_eq!(state, filled());
    }

    #[tokio::test]
    async fn idle_form_is_enabled_without_error() {
        let html = render(with_status(SubmissionStatus::Idle)).await;
        assert!(html.contains("<form"));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("disabled"));
        assert!(!html.contains(ERROR_MESSAGE));
        assert!(html.contains(r#"name="company""#));
    }

    #[tokio::test]
    async fn submitting_disables_the_button() {
        let html = render(with_status(SubmissionStatus::Submitting)).await;
        assert!(html.contains("disabled"));
        assert!(html.contains("Sending…"));
        assert!(!html.contains("Send Message"));
    }

    #[tokio::test]
    async fn error_shows_message_and_keeps_values() {
        let html = render(with_status(SubmissionStatus::Error)).await;
        assert!(html.contains(ERROR_MESSAGE));
        assert!(html.contains("Send Message"));
        assert!(!html.contains("disabled"));
        assert!(html.contains("jo@x.com"));
    }

    #[tokio::test]
    async fn sent_replaces_the_form_with_confirmation() {
        let mut state = filled();
        state.begin_submit(String::new());
        state.finish(Ok(()));

        let html = render(state).await;
        assert!(html.contains(SENT_MESSAGE));
        assert!(!html.contains("<form"));
    }
}
