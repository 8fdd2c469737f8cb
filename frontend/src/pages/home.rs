use yew::prelude::*;
use chrono::Datelike;

use crate::components::contact_form::ContactForm;
use crate::components::detail_modal::DetailModal;
use crate::components::typewriter::Typewriter;
use crate::content::{
    BUSINESS_NAME, CALENDLY_URL, PROJECTS, SERVICES, SUBHEADING, TOOLSET, WINS,
};

#[function_component(Home)]
pub fn home() -> Html {
    let is_visible = use_state(|| false);
    let modal = use_state(|| None::<AttrValue>);

    // Fade in the heading once mounted
    {
        let is_visible = is_visible.clone();
        use_effect_with_deps(
            move |_| {
                is_visible.set(true);
                || ()
            },
            (),
        );
    }

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |title: &'static str| modal.set(Some(AttrValue::from(title))))
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(None))
    };

    let fade = if *is_visible { "fade visible" } else { "fade" };

    html! {
        <div class="home">
            <style>
                {r#"
                .fade { opacity: 0; transition: opacity 1s ease-in-out; }
                .fade.visible { opacity: 1; }
                .caret {
                    display: inline-block;
                    border-right: 2px solid #333;
                    animation: blink 0.8s step-end infinite;
                }
                @keyframes blink { 50% { border-color: transparent; } }
                .hidden { display: none; }
                .modal-overlay {
                    position: fixed;
                    inset: 0;
                    background: rgba(31, 41, 55, 0.75);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                }
                .modal-panel {
                    background: #fff;
                    padding: 1.5rem;
                    border-radius: 0.5rem;
                    width: 91%;
                    max-width: 32rem;
                    position: relative;
                    text-align: center;
                }
                .modal-x { position: absolute; top: 1rem; right: 1rem; }
                .contact-error { color: #dc2626; font-size: 0.875rem; }
                .contact-sent { color: #15803d; text-align: center; }
                .primary-button:disabled { opacity: 0.5; }
                "#}
            </style>

            <section class="hero">
                <h1 class={fade}>{ format!("{}.", BUSINESS_NAME) }</h1>
                <Typewriter text={SUBHEADING} class="hero-subheading" />
                <a href="#contact" class={classes!("primary-button", "bounce", fade)}>
                    {"Book a Free 30‑Minute Consultation"}
                </a>
            </section>

            <section class="about">
                <img src="/assets/me.jpg" alt="Finn Jefferis" width="260" height="260" class="portrait" />
                <div class="bio">
                    <h2>{"Meet Finn"}</h2>
                    <p class="tagline">{"Your local full-stack problem solver."}</p>
                    <p>
                        {"Worthing-based dev pairing "}
                        <strong>{"React / Next.js"}</strong>
                        {" fronts with "}
                        <strong>{".NET / Laravel / Python"}</strong>
                        {" power. Six years’ experience shipping high-ROI software for e-commerce, utilities and SME clients."}
                    </p>
                    <h3>{"Wins I’m proud of:"}</h3>
                    <ul class="checklist">
                        { for WINS.iter().map(|win| html! { <li key={*win}>{ *win }</li> }) }
                    </ul>
                    <h3>{"Core toolset:"}</h3>
                    <p>{ TOOLSET }</p>
                </div>
            </section>

            <section class="services">
                <h2>{"How I Can Help"}</h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| {
                        let onclick = {
                            let open_modal = open_modal.clone();
                            let title = service.title;
                            Callback::from(move |_: MouseEvent| open_modal.emit(title))
                        };
                        html! {
                            <div key={service.title} class="service-card" {onclick}>
                                <div class={classes!("service-icon", service.accent)}>{ service.icon }</div>
                                <h3>{ service.title }</h3>
                                <p>{ service.pitch }</p>
                                <ul class="checklist">
                                    { for service.benefits.iter().map(|b| html! { <li key={*b}>{ *b }</li> }) }
                                </ul>
                            </div>
                        }
                    }) }
                </div>
            </section>

            <section class="portfolio">
                <h2>{"Our Work"}</h2>
                <div class="card-grid">
                    { for PROJECTS.iter().map(|project| {
                        let onclick = {
                            let open_modal = open_modal.clone();
                            let title = project.title;
                            Callback::from(move |_: MouseEvent| open_modal.emit(title))
                        };
                        html! {
                            <div key={project.title} class="project-card" {onclick}>
                                <img src={project.image} alt={project.alt} class="project-image" />
                                <h3>{ project.title }</h3>
                                <p>{ project.summary }</p>
                            </div>
                        }
                    }) }
                </div>
            </section>

            if let Some(title) = (*modal).clone() {
                <DetailModal title={title} on_close={close_modal} />
            }

            <section id="contact" class="contact">
                <h2>{"Get in Touch"}</h2>
                <p>{"Ready to elevate your business with custom software solutions? Book a free call or send a message."}</p>
                <div class="contact-grid">
                    <div class="booking-card">
                        <h3>{"Let’s Talk About Your Project"}</h3>
                        <p>{"Use my calendar to book a free 30-minute call, no emails, no back-and-forth."}</p>
                        <a href={CALENDLY_URL} target="_blank" rel="noopener noreferrer" class="primary-button">
                            {"Book a Call on Calendly"}
                        </a>
                    </div>
                    <div class="form-card">
                        <ContactForm />
                    </div>
                </div>
            </section>

            <footer class="footer">
                { format!("© {} {}", chrono::Local::now().year(), BUSINESS_NAME) }
            </footer>
        </div>
    }
}
