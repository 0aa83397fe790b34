use yew::prelude::*;
use chrono::{Datelike, Utc};

use crate::components::campaign_generator::CampaignGenerator;
use crate::components::chatbot::Chatbot;
use crate::components::proposal_modal::ProposalModal;
use crate::content::{
    PricingPackage, ServiceItem, AGENCY_NAME, CONTACT_EMAIL, CONTACT_PHONE,
    CONTACT_SERVICE_INTERESTS, FOUNDER_IMAGE_URL, MARQUEE_ITEMS, PACKAGES, SERVICES, SOCIAL_LINKS,
    TAGLINE,
};
use crate::scroll::scroll_to_section;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub theme: Theme,
}

fn service_card(service: &ServiceItem) -> Html {
    html! {
        <div key={service.id} class="service-card">
            <div class="service-icon" title={service.icon.label()}>{ service.icon.glyph() }</div>
            <h3>{ service.title }</h3>
            <p>{ service.description }</p>
        </div>
    }
}

fn package_card(pkg: &PricingPackage, on_choose: Callback<MouseEvent>) -> Html {
    html! {
        <div key={pkg.id} class={classes!("package-card", pkg.recommended.then(|| "recommended"))}>
            if pkg.recommended {
                <span class="package-badge">{"Most Popular"}</span>
            }
            <h3>{ pkg.title }</h3>
            <div class="package-price">
                <span class="amount">{ pkg.price }</span>
                <span class="period">{"/month"}</span>
            </div>
            <ul>
                { for pkg.features.iter().map(|feature| html! { <li>{"✓ "}{ *feature }</li> }) }
            </ul>
            <button class="cta primary" onclick={on_choose}>{"Choose Plan"}</button>
        </div>
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let proposal_open = use_state(|| false);

    let open_proposal = {
        let proposal_open = proposal_open.clone();
        Callback::from(move |_: MouseEvent| proposal_open.set(true))
    };
    let close_proposal = {
        let proposal_open = proposal_open.clone();
        Callback::from(move |_| proposal_open.set(false))
    };
    let request_callback = Callback::from(|_: MouseEvent| {
        scroll_to_section("contact");
    });
    let year = Utc::now().year();

    html! {
        <div class={classes!("landing", props.theme.class_name())}>
            <style>
            {r#"
            .landing section { padding: 6rem 1.5rem; }
            .landing .container { max-width: 72rem; margin: 0 auto; }
            .landing h2 { font-family: Georgia, serif; font-size: 2.5rem; margin: 0 0 1rem; }
            .section-title { text-align: center; margin-bottom: 4rem; }
            .section-title p { opacity: 0.7; max-width: 40rem; margin: 0 auto; }
            .hero { min-height: 100vh; display: flex; align-items: center; justify-content: center; text-align: center; box-sizing: border-box; }
            .hero h1 { font-family: Georgia, serif; font-size: clamp(2.5rem, 7vw, 5rem); line-height: 1.1; margin: 0 0 1.5rem; }
            .hero .tagline { text-transform: uppercase; letter-spacing: 0.3em; font-size: 0.8rem; margin-bottom: 1.5rem; }
            .hero p { font-size: 1.15rem; opacity: 0.8; max-width: 40rem; margin: 0 auto 2.5rem; }
            .hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; justify-content: center; }
            .cta { padding: 1rem 2rem; border-radius: 9999px; font-weight: bold; cursor: pointer; border: 2px solid transparent; font-size: 1rem; transition: transform 0.2s; }
            .cta:hover { transform: translateY(-2px); }
            .cta.ghost { background: transparent; color: inherit; border-color: currentColor; }
            .theme-dark .cta.primary { background: #a3e635; color: #0f172a; }
            .theme-light .cta.primary { background: #1c1917; color: #fff; }
            .theme-dark .accent { color: #a3e635; }
            .theme-light .accent { color: #b45309; }
            .marquee { overflow: hidden; white-space: nowrap; padding: 1.5rem 0; border-top: 1px solid rgba(127,127,127,0.2); border-bottom: 1px solid rgba(127,127,127,0.2); }
            .marquee-track { display: inline-flex; gap: 3rem; animation: marquee 30s linear infinite; }
            .marquee-item { font-size: 1.5rem; font-weight: bold; opacity: 0.6; }
            @keyframes marquee { from { transform: translateX(0); } to { transform: translateX(-50%); } }
            .about-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 4rem; align-items: center; }
            .about-grid img { width: 100%; border-radius: 1.5rem; }
            .about-grid blockquote { font-family: Georgia, serif; font-size: 1.4rem; font-style: italic; margin: 2rem 0; padding-left: 1.5rem; border-left: 4px solid currentColor; }
            .card-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
            .service-card, .package-card { position: relative; padding: 2rem; border-radius: 1.5rem; border: 1px solid rgba(127,127,127,0.25); transition: transform 0.3s; }
            .service-card:hover { transform: translateY(-4px); }
            .service-icon { font-size: 2rem; margin-bottom: 1rem; }
            .service-card p { opacity: 0.75; line-height: 1.6; }
            .package-card.recommended { border-width: 2px; transform: scale(1.03); }
            .theme-dark .package-card.recommended { border-color: #a3e635; }
            .theme-light .package-card.recommended { border-color: #1c1917; }
            .package-badge { position: absolute; top: -0.8rem; left: 50%; transform: translateX(-50%); padding: 0.25rem 1rem; border-radius: 9999px; font-size: 0.75rem; font-weight: bold; text-transform: uppercase; }
            .theme-dark .package-badge { background: #a3e635; color: #0f172a; }
            .theme-light .package-badge { background: #1c1917; color: #fff; }
            .package-price .amount { font-size: 2.5rem; font-weight: bold; }
            .package-price .period { opacity: 0.6; }
            .package-card ul { list-style: none; padding: 0; margin: 2rem 0; line-height: 2; }
            .package-card .cta { width: 100%; }
            .packages-note { text-align: center; opacity: 0.6; font-size: 0.85rem; margin-top: 2rem; }
            .contact-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 4rem; }
            .contact-detail { margin-bottom: 1.5rem; }
            .contact-detail span { display: block; font-size: 0.75rem; text-transform: uppercase; letter-spacing: 0.1em; opacity: 0.6; }
            .socials { display: flex; gap: 1rem; }
            .contact-form { display: flex; flex-direction: column; gap: 1rem; }
            .contact-form label { display: flex; flex-direction: column; gap: 0.5rem; font-size: 0.8rem; font-weight: bold; text-transform: uppercase; opacity: 0.8; }
            .contact-form .name-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
            .contact-form input, .contact-form select { padding: 1rem; border-radius: 0.75rem; border: 1px solid rgba(127,127,127,0.4); background: rgba(127,127,127,0.08); color: inherit; font: inherit; }
            .landing footer { padding: 3rem 1.5rem; text-align: center; opacity: 0.6; font-size: 0.85rem; border-top: 1px solid rgba(127,127,127,0.2); }
            "#}
            </style>

            <section id="hero" class="hero">
                <div class="container">
                    <div class="tagline accent">{ TAGLINE }</div>
                    <h1>
                        {"We Build "}<span class="accent">{"Momentum"}</span>{" For Ambitious Brands"}
                    </h1>
                    <p>
                        {"Performance marketing, SEO and creative that turn attention into measurable growth."}
                    </p>
                    <div class="hero-actions">
                        <button class="cta primary" onclick={open_proposal.clone()}>
                            {"Get Your Custom Proposal"}
                        </button>
                        <button class="cta ghost" onclick={request_callback}>
                            {"Request a Callback"}
                        </button>
                    </div>
                </div>
            </section>

            <div class="marquee">
                // Rendered twice so the -50% translation loops without a gap
                <div class="marquee-track">
                    { for MARQUEE_ITEMS.iter().chain(MARQUEE_ITEMS.iter()).map(|item| html! {
                        <span class="marquee-item">{ *item }{"  ✦"}</span>
                    }) }
                </div>
            </div>

            <section id="about">
                <div class="container about-grid">
                    <img src={FOUNDER_IMAGE_URL} alt="Founder" />
                    <div>
                        <h2>{"About "}<span class="accent">{ AGENCY_NAME }</span></h2>
                        <p>
                            {"We are a growth-focused digital marketing agency helping businesses across India scale with data-driven campaigns, creative storytelling and technology that converts."}
                        </p>
                        <blockquote>
                            {"\"Marketing is no longer about the stuff you make, but the stories you tell and the results you deliver.\""}
                        </blockquote>
                        <p>{"- Founder, "}{ AGENCY_NAME }</p>
                    </div>
                </div>
            </section>

            <section id="ai-tools">
                <div class="container">
                    <CampaignGenerator theme={props.theme} />
                </div>
            </section>

            <section id="services">
                <div class="container">
                    <div class="section-title">
                        <h2>{"Our "}<span class="accent">{"Services"}</span></h2>
                        <p>{"Everything you need to attract, engage and convert your ideal customers."}</p>
                    </div>
                    <div class="card-grid">
                        { for SERVICES.iter().map(service_card) }
                    </div>
                </div>
            </section>

            <section id="packages">
                <div class="container">
                    <div class="section-title">
                        <h2>{"Growth "}<span class="accent">{"Packages"}</span></h2>
                        <p>{"Transparent monthly plans built to scale with your ambitions."}</p>
                    </div>
                    <div class="card-grid">
                        { for PACKAGES.iter().map(|pkg| package_card(pkg, open_proposal.clone())) }
                    </div>
                    <p class="packages-note">{"*Excludes Ad Spend"}</p>
                </div>
            </section>

            <section id="contact">
                <div class="container contact-grid">
                    <div>
                        <h2>{"Let's "}<span class="accent">{"Talk"}</span></h2>
                        <p>{"Ready to grow? Reach out and our team will get back to you within one business day."}</p>
                        <div class="contact-detail">
                            <span>{"Phone"}</span>
                            <a href={format!("tel:{}", CONTACT_PHONE.replace(' ', ""))}>{ CONTACT_PHONE }</a>
                        </div>
                        <div class="contact-detail">
                            <span>{"Email"}</span>
                            <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                        </div>
                        <div class="socials">
                            { for SOCIAL_LINKS.iter().map(|(name, url)| html! {
                                <a href={*url} target="_blank" rel="noopener noreferrer">{ *name }</a>
                            }) }
                        </div>
                    </div>
                    <form class="contact-form" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                        <div class="name-row">
                            <label>{"First Name"}<input type="text" /></label>
                            <label>{"Last Name"}<input type="text" /></label>
                        </div>
                        <label>{"Email"}<input type="email" /></label>
                        <label>
                            {"Service Interest"}
                            <select>
                                { for CONTACT_SERVICE_INTERESTS.iter().map(|interest| html! {
                                    <option>{ *interest }</option>
                                }) }
                            </select>
                        </label>
                        <button type="submit" class="cta primary">{"Send Message"}</button>
                    </form>
                </div>
            </section>

            <footer>
                { format!("© {} {}. All rights reserved.", year, AGENCY_NAME) }
            </footer>

            <ProposalModal open={*proposal_open} on_close={close_proposal} theme={props.theme} />
            <Chatbot theme={props.theme} />
        </div>
    }
}
