use yew::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;

use crate::relay::{generate_campaign_ideas, CampaignIdea, CampaignOutcome, GeminiClient};
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct CampaignGeneratorProps {
    pub theme: Theme,
}

fn render_idea(idx: usize, idea: &CampaignIdea) -> Html {
    html! {
        <div key={idx} class="idea-card" style={format!("animation-delay: {}ms;", idx * 150)}>
            <h3>{ idea.title.clone() }</h3>
            <p>{ idea.description.clone() }</p>
            <span class="idea-channels-label">{"Suggested Channels"}</span>
            <div class="idea-channels">
                { for idea.channels.iter().map(|channel| html! { <span class="idea-channel">{ channel.clone() }</span> }) }
            </div>
        </div>
    }
}

#[function_component(CampaignGenerator)]
pub fn campaign_generator(props: &CampaignGeneratorProps) -> Html {
    let client = use_state(GeminiClient::from_config);
    let industry = use_state(String::new);
    let goal = use_state(String::new);
    let loading = use_state(|| false);
    let outcome = use_state(|| None::<CampaignOutcome>);

    let onsubmit = {
        let client = client.clone();
        let industry = industry.clone();
        let goal = goal.clone();
        let loading = loading.clone();
        let outcome = outcome.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if industry.trim().is_empty() || goal.trim().is_empty() || *loading {
                return;
            }
            loading.set(true);
            outcome.set(None);

            let client = (*client).clone();
            let industry = (*industry).clone();
            let goal = (*goal).clone();
            let loading = loading.clone();
            let outcome = outcome.clone();
            spawn_local(async move {
                let result = generate_campaign_ideas(&client, &industry, &goal).await;
                outcome.set(Some(result));
                loading.set(false);
            });
        })
    };

    let on_industry = {
        let industry = industry.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            industry.set(input.value());
        })
    };

    let on_goal = {
        let goal = goal.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            goal.set(input.value());
        })
    };

    let disabled = *loading || industry.trim().is_empty() || goal.trim().is_empty();

    html! {
        <div class={classes!("campaign-generator", props.theme.class_name())}>
            <style>
            {r#"
            .campaign-generator { border-radius: 1.5rem; padding: 3rem; transition: all 0.5s; }
            .campaign-generator.theme-dark { background: rgba(255,255,255,0.05); border: 1px solid rgba(255,255,255,0.1); }
            .campaign-generator.theme-light { background: #fafaf9; border: 1px solid #e7e5e4; }
            .generator-header { text-align: center; margin-bottom: 2.5rem; }
            .generator-header h2 { font-size: 2.25rem; margin-bottom: 1rem; }
            .generator-header p { max-width: 36rem; margin: 0 auto; opacity: 0.7; }
            .generator-form { display: flex; flex-wrap: wrap; gap: 1rem; max-width: 42rem; margin: 0 auto 3rem; }
            .generator-form input { flex: 1; min-width: 12rem; padding: 1rem; border-radius: 0.75rem; border: 1px solid rgba(127,127,127,0.4); background: transparent; color: inherit; }
            .generator-form button { min-width: 10rem; padding: 1rem 2rem; border-radius: 0.75rem; border: none; font-weight: bold; cursor: pointer; }
            .generator-form button:disabled { opacity: 0.5; cursor: not-allowed; }
            .theme-dark .generator-form button { background: #a3e635; color: #0f172a; }
            .theme-light .generator-form button { background: #1c1917; color: #fff; }
            .idea-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr)); gap: 1.5rem; }
            .idea-card { padding: 1.5rem; border-radius: 1rem; border: 1px solid rgba(127,127,127,0.25); animation: fadeIn 0.6s ease both; }
            .theme-dark .idea-card h3 { color: #a3e635; }
            .idea-card p { font-size: 0.875rem; line-height: 1.6; opacity: 0.8; }
            .idea-channels-label { display: block; font-size: 0.75rem; font-weight: bold; text-transform: uppercase; letter-spacing: 0.05em; opacity: 0.6; margin-bottom: 0.5rem; }
            .idea-channels { display: flex; flex-wrap: wrap; gap: 0.5rem; }
            .idea-channel { font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 0.375rem; background: rgba(127,127,127,0.15); }
            .generator-notice { text-align: center; opacity: 0.8; }
            @keyframes fadeIn { from { opacity: 0; transform: translateY(8px); } to { opacity: 1; transform: none; } }
            "#}
            </style>
            <div class="generator-header">
                <div class="generator-icon">{"✨"}</div>
                <h2>{"AI Strategy Generator"}</h2>
                <p>
                    {"Experience the power of Momentum Media's AI. Enter your details below to get 3 instant, high-impact campaign concepts tailored to your business."}
                </p>
            </div>

            <form class="generator-form" {onsubmit}>
                <input
                    type="text"
                    placeholder="Industry (e.g., Real Estate, Fashion)"
                    value={(*industry).clone()}
                    oninput={on_industry}
                />
                <input
                    type="text"
                    placeholder="Goal (e.g., Lead Gen, Brand Awareness)"
                    value={(*goal).clone()}
                    oninput={on_goal}
                />
                <button type="submit" {disabled}>
                    { if *loading { "Generating..." } else { "Generate" } }
                </button>
            </form>

            {
                match (*outcome).as_ref() {
                    Some(result) if result.failure().is_some() => html! {
                        <p class="generator-notice">{"We couldn't reach our strategy engine right now. Please try again in a moment."}</p>
                    },
                    Some(result) if result.ideas().is_empty() => html! {
                        <p class="generator-notice">{"No ideas came back this time. Try a different industry or goal."}</p>
                    },
                    Some(result) => html! {
                        <div class="idea-grid">
                            { for result.ideas().iter().enumerate().map(|(idx, idea)| render_idea(idx, idea)) }
                        </div>
                    },
                    None => html! {},
                }
            }
        </div>
    }
}
