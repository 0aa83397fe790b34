use yew::prelude::*;
use web_sys::{window, HtmlInputElement, HtmlTextAreaElement};
use gloo_timers::future::TimeoutFuture;
use log::info;

use crate::content::{BUDGET_RANGES, PROPOSAL_SERVICES};
use crate::proposal::{ProposalForm, WizardStep};
use crate::theme::Theme;

const SUBMIT_DELAY_MS: u32 = 1_000;
const CONFIRMATION: &str =
    "Thank you! Your custom proposal request has been received. We will contact you shortly.";

#[derive(Properties, PartialEq)]
pub struct ProposalModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    pub theme: Theme,
}

pub enum ProposalMsg {
    SetName(String),
    SetEmail(String),
    SetCompany(String),
    SetWebsite(String),
    SetGoals(String),
    ToggleService(&'static str),
    SelectBudget(&'static str),
    Next,
    Back,
    Submit,
    Submitted,
    Close,
}

pub struct ProposalModal {
    form: ProposalForm,
    submitting: bool,
}

fn text_input(
    ctx: &Context<ProposalModal>,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: &str,
    required: bool,
    msg: fn(String) -> ProposalMsg,
) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <input
                type={kind}
                {required}
                {placeholder}
                value={value.to_string()}
                oninput={ctx.link().callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    msg(input.value())
                })}
            />
        </div>
    }
}

impl ProposalModal {
    fn view_client_details(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="wizard-step">
                <h3>{ WizardStep::ClientDetails.title() }</h3>
                <div class="field-grid">
                    { text_input(ctx, "Full Name", "text", "John Doe", &self.form.name, true, ProposalMsg::SetName) }
                    { text_input(ctx, "Work Email", "email", "john@company.com", &self.form.email, true, ProposalMsg::SetEmail) }
                    { text_input(ctx, "Company Name", "text", "Acme Inc.", &self.form.company, false, ProposalMsg::SetCompany) }
                    { text_input(ctx, "Website URL", "url", "https://acme.com", &self.form.website, false, ProposalMsg::SetWebsite) }
                </div>
            </div>
        }
    }

    fn view_scope_of_work(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="wizard-step">
                <h3>{ WizardStep::ScopeOfWork.title() }</h3>
                <label>{"Services Required"}</label>
                <div class="choice-grid two">
                    { for PROPOSAL_SERVICES.iter().map(|service| {
                        let service: &'static str = service;
                        let selected = self.form.has_service(service);
                        html! {
                            <button
                                key={service}
                                type="button"
                                class={classes!("choice", selected.then(|| "selected"))}
                                onclick={ctx.link().callback(move |_| ProposalMsg::ToggleService(service))}
                            >
                                { service }
                                if selected { <span class="check">{"✓"}</span> }
                            </button>
                        }
                    }) }
                </div>
                <label>{"Monthly Budget Range"}</label>
                <div class="choice-grid four">
                    { for BUDGET_RANGES.iter().map(|range| {
                        let range: &'static str = range;
                        html! {
                            <button
                                key={range}
                                type="button"
                                class={classes!("choice", "centered", self.form.is_budget(range).then(|| "selected"))}
                                onclick={ctx.link().callback(move |_| ProposalMsg::SelectBudget(range))}
                            >
                                { range }
                            </button>
                        }
                    }) }
                </div>
            </div>
        }
    }

    fn view_goals(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="wizard-step">
                <h3>{ WizardStep::GoalsContext.title() }</h3>
                <div class="field">
                    <label>{"What are your primary business goals?"}</label>
                    <textarea
                        rows="5"
                        value={self.form.goals.clone()}
                        placeholder="E.g., Increase online sales by 20%, improve brand awareness in Tier 1 cities, launch a new product line..."
                        oninput={ctx.link().callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            ProposalMsg::SetGoals(input.value())
                        })}
                    />
                </div>
            </div>
        }
    }
}

impl Component for ProposalModal {
    type Message = ProposalMsg;
    type Properties = ProposalModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ProposalForm::default(),
            submitting: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ProposalMsg::SetName(value) => self.form.name = value,
            ProposalMsg::SetEmail(value) => self.form.email = value,
            ProposalMsg::SetCompany(value) => self.form.company = value,
            ProposalMsg::SetWebsite(value) => self.form.website = value,
            ProposalMsg::SetGoals(value) => self.form.goals = value,
            ProposalMsg::ToggleService(service) => self.form.toggle_service(service),
            ProposalMsg::SelectBudget(budget) => self.form.select_budget(budget),
            ProposalMsg::Next => {
                if self.form.can_advance() {
                    self.form.next();
                }
            }
            ProposalMsg::Back => self.form.back(),
            ProposalMsg::Submit => {
                if self.submitting || !self.form.step.is_last() {
                    return false;
                }
                self.submitting = true;
                info!(
                    "Proposal request: {}",
                    serde_json::to_string(&self.form).unwrap_or_default()
                );
                ctx.link().send_future(async {
                    TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                    ProposalMsg::Submitted
                });
            }
            ProposalMsg::Submitted => {
                // Closed while the request was "in flight"
                if !self.submitting {
                    return false;
                }
                self.submitting = false;
                self.form.reset();
                ctx.props().on_close.emit(());
                if let Some(window) = window() {
                    let _ = window.alert_with_message(CONFIRMATION);
                }
            }
            ProposalMsg::Close => {
                self.submitting = false;
                self.form.reset();
                ctx.props().on_close.emit(());
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return html! {};
        }
        let step = self.form.step;
        let close = ctx.link().callback(|_| ProposalMsg::Close);

        html! {
            <div class={classes!("proposal-overlay", ctx.props().theme.class_name())}>
                <style>
                {r#"
                .proposal-overlay { position: fixed; inset: 0; z-index: 50; display: flex; align-items: center; justify-content: center; padding: 1rem; }
                .proposal-backdrop { position: absolute; inset: 0; background: rgba(0,0,0,0.8); backdrop-filter: blur(4px); }
                .proposal-dialog { position: relative; width: 100%; max-width: 42rem; max-height: 90vh; display: flex; flex-direction: column; border-radius: 1.5rem; overflow: hidden; box-shadow: 0 25px 50px rgba(0,0,0,0.5); }
                .theme-dark .proposal-dialog { background: #0f172a; color: #fff; }
                .theme-light .proposal-dialog { background: #F5F5DC; color: #1c1917; }
                .proposal-header, .proposal-footer { display: flex; justify-content: space-between; align-items: center; padding: 1.5rem; border-color: rgba(127,127,127,0.3); }
                .proposal-header { border-bottom: 1px solid rgba(127,127,127,0.3); }
                .proposal-footer { border-top: 1px solid rgba(127,127,127,0.3); }
                .proposal-header h2 { margin: 0; font-family: Georgia, serif; }
                .theme-dark .proposal-header h2 { color: #a3e635; }
                .proposal-progress { height: 4px; background: #374151; }
                .proposal-progress div { height: 100%; transition: width 0.5s; }
                .theme-dark .proposal-progress div { background: #a3e635; }
                .theme-light .proposal-progress div { background: #1c1917; }
                .proposal-body { flex: 1; overflow-y: auto; padding: 2rem; }
                .wizard-step label { display: block; font-size: 0.75rem; font-weight: bold; text-transform: uppercase; letter-spacing: 0.05em; opacity: 0.7; margin: 1rem 0 0.5rem; }
                .field-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1.5rem; }
                .field input, .field textarea { width: 100%; box-sizing: border-box; padding: 1rem; border-radius: 0.75rem; border: 1px solid rgba(127,127,127,0.4); background: rgba(127,127,127,0.08); color: inherit; font: inherit; }
                .choice-grid { display: grid; gap: 0.75rem; }
                .choice-grid.two { grid-template-columns: repeat(2, 1fr); }
                .choice-grid.four { grid-template-columns: repeat(auto-fit, minmax(8rem, 1fr)); }
                .choice { display: flex; justify-content: space-between; padding: 0.75rem; border-radius: 0.5rem; border: 1px solid rgba(127,127,127,0.4); background: transparent; color: inherit; cursor: pointer; text-align: left; }
                .choice.centered { justify-content: center; }
                .theme-dark .choice.selected { background: #a3e635; color: #0f172a; border-color: #a3e635; }
                .theme-light .choice.selected { background: #1c1917; color: #fff; border-color: #1c1917; }
                .wizard-button { padding: 0.75rem 2rem; border-radius: 9999px; border: none; font-weight: bold; cursor: pointer; }
                .wizard-button:disabled { opacity: 0.5; cursor: not-allowed; }
                .wizard-button.ghost { background: transparent; color: inherit; opacity: 0.7; }
                .theme-dark .wizard-button.primary { background: #a3e635; color: #0f172a; }
                .theme-light .wizard-button.primary { background: #1c1917; color: #fff; }
                "#}
                </style>
                <div class="proposal-backdrop" onclick={close.clone()}></div>
                <div class="proposal-dialog">
                    <div class="proposal-header">
                        <div>
                            <h2>{"Custom Proposal"}</h2>
                            <p>{"Let's build a strategy tailored to your growth."}</p>
                        </div>
                        <button class="wizard-button ghost" onclick={close}>{"✕"}</button>
                    </div>

                    <div class="proposal-progress">
                        <div style={format!("width: {:.2}%;", step.progress_percent())}></div>
                    </div>

                    <form class="proposal-body" onsubmit={ctx.link().callback(|e: SubmitEvent| {
                        e.prevent_default();
                        ProposalMsg::Submit
                    })}>
                        {
                            match step {
                                WizardStep::ClientDetails => self.view_client_details(ctx),
                                WizardStep::ScopeOfWork => self.view_scope_of_work(ctx),
                                WizardStep::GoalsContext => self.view_goals(ctx),
                            }
                        }
                    </form>

                    <div class="proposal-footer">
                        if !step.is_first() {
                            <button class="wizard-button ghost" onclick={ctx.link().callback(|_| ProposalMsg::Back)}>
                                {"Back"}
                            </button>
                        } else {
                            <div></div>
                        }
                        if !step.is_last() {
                            <button
                                class="wizard-button primary"
                                disabled={!self.form.can_advance()}
                                onclick={ctx.link().callback(|_| ProposalMsg::Next)}
                            >
                                {"Next Step →"}
                            </button>
                        } else {
                            <button
                                class="wizard-button primary"
                                disabled={self.submitting}
                                onclick={ctx.link().callback(|_| ProposalMsg::Submit)}
                            >
                                { if self.submitting { "Submitting..." } else { "Submit Request ✓" } }
                            </button>
                        }
                    </div>
                </div>
            </div>
        }
    }
}
