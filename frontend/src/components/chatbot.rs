use yew::prelude::*;
use web_sys::{Element, HtmlInputElement};
use wasm_bindgen_futures::spawn_local;
use log::{debug, error, info, warn};

use crate::chat_log::ChatLog;
use crate::relay::{CancelToken, ChatSession, GeminiClient, RelayError, Role};
use crate::scroll::scroll_into_view;
use crate::theme::Theme;

#[derive(Properties, PartialEq)]
pub struct ChatbotProps {
    pub theme: Theme,
}

pub enum ChatbotMsg {
    Toggle,
    SetInput(String),
    Send,
    Fragment(u64, String),
    Finished(u64),
    Failed(u64, RelayError),
}

struct InFlight {
    id: u64,
    cancel: CancelToken,
}

pub struct Chatbot {
    open: bool,
    input: String,
    log: ChatLog,
    session: ChatSession,
    in_flight: Option<InFlight>,
    next_request: u64,
    messages_end: NodeRef,
    scroll_pending: bool,
}

impl Chatbot {
    fn is_current(&self, id: u64) -> bool {
        self.in_flight.as_ref().map_or(false, |f| f.id == id)
    }

    /// Abandons the reply in progress, keeping what has streamed so far.
    fn interrupt(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            info!("Cancelling chat request {}", in_flight.id);
            in_flight.cancel.cancel();
            match self.log.interrupt_exchange() {
                Some(partial) if !partial.is_empty() => self.session.record_reply(&partial),
                _ => self.session.abandon_turn(),
            }
        }
    }

    fn send(&mut self, ctx: &Context<Self>) -> bool {
        let text = self.input.trim().to_string();
        if text.is_empty() || self.in_flight.is_some() {
            return false;
        }
        if !self.log.begin_exchange(&text) {
            return false;
        }
        self.input.clear();

        let id = self.next_request;
        self.next_request += 1;
        let cancel = CancelToken::new();
        let opening = self.session.send_message(&text, &cancel);
        self.in_flight = Some(InFlight { id, cancel });

        let on_fragment = ctx.link().callback(move |fragment: String| ChatbotMsg::Fragment(id, fragment));
        let on_done = ctx.link().callback(move |result: Result<(), RelayError>| match result {
            Ok(()) => ChatbotMsg::Finished(id),
            Err(err) => ChatbotMsg::Failed(id, err),
        });
        spawn_local(async move {
            let result = async {
                let mut stream = opening.await?;
                while let Some(fragment) = stream.next_fragment().await? {
                    on_fragment.emit(fragment);
                }
                Ok::<(), RelayError>(())
            }
            .await;
            on_done.emit(result);
        });
        true
    }

    fn render_message(&self, idx: usize, role: Role, text: &str) -> Html {
        // The reply placeholder stays hidden until its first fragment, the typing dots stand in
        if text.is_empty() {
            return html! {};
        }
        let class = match role {
            Role::User => "chat-bubble user",
            Role::Model => "chat-bubble model",
        };
        html! {
            <div key={idx} class={classes!("chat-row", (role == Role::User).then(|| "from-user"))}>
                <div class={class}>{ text }</div>
            </div>
        }
    }
}

impl Component for Chatbot {
    type Message = ChatbotMsg;
    type Properties = ChatbotProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let client = GeminiClient::from_config();
        if !client.has_api_key() {
            warn!("Chat assistant has no API key, replies will fail");
        }
        Self {
            open: false,
            input: String::new(),
            log: ChatLog::default(),
            session: ChatSession::new(client),
            in_flight: None,
            next_request: 0,
            messages_end: NodeRef::default(),
            scroll_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.scroll_pending = !matches!(msg, ChatbotMsg::SetInput(_));
        match msg {
            ChatbotMsg::Toggle => {
                if self.open {
                    self.interrupt();
                }
                self.open = !self.open;
                true
            }
            ChatbotMsg::SetInput(value) => {
                self.input = value;
                true
            }
            ChatbotMsg::Send => self.send(ctx),
            ChatbotMsg::Fragment(id, fragment) => {
                if !self.is_current(id) {
                    return false;
                }
                self.log.push_fragment(&fragment);
                true
            }
            ChatbotMsg::Finished(id) => {
                if !self.is_current(id) {
                    return false;
                }
                self.in_flight = None;
                match self.log.finish_exchange() {
                    Some(reply) => self.session.record_reply(&reply),
                    None => {
                        warn!("Chat request {} finished without any text", id);
                        self.session.abandon_turn();
                    }
                }
                debug!("Chat session holds {} turn(s)", self.session.history().len());
                true
            }
            ChatbotMsg::Failed(id, err) => {
                if !self.is_current(id) {
                    return false;
                }
                self.in_flight = None;
                error!("Chat error: {}", err);
                self.log.fail_exchange();
                self.session.abandon_turn();
                true
            }
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if !std::mem::take(&mut self.scroll_pending) {
            return;
        }
        if let Some(end) = self.messages_end.cast::<Element>() {
            scroll_into_view(&end);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.interrupt();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let theme_class = ctx.props().theme.class_name();
        let toggle = ctx.link().callback(|_| ChatbotMsg::Toggle);
        let pending = self.in_flight.is_some();
        let can_send = !pending && !self.input.trim().is_empty();

        html! {
            <div class={classes!("chatbot", theme_class)}>
                <style>
                {r#"
                .chatbot { position: fixed; bottom: 1.5rem; right: 1.5rem; z-index: 40; display: flex; flex-direction: column; align-items: flex-end; }
                .chat-window { width: 22rem; max-width: calc(100vw - 3rem); margin-bottom: 1rem; border-radius: 1rem; overflow: hidden; box-shadow: 0 20px 40px rgba(0,0,0,0.35); }
                .chat-header { display: flex; justify-content: space-between; align-items: center; padding: 1rem; font-weight: bold; font-size: 0.9rem; }
                .chat-messages { height: 20rem; overflow-y: auto; padding: 1rem; display: flex; flex-direction: column; gap: 0.75rem; }
                .chat-row { display: flex; justify-content: flex-start; }
                .chat-row.from-user { justify-content: flex-end; }
                .chat-bubble { max-width: 80%; padding: 0.75rem; border-radius: 1rem; font-size: 0.875rem; white-space: pre-wrap; }
                .chat-bubble.user { border-bottom-right-radius: 0; }
                .chat-bubble.model { border-bottom-left-radius: 0; }
                .typing-dots span { display: inline-block; width: 0.5rem; height: 0.5rem; margin-right: 0.25rem; border-radius: 50%; background: #9ca3af; animation: bounce 1s infinite; }
                .typing-dots span:nth-child(2) { animation-delay: 150ms; }
                .typing-dots span:nth-child(3) { animation-delay: 300ms; }
                @keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-4px); } }
                .chat-input { display: flex; gap: 0.5rem; padding: 0.75rem; border-top: 1px solid rgba(127,127,127,0.2); }
                .chat-input input { flex: 1; background: transparent; border: none; outline: none; color: inherit; font-size: 0.875rem; }
                .chat-input button:disabled { opacity: 0.5; cursor: default; }
                .chat-toggle { padding: 1rem; border-radius: 9999px; border: none; cursor: pointer; font-size: 1.25rem; box-shadow: 0 10px 20px rgba(0,0,0,0.3); transition: transform 0.2s; }
                .chat-toggle:hover { transform: scale(1.1); }
                .chatbot.theme-dark .chat-window { background: #1e293b; border: 1px solid #334155; }
                .chatbot.theme-dark .chat-header { background: #0f172a; color: #a3e635; }
                .chatbot.theme-dark .chat-bubble.user { background: #84cc16; color: #0f172a; }
                .chatbot.theme-dark .chat-bubble.model { background: #334155; color: #f1f5f9; }
                .chatbot.theme-dark .chat-toggle { background: #a3e635; color: #0f172a; }
                .chatbot.theme-light .chat-window { background: #fff; border: 1px solid #e7e5e4; }
                .chatbot.theme-light .chat-header { background: #f5f5f4; color: #292524; }
                .chatbot.theme-light .chat-bubble.user { background: #292524; color: #fff; }
                .chatbot.theme-light .chat-bubble.model { background: #f5f5f4; color: #292524; }
                .chatbot.theme-light .chat-toggle { background: #1c1917; color: #fff; }
                "#}
                </style>
                if self.open {
                    <div class="chat-window">
                        <div class="chat-header">
                            <span>{"🤖 Momentum AI"}</span>
                            <button class="chat-close" onclick={toggle.clone()}>{"✕"}</button>
                        </div>
                        <div class="chat-messages">
                            { for self.log.messages().iter().enumerate().map(|(idx, msg)| self.render_message(idx, msg.role, &msg.text)) }
                            if pending {
                                <div class="chat-row">
                                    <div class="chat-bubble model typing-dots">
                                        <span></span><span></span><span></span>
                                    </div>
                                </div>
                            }
                            <div ref={self.messages_end.clone()}></div>
                        </div>
                        <div class="chat-input">
                            <input
                                type="text"
                                placeholder="Ask about our services..."
                                value={self.input.clone()}
                                disabled={pending}
                                oninput={ctx.link().callback(|e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    ChatbotMsg::SetInput(input.value())
                                })}
                                onkeydown={ctx.link().batch_callback(|e: KeyboardEvent| {
                                    (e.key() == "Enter").then(|| ChatbotMsg::Send)
                                })}
                            />
                            <button
                                onclick={ctx.link().callback(|_| ChatbotMsg::Send)}
                                disabled={!can_send}
                            >
                                {"➤"}
                            </button>
                        </div>
                    </div>
                }
                <button class="chat-toggle" onclick={toggle}>
                    if self.open {
                        { "✕" }
                    } else {
                        { "💬" }
                    }
                </button>
            </div>
        }
    }
}
