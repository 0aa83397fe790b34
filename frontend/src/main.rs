use yew::prelude::*;
use yew_router::prelude::*;
use yew_hooks::prelude::*;
use log::{info, warn, Level};
use web_sys::MouseEvent;

mod config;
mod content;
mod theme;
mod relay;
mod chat_log;
mod proposal;
mod intro;
mod scroll;
mod components {
    pub mod chatbot;
    pub mod campaign_generator;
    pub mod intro_animation;
    pub mod proposal_modal;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::intro_animation::IntroAnimation;
use content::{AGENCY_NAME, LOGO_URL, NAV_ITEMS};
use pages::{landing::Landing, not_found::NotFound};
use scroll::scroll_to_section;
use theme::{Theme, ThemeStyle};

const SCROLLED_AT_PX: f64 = 50.0;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, theme: Theme) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing {theme} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { theme, on_toggle_theme } = props;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > SCROLLED_AT_PX;

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let toggle_theme = {
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |_: MouseEvent| on_toggle_theme.emit(()))
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", theme.class_name(), is_scrolled.then(|| "scrolled"))}>
            <style>
            {r#"
            .top-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 30; padding: 1.5rem 0; transition: all 0.3s ease; }
            .top-nav.scrolled { padding: 0.75rem 0; backdrop-filter: blur(12px); box-shadow: 0 4px 20px rgba(0,0,0,0.2); }
            .top-nav.theme-dark.scrolled { background: rgba(11,17,32,0.9); }
            .top-nav.theme-light.scrolled { background: rgba(245,245,220,0.9); }
            .nav-content { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; display: flex; justify-content: space-between; align-items: center; }
            .nav-logo { display: flex; align-items: center; gap: 0.75rem; font-weight: bold; font-size: 1.25rem; text-decoration: none; color: inherit; }
            .nav-logo img { width: 2.5rem; height: 2.5rem; border-radius: 50%; }
            .nav-right { display: flex; align-items: center; gap: 2rem; }
            .nav-link { color: inherit; text-decoration: none; font-weight: 500; opacity: 0.85; }
            .nav-link:hover { opacity: 1; }
            .theme-toggle { background: transparent; border: 1px solid rgba(127,127,127,0.4); border-radius: 9999px; width: 2.5rem; height: 2.5rem; cursor: pointer; color: inherit; font-size: 1.1rem; }
            .burger-menu { display: none; flex-direction: column; gap: 5px; background: none; border: none; cursor: pointer; }
            .burger-menu span { width: 24px; height: 2px; background: currentColor; }
            @media (max-width: 768px) {
                .burger-menu { display: flex; }
                .nav-right { display: none; position: absolute; top: 100%; left: 0; right: 0; flex-direction: column; padding: 1.5rem; gap: 1.25rem; }
                .theme-dark .nav-right { background: #0B1120; }
                .theme-light .nav-right { background: #F5F5DC; }
                .nav-right.mobile-menu-open { display: flex; }
            }
            "#}
            </style>
            <div class="nav-content">
                <a href="#hero" class="nav-logo" onclick={go_to("hero")}>
                    <img src={LOGO_URL} alt={AGENCY_NAME} />
                    {AGENCY_NAME}
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_ITEMS.iter().map(|(label, id)| html! {
                        <a href={format!("#{}", id)} class="nav-link" onclick={go_to(*id)}>
                            {*label}
                        </a>
                    }) }
                    <button class="theme-toggle" onclick={toggle_theme} title="Toggle theme">
                        {theme.toggle_glyph()}
                    </button>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let theme = use_state(Theme::default);
    let show_intro = use_state(|| true);

    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = theme.toggled();
            info!("Switching to {:?} theme", next);
            theme.set(next);
        })
    };

    let intro_done = {
        let show_intro = show_intro.clone();
        Callback::from(move |_| show_intro.set(false))
    };

    let current = *theme;
    html! {
        <>
            <ThemeStyle theme={current} />
            if *show_intro {
                <IntroAnimation on_complete={intro_done} />
            }
            <BrowserRouter>
                <Nav theme={current} on_toggle_theme={toggle_theme} />
                <Switch<Route> render={move |route: Route| switch(route, current)} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    if config::get_api_key().is_none() {
        warn!("GEMINI_API_KEY was not set at build time, AI features will report errors");
    }
    yew::Renderer::<App>::new().render();
}
