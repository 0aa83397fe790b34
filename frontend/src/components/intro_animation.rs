use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::Timeout;

use crate::content::{AGENCY_NAME, LOGO_URL, TAGLINE};
use crate::intro::{IntroEvent, IntroSequencer, IntroStage, SCHEDULE};

#[derive(Properties, PartialEq)]
pub struct IntroAnimationProps {
    pub on_complete: Callback<()>,
}

#[function_component(IntroAnimation)]
pub fn intro_animation(props: &IntroAnimationProps) -> Html {
    let stage = use_state(|| IntroSequencer::default().stage());

    {
        let stage_setter = stage.setter();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let sequencer = Rc::new(RefCell::new(IntroSequencer::default()));
                let timers: Vec<Timeout> = SCHEDULE
                    .iter()
                    .map(|(at, _)| {
                        let at = *at;
                        let sequencer = sequencer.clone();
                        let stage_setter = stage_setter.clone();
                        let on_complete = on_complete.clone();
                        Timeout::new(at, move || {
                            let (events, stage) = {
                                let mut sequencer = sequencer.borrow_mut();
                                let events = sequencer.advance(at);
                                (events, sequencer.stage())
                            };
                            stage_setter.set(stage);
                            if events.contains(&IntroEvent::Complete) {
                                on_complete.emit(());
                            }
                        })
                    })
                    .collect();
                // Dropping a Timeout cancels it
                move || drop(timers)
            },
            (),
        );
    }

    let stage = *stage;

    html! {
        <div class={classes!("intro-overlay", (stage == IntroStage::Exit).then(|| "fading"))}>
            <style>
            {r#"
            .intro-overlay { position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; background: #020617; transition: opacity 0.5s ease; }
            .intro-overlay.fading { opacity: 0; pointer-events: none; }
            .intro-logo { display: flex; flex-direction: column; align-items: center; gap: 1rem; color: #fff; }
            .intro-logo img { width: 8rem; height: 8rem; border-radius: 50%; box-shadow: 0 0 40px rgba(163,230,53,0.35); }
            .intro-logo h1 { margin: 0; font-family: Georgia, serif; letter-spacing: 0.05em; }
            .intro-logo p { margin: 0; color: #a3e635; text-transform: uppercase; letter-spacing: 0.3em; font-size: 0.75rem; }
            .intro-enter { animation: introEnter 1s ease both; }
            .intro-pulse img { animation: introPulse 1.5s ease-in-out infinite; }
            .intro-exit { transform: scale(1.2); transition: transform 0.5s ease; }
            @keyframes introEnter { from { opacity: 0; transform: scale(0.8); } to { opacity: 1; transform: scale(1); } }
            @keyframes introPulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.08); } }
            "#}
            </style>
            <div class={classes!("intro-logo", stage.class_name())}>
                <img src={LOGO_URL} alt={AGENCY_NAME} />
                <h1>{ AGENCY_NAME }</h1>
                <p>{ TAGLINE }</p>
            </div>
        </div>
    }
}
