use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::{
    action_panel::ActionPanel, board::Board, controls_panel::ControlsPanel,
    error_banner::ErrorBanner, game_over_overlay::GameOverOverlay, legend_panel::LegendPanel,
    percepts_panel::PerceptsPanel, stats_panel::StatsPanel,
};
use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::input::{attach_shortcuts, new_game_request, Action};
use crate::model::Direction;
use crate::render::{cells, PerceptView, StatusView};
use crate::state::{Preferences, RequestSeq, Session, SessionAction};
use crate::util::{clog, cwarn, now_ms};

#[function_component(App)]
pub fn app() -> Html {
    let client = use_state(|| ApiClient::new(ClientConfig::from_build_env().api_base));
    let session = use_reducer(Session::default);
    let seq = use_mut_ref(RequestSeq::default);
    let prefs = use_state(Preferences::load);
    // Mirror of the selected shoot direction for the keydown listener.
    let shoot_dir_flag = use_mut_ref(|| prefs.shoot_dir);

    // Fire an action: stamp it, run it off the event loop, hand the outcome to the session.
    let run = {
        let client = (*client).clone();
        let session = session.clone();
        let seq = seq.clone();
        Callback::from(move |action: Action| {
            let seq_no = seq.borrow_mut().issue();
            clog(&format!("#{} {} -> {}", seq_no, action, action.endpoints().join(" + ")));
            session.dispatch(SessionAction::Issued(action));
            let client = client.clone();
            let session = session.clone();
            spawn_local(async move {
                let started = now_ms();
                let outcome = action.perform(&client).await;
                let took = now_ms() - started;
                match &outcome {
                    Ok(st) => clog(&format!("#{} {} done in {:.0}ms: {}", seq_no, action, took, st.status)),
                    Err(err) => cwarn(&format!("#{} {} failed after {:.0}ms: {}", seq_no, action, took, err)),
                }
                session.dispatch(SessionAction::Applied { seq: seq_no, action, outcome });
            });
        })
    };

    // Persist form values
    {
        use_effect_with((*prefs).clone(), move |p| {
            p.save();
            || ()
        });
    }
    // Keep the listener's shoot direction current
    {
        let shoot_dir_flag = shoot_dir_flag.clone();
        use_effect_with(prefs.shoot_dir, move |dir| {
            *shoot_dir_flag.borrow_mut() = *dir;
            || ()
        });
    }
    {
        let dropped = session.stale_dropped;
        let last = session.last_applied;
        use_effect_with(dropped, move |n| {
            if *n > 0 {
                clog(&format!("dropped stale response ({} total, newest applied #{})", n, last));
            }
            || ()
        });
    }
    // Start a game with the remembered form values on load
    {
        let run = run.clone();
        let prefs = prefs.clone();
        use_effect_with((), move |_| {
            run.emit(Action::NewGame(new_game_request(&prefs.size, &prefs.pits)));
            || ()
        });
    }
    // Keyboard shortcuts
    {
        let run = run.clone();
        let shoot_dir_flag = shoot_dir_flag.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window()
                .and_then(|w| w.document())
                .map(|document| attach_shortcuts(&document, shoot_dir_flag, run));
            move || drop(listener)
        });
    }

    let on_new_game = {
        let run = run.clone();
        let prefs = prefs.clone();
        Callback::from(move |_: ()| run.emit(Action::NewGame(new_game_request(&prefs.size, &prefs.pits))))
    };
    let on_size = {
        let prefs = prefs.clone();
        Callback::from(move |v: String| prefs.set(Preferences { size: v, ..(*prefs).clone() }))
    };
    let on_pits = {
        let prefs = prefs.clone();
        Callback::from(move |v: String| prefs.set(Preferences { pits: v, ..(*prefs).clone() }))
    };
    let on_select_dir = {
        let prefs = prefs.clone();
        Callback::from(move |d: Direction| prefs.set(Preferences { shoot_dir: d, ..(*prefs).clone() }))
    };
    let on_toggle_ai = {
        let run = run.clone();
        Callback::from(move |on: bool| run.emit(Action::ToggleAi(on)))
    };
    let emit = |action: Action| {
        let run = run.clone();
        Callback::from(move |_: ()| run.emit(action))
    };
    let on_move = {
        let run = run.clone();
        Callback::from(move |d: Direction| run.emit(Action::Move(d)))
    };
    let on_shoot = {
        let run = run.clone();
        Callback::from(move |d: Direction| run.emit(Action::Shoot(d)))
    };
    let on_dismiss_error = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::DismissError))
    };
    let hide_overlay = {
        let session = session.clone();
        Callback::from(move |_: ()| session.dispatch(SessionAction::HideGameOver))
    };
    // The revealed board is what the player wants to see, so the overlay gets out of the way.
    let reveal_from_overlay = {
        let session = session.clone();
        let run = run.clone();
        Callback::from(move |_: ()| {
            session.dispatch(SessionAction::HideGameOver);
            run.emit(Action::Reveal);
        })
    };

    let board_view = match &session.state {
        Some(st) => html! {
            <div style="position:relative;">
                <Board size={st.size} cells={cells(st)} />
                <GameOverOverlay
                    show={session.show_game_over()}
                    status={st.status.clone()}
                    score={st.score}
                    restart={on_new_game.clone()}
                    reveal={reveal_from_overlay}
                    hide={hide_overlay}
                />
            </div>
        },
        None => html! { <div id="grid" style="padding:24px; opacity:0.7;">{"Connecting to the cave…"}</div> },
    };
    let side = match &session.state {
        Some(st) => html! {
            <>
                <StatsPanel view={StatusView::from_state(st)} />
                <PerceptsPanel view={PerceptView::from_state(st)} />
            </>
        },
        None => html! {},
    };

    html! {
        <div id="root" style="min-height:100vh; background:#0e1116; color:#c9d1d9; font-family:system-ui, sans-serif; padding:16px; box-sizing:border-box; display:flex; flex-direction:column; gap:12px;">
            <h1 style="margin:0; font-size:22px; color:#58a6ff;">{"Wumpus World"}</h1>
            <ErrorBanner message={session.error.clone()} on_dismiss={on_dismiss_error} />
            <div style="display:flex; gap:16px; align-items:flex-start; flex-wrap:wrap;">
                { board_view }
                <div style="display:flex; flex-direction:column; gap:12px;">
                    { side }
                    <ActionPanel
                        shoot_dir={prefs.shoot_dir}
                        on_move={on_move}
                        on_grab={emit(Action::Grab)}
                        on_climb={emit(Action::Climb)}
                        on_select_dir={on_select_dir}
                        on_shoot={on_shoot}
                    />
                </div>
                <div style="display:flex; flex-direction:column; gap:12px;">
                    <ControlsPanel
                        size={prefs.size.clone()}
                        pits={prefs.pits.clone()}
                        ai_enabled={session.ai_enabled}
                        on_size={on_size}
                        on_pits={on_pits}
                        on_new_game={on_new_game.clone()}
                        on_toggle_ai={on_toggle_ai}
                        on_ai_step={emit(Action::AiStep)}
                        on_reveal={emit(Action::Reveal)}
                        on_refresh={emit(Action::Refresh)}
                    />
                    <LegendPanel />
                </div>
            </div>
        </div>
    }
}
