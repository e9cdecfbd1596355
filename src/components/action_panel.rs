use crate::model::Direction;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ActionPanelProps {
    pub shoot_dir: Direction,
    pub on_move: Callback<Direction>,
    pub on_grab: Callback<()>,
    pub on_climb: Callback<()>,
    /// Records the selector value; never fires a shot.
    pub on_select_dir: Callback<Direction>,
    pub on_shoot: Callback<Direction>,
}

fn selected_dir(target: Option<EventTarget>, fallback: Direction) -> Direction {
    target
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .and_then(|select| select.value().parse().ok())
        .unwrap_or(fallback)
}

#[function_component]
pub fn ActionPanel(props: &ActionPanelProps) -> Html {
    let move_btn = |dir: Direction| {
        let cb = props.on_move.clone();
        let onclick = Callback::from(move |_| cb.emit(dir));
        html! { <button data-move={dir.as_str()} onclick={onclick} title={format!("Move {}", dir)}>{ dir.arrow() }</button> }
    };
    let grab_cb = {
        let cb = props.on_grab.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let climb_cb = {
        let cb = props.on_climb.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let select_cb = {
        let cb = props.on_select_dir.clone();
        let current = props.shoot_dir;
        Callback::from(move |e: Event| cb.emit(selected_dir(e.target(), current)))
    };
    // Double-click is the only way to fire from the selector.
    let shoot_cb = {
        let cb = props.on_shoot.clone();
        let current = props.shoot_dir;
        Callback::from(move |e: MouseEvent| cb.emit(selected_dir(e.target(), current)))
    };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; flex-direction:column; gap:8px; align-items:center;">
        <div style="display:grid; grid-template-columns:repeat(3, 40px); gap:4px;">
            <span></span>{ move_btn(Direction::Up) }<span></span>
            { move_btn(Direction::Left) }{ move_btn(Direction::Down) }{ move_btn(Direction::Right) }
        </div>
        <div style="display:flex; gap:6px;">
            <button id="grabBtn" onclick={grab_cb}>{"Grab"}</button>
            <button id="climbBtn" onclick={climb_cb}>{"Climb"}</button>
        </div>
        <label style="display:flex; align-items:center; gap:6px;" title="Double-click the selector to shoot">
            <span>{"Shoot"}</span>
            <select id="shootDir" onchange={select_cb} ondblclick={shoot_cb}>
                { for Direction::ALL.iter().map(|d| html! {
                    <option value={d.as_str()} selected={*d == props.shoot_dir}>{ d.as_str() }</option>
                }) }
            </select>
        </label>
        <div style="font-size:11px; opacity:0.7;">{"Double-click the direction to fire"}</div>
    </div>}
}
