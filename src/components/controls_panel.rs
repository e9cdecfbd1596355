use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub size: String,
    pub pits: String,
    pub ai_enabled: bool,
    pub on_size: Callback<String>,
    pub on_pits: Callback<String>,
    pub on_new_game: Callback<()>,
    pub on_toggle_ai: Callback<bool>,
    pub on_ai_step: Callback<()>,
    pub on_reveal: Callback<()>,
    pub on_refresh: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let size_cb = {
        let cb = props.on_size.clone();
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let pits_cb = {
        let cb = props.on_pits.clone();
        Callback::from(move |e: InputEvent| cb.emit(e.target_unchecked_into::<HtmlInputElement>().value()))
    };
    let new_game_cb = {
        let cb = props.on_new_game.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let ai_toggle_cb = {
        let cb = props.on_toggle_ai.clone();
        Callback::from(move |e: Event| cb.emit(e.target_unchecked_into::<HtmlInputElement>().checked()))
    };
    let ai_step_cb = {
        let cb = props.on_ai_step.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reveal_cb = {
        let cb = props.on_reveal.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let refresh_cb = {
        let cb = props.on_refresh.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let field_style = "display:flex; align-items:center; justify-content:space-between; gap:8px;";
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px;">
        <div style="font-weight:600;">{"Game"}</div>
        <label style={field_style}>
            <span>{"Size"}</span>
            <input id="size" type="number" style="width:64px;" value={props.size.clone()} oninput={size_cb} />
        </label>
        <label style={field_style}>
            <span>{"Pits"}</span>
            <input id="pits" type="number" style="width:64px;" value={props.pits.clone()} oninput={pits_cb} />
        </label>
        <button id="newGame" onclick={new_game_cb}>{"New Game"}</button>
        <div style="height:1px; background:#30363d; margin:4px 0;"></div>
        <label style="display:flex; align-items:center; gap:8px; cursor:pointer;">
            <input id="aiToggle" type="checkbox" checked={props.ai_enabled} onchange={ai_toggle_cb} />
            <span>{"AI enabled"}</span>
        </label>
        <button id="aiStep" onclick={ai_step_cb}>{"AI Step"}</button>
        <button id="reveal" onclick={reveal_cb}>{"Reveal Map"}</button>
        <button id="refresh" onclick={refresh_cb} style="font-size:12px;">{"Resync"}</button>
    </div>}
}
