use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameOverOverlayProps {
    pub show: bool,
    pub status: String,
    pub score: i64,
    pub restart: Callback<()>,
    pub reveal: Callback<()>,
    pub hide: Callback<()>,
}

#[function_component]
pub fn GameOverOverlay(props: &GameOverOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let restart_cb = props.restart.clone();
    let restart_btn = Callback::from(move |_| restart_cb.emit(()));
    let reveal_btn = {
        let cb = props.reveal.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let hide_btn = {
        let cb = props.hide.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div id="gameOver" style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); background:rgba(0,0,0,0.85); border:2px solid #f85149; padding:24px 32px; border-radius:12px; text-align:center; min-width:280px; z-index:10;">
            <h2 style="margin:0 0 12px 0; color:#f85149;">{"Game Over"}</h2>
            <p style="margin:4px 0;">{ props.status.clone() }</p>
            <p style="margin:4px 0;">{ format!("Final score: {}", props.score) }</p>
            <div style="margin-top:16px; display:flex; gap:12px; justify-content:center;">
                <button onclick={restart_btn}>{"New Game"}</button>
                <button onclick={reveal_btn}>{"Reveal Map"}</button>
                <button onclick={hide_btn}>{"Close"}</button>
            </div>
        </div>
    }
}
