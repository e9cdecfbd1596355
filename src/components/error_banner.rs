use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ErrorBannerProps {
    pub message: Option<String>,
    pub on_dismiss: Callback<()>,
}

#[function_component]
pub fn ErrorBanner(props: &ErrorBannerProps) -> Html {
    let Some(msg) = props.message.as_ref().filter(|m| !m.is_empty()) else {
        return html! {};
    };
    let dismiss_cb = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div id="errorBanner" role="alert" style="display:flex; align-items:center; gap:10px; background:#3b1c1f; border:1px solid #f85149; border-radius:8px; padding:6px 10px; font-size:13px; line-height:1.25;">
        <span style="color:#f85149; font-weight:600;">{"Server error"}</span>
        <span style="flex:1;">{ msg.clone() }</span>
        <button onclick={dismiss_cb} style="padding:2px 8px;">{"Dismiss"}</button>
    </div> }
}
