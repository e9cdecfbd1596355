use crate::render::PerceptView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PerceptsPanelProps {
    pub view: PerceptView,
}

#[derive(Properties, PartialEq, Clone)]
struct PerceptRowProps {
    id: &'static str,
    label: &'static str,
    value: &'static str,
}

#[function_component(PerceptRow)]
fn percept_row(props: &PerceptRowProps) -> Html {
    let on = props.value == "Yes";
    let value_style = format!(
        "min-width:40px; text-align:right; font-weight:600; color:{};",
        if on { "#f0883e" } else { "#8b949e" }
    );
    html! {
        <div style="display:flex; justify-content:space-between; gap:12px;">
            <span style="opacity:0.8;">{ props.label }</span>
            <span id={props.id} style={value_style}>{ props.value }</span>
        </div>
    }
}

#[function_component]
pub fn PerceptsPanel(props: &PerceptsPanelProps) -> Html {
    let v = props.view;
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 10px; min-width:210px; display:flex; flex-direction:column; gap:4px; font-size:13px; line-height:1.3;">
        <div style="font-weight:600; margin-bottom:4px;">{"Percepts"}</div>
        <PerceptRow id="breeze" label="Breeze" value={v.breeze} />
        <PerceptRow id="stench" label="Stench" value={v.stench} />
        <PerceptRow id="glitter" label="Glitter" value={v.glitter} />
        <PerceptRow id="scream" label="Scream" value={v.scream} />
    </div> }
}
