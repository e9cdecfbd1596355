use crate::render::StatusView;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub view: StatusView,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:70px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let v = &props.view;
    let status_color = if v.game_over { "#f85149" } else { "#c9d1d9" };
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div id="statusText" style={format!("font-weight:600; line-height:1.3; color:{};", status_color)}>{ v.status.clone() }</div>
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🏆"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Score"}</span>
                <span id="score" style={format!("{} color:#d4af37;", value_style)}>{ v.score }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"🏹"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Arrow"}</span>
                <span id="arrow" style={format!("{} color:#58a6ff;", value_style)}>{ v.arrow }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#f85149;", icon_style)}>{"👹"}</span>
                <span style={format!("{} color:#f85149;", label_style)}>{"Wumpus alive"}</span>
                <span id="wumpus" style={format!("{} color:#f85149;", value_style)}>{ v.wumpus }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#2ea043;", icon_style)}>{"💰"}</span>
                <span style={format!("{} color:#2ea043;", label_style)}>{"Gold carried"}</span>
                <span id="hasGold" style={format!("{} color:#2ea043;", value_style)}>{ v.gold_carried }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#8b949e;", icon_style)}>{"📍"}</span>
                <span style={format!("{} color:#8b949e;", label_style)}>{"Position"}</span>
                <span id="position" style={format!("{} color:#8b949e;", value_style)}>{ v.position.clone() }</span>
            </div>
        </div>
    }
}
