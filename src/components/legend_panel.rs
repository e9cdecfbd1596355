use super::legend::LegendRow;
use crate::render::Glyph;
use yew::prelude::*;

#[function_component]
pub fn LegendPanel() -> Html {
    let glyph_row = |g: Glyph| html! { <LegendRow symbol={g.symbol()} label={g.label()} /> };
    html! {<div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:170px; font-size:13px;">
        <div style="font-weight:600; margin-bottom:4px;">{"Legend"}</div>
        { glyph_row(Glyph::Agent) }
        { glyph_row(Glyph::Gold) }
        { glyph_row(Glyph::Wumpus) }
        { glyph_row(Glyph::Pit) }
        { glyph_row(Glyph::Unknown) }
        <LegendRow symbol="" label="Known safe" color={Some("#0f3d2e")} />
        <LegendRow symbol="" label="Visited" color={Some("#1f2a44")} />
        <div style="font-size:11px; color:#8b949e; margin-top:6px; line-height:1.4;">
            {"Keys: arrows move, G grab, C climb, S shoot"}
        </div>
    </div>}
}
