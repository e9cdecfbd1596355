use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub symbol: &'static str,
    pub label: &'static str,
    /// Swatch color shown instead of a glyph when set.
    #[prop_or_default]
    pub color: Option<&'static str>,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    let marker = match props.color {
        Some(c) => html! { <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border:1px solid #30363d; border-radius:2px;", c)}></span> },
        None => html! { <span style="display:inline-block; width:18px; text-align:center;">{ props.symbol }</span> },
    };
    html! { <div style="display:flex; align-items:center; gap:8px; margin:3px 0;"> { marker } <span>{ props.label }</span> </div> }
}
