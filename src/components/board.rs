use crate::render::{grid_template, CellView};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoardProps {
    pub size: u32,
    /// Row-major, one per tile.
    pub cells: Vec<CellView>,
}

#[function_component(Board)]
pub fn board(props: &BoardProps) -> Html {
    let grid_style = format!(
        "display:grid; grid-template-columns:{}; gap:4px; padding:8px; background:#161b22; border:1px solid #30363d; border-radius:8px;",
        grid_template(props.size)
    );
    html! {
        <div id="grid" style={grid_style}>
            { for props.cells.iter().map(|c| {
                let label = c.coord_label();
                html! {
                    <div
                        key={label.clone()}
                        class={classes!(c.class_names())}
                        data-row={c.row.to_string()}
                        data-col={c.col.to_string()}
                        title={c.glyph.label()}
                    >
                        { c.glyph.symbol() }
                        <span class="hint">{ label }</span>
                    </div>
                }
            }) }
        </div>
    }
}
