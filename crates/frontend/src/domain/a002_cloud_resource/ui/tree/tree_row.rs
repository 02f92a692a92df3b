use super::view_model::CloudResourcesVm;
use crate::shared::icons::icon;
use contracts::shared::tree::{RowKind, TreeRow};
use leptos::prelude::*;

const INDENT_PX: usize = 20;

pub fn render_row(row: TreeRow, vm: CloudResourcesVm) -> AnyView {
    let indent = row.depth * INDENT_PX;

    match row.kind {
        RowKind::Header {
            label,
            count,
            collapsed,
        } => {
            let path = row.path;
            let title = path.to_string();
            let text = match count {
                Some(n) => format!("{} ({})", label, n),
                None => label,
            };
            // Корень провайдера выделяем жирным
            let weight = if row.depth == 0 { "bold" } else { "600" };
            view! {
                <div
                    class="resource-tree__header"
                    style=format!("padding-left: {}px; cursor: pointer; font-weight: {}; display: flex; align-items: center; gap: 4px;", indent, weight)
                    title=title
                    on:click=move |_| vm.toggle(&path)
                >
                    {icon(if collapsed { "chevron-right" } else { "chevron-down" })}
                    <span>{text}</span>
                </div>
            }
            .into_any()
        }
        RowKind::Item(text) => view! {
            <div class="resource-tree__item" style=format!("padding-left: {}px;", indent + INDENT_PX)>
                {text}
            </div>
        }
        .into_any(),
        RowKind::Leaf { key, value } => view! {
            <div class="resource-tree__leaf" style=format!("padding-left: {}px;", indent + INDENT_PX)>
                <strong>{format!("{}:", key)}</strong>
                " "
                {value}
            </div>
        }
        .into_any(),
    }
}
