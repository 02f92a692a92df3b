//! Cloud Resources - View Component

use super::tree_row::render_row;
use super::view_model::CloudResourcesVm;
use crate::shared::icons::icon;
use contracts::domain::a002_cloud_resource::{CloudResource, RefreshSequencer};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CloudResources(
    resources: ReadSignal<Vec<CloudResource>>,
    set_resources: WriteSignal<Vec<CloudResource>>,
    /// Shared with the chat flow so chat-supplied data retires stale refreshes
    sequencer: StoredValue<RefreshSequencer>,
) -> impl IntoView {
    let vm = CloudResourcesVm::new();

    let rows = Memo::new(move |_| resources.with(|r| vm.rows(r)));

    view! {
        // Заголовок и кнопка обновления
        <Flex
            justify=FlexJustify::SpaceBetween
            align=FlexAlign::Center
            style="margin-bottom: 8px;"
        >
            <h2 style="font-size: 20px; font-weight: bold; display: flex; align-items: center; gap: 8px;">
                {icon("cloud")}
                "Cloud Environment Info"
            </h2>
            <Button
                appearance=ButtonAppearance::Secondary
                size=ButtonSize::Small
                on_click=move |_| vm.refresh(resources, set_resources, sequencer)
            >
                {icon("refresh")}
                {move || if vm.in_flight.get() > 0 { " Refreshing..." } else { " Refresh" }}
            </Button>
        </Flex>

        {move || {
            if resources.with(Vec::is_empty) {
                view! {
                    <p style="color: var(--colorNeutralForeground3);">"No information"</p>
                }
                    .into_any()
            } else {
                view! {
                    <div class="resource-tree">
                        // Строка перерисовывается, только если изменилось её содержимое
                        <For
                            each=move || rows.get()
                            key=|row| (row.id.clone(), row.kind.clone())
                            let:row
                        >
                            {render_row(row, vm)}
                        </For>
                    </div>
                }
                    .into_any()
            }
        }}
    }
}
