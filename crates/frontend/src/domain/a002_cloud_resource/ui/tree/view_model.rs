//! Cloud Resources - View Model

use super::model::fetch_cloud_resources;
use crate::shared::config::config;
use contracts::domain::a002_cloud_resource::{
    apply_refresh, CloudResource, RefreshApplied, RefreshSequencer,
};
use contracts::shared::tree::{provider_root, visible_rows, CollapsedSet, TreePath, TreeRow};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct CloudResourcesVm {
    pub collapsed: RwSignal<CollapsedSet>,
    /// Refreshes started and not yet resolved
    pub in_flight: RwSignal<usize>,
}

impl CloudResourcesVm {
    pub fn new() -> Self {
        Self {
            collapsed: RwSignal::new(CollapsedSet::new()),
            in_flight: RwSignal::new(0),
        }
    }

    pub fn toggle(&self, path: &TreePath) {
        self.collapsed.update(|set| {
            let now_collapsed = set.toggle(path);
            log::debug!("Tree node {} collapsed={}", path, now_collapsed);
        });
    }

    pub fn rows(&self, resources: &[CloudResource]) -> Vec<TreeRow> {
        let roots: Vec<_> = resources.iter().map(provider_root).collect();
        self.collapsed.with(|set| visible_rows(&roots, set))
    }

    /// Re-fetches the inventory.
    ///
    /// Failures only reach the log; the displayed tree keeps its data.
    pub fn refresh(
        &self,
        resources: ReadSignal<Vec<CloudResource>>,
        set_resources: WriteSignal<Vec<CloudResource>>,
        sequencer: StoredValue<RefreshSequencer>,
    ) {
        let Some(ticket) = sequencer.try_update_value(RefreshSequencer::begin) else {
            return;
        };
        self.in_flight.update(|n| *n += 1);
        log::debug!("Refreshing cloud resources ({:?})", ticket);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_cloud_resources(config().providers.as_deref()).await;

            let mut next = resources.get_untracked();
            let applied = sequencer.with_value(|seq| apply_refresh(&mut next, seq, ticket, result));
            match applied {
                RefreshApplied::Replaced(count) => {
                    log::info!("Cloud resources refreshed: {} providers", count);
                    set_resources.set(next);
                }
                RefreshApplied::Superseded => {
                    log::warn!("Dropping superseded cloud resources response ({:?})", ticket);
                }
                RefreshApplied::Failed(e) => {
                    log::error!("Error fetching cloud resources: {}", e);
                }
            }

            vm.in_flight.update(|n| *n = n.saturating_sub(1));
        });
    }
}

impl Default for CloudResourcesVm {
    fn default() -> Self {
        Self::new()
    }
}
