use crate::layout::HomePage;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <HomePage />
        </ConfigProvider>
    }
}
