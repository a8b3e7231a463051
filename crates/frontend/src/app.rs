use crate::routes::routes::AppRoutes;
use crate::shared::config::FrontendConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: FrontendConfig) -> impl IntoView {
    // Pages read form actions and data block ids from context.
    provide_context(config);

    view! {
        <AppRoutes />
    }
}
