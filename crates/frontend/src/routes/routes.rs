use crate::domain::a001_playlist::ui::select::PlaylistSelect;
use crate::domain::a002_artist::ui::select::ArtistSelect;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <h1 class="header__title">"Page not found"</h1>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/playlists") view=PlaylistSelect />
                <Route path=path!("/select_artist") view=ArtistSelect />
            </Routes>
        </Router>
    }
}
