use wasm_bindgen::prelude::wasm_bindgen;
use yew::prelude::*;
use yew_router::prelude::*;

mod calc;
mod components;
mod config;
mod error;
mod navigation;
mod pages;
mod rewards;
mod risk;
mod services;
mod types;

use components::layout::Layout;
use config::AppConfig;
use pages::{
    docs::Docs, home::Home, lend::Lend, looper::Looper, not_found::NotFound,
    perpetuals::Perpetuals, pools::Pools, portfolio::Portfolio, stake::Staking, swap::Swap,
};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/swap")]
    Swap,
    #[at("/perpetuals")]
    Perpetuals,
    #[at("/pools")]
    Pools,
    #[at("/lend")]
    Lend,
    #[at("/stake")]
    Stake,
    #[at("/looper")]
    Looper,
    #[at("/portfolio")]
    Portfolio,
    #[at("/docs")]
    Docs,
    #[at("/docs/getting-started")]
    DocsGettingStarted,
    #[at("/docs/lending")]
    DocsLending,
    #[at("/docs/borrowing")]
    DocsBorrowing,
    #[at("/docs/staking")]
    DocsStaking,
    #[at("/docs/looping")]
    DocsLooping,
    #[at("/docs/risks")]
    DocsRisks,
    #[at("/docs/faq")]
    DocsFaq,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Resolves a path from the static navigation tables.
    pub fn from_href(href: &str) -> Self {
        Self::recognize(href).unwrap_or(Route::NotFound)
    }
}

fn switch(routes: Route) -> Html {
    match &routes {
        Route::Home => html! { <Home /> },
        Route::Swap => html! { <Swap /> },
        Route::Perpetuals => html! { <Perpetuals /> },
        Route::Pools => html! { <Pools /> },
        Route::Lend => html! { <Lend /> },
        Route::Stake => html! { <Staking /> },
        Route::Looper => html! { <Looper /> },
        Route::Portfolio => html! { <Portfolio /> },
        Route::Docs
        | Route::DocsGettingStarted
        | Route::DocsLending
        | Route::DocsBorrowing
        | Route::DocsStaking
        | Route::DocsLooping
        | Route::DocsRisks
        | Route::DocsFaq => html! { <Docs /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| AppConfig::default());

    html! {
        <ContextProvider<AppConfig> context={(*config).clone()}>
            <BrowserRouter>
                <Layout>
                    <Switch<Route> render={switch} />
                </Layout>
            </BrowserRouter>
        </ContextProvider<AppConfig>>
    }
}

#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigation::{DOCS_SECTIONS, NAVIGATION};

    #[test]
    fn navigation_hrefs_resolve_to_pages() {
        for item in NAVIGATION {
            assert_ne!(Route::from_href(item.href), Route::NotFound, "{}", item.href);
        }
        for link in DOCS_SECTIONS.iter().flat_map(|section| section.items.iter()) {
            assert_ne!(Route::from_href(link.href), Route::NotFound, "{}", link.href);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::from_href("/bridge"), Route::NotFound);
        assert_eq!(Route::from_href("/"), Route::Home);
        assert_eq!(Route::from_href("/docs/faq"), Route::DocsFaq);
    }
}
