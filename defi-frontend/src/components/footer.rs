use crate::config::use_app_config;
use crate::navigation::{DOCS_SECTIONS, NAVIGATION};
use crate::Route;
use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let config = use_app_config();
    let year = Utc::now().year();

    html! {
        <footer class="bg-white border-t border-gray-200">
            <div class="max-w-7xl mx-auto py-8 px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div>
                        <h3 class="text-lg font-bold text-gray-900">{&config.app_name}</h3>
                        <p class="mt-2 text-sm text-gray-600">
                            {"Trade, lend, stake and loop from a single dashboard."}
                        </p>
                    </div>
                    <div>
                        <h4 class="text-sm font-semibold text-gray-900 uppercase tracking-wider">{"Products"}</h4>
                        <ul class="mt-3 space-y-2">
                            {NAVIGATION.iter().filter(|item| item.href != "/docs").map(|item| html! {
                                <li key={item.href}>
                                    <Link<Route> to={Route::from_href(item.href)} classes="text-sm text-gray-600 hover:text-gray-900">
                                        {item.name}
                                    </Link<Route>>
                                </li>
                            }).collect::<Html>()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-sm font-semibold text-gray-900 uppercase tracking-wider">{"Documentation"}</h4>
                        <ul class="mt-3 space-y-2">
                            {DOCS_SECTIONS.iter().flat_map(|section| section.items.iter()).take(5).map(|link| html! {
                                <li key={link.href}>
                                    <Link<Route> to={Route::from_href(link.href)} classes="text-sm text-gray-600 hover:text-gray-900">
                                        {link.title}
                                    </Link<Route>>
                                </li>
                            }).collect::<Html>()}
                        </ul>
                    </div>
                </div>
                <div class="mt-8 pt-6 border-t border-gray-200 text-sm text-gray-500">
                    {format!("© {} {}. All figures shown are simulated.", year, config.app_name)}
                </div>
            </div>
        </footer>
    }
}
