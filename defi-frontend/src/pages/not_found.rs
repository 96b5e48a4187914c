use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="bg-white shadow rounded-lg p-8 text-center">
            <h1 class="text-3xl font-bold text-gray-900 mb-2">{"404"}</h1>
            <p class="text-gray-600 mb-6">{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                {"Back to Home"}
            </Link<Route>>
        </div>
    }
}
