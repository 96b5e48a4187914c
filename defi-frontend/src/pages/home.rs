use crate::components::cards::StatCard;
use crate::config::use_app_config;
use crate::navigation::NAVIGATION;
use crate::services::MockDataService;
use crate::types::*;
use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    let config = use_app_config();
    let pools = use_memo((), |_| MockDataService::pools().unwrap_or_default());
    let assets = use_memo((), |_| MockDataService::assets().unwrap_or_default());

    let pool_summary = PoolSummary::from_pools(&pools);
    let best_supply = assets
        .iter()
        .map(|asset| asset.supply_apy)
        .fold(0.0, f64::max);

    html! {
        <div class="space-y-6">
            <div class="bg-white shadow rounded-lg p-6">
                <h1 class="text-3xl font-bold text-gray-900 mb-4">
                    {&config.app_name}
                </h1>
                <p class="text-gray-600 mb-6">
                    {"Swap, trade perpetuals, provide liquidity, lend, stake and loop on Solana from one dashboard.
                    Every product shares a single account view so positions and rewards are always in reach."}
                </p>
                <div class="flex space-x-4">
                    <Link<Route> to={Route::Lend} classes="px-4 py-2 bg-blue-600 text-white rounded-md hover:bg-blue-700">
                        {"Start Earning"}
                    </Link<Route>>
                    <Link<Route> to={Route::Docs} classes="px-4 py-2 bg-gray-100 text-gray-900 rounded-md hover:bg-gray-200">
                        {"Read the Docs"}
                    </Link<Route>>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard title="Total Value Locked" value={format_compact_usd(pool_summary.total_tvl)} />
                <StatCard title="24h Volume" value={format_compact_usd(pool_summary.total_volume_24h)} />
                <StatCard
                    title="Best Supply APY"
                    value={format_apy(best_supply)}
                    value_class={classes!("text-green-600")}
                />
            </div>

            <div class="bg-white shadow rounded-lg p-6">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Products"}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {NAVIGATION.iter().filter(|item| item.href != "/docs").map(|item| html! {
                        <Link<Route> key={item.href} to={Route::from_href(item.href)} classes="block bg-blue-50 p-4 rounded-lg hover:bg-blue-100">
                            <h3 class="text-lg font-semibold text-blue-900 mb-2">{item.name}</h3>
                            <p class="text-blue-700">{item.description}</p>
                        </Link<Route>>
                    }).collect::<Html>()}
                </div>
            </div>

            <div class="bg-white shadow rounded-lg p-6">
                <h2 class="text-xl font-semibold text-gray-900 mb-4">{"Quick Start"}</h2>
                <div class="space-y-4">
                    <div>
                        <h3 class="font-medium text-gray-900">{"1. Connect"}</h3>
                        <p class="text-gray-600">{"Use the Connect button in the header to pick a wallet."}</p>
                    </div>
                    <div>
                        <h3 class="font-medium text-gray-900">{"2. Supply"}</h3>
                        <p class="text-gray-600">{"Head to Lend, choose an asset and supply it to start earning interest."}</p>
                    </div>
                    <div>
                        <h3 class="font-medium text-gray-900">{"3. Track"}</h3>
                        <p class="text-gray-600">{"Follow allocation and performance on the Portfolio page."}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
