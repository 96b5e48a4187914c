use crate::components::cards::{ErrorPanel, StatCard};
use crate::components::chart::{BarChart, ChartPoint};
use crate::services::MockDataService;
use crate::types::*;
use yew::prelude::*;

#[function_component(Pools)]
pub fn pools() -> Html {
    let pools = use_memo((), |_| MockDataService::pools());

    let pools = match &*pools {
        Ok(pools) => pools,
        Err(e) => return html! { <ErrorPanel message={e.to_string()} /> },
    };
    let summary = PoolSummary::from_pools(pools);
    let tvl_points: Vec<ChartPoint> = pools
        .iter()
        .map(|pool| ChartPoint {
            label: pool.pair.clone(),
            value: pool.tvl,
        })
        .collect();

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <StatCard title="Total Value Locked" value={format_compact_usd(summary.total_tvl)} />
                <StatCard title="24h Volume" value={format_compact_usd(summary.total_volume_24h)} />
                <StatCard
                    title="Average APY"
                    value={format_apy(summary.average_apy)}
                    subtitle={format!("across {} pools", summary.count)}
                    value_class={classes!("text-green-600")}
                />
            </div>

            <BarChart data={tvl_points} title="TVL by Pool" format_value={Some(format_compact_usd as fn(f64) -> String)} />

            <div class="bg-white shadow rounded-lg p-6">
                <h3 class="text-lg font-medium text-gray-900 mb-4">{"Liquidity Pools"}</h3>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Pool"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Fee"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"TVL"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Volume 24h"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"APY"}</th>
                                <th class="px-6 py-3"></th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {pools.iter().map(|pool| {
                                let pair = pool.pair.clone();
                                let on_deposit = Callback::from(move |_: MouseEvent| {
                                    log::info!("Deposit requested for pool {}", pair);
                                });
                                html! {
                                    <tr key={pool.id}>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{&pool.pair}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{format!("{}%", pool.fee_tier)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_compact_usd(pool.tvl)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_compact_usd(pool.volume_24h)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-green-600">{format_apy(pool.apy)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-right">
                                            <button
                                                onclick={on_deposit}
                                                class="px-3 py-1 text-sm font-medium text-blue-700 bg-blue-50 rounded-md hover:bg-blue-100"
                                            >
                                                {"Deposit"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
