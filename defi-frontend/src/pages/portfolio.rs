use crate::components::cards::{ErrorPanel, StatCard};
use crate::components::chart::AllocationChart;
use crate::risk::Trend;
use crate::services::MockDataService;
use crate::types::*;
use yew::prelude::*;

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let assets = use_memo((), |_| MockDataService::portfolio());

    let assets = match &*assets {
        Ok(assets) => assets,
        Err(e) => return html! { <ErrorPanel message={e.to_string()} /> },
    };
    let summary = PortfolioSummary::from_assets(assets);
    let pnl_trend = Trend::from_value(summary.total_pnl);

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard title="Total Value" value={format_usd(summary.total_value)} />
                <StatCard
                    title="Total P&L"
                    value={format_signed_usd(summary.total_pnl)}
                    value_class={classes!(pnl_trend.text_class())}
                />
                <StatCard title="Total Allocation" value={format_percent(summary.total_allocation)} />
                <StatCard
                    title="Assets in Profit"
                    value={format!("{} / {}", summary.gainers, summary.count)}
                />
            </div>

            <AllocationChart assets={assets.clone()} />

            <div class="bg-white shadow rounded-lg p-6">
                <h3 class="text-lg font-medium text-gray-900 mb-4">{"Holdings"}</h3>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Asset"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Type"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Amount"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Price"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Value"}</th>
                                <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"P&L"}</th>
                            </tr>
                        </thead>
                        <tbody class="bg-white divide-y divide-gray-200">
                            {assets.iter().map(|asset| {
                                let trend = Trend::from_value(asset.pnl);
                                html! {
                                    <tr key={asset.id}>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">
                                            <div class="flex items-center space-x-2">
                                                <img src={asset.icon.clone()} alt={asset.symbol.clone()} class="w-6 h-6" />
                                                <span class="font-medium">{&asset.symbol}</span>
                                                <span class="text-gray-500">{&asset.name}</span>
                                            </div>
                                        </td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-500">{asset.kind.as_str()}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format!("{:.4}", asset.amount)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_usd(asset.price)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_usd(asset.value)}</td>
                                        <td class={classes!("px-6", "py-4", "whitespace-nowrap", "text-sm", trend.text_class())}>
                                            {format!("{} ({})", format_signed_usd(asset.pnl), Trend::format_percent(asset.pnl_percent))}
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
