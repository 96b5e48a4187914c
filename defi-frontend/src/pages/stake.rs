use crate::components::cards::ErrorPanel;
use crate::components::rewards_overview::RewardsOverview;
use crate::services::MockDataService;
use crate::types::*;
use yew::prelude::*;

#[function_component(Staking)]
pub fn staking() -> Html {
    let stakes = use_memo((), |_| MockDataService::stakes());

    let stakes = match &*stakes {
        Ok(stakes) => stakes,
        Err(e) => return html! { <ErrorPanel message={e.to_string()} /> },
    };

    html! {
        <div class="space-y-6">
            <RewardsOverview stakes={stakes.clone()} />

            <div class="bg-white shadow rounded-lg p-6">
                <h3 class="text-lg font-medium text-gray-900 mb-4">{"Your Stakes"}</h3>

                if stakes.is_empty() {
                    <div class="text-center py-8 text-gray-500">
                        {"You have no active stakes."}
                    </div>
                } else {
                    <div class="overflow-x-auto">
                        <table class="min-w-full divide-y divide-gray-200">
                            <thead class="bg-gray-50">
                                <tr>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Pool"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Validator"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Amount"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"Rewards"}</th>
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{"APY"}</th>
                                </tr>
                            </thead>
                            <tbody class="bg-white divide-y divide-gray-200">
                                {stakes.iter().map(|stake| html! {
                                    <tr key={stake.id}>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900">{&stake.pool}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{&stake.validator}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format!("{:.4}", stake.amount)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-green-600">{format!("{:.4}", stake.rewards)}</td>
                                        <td class="px-6 py-4 whitespace-nowrap text-sm text-gray-900">{format_apy(stake.apy)}</td>
                                    </tr>
                                }).collect::<Html>()}
                            </tbody>
                        </table>
                    </div>
                }
            </div>
        </div>
    }
}
