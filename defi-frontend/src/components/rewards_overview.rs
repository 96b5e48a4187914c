use crate::components::cards::StatCard;
use crate::components::chart::{BarChart, ChartPoint};
use crate::config::use_app_config;
use crate::rewards::{start_claim, ClaimHandle, ClaimStatus};
use crate::types::*;
use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RewardsOverviewProps {
    pub stakes: Vec<Stake>,
}

fn format_token(value: f64) -> String {
    format!("{:.4}", value)
}

#[function_component(RewardsOverview)]
pub fn rewards_overview(props: &RewardsOverviewProps) -> Html {
    let config = use_app_config();
    let status = use_state(ClaimStatus::default);
    let last_claim = use_state(|| None::<DateTime<Utc>>);
    let claim_handle = use_mut_ref(|| None::<ClaimHandle>);

    let summary = StakeSummary::from_stakes(&props.stakes);

    {
        let claim_handle = claim_handle.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(handle) = claim_handle.borrow_mut().take() {
                    handle.cancel();
                }
            }
        });
    }

    let on_claim = {
        let status = status.clone();
        let last_claim = last_claim.clone();
        let claim_handle = claim_handle.clone();
        let delay_ms = config.claim_delay_ms;
        let total_rewards = summary.total_rewards;

        Callback::from(move |_: MouseEvent| {
            let status = status.clone();
            let last_claim = last_claim.clone();
            let (task, handle) = start_claim(
                total_rewards,
                TimeoutFuture::new(delay_ms),
                move |next: ClaimStatus| {
                    if next == ClaimStatus::Idle {
                        last_claim.set(Some(Utc::now()));
                    }
                    status.set(next);
                },
            );
            *claim_handle.borrow_mut() = Some(handle);
            wasm_bindgen_futures::spawn_local(task);
        })
    };

    let claiming = status.is_claiming();
    let chart_data: Vec<ChartPoint> = props
        .stakes
        .iter()
        .map(|stake| ChartPoint {
            label: stake.validator.clone(),
            value: stake.rewards,
        })
        .collect();

    html! {
        <div class="space-y-6">
            <div class="grid grid-cols-1 md:grid-cols-4 gap-6">
                <StatCard title="Total Staked" value={format_token(summary.total_staked)} />
                <StatCard
                    title="Pending Rewards"
                    value={format_token(summary.total_rewards)}
                    value_class={classes!("text-green-600")}
                />
                <StatCard title="Average APY" value={format_apy(summary.average_apy)} />
                <StatCard title="Active Stakes" value={summary.count.to_string()} />
            </div>

            <div class="bg-white shadow rounded-lg p-6 flex items-center justify-between">
                <div>
                    <h3 class="text-lg font-medium text-gray-900">{"Rewards"}</h3>
                    if let Some(at) = *last_claim {
                        <p class="text-sm text-gray-500">{format!("Last claim request: {}", format_local_time(at))}</p>
                    } else {
                        <p class="text-sm text-gray-500">{"Rewards accrue every epoch."}</p>
                    }
                </div>
                <button
                    onclick={on_claim}
                    disabled={claiming}
                    class={if claiming {
                        "flex items-center px-4 py-2 bg-green-400 text-white rounded-md cursor-not-allowed"
                    } else {
                        "flex items-center px-4 py-2 bg-green-600 text-white rounded-md hover:bg-green-700"
                    }}
                >
                    if claiming {
                        <div class="animate-spin rounded-full h-4 w-4 border-b-2 border-white mr-2"></div>
                        {"Claiming..."}
                    } else {
                        {"Claim All Rewards"}
                    }
                </button>
            </div>

            if !props.stakes.is_empty() {
                <BarChart data={chart_data} title="Rewards by Validator" format_value={Some(format_token as fn(f64) -> String)} />
            }
        </div>
    }
}
