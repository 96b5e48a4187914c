use crate::types::*;
use yew::prelude::*;

const SEGMENT_COLORS: &[&str] = &[
    "bg-blue-500",
    "bg-green-500",
    "bg-purple-500",
    "bg-yellow-500",
    "bg-red-500",
    "bg-indigo-500",
];

fn segment_color(index: usize) -> &'static str {
    SEGMENT_COLORS[index % SEGMENT_COLORS.len()]
}

#[derive(Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub data: Vec<ChartPoint>,
    pub title: AttrValue,
    #[prop_or_default]
    pub format_value: Option<fn(f64) -> String>,
}

#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = props.data.iter().map(|p| p.value).fold(0.0, f64::max);
    let format_value = props.format_value.unwrap_or(format_usd);

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <h3 class="text-lg font-medium text-gray-900 mb-4">{&props.title}</h3>
            <div class="h-48 flex items-end justify-between space-x-2">
                {props.data.iter().enumerate().map(|(i, point)| {
                    let height = if max > 0.0 { (point.value / max * 160.0) as u32 } else { 0 };
                    html! {
                        <div key={i} class="flex-1 flex flex-col items-center">
                            <div class="text-xs text-gray-600 mb-1">{format_value(point.value)}</div>
                            <div
                                class={classes!(segment_color(i), "rounded-t", "w-full")}
                                style={format!("height: {}px;", height)}
                            ></div>
                            <div class="mt-2 text-xs text-gray-500 truncate">{&point.label}</div>
                        </div>
                    }
                }).collect::<Html>()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AllocationChartProps {
    pub assets: Vec<PortfolioAsset>,
}

#[function_component(AllocationChart)]
pub fn allocation_chart(props: &AllocationChartProps) -> Html {
    let summary = PortfolioSummary::from_assets(&props.assets);

    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <div class="flex justify-between items-center mb-4">
                <h3 class="text-lg font-medium text-gray-900">{"Allocation"}</h3>
                <span class="text-sm text-gray-600">
                    {"Total Allocation: "}
                    <span class="font-medium text-gray-900">{format_percent(summary.total_allocation)}</span>
                </span>
            </div>
            <div class="flex h-4 w-full overflow-hidden rounded-full bg-gray-200">
                {props.assets.iter().enumerate().map(|(i, asset)| html! {
                    <div
                        key={asset.id}
                        class={segment_color(i)}
                        style={format!("width: {}%;", asset.allocation)}
                        title={asset.symbol.clone()}
                    ></div>
                }).collect::<Html>()}
            </div>
            <ul class="mt-4 grid grid-cols-2 md:grid-cols-3 gap-2">
                {props.assets.iter().enumerate().map(|(i, asset)| html! {
                    <li key={asset.id} class="flex items-center space-x-2 text-sm">
                        <span class={classes!(segment_color(i), "w-3", "h-3", "rounded-full")}></span>
                        <span class="text-gray-900">{&asset.symbol}</span>
                        <span class="text-gray-500">{format_percent(asset.allocation)}</span>
                    </li>
                }).collect::<Html>()}
            </ul>
        </div>
    }
}
