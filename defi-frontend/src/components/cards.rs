use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or(classes!("text-gray-900"))]
    pub value_class: Classes,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="bg-white shadow rounded-lg p-6">
            <div class="text-sm font-medium text-gray-500">{&props.title}</div>
            <div class={classes!("mt-1", "text-2xl", "font-semibold", props.value_class.clone())}>
                {&props.value}
            </div>
            if let Some(subtitle) = &props.subtitle {
                <div class="mt-1 text-sm text-gray-500">{subtitle}</div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
}

#[function_component(ErrorPanel)]
pub fn error_panel(props: &ErrorPanelProps) -> Html {
    html! {
        <div class="bg-red-50 border border-red-200 rounded-lg p-4">
            <div class="text-red-800">
                <strong>{"Error: "}</strong>{&props.message}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DetailRowProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub value_class: Classes,
}

#[function_component(DetailRow)]
pub fn detail_row(props: &DetailRowProps) -> Html {
    html! {
        <div class="flex justify-between">
            <span class="text-gray-600">{&props.label}</span>
            <span class={classes!("font-medium", props.value_class.clone())}>{&props.value}</span>
        </div>
    }
}
