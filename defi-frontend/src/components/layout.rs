use crate::components::{footer::Footer, header::Header};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen flex flex-col bg-gray-100 font-sans">
            <Header />
            <main class="flex-1 w-full max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                {props.children.clone()}
            </main>
            <Footer />
        </div>
    }
}
