use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or("Carregando".into())]
    pub label: yew::AttrValue,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center h-full animate-fadeIn" role="status">
            <div class="bg-base-200 p-6 rounded-lg shadow-md flex flex-col items-center">
                <span class="loading loading-spinner loading-lg text-primary"></span>
                <span class="mt-3">{ props.label.clone() }</span>
            </div>
        </div>
    }
}
