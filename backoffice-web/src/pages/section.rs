use yew::{AttrValue, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct SectionPageProps {
    pub title: AttrValue,
}

/// Body of a dashboard section. The listings themselves are served by their
/// own views; this only frames them.
#[function_component(SectionPage)]
pub fn section_page(props: &SectionPageProps) -> Html {
    html! {
        <section class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{ props.title.clone() }</h2>
            </div>
        </section>
    }
}
