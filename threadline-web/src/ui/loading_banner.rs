use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct LoadingBannerProps {
    pub loading: bool,
}

#[function_component(LoadingBanner)]
pub fn loading_banner(p: &LoadingBannerProps) -> Html {
    html! {
        <div
            class={ classes!(
                "loading-banner", (!p.loading).then(|| "is-loaded"),
                "d-flex", "align-items-center"
            ) }
            aria-hidden={ if p.loading { "false" } else { "true" } }
        >
            <div class="spinner-border spinner-border-sm m-2" role="status"></div>
            <div>{ "Loading comments..." }</div>
        </div>
    }
}
