use shared::style::{Property, Style, px};
use shared::AssetConfig;
use yew::prelude::*;

use super::header::HeaderView;

#[derive(Properties, PartialEq, Clone, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub assets: AssetConfig,
}

fn shell_style() -> Style {
    Style::new()
        .with(Property::Background, "linear-gradient(180deg, #f7fbfe 0%, #ffffff 100%)")
        .with(Property::Padding, px(16))
        .with(Property::FontFamily, "\"Segoe UI\", Roboto, Arial, sans-serif")
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AssetConfig> context={props.assets.clone()}>
            <div class="app-shell" style={shell_style().to_css()}>
                <HeaderView />
            </div>
        </ContextProvider<AssetConfig>>
    }
}
