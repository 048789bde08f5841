use shared::AssetConfig;
use shared::HeaderContent;
use shared::header::header_styles;
use yew::prelude::*;

/// Renders the dashboard header: logo, title, subtitle and the refresh control.
///
/// Takes no props. The logo is resolved against the [`AssetConfig`] in
/// context, or the default `/logo.png` when no provider is mounted.
#[function_component(HeaderView)]
pub fn header_view() -> Html {
    let assets = use_context::<AssetConfig>().unwrap_or_default();
    let content = HeaderContent::DEFAULT;

    html! {
        <header class="dashboard-header" style={header_styles::container().to_css()}>
            <div class="dashboard-header__brand" style={header_styles::brand().to_css()}>
                <img
                    class="dashboard-header__logo"
                    src={assets.logo_url()}
                    alt={content.logo_alt}
                    style={header_styles::logo().to_css()}
                />
                <div>
                    <h2 style={header_styles::heading().to_css()}>{ content.title }</h2>
                    <small style={header_styles::subtitle().to_css()}>{ content.subtitle }</small>
                </div>
            </div>
            <div class="dashboard-header__actions">
                // TODO: attach an onclick once the dashboard has a data-refresh operation to call.
                <button
                    type="button"
                    class="refresh-btn"
                    style={header_styles::refresh_button().to_css()}
                >
                    { content.refresh_label }
                </button>
            </div>
        </header>
    }
}
