#![cfg(not(target_arch = "wasm32"))]

use frontend::{App, AppProps, HeaderView};
use shared::AssetConfig;
use tokio::task::LocalSet;
use yew::{BaseComponent, LocalServerRenderer};

async fn render<C: BaseComponent>(renderer: LocalServerRenderer<C>) -> String {
    LocalSet::new()
        .run_until(renderer.hydratable(false).render())
        .await
}

async fn render_header() -> String {
    render(LocalServerRenderer::<HeaderView>::new()).await
}

#[tokio::test]
async fn header_contains_every_element_once() {
    let html = render_header().await;

    assert_eq!(html.matches("<img").count(), 1);
    assert_eq!(html.matches("<h2").count(), 1);
    assert_eq!(html.matches("<small").count(), 1);
    assert_eq!(html.matches("<button").count(), 1);

    assert!(html.contains("Autosys Job Monitoring</h2>"));
    assert!(html.contains("Live simulated dashboard • SLA &amp; Dependency analysis</small>"));
    assert!(html.contains("Refresh</button>"));
}

#[tokio::test]
async fn rendering_twice_is_identical() {
    let first = render_header().await;
    let second = render_header().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn refresh_button_is_enabled() {
    let html = render_header().await;
    assert!(html.contains(r#"type="button""#));
    assert!(!html.contains("disabled"));
}

#[tokio::test]
async fn layout_styles_are_inlined() {
    let html = render_header().await;
    assert!(html.contains(
        r#"style="display: flex; align-items: center; justify-content: space-between; padding: 12px 20px"#
    ));
    assert!(html.contains(r#"style="width: 56px; height: 56px; margin-right: 12px""#));
    assert!(html.contains(r#"style="padding: 8px 14px; border-radius: 8px; border: none; cursor: pointer""#));
}

#[tokio::test]
async fn logo_defaults_to_site_root_without_provider() {
    let html = render_header().await;
    assert!(html.contains(r#"src="/logo.png""#));
    assert!(html.contains(r#"alt="logo""#));
}

#[tokio::test]
async fn app_passes_asset_base_to_header() {
    let assets = AssetConfig::new("https://cdn.example.com/dashboard").unwrap();
    let html = render(LocalServerRenderer::<App>::with_props(AppProps { assets })).await;

    assert!(html.contains(r#"class="app-shell""#));
    assert!(html.contains(r#"src="https://cdn.example.com/dashboard/logo.png""#));
    assert_eq!(html.matches("<button").count(), 1);
}
