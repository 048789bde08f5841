use frontend::config;
use frontend::{App, AppProps};

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Dashboard starting...");

    let Some(root) = config::mount_point() else {
        log::error!("No document to mount the dashboard into");
        return;
    };

    let assets = config::asset_config_for(&root);
    yew::Renderer::<App>::with_root_and_props(root, AppProps { assets }).render();
}
