use auth_panels::AuthPanels;
use leptos::*;
use leptos_meta::*;

/// The root component of the application
#[component]
fn App() -> impl IntoView {
    // Provides contexts for meta tags (like <Title>)
    provide_meta_context();

    view! {
        <Title text="Chat - Login"/>
        <AuthPanels/>
    }
}

// --- Main ---

fn main() {
    // Setup logging
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("Auth panels app started");

    // Mount the <App> component to the <body>
    mount_to_body(App);
}
