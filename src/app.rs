//! Root application component with theme, routing, and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::config::ApiConfig;
use crate::pages::{
    campaigns::CampaignsPage, dashboard::DashboardPage, home::HomePage, influencers::InfluencersPage,
    login::LoginPage, profile::ProfilePage, register::RegisterPage,
};
use crate::routes::AppRoute;
use crate::session::SessionClient;
use crate::state::auth::AuthState;
use crate::theme::ThemeProvider;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and auth contexts, resolves the stored token once in
/// the browser, and maps the seven static routes to their pages. Routes are
/// not guarded here; signed-in pages redirect on their own.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionClient::browser(ApiConfig::from_env());
    let auth = RwSignal::new(AuthState::loading());

    provide_context(session.clone());
    provide_context(auth);

    // Effects only run in the browser, where the token store is real.
    Effect::new(move || {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let user = session.current_user().await;
            auth.set(AuthState::resolved(user));
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/pandarank-web.css"/>
        <Title text="PandaRank"/>

        <Router>
            <ThemeProvider>
                <Layout>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                        <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                        <Route path=StaticSegment(AppRoute::Register.segment()) view=RegisterPage/>
                        <Route path=StaticSegment(AppRoute::Dashboard.segment()) view=DashboardPage/>
                        <Route path=StaticSegment(AppRoute::Campaigns.segment()) view=CampaignsPage/>
                        <Route path=StaticSegment(AppRoute::Influencers.segment()) view=InfluencersPage/>
                        <Route path=StaticSegment(AppRoute::Profile.segment()) view=ProfilePage/>
                    </Routes>
                </Layout>
            </ThemeProvider>
        </Router>
    }
}
