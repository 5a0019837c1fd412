//! App shell: service wiring, routing, and session bootstrap.
//!
//! # Design
//! - Services are built once in [`run_app`] and shared through context.
//! - The session probe runs on mount only when a token is stored.

use crate::components::auth_layout::AuthLayout;
use crate::components::avatar::Avatar;
use crate::components::toast::ToastHost;
use crate::core::config::{ClientConfig, DEFAULT_PAGE_LIMIT};
use crate::core::notify::Notifications;
use crate::core::runner::Services;
use crate::core::store::AppStore;
use crate::features::auth::api::{current_user, logout};
use crate::features::auth::view::{LoginPage, SettingsPage};
use crate::features::playlist::view::{ChannelPlaylists, PlaylistDetail};
use crate::features::video::view::{HomeFeed, WatchPage};
use crate::services::fetch::FetchTransport;
use preferences::{build_services, install_logging, load_config};
pub(crate) use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

mod preferences;
mod routes;

/// Services handle shared with every component.
pub(crate) type AppServices = Services<FetchTransport>;

/// Services from context; `None` outside the app root.
#[hook]
pub(crate) fn use_services() -> Option<AppServices> {
    use_context::<AppServices>()
}

/// Page size for paginated fetches, from the runtime config.
#[hook]
pub(crate) fn use_page_limit() -> u32 {
    use_context::<ClientConfig>().map_or(DEFAULT_PAGE_LIMIT, |config| config.page_limit)
}

#[derive(Properties, PartialEq)]
pub(crate) struct VidTubeAppProps {
    pub services: AppServices,
    pub config: ClientConfig,
}

#[function_component(VidTubeApp)]
pub(crate) fn vidtube_app(props: &VidTubeAppProps) -> Html {
    {
        let services = props.services.clone();
        let toast_limit = props.config.toast_limit;
        use_effect_with_deps(
            move |_| {
                services.update(|store| {
                    store.notifications = Notifications::with_limit(toast_limit);
                });
                if services.client.credentials().load().is_some() {
                    yew::platform::spawn_local(async move {
                        // Failure is recorded in the auth slice.
                        let _ = current_user(&services).await;
                    });
                }
                || ()
            },
            (),
        );
    }

    let on_dismiss = {
        let services = props.services.clone();
        Callback::from(move |id: u64| services.dismiss(id))
    };

    html! {
        <ContextProvider<AppServices> context={props.services.clone()}>
        <ContextProvider<ClientConfig> context={props.config.clone()}>
            <BrowserRouter>
                <div class="min-h-screen bg-[#121212] text-white">
                    <Header />
                    <main class="p-4">
                        <Switch<Route> render={switch} />
                    </main>
                </div>
                <ToastHost timeout_ms={props.config.toast_timeout_ms} on_dismiss={on_dismiss} />
            </BrowserRouter>
        </ContextProvider<ClientConfig>>
        </ContextProvider<AppServices>>
    }
}

#[function_component(Header)]
fn header() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let user = use_selector(|store: &AppStore| store.auth.user.clone());

    let on_logout = {
        let services = services.clone();
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(services) = services.clone() else {
                return;
            };
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                if logout(&services).await.is_ok()
                    && let Some(navigator) = navigator
                {
                    navigator.push(&Route::Login);
                }
            });
        })
    };

    let session = match &*user {
        Some(user) => {
            let avatar = user.avatar.as_ref().map(|media| media.url().to_string());
            html! {
                <div class="flex items-center gap-3">
                    <Link<Route> to={Route::ChannelPlaylists { username: user.username.clone() }}>
                        {"Playlists"}
                    </Link<Route>>
                    <Link<Route> to={Route::Settings}>{"Settings"}</Link<Route>>
                    <Avatar src={avatar} username={user.username.clone()} />
                    <button class="text-sm border px-2 py-1" onclick={on_logout}>{"Logout"}</button>
                </div>
            }
        }
        None => html! {
            <Link<Route> to={Route::Login} classes="bg-purple-500 px-3 py-1">{"Login"}</Link<Route>>
        },
    };

    html! {
        <header class="flex justify-between items-center border-b border-slate-600 px-4 py-2">
            <Link<Route> to={Route::Home} classes="text-xl font-bold">{"VidTube"}</Link<Route>>
            {session}
        </header>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomeFeed /> },
        Route::Login => html! { <LoginPage /> },
        Route::Watch { video_id } => html! { <WatchPage {video_id} /> },
        Route::ChannelPlaylists { username } => html! { <ChannelPlaylists {username} /> },
        Route::PlaylistDetail { playlist_id } => html! {
            <AuthLayout requires_auth={true}>
                <PlaylistDetail {playlist_id} />
            </AuthLayout>
        },
        Route::Settings => html! {
            <AuthLayout requires_auth={true}>
                <SettingsPage />
            </AuthLayout>
        },
        Route::NotFound => html! {
            <p class="text-center mt-10">{"Page not found"}</p>
        },
    }
}

/// Mount the client into `#root` (or `<body>` when absent).
pub fn run_app() {
    console_error_panic_hook::set_once();
    let config = load_config();
    install_logging(&config);
    let services = build_services(&config);
    tracing::info!(base_url = %config.base_url, "vidtube client starting");
    let props = VidTubeAppProps { services, config };
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<VidTubeApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<VidTubeApp>::with_props(props).render();
    }
}
