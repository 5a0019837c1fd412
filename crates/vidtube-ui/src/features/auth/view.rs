//! Login, sign-up, and account settings pages.
//!
//! # Design
//! - Pages hold form state locally and hand finished forms to the api layer.
//! - Failures surface through toasts raised by the operation runner.

use crate::app::{Route, use_services};
use crate::components::button::Button;
use crate::components::container::Container;
use crate::components::image_upload::{ImageKind, ImageUpload};
use crate::components::personal_info::PersonalInfo;
use crate::core::http::FilePart;
use crate::core::store::AppStore;
use crate::features::auth::api::{change_password, login, register};
use crate::features::auth::state::{ChangePasswordForm, LoginForm, RegisterForm};
use gloo::file::File;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

fn field(label: &'static str, kind: &'static str, value: &str, on_value: Callback<String>) -> Html {
    let oninput = Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
            on_value.emit(input.value());
        }
    });
    html! {
        <label class="block text-sm">
            {label}
            <input
                type={kind}
                class="w-full bg-transparent border border-slate-600 p-2 mt-1"
                value={value.to_string()}
                {oninput}
            />
        </label>
    }
}

async fn read_file(input: &web_sys::HtmlInputElement) -> Option<FilePart> {
    let file = File::from(input.files()?.get(0)?);
    match gloo::file::futures::read_as_bytes(&file).await {
        Ok(bytes) => Some(FilePart {
            file_name: file.name(),
            mime_type: Some(file.raw_mime_type()).filter(|mime| !mime.is_empty()),
            bytes,
        }),
        Err(err) => {
            tracing::warn!(error = %err, "could not read selected file");
            None
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    SignIn,
    SignUp,
}

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let mode = use_state(|| Mode::SignIn);
    let to_sign_up = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(Mode::SignUp))
    };
    let to_sign_in = {
        let mode = mode.clone();
        Callback::from(move |_: MouseEvent| mode.set(Mode::SignIn))
    };
    let on_registered = {
        let mode = mode.clone();
        Callback::from(move |()| mode.set(Mode::SignIn))
    };

    html! {
        <Container>
            <div class="max-w-md mx-auto space-y-4">
                {match *mode {
                    Mode::SignIn => html! {
                        <>
                            <SignInForm />
                            <p class="text-sm text-center">
                                {"Don't have an account? "}
                                <button class="text-purple-400" onclick={to_sign_up}>{"Sign up"}</button>
                            </p>
                        </>
                    },
                    Mode::SignUp => html! {
                        <>
                            <SignUpForm {on_registered} />
                            <p class="text-sm text-center">
                                {"Already have an account? "}
                                <button class="text-purple-400" onclick={to_sign_in}>{"Login"}</button>
                            </p>
                        </>
                    },
                }}
            </div>
        </Container>
    }
}

#[function_component(SignInForm)]
fn sign_in_form() -> Html {
    let services = use_services();
    let navigator = use_navigator();
    let loading = use_selector(|store: &AppStore| store.auth.loading);
    let form = use_state(LoginForm::default);

    let on_identifier = {
        let form = form.clone();
        Callback::from(move |identifier: String| {
            form.set(LoginForm {
                identifier,
                ..(*form).clone()
            });
        })
    };
    let on_password = {
        let form = form.clone();
        Callback::from(move |password: String| {
            form.set(LoginForm {
                password,
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let form = (*form).clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                if login(&services, &form).await.is_ok()
                    && let Some(navigator) = navigator
                {
                    navigator.push(&Route::Home);
                }
            });
        })
    };

    html! {
        <form class="space-y-3" {onsubmit}>
            <h1 class="text-2xl font-semibold text-center">{"Login"}</h1>
            {field("Username or email", "text", &form.identifier, on_identifier)}
            {field("Password", "password", &form.password, on_password)}
            <Button r#type="submit" class={classes!("w-full", "bg-purple-500", "py-2")} disabled={*loading}>
                {if *loading { "Signing in..." } else { "Login" }}
            </Button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
struct SignUpFormProps {
    on_registered: Callback<()>,
}

#[function_component(SignUpForm)]
fn sign_up_form(props: &SignUpFormProps) -> Html {
    let services = use_services();
    let loading = use_selector(|store: &AppStore| store.auth.loading);
    let form = use_state(RegisterForm::default);
    let avatar_input = use_node_ref();
    let cover_input = use_node_ref();

    let text_setter = |apply: fn(&mut RegisterForm, String)| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            apply(&mut next, value);
            form.set(next);
        })
    };
    let on_full_name = text_setter(|form, value| form.full_name = value);
    let on_username = text_setter(|form, value| form.username = value);
    let on_email = text_setter(|form, value| form.email = value);
    let on_password = text_setter(|form, value| form.password = value);

    let onsubmit = {
        let form = form.clone();
        let avatar_input = avatar_input.clone();
        let cover_input = cover_input.clone();
        let on_registered = props.on_registered.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let mut form = (*form).clone();
            let avatar = avatar_input.cast::<web_sys::HtmlInputElement>();
            let cover = cover_input.cast::<web_sys::HtmlInputElement>();
            let on_registered = on_registered.clone();
            yew::platform::spawn_local(async move {
                if let Some(input) = avatar {
                    form.avatar = read_file(&input).await;
                }
                if let Some(input) = cover {
                    form.cover_image = read_file(&input).await;
                }
                if register(&services, form).await.is_ok() {
                    on_registered.emit(());
                }
            });
        })
    };

    html! {
        <form class="space-y-3" {onsubmit}>
            <h1 class="text-2xl font-semibold text-center">{"Sign up"}</h1>
            {field("Full name", "text", &form.full_name, on_full_name)}
            {field("Username", "text", &form.username, on_username)}
            {field("Email", "email", &form.email, on_email)}
            {field("Password", "password", &form.password, on_password)}
            <label class="block text-sm">
                {"Avatar"}
                <input ref={avatar_input} type="file" accept="image/*" class="block mt-1" />
            </label>
            <label class="block text-sm">
                {"Cover image (optional)"}
                <input ref={cover_input} type="file" accept="image/*" class="block mt-1" />
            </label>
            <Button r#type="submit" class={classes!("w-full", "bg-purple-500", "py-2")} disabled={*loading}>
                {"Create account"}
            </Button>
        </form>
    }
}

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let user = use_selector(|store: &AppStore| store.auth.user.clone());
    let cover = (*user)
        .as_ref()
        .and_then(|user| user.cover_image.as_ref())
        .map(|media| media.url().to_string());

    html! {
        <Container>
            <div class="space-y-6 max-w-2xl mx-auto">
                <div class="w-full h-32 bg-[#222222] rounded-lg overflow-hidden">
                    {for cover.map(|src| html! { <img {src} alt="Cover" class="w-full h-full object-cover" /> })}
                </div>
                <div class="flex gap-3">
                    <ImageUpload kind={ImageKind::Avatar} />
                    <ImageUpload kind={ImageKind::Cover} />
                </div>
                <PersonalInfo />
                <ChangePassword />
            </div>
        </Container>
    }
}

#[function_component(ChangePassword)]
fn change_password_form() -> Html {
    let services = use_services();
    let loading = use_selector(|store: &AppStore| store.auth.loading);
    let form = use_state(ChangePasswordForm::default);

    let on_old = {
        let form = form.clone();
        Callback::from(move |old_password: String| {
            form.set(ChangePasswordForm {
                old_password,
                ..(*form).clone()
            });
        })
    };
    let on_new = {
        let form = form.clone();
        Callback::from(move |new_password: String| {
            form.set(ChangePasswordForm {
                new_password,
                ..(*form).clone()
            });
        })
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let current = (*form).clone();
            let form = form.clone();
            yew::platform::spawn_local(async move {
                if change_password(&services, &current).await.is_ok() {
                    form.set(ChangePasswordForm::default());
                }
            });
        })
    };

    html! {
        <form class="border border-slate-600 rounded-lg p-4 space-y-3" {onsubmit}>
            <h2 class="font-semibold">{"Change password"}</h2>
            {field("Current password", "password", &form.old_password, on_old)}
            {field("New password", "password", &form.new_password, on_new)}
            <div class="flex justify-end">
                <Button r#type="submit" class={classes!("bg-purple-500", "px-3", "py-1")} disabled={*loading}>
                    {"Update password"}
                </Button>
            </div>
        </form>
    }
}
