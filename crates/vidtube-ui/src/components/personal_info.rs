use crate::app::use_services;
use crate::components::button::Button;
use crate::core::store::AppStore;
use crate::features::auth::api::update_account;
use crate::features::auth::state::AccountForm;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Display name and email editor, seeded from the signed-in user.
#[function_component(PersonalInfo)]
pub(crate) fn personal_info() -> Html {
    let services = use_services();
    let user = use_selector(|store: &AppStore| store.auth.user.clone());
    let form = use_state(|| AccountForm::from_user((*user).as_ref()));

    {
        let form = form.clone();
        use_effect_with_deps(
            move |user| {
                form.set(AccountForm::from_user((**user).as_ref()));
                || ()
            },
            user.clone(),
        );
    }

    let on_full_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                form.set(AccountForm {
                    full_name: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                form.set(AccountForm {
                    email: input.value(),
                    ..(*form).clone()
                });
            }
        })
    };

    let on_reset = {
        let form = form.clone();
        let user = user.clone();
        Callback::from(move |_: MouseEvent| form.set(AccountForm::from_user((*user).as_ref())))
    };

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(services) = services.clone() else {
                return;
            };
            let form = (*form).clone();
            yew::platform::spawn_local(async move {
                // Outcome is surfaced as a toast.
                let _ = update_account(&services, &form).await;
            });
        })
    };

    html! {
        <form class="border border-slate-600 rounded-lg p-4 space-y-3" {onsubmit}>
            <h2 class="font-semibold">{"Personal information"}</h2>
            <label class="block text-sm">
                {"Full name"}
                <input
                    class="w-full bg-transparent border border-slate-600 p-2 mt-1"
                    value={form.full_name.clone()}
                    oninput={on_full_name}
                />
            </label>
            <label class="block text-sm">
                {"Email"}
                <input
                    type="email"
                    class="w-full bg-transparent border border-slate-600 p-2 mt-1"
                    value={form.email.clone()}
                    oninput={on_email}
                />
            </label>
            <div class="flex gap-2 justify-end">
                <Button class={classes!("border", "px-3", "py-1")} onclick={on_reset}>{"Reset"}</Button>
                <Button r#type="submit" class={classes!("bg-purple-500", "px-3", "py-1")}>{"Save changes"}</Button>
            </div>
        </form>
    }
}
