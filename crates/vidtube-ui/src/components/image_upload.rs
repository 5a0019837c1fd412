//! Avatar and cover-image upload with a preview step.

use crate::app::use_services;
use crate::components::button::Button;
use crate::core::http::FilePart;
use crate::features::auth::api::{update_avatar, update_cover_image};
use crate::features::auth::state::ImageForm;
use gloo::file::{File, ObjectUrl};
use yew::prelude::*;

/// Which profile image the control replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ImageKind {
    Avatar,
    Cover,
}

impl ImageKind {
    const fn label(self) -> &'static str {
        match self {
            Self::Avatar => "Change avatar",
            Self::Cover => "Change cover image",
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ImageUploadProps {
    pub kind: ImageKind,
}

#[derive(Clone)]
struct Selection {
    file: File,
    preview: ObjectUrl,
}

#[function_component(ImageUpload)]
pub(crate) fn image_upload(props: &ImageUploadProps) -> Html {
    let services = use_services();
    let selection = use_state(|| None::<Selection>);
    let uploading = use_state(|| false);

    let onchange = {
        let selection = selection.clone();
        Callback::from(move |e: Event| {
            let picked = e
                .target_dyn_into::<web_sys::HtmlInputElement>()
                .and_then(|input| input.files())
                .and_then(|files| files.get(0))
                .map(File::from);
            selection.set(picked.map(|file| Selection {
                preview: ObjectUrl::from(file.clone()),
                file,
            }));
        })
    };

    let on_cancel = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| selection.set(None))
    };

    let on_upload = {
        let selection = selection.clone();
        let uploading = uploading.clone();
        let kind = props.kind;
        Callback::from(move |_: MouseEvent| {
            let (Some(services), Some(picked)) = (services.clone(), (*selection).clone()) else {
                return;
            };
            let selection = selection.clone();
            let uploading = uploading.clone();
            uploading.set(true);
            yew::platform::spawn_local(async move {
                let image = match gloo::file::futures::read_as_bytes(&picked.file).await {
                    Ok(bytes) => Some(FilePart {
                        file_name: picked.file.name(),
                        mime_type: Some(picked.file.raw_mime_type()).filter(|mime| !mime.is_empty()),
                        bytes,
                    }),
                    Err(err) => {
                        tracing::warn!(error = %err, "could not read selected image");
                        None
                    }
                };
                let form = ImageForm { image };
                let result = match kind {
                    ImageKind::Avatar => update_avatar(&services, form).await.map(drop),
                    ImageKind::Cover => update_cover_image(&services, form).await.map(drop),
                };
                uploading.set(false);
                if result.is_ok() {
                    selection.set(None);
                }
            });
        })
    };

    let preview = (*selection).as_ref().map(|picked| {
        html! {
            <div class="fixed inset-0 flex items-center justify-center bg-black/70 z-40">
                <div class="bg-[#222222] p-4 rounded-lg space-y-3">
                    <img src={picked.preview.to_string()} alt="Preview" class="max-h-64 object-contain" />
                    <div class="flex gap-2 justify-end">
                        <Button class={classes!("border", "px-3", "py-1")} onclick={on_cancel.clone()}>
                            {"Cancel"}
                        </Button>
                        <Button
                            class={classes!("bg-purple-500", "px-3", "py-1")}
                            disabled={*uploading}
                            onclick={on_upload.clone()}
                        >
                            {if *uploading { "Uploading..." } else { "Upload" }}
                        </Button>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div>
            <label class="cursor-pointer text-sm bg-purple-500 px-3 py-1 inline-block">
                {props.kind.label()}
                <input type="file" accept="image/*" class="hidden" {onchange} />
            </label>
            {for preview}
        </div>
    }
}
