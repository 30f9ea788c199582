//! Image picker backed by object storage.
//!
//! A hidden file input is clicked programmatically; the chosen file goes
//! through `data::uploads` and the resolved public URL is handed to the
//! parent through `on_change`. Removing the image emits an empty URL, which
//! the forms persist as a cleared field.

use yew::prelude::*;

use crate::data::uploads;

pub enum Msg {
    OpenFileDialog,
    FileSelected(web_sys::File),
    UploadFinished(Option<String>),
    Remove,
}

#[derive(Properties, PartialEq)]
pub struct ImageUploadProps {
    #[prop_or_default]
    pub current: Option<String>,
    pub on_change: Callback<String>,
    /// Storage folder inside the images bucket (`avatars`, `covers`, ...).
    #[prop_or_default]
    pub folder: Option<String>,
    #[prop_or_else(|| "Clique para enviar imagem".to_string())]
    pub label: String,
}

pub struct ImageUpload {
    file_input_ref: NodeRef,
    uploading: bool,
}

impl Component for ImageUpload {
    type Message = Msg;
    type Properties = ImageUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file_input_ref: NodeRef::default(),
            uploading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenFileDialog => {
                if let Some(input) = self.file_input_ref.cast::<web_sys::HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::FileSelected(file) => {
                self.uploading = true;
                let folder = ctx.props().folder.clone();
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let url = uploads::upload_image(&file, "images", folder.as_deref())
                        .await
                        .ok();
                    link.send_message(Msg::UploadFinished(url));
                });
                true
            }
            Msg::UploadFinished(url) => {
                self.uploading = false;
                if let Some(url) = url {
                    ctx.props().on_change.emit(url);
                }
                true
            }
            Msg::Remove => {
                ctx.props().on_change.emit(String::new());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let current = ctx
            .props()
            .current
            .as_deref()
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        html! {
            <div class="image-upload">
                <input
                    ref={self.file_input_ref.clone()}
                    type="file"
                    accept="image/*"
                    style="display:none;"
                    onchange={link.batch_callback(|e: Event| {
                        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                        input
                            .files()
                            .and_then(|files| files.get(0))
                            .map(Msg::FileSelected)
                    })}
                />
                {
                    match current {
                        Some(url) => html! {
                            <div style="position:relative; border:2px dashed #d1d5db; border-radius:8px; overflow:hidden;">
                                <img src={url} alt="Imagem atual" style="width:100%; display:block; object-fit:cover;" />
                                <button
                                    style="position:absolute; top:8px; right:8px;"
                                    title="Remover imagem"
                                    onclick={link.callback(|_| Msg::Remove)}
                                >
                                    <i class="material-icons" style="font-size:16px;">{"close"}</i>
                                </button>
                            </div>
                        },
                        None => html! {
                            <button
                                class="upload-dropzone"
                                disabled={self.uploading}
                                style="width:100%; padding:24px; border:2px dashed #d1d5db; border-radius:8px; background:none; cursor:pointer;"
                                onclick={link.callback(|_| Msg::OpenFileDialog)}
                            >
                                <i class="material-icons" style="font-size:32px; color:#9ca3af;">{"upload"}</i>
                                <p style="margin:8px 0 0; font-size:14px; color:#6b7280;">
                                    { if self.uploading { "Enviando..." } else { ctx.props().label.as_str() } }
                                </p>
                            </button>
                        },
                    }
                }
            </div>
        }
    }
}
