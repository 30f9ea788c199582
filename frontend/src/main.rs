use crate::app::App;

mod app;
mod components;
mod data;
mod pages;
mod toast;
mod utils;

fn main() {
    yew::Renderer::<App>::new().render();
}
