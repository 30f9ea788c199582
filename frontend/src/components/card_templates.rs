//! Template selector grid.
//!
//! Renders the built-in presets; premium presets under a free plan come out
//! disabled and never fire the selection callback, both in the view and in
//! the update guard.

use common::model::profile::Plan;
use common::model::template::TemplatePreset;
use yew::html::Scope;
use yew::prelude::*;

pub enum Msg {
    Select(usize),
}

#[derive(Properties, PartialEq)]
pub struct CardTemplatesProps {
    /// Id of the currently selected preset, if any.
    #[prop_or_default]
    pub selected: Option<String>,
    pub on_select: Callback<TemplatePreset>,
    pub plan: Plan,
}

pub struct CardTemplates {
    presets: Vec<TemplatePreset>,
}

impl Component for CardTemplates {
    type Message = Msg;
    type Properties = CardTemplatesProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            presets: TemplatePreset::builtin(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(index) => {
                if let Some(preset) = self.presets.get(index) {
                    if preset.can_select(ctx.props().plan) {
                        ctx.props().on_select.emit(preset.clone());
                    }
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let plan = ctx.props().plan;
        let selected = ctx.props().selected.as_deref();

        html! {
            <div class="card-templates">
                <h3>{"Escolha um Template"}</h3>
                <div style="display:grid; grid-template-columns:repeat(2, 1fr); gap:16px;">
                    {
                        for self.presets.iter().enumerate().map(|(index, preset)| {
                            preset_tile(preset, index, selected, plan, link)
                        })
                    }
                </div>
            </div>
        }
    }
}

fn preset_tile(
    preset: &TemplatePreset,
    index: usize,
    selected: Option<&str>,
    plan: Plan,
    link: &Scope<CardTemplates>,
) -> Html {
    let is_selected = selected == Some(preset.id.as_str());
    let can_select = preset.can_select(plan);

    let tile_style = format!(
        "background:{}; color:{}; aspect-ratio:16/9; border-radius:8px; display:flex; align-items:center; justify-content:center; font-weight:500;{}",
        preset.style.background(),
        preset.style.text_color(),
        if can_select { "" } else { " opacity:0.5;" }
    );

    let label = if !can_select {
        "Requer Premium"
    } else if is_selected {
        "Selecionado"
    } else {
        "Selecionar"
    };

    html! {
        <div class={classes!("template-tile", is_selected.then_some("selected"))}>
            <div style={tile_style}>{ &preset.name }</div>
            <div style="display:flex; align-items:center; justify-content:space-between; margin-top:8px;">
                <span style="font-size:14px; font-weight:500;">{ &preset.name }</span>
                {
                    if preset.premium {
                        html! { <span class="premium-badge">{"Premium"}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <button
                class="template-select-btn"
                disabled={!can_select}
                onclick={link.callback(move |_| Msg::Select(index))}
            >
                { label }
            </button>
        </div>
    }
}
