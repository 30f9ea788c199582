use common::model::card::Card;
use common::model::template::TemplatePreset;

use crate::data::gateway::GatewayError;

pub enum Msg {
    SetTitle(String),
    SetSlug(String),
    SetName(String),
    SetPosition(String),
    SetCompany(String),
    SetEmail(String),
    SetPhone(String),
    SetWebsite(String),
    SetDescription(String),
    SetSocial { network: &'static str, value: String },
    TemplateSelected(TemplatePreset),
    AvatarChanged(String),
    CoverChanged(String),
    Save { publish: bool },
    SaveFinished(Result<Box<Card>, GatewayError>),
    CardLoaded(Box<Card>),
    LoadFailed(String),
}
