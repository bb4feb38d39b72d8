use crate::application::http::{
    cart::router::CartApiDoc, chat::router::ChatApiDoc, health::HealthApiDoc,
    menu::router::MenuApiDoc, payment::router::PaymentApiDoc, voice::router::VoiceApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Menubot API",
    description = "Menu, cart, ordering chat, voice and Ether payments for the pAI food shop."
))]
pub struct ApiDoc;

impl ApiDoc {
    /// The document of every feature router, merged.
    pub fn merged() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(MenuApiDoc::openapi());
        openapi.merge(CartApiDoc::openapi());
        openapi.merge(ChatApiDoc::openapi());
        openapi.merge(VoiceApiDoc::openapi());
        openapi.merge(PaymentApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}
