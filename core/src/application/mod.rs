use crate::{
    domain::{
        common::{MenubotConfig, entities::app_errors::CoreError, services::Service},
        payment::{entities::PaymentGateway, ports::EthereumClient},
        voice::value_objects::VoiceSettings,
    },
    infrastructure::{
        ethereum::JsonRpcEthereumClient,
        llm::LlmClient,
        menu::JsonMenuRepository,
        session::InMemorySessionRepository,
        voice::{CommandSpeechSynthesizer, FfmpegRecorder, FfplayPlayer, SpeechRecognizerClient},
    },
};

pub type MenubotService = Service<
    JsonMenuRepository,
    LlmClient,
    InMemorySessionRepository,
    JsonRpcEthereumClient,
    CommandSpeechSynthesizer,
    SpeechRecognizerClient,
    FfmpegRecorder,
    FfplayPlayer,
>;

/// Build the service from configuration. Fails when the chat credentials
/// are missing, the menu cannot be read or the Ethereum node is down.
pub async fn create_service(config: MenubotConfig) -> Result<MenubotService, CoreError> {
    let llm_client = LlmClient::from_config(&config.llm)?;
    let menu_repository = JsonMenuRepository::load(&config.menu.path).await?;

    let payment = match &config.ethereum {
        Some(ethereum) => {
            let client = JsonRpcEthereumClient::new(ethereum.endpoint.clone());
            let version = client.client_version().await.map_err(|e| {
                CoreError::Configuration(format!(
                    "Failed to connect to Ethereum endpoint {}: {}",
                    ethereum.endpoint, e
                ))
            })?;
            tracing::info!(%version, wallet = %ethereum.wallet_address, "Connected to Ethereum node");

            Some(PaymentGateway::new(client, ethereum.wallet_address.clone()))
        }
        None => {
            tracing::info!("Ethereum endpoint or wallet not configured, payments disabled");
            None
        }
    };

    let voice = &config.voice;

    Ok(Service::new(
        menu_repository,
        llm_client,
        InMemorySessionRepository::new(),
        payment,
        CommandSpeechSynthesizer::new(voice.tts_program.clone(), voice.tts_args.clone()),
        SpeechRecognizerClient::from(&voice.recognition),
        FfmpegRecorder::new(
            voice.ffmpeg_program.clone(),
            voice.input_format.clone(),
            voice.input_device.clone(),
        ),
        FfplayPlayer::new(voice.ffplay_program.clone()),
        VoiceSettings::from(voice),
    ))
}
