use crate::domain::{
    chat::ports::ChatClient,
    common::{entities::app_errors::CoreError, services::Service},
    menu::{
        entities::{Menu, MenuItem},
        helpers::render_menu_text,
        ports::{MenuRepository, MenuService},
        value_objects::{GetCategoryItemsInput, MenuTextStyle},
    },
    payment::ports::EthereumClient,
    session::ports::SessionRepository,
    voice::ports::{AudioPlayer, AudioRecorder, SpeechRecognizer, SpeechSynthesizer},
};

impl<M, L, S, E, TTS, STT, AR, AP> MenuService for Service<M, L, S, E, TTS, STT, AR, AP>
where
    M: MenuRepository,
    L: ChatClient,
    S: SessionRepository,
    E: EthereumClient,
    TTS: SpeechSynthesizer,
    STT: SpeechRecognizer,
    AR: AudioRecorder,
    AP: AudioPlayer,
{
    async fn get_menu(&self) -> Result<Menu, CoreError> {
        self.menu_repository.fetch_menu().await
    }

    async fn get_categories(&self) -> Result<Vec<String>, CoreError> {
        let menu = self.menu_repository.fetch_menu().await?;

        Ok(menu.categories())
    }

    async fn get_category_items(
        &self,
        input: GetCategoryItemsInput,
    ) -> Result<Vec<MenuItem>, CoreError> {
        let menu = self.menu_repository.fetch_menu().await?;
        let items = menu.category_items(&input.category_name);

        tracing::debug!(
            category = %input.category_name,
            count = items.len(),
            "Listed category items"
        );

        Ok(items)
    }

    async fn get_menu_text(&self, style: MenuTextStyle) -> Result<String, CoreError> {
        let menu = self.menu_repository.fetch_menu().await?;

        Ok(render_menu_text(&menu, style))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::test_support::{sample_menu, test_service};

    #[tokio::test]
    async fn test_get_category_items_only_returns_in_stock_items() {
        let (service, _) = test_service(sample_menu());

        let items = service
            .get_category_items(GetCategoryItemsInput {
                category_name: "Mains".to_string(),
            })
            .await
            .unwrap();

        let names: Vec<_> = items.iter().map(|item| item.item.as_str()).collect();
        assert_eq!(names, vec!["Burgers"]);
    }

    #[tokio::test]
    async fn test_get_categories() {
        let (service, _) = test_service(sample_menu());

        let categories = service.get_categories().await.unwrap();
        assert_eq!(categories, vec!["Mains", "Sides", "Drinks"]);
    }

    #[tokio::test]
    async fn test_menu_text_with_amount_includes_out_of_stock_items() {
        let (service, _) = test_service(sample_menu());

        let text = service
            .get_menu_text(MenuTextStyle::WithAmount)
            .await
            .unwrap();

        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("Veggie Wrap: $7.5 (Amount:"));
    }
}
