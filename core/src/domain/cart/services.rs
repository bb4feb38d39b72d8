use tracing::instrument;
use uuid::Uuid;

use crate::domain::{
    cart::{
        ports::CartService,
        value_objects::{AddToCartInput, CartSummary, RemoveFromCartInput, UpdateCartInput},
    },
    chat::ports::ChatClient,
    common::{entities::app_errors::CoreError, services::Service},
    menu::ports::MenuRepository,
    payment::ports::EthereumClient,
    session::{entities::SessionData, ports::SessionRepository},
    voice::ports::{AudioPlayer, AudioRecorder, SpeechRecognizer, SpeechSynthesizer},
};

impl<M, L, S, E, TTS, STT, AR, AP> CartService for Service<M, L, S, E, TTS, STT, AR, AP>
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
    #[instrument(skip(self, input), fields(session_id = %input.session_id, item = %input.name))]
    async fn add_to_cart(&self, input: AddToCartInput) -> Result<CartSummary, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("item name is required".to_string()));
        }
        if input.quantity == 0 {
            return Err(CoreError::InvalidInput(
                "quantity must be at least 1".to_string(),
            ));
        }

        let (name, price, quantity) = (input.name, input.price, input.quantity);
        let session = self
            .session_repository
            .update_session(
                input.session_id,
                Box::new(move |session: &mut SessionData| {
                    session.cart.add(&name, &price, quantity)
                }),
            )
            .await?;
        let summary = CartSummary::try_from(session.cart)?;

        tracing::info!(quantity, total = %summary.total, "Item added to cart");

        Ok(summary)
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id, item = %input.name))]
    async fn remove_from_cart(&self, input: RemoveFromCartInput) -> Result<CartSummary, CoreError> {
        let name = input.name;
        let session = self
            .session_repository
            .update_session(
                input.session_id,
                Box::new(move |session: &mut SessionData| -> Result<(), CoreError> {
                    session.cart.remove(&name);
                    Ok(())
                }),
            )
            .await?;

        CartSummary::try_from(session.cart)
    }

    #[instrument(skip(self, input), fields(session_id = %input.session_id, item = %input.name))]
    async fn update_cart(&self, input: UpdateCartInput) -> Result<CartSummary, CoreError> {
        let (name, quantity) = (input.name, input.quantity);
        let session = self
            .session_repository
            .update_session(
                input.session_id,
                Box::new(move |session: &mut SessionData| {
                    session.cart.update_quantity(&name, quantity)
                }),
            )
            .await?;

        CartSummary::try_from(session.cart)
    }

    async fn get_cart(&self, session_id: Uuid) -> Result<CartSummary, CoreError> {
        let session = self.session_repository.get_session(session_id).await?;

        CartSummary::try_from(session.cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::{
            generate_uuid_v7,
            test_support::{sample_menu, service_with, test_service},
        },
        menu::ports::MockMenuRepository,
        session::ports::MockSessionRepository,
    };

    fn add(session_id: Uuid, name: &str, price: &str, quantity: u32) -> AddToCartInput {
        AddToCartInput {
            session_id,
            name: name.to_string(),
            price: price.to_string(),
            quantity,
        }
    }

    #[tokio::test]
    async fn test_cart_is_scoped_to_session() {
        let (service, _) = test_service(sample_menu());
        let alice = generate_uuid_v7();
        let bob = generate_uuid_v7();

        service
            .add_to_cart(add(alice, "Burgers", "8.99", 2))
            .await
            .unwrap();

        assert_eq!(service.get_cart(alice).await.unwrap().items.len(), 1);
        assert!(service.get_cart(bob).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_add_update_remove_flow() {
        let (service, _) = test_service(sample_menu());
        let session_id = generate_uuid_v7();

        service
            .add_to_cart(add(session_id, "Burgers", "8.99", 1))
            .await
            .unwrap();
        let summary = service
            .add_to_cart(add(session_id, "French Fries", "2.99", 1))
            .await
            .unwrap();
        assert_eq!(summary.total, "11.98");

        let summary = service
            .update_cart(UpdateCartInput {
                session_id,
                name: "Burgers".to_string(),
                quantity: 2,
            })
            .await
            .unwrap();
        assert_eq!(summary.total, "20.97");
        assert_eq!(summary.item_count, 3);

        let summary = service
            .remove_from_cart(RemoveFromCartInput {
                session_id,
                name: "Burgers".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(summary.total, "2.99");
        assert_eq!(summary.items[0].name, "French Fries");
    }

    #[tokio::test]
    async fn test_add_rejects_zero_quantity_and_bad_price() {
        let (service, _) = test_service(sample_menu());
        let session_id = generate_uuid_v7();

        let zero = service
            .add_to_cart(add(session_id, "Burgers", "8.99", 0))
            .await;
        assert!(matches!(zero, Err(CoreError::InvalidInput(_))));

        let bad_price = service
            .add_to_cart(add(session_id, "Burgers", "cheap", 1))
            .await;
        assert!(matches!(bad_price, Err(CoreError::InvalidInput(_))));

        assert!(service.get_cart(session_id).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_empty_cart_total_is_zero() {
        let (service, _) = test_service(sample_menu());

        let summary = service.get_cart(generate_uuid_v7()).await.unwrap();
        assert_eq!(summary.total, "0.00");
        assert_eq!(summary.item_count, 0);
    }

    #[tokio::test]
    async fn test_rejected_add_never_touches_the_session_store() {
        let mut menu_repository = MockMenuRepository::new();
        menu_repository.expect_fetch_menu().never();
        let mut session_repository = MockSessionRepository::new();
        session_repository.expect_get_session().never();
        session_repository.expect_update_session().never();

        let (service, _) = service_with(menu_repository, session_repository);
        let session_id = generate_uuid_v7();

        let blank = service.add_to_cart(add(session_id, "  ", "8.99", 1)).await;
        assert!(matches!(blank, Err(CoreError::InvalidInput(_))));

        let zero = service
            .add_to_cart(add(session_id, "Burgers", "8.99", 0))
            .await;
        assert!(matches!(zero, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_concurrent_adds_to_one_session_all_land() {
        let (service, _) = test_service(sample_menu());
        let session_id = generate_uuid_v7();

        let adds = (0..20).map(|_| service.add_to_cart(add(session_id, "Cola", "1.50", 1)));
        for result in futures::future::join_all(adds).await {
            result.unwrap();
        }

        let summary = service.get_cart(session_id).await.unwrap();
        assert_eq!(summary.item_count, 20);
        assert_eq!(summary.total, "30.00");
    }

    #[tokio::test]
    async fn test_update_to_unrepresentable_total_is_rejected() {
        let (service, _) = test_service(sample_menu());
        let session_id = generate_uuid_v7();
        service
            .add_to_cart(add(session_id, "Yacht", "100000000000000", 1))
            .await
            .unwrap();

        let result = service
            .update_cart(UpdateCartInput {
                session_id,
                name: "Yacht".to_string(),
                quantity: 1_000_000,
            })
            .await;

        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
        let summary = service.get_cart(session_id).await.unwrap();
        assert_eq!(summary.total, "100000000000000.00");
    }
}
