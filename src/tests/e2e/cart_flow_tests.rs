// End to end cart flows through the composition root, with in-memory
// storefront API and notifications over both storage adapters.

use crate::modules::cart::application::cart_store::DEFAULT_CART_KEY;
use crate::modules::cart::core::notice::CartNotice;
use crate::modules::cart::use_cases::add_product::command::AddProduct;
use crate::modules::cart::use_cases::remove_product::command::RemoveProduct;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shared::infrastructure::cart_storage::file::FileCartStorage;
use crate::shared::infrastructure::notifications::in_memory::InMemoryNotificationSink;
use crate::shared::infrastructure::storefront_api::in_memory::InMemoryStorefrontApi;
use crate::shell::build_state;
use crate::shell::state::AppState;
use crate::tests::fixtures::carts::CartHarness;
use crate::tests::fixtures::products::{make_line_item, make_product};
use rstest::rstest;
use std::path::Path;
use std::sync::Arc;

async fn open_file_backed(
    dir: &Path,
    api: Arc<InMemoryStorefrontApi>,
    notifications: Arc<InMemoryNotificationSink>,
) -> AppState {
    build_state(
        DEFAULT_CART_KEY,
        Arc::new(FileCartStorage::new(dir)),
        api.clone(),
        api,
        notifications,
    )
    .await
}

#[rstest]
#[tokio::test]
async fn it_should_add_a_first_product_into_an_empty_cart() {
    let harness = CartHarness::empty().await;
    harness.api.put_product(make_product(1), 5).await;
    let state = harness.app_state();

    let cart = state
        .add_product
        .handle(AddProduct { product_id: 1 })
        .await
        .unwrap();

    assert_eq!(cart.items(), &[make_line_item(1, 1)]);
    assert_eq!(
        harness.persisted().await,
        Some(serde_json::to_string(&vec![make_line_item(1, 1)]).unwrap())
    );
}

#[rstest]
#[tokio::test]
async fn it_should_refuse_to_add_beyond_stock() {
    let harness = CartHarness::with_items(vec![make_line_item(1, 5)]).await;
    harness.api.put_product(make_product(1), 5).await;
    let state = harness.app_state();

    let result = state.add_product.handle(AddProduct { product_id: 1 }).await;

    assert!(result.is_err());
    assert_eq!(state.store.snapshot().await.items(), &[make_line_item(1, 5)]);
    assert_eq!(
        harness.notifications.messages(),
        vec![CartNotice::OutOfStock.message()]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_ignore_an_update_to_zero() {
    let harness = CartHarness::with_items(vec![make_line_item(2, 3)]).await;
    let state = harness.app_state();

    let cart = state
        .update_product_amount
        .handle(UpdateProductAmount {
            product_id: 2,
            amount: 0,
        })
        .await
        .unwrap();

    assert_eq!(cart.items(), &[make_line_item(2, 3)]);
    assert_eq!(harness.storage.write_count(), 0);
    assert!(harness.notifications.messages().is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_add_until_stock_runs_out() {
    let harness = CartHarness::empty().await;
    harness.api.put_product(make_product(1), 3).await;
    let state = harness.app_state();

    for _ in 0..4 {
        let _ = state.add_product.handle(AddProduct { product_id: 1 }).await;
    }

    assert_eq!(state.store.snapshot().await.amount_of(1), Some(3));
    assert_eq!(harness.api.catalog_calls(), 1);
    assert_eq!(
        harness.notifications.messages(),
        vec![CartNotice::OutOfStock.message()]
    );
}

#[rstest]
#[tokio::test]
async fn it_should_restore_the_cart_from_disk_after_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(InMemoryStorefrontApi::new());
    api.put_product(make_product(1), 5).await;
    api.put_product(make_product(2), 5).await;
    let notifications = Arc::new(InMemoryNotificationSink::new());

    {
        let state = open_file_backed(dir.path(), api.clone(), notifications.clone()).await;
        state.add_product.handle(AddProduct { product_id: 1 }).await.unwrap();
        state.add_product.handle(AddProduct { product_id: 2 }).await.unwrap();
        state
            .update_product_amount
            .handle(UpdateProductAmount {
                product_id: 2,
                amount: 4,
            })
            .await
            .unwrap();
        state
            .remove_product
            .handle(RemoveProduct { product_id: 1 })
            .await
            .unwrap();
    }

    let reopened = open_file_backed(dir.path(), api, notifications.clone()).await;
    assert_eq!(reopened.store.snapshot().await.items(), &[make_line_item(2, 4)]);
    assert!(notifications.messages().is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_start_empty_over_a_corrupt_slot_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cart.json"), "{ not json").unwrap();

    let state = open_file_backed(
        dir.path(),
        Arc::new(InMemoryStorefrontApi::new()),
        Arc::new(InMemoryNotificationSink::new()),
    )
    .await;

    assert!(state.store.snapshot().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_persist_every_catalog_attribute_of_an_added_product() {
    let harness = CartHarness::empty().await;
    let mut product = make_product(1);
    product
        .attributes
        .insert("brand".to_string(), serde_json::Value::from("Acme"));
    harness.api.put_product(product, 5).await;
    let state = harness.app_state();

    state.add_product.handle(AddProduct { product_id: 1 }).await.unwrap();

    let slot: serde_json::Value =
        serde_json::from_str(&harness.persisted().await.unwrap()).unwrap();
    assert_eq!(slot[0]["brand"], "Acme");
    assert_eq!(slot[0]["amount"], 1);
}
