//! Cart behavior through the full actor system.

use commerce_core::config::CommerceConfig;
use commerce_core::cart_actor::CartError;
use commerce_core::lifecycle::CommerceSystem;
use commerce_core::model::{ProductCreate, ProductId, ProductUpdate, UserId};
use rust_decimal::Decimal;

async fn seed_laptop(system: &CommerceSystem, quantity: u32) -> ProductId {
    system
        .catalog_client
        .add_product(ProductCreate {
            name: "Laptop".to_string(),
            description: None,
            sku: "LAP-001".to_string(),
            price: Decimal::new(1500_00, 2),
            quantity,
        })
        .await
        .expect("seeding must succeed")
}

#[tokio::test]
async fn adds_merge_and_failed_adds_leave_the_line_untouched() {
    let system = CommerceSystem::new(CommerceConfig::default());
    let user = UserId(1);
    let product = seed_laptop(&system, 50).await;

    let line = system.cart_client.add_line(user, product, 2).await.unwrap();
    assert_eq!(line.quantity, 2);
    assert_eq!(line.total, Decimal::new(3000_00, 2));

    // Same product again: merged, not a second line.
    let line = system.cart_client.add_line(user, product, 1).await.unwrap();
    assert_eq!(line.quantity, 3);
    assert_eq!(line.total, Decimal::new(4500_00, 2));
    assert_eq!(system.cart_client.count(user).await.unwrap(), 1);

    // 3 in the cart + 100 more exceeds the 50 in stock.
    let err = system
        .cart_client
        .add_line(user, product, 100)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CartError::InsufficientStock {
            product_id: product,
            requested: 103,
            available: 50,
        }
    );

    let lines = system.cart_client.list_lines(user).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn remove_and_clear_soft_delete_lines() {
    let system = CommerceSystem::new(CommerceConfig::default());
    let user = UserId(1);
    let product = seed_laptop(&system, 50).await;

    let line = system.cart_client.add_line(user, product, 2).await.unwrap();
    system.cart_client.remove_line(user, line.id).await.unwrap();

    assert_eq!(system.cart_client.count(user).await.unwrap(), 0);
    assert_eq!(system.cart_client.total(user).await.unwrap(), Decimal::ZERO);
    assert_eq!(
        system.cart_client.get_line(user, line.id).await.unwrap_err(),
        CartError::InactiveLine(line.id)
    );
    // Removing an already-removed line is allowed.
    system.cart_client.remove_line(user, line.id).await.unwrap();

    let mouse = system
        .catalog_client
        .add_product(ProductCreate {
            name: "Mouse".to_string(),
            description: None,
            sku: "MOU-001".to_string(),
            price: Decimal::new(25_00, 2),
            quantity: 10,
        })
        .await
        .unwrap();
    system.cart_client.add_line(user, product, 1).await.unwrap();
    system.cart_client.add_line(user, mouse, 1).await.unwrap();
    let cleared = system.cart_client.clear_cart(user).await.unwrap();
    assert_eq!(cleared, 2);
    assert_eq!(system.cart_client.count(user).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn an_overflowing_add_is_a_typed_failure_not_a_crash() {
    let system = CommerceSystem::new(CommerceConfig::default());
    let user = UserId(1);
    let product = seed_laptop(&system, 50).await;

    system.cart_client.add_line(user, product, 2).await.unwrap();

    // 2 already in the cart plus u32::MAX does not fit in the counter.
    let err = system
        .cart_client
        .add_line(user, product, u32::MAX)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CartError::InsufficientStock {
            product_id: product,
            requested: u32::MAX,
            available: 50,
        }
    );

    // The actor survived and the line is untouched.
    let lines = system.cart_client.list_lines(user).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn clearing_an_empty_cart_succeeds_with_zero() {
    let system = CommerceSystem::new(CommerceConfig::default());
    let user = UserId(1);

    assert_eq!(system.cart_client.clear_cart(user).await.unwrap(), 0);
    assert_eq!(system.cart_client.count(user).await.unwrap(), 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn contains_product_follows_the_active_line() {
    let system = CommerceSystem::new(CommerceConfig::default());
    let user = UserId(1);
    let product = seed_laptop(&system, 50).await;

    assert!(!system
        .cart_client
        .contains_product(user, product)
        .await
        .unwrap());

    let line = system.cart_client.add_line(user, product, 2).await.unwrap();
    assert!(system
        .cart_client
        .contains_product(user, product)
        .await
        .unwrap());

    system.cart_client.remove_line(user, line.id).await.unwrap();
    assert!(!system
        .cart_client
        .contains_product(user, product)
        .await
        .unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn lines_keep_the_price_they_were_added_at() {
    let system = CommerceSystem::new(CommerceConfig::default());
    let user = UserId(1);
    let product = seed_laptop(&system, 50).await;

    let line = system.cart_client.add_line(user, product, 2).await.unwrap();
    assert_eq!(line.unit_price, Decimal::new(1500_00, 2));

    system
        .catalog_client
        .update_product(
            product,
            ProductUpdate {
                price: Some(Decimal::new(1999_00, 2)),
                quantity: None,
            },
        )
        .await
        .unwrap();

    // The snapshot survives the catalog price change...
    let line = system.cart_client.get_line(user, line.id).await.unwrap();
    assert_eq!(line.unit_price, Decimal::new(1500_00, 2));
    assert_eq!(system.cart_client.total(user).await.unwrap(), Decimal::new(3000_00, 2));

    // ...including through quantity updates.
    let line = system
        .cart_client
        .update_quantity(user, line.id, 4)
        .await
        .unwrap();
    assert_eq!(line.total, Decimal::new(6000_00, 2));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn users_cannot_touch_each_others_lines() {
    let system = CommerceSystem::new(CommerceConfig::default());
    let alice = UserId(1);
    let bob = UserId(2);
    let product = seed_laptop(&system, 50).await;

    let line = system.cart_client.add_line(alice, product, 2).await.unwrap();

    let err = system
        .cart_client
        .update_quantity(bob, line.id, 1)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CartError::NotOwned {
            line_id: line.id,
            user_id: bob,
        }
    );
    assert!(system
        .cart_client
        .remove_line(bob, line.id)
        .await
        .is_err());

    // Bob's own cart is independent: no merge across users.
    system.cart_client.add_line(bob, product, 1).await.unwrap();
    assert_eq!(system.cart_client.count(alice).await.unwrap(), 1);
    assert_eq!(system.cart_client.count(bob).await.unwrap(), 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn concurrent_adds_for_one_product_end_in_one_line() {
    let system = CommerceSystem::new(CommerceConfig::default());
    let user = UserId(1);
    let product = seed_laptop(&system, 100).await;

    let mut tasks = Vec::new();
    for _ in 0..10 {
        let cart = system.cart_client.clone();
        tasks.push(tokio::spawn(async move {
            cart.add_line(user, product, 1).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let lines = system.cart_client.list_lines(user).await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 10);

    system.shutdown().await.unwrap();
}
