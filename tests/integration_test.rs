use marketplace::clients::ActorClient;
use marketplace::lifecycle::MarketplaceSystem;
use marketplace::model::{
    AddressId, BusinessAddress, LineItemRequest, OrderCreate, OrderStatus, ProductCreate,
    ProductId, ProductUpdate, Registration, SellerRegistration, UserId,
};
use marketplace::order_actor::OrderError;
use marketplace::user_actor::UserError;
use rust_decimal::Decimal;

fn form(name: &str) -> Registration {
    Registration {
        name: name.to_string(),
        email: format!("{name}@example.com"),
        phone: format!("555-{name}"),
        password: "pw".to_string(),
        confirm_password: "pw".to_string(),
    }
}

async fn seller(system: &MarketplaceSystem, name: &str) -> UserId {
    system
        .user_client
        .register_seller(SellerRegistration {
            account: form(name),
            tax_id: format!("TAX-{name}"),
            address: Some(BusinessAddress {
                street: "1 Main St".into(),
                city: "Springfield".into(),
                postal_code: "12345".into(),
            }),
        })
        .await
        .unwrap()
        .id
}

async fn buyer(system: &MarketplaceSystem, name: &str) -> UserId {
    system
        .user_client
        .register_buyer(form(name))
        .await
        .unwrap()
        .id
}

async fn product(system: &MarketplaceSystem, seller: UserId, price: i64, stock: u32) -> ProductId {
    system
        .product_client
        .create_product(ProductCreate {
            seller,
            name: format!("Item {price}"),
            description: "Test item".into(),
            category: "misc".into(),
            price: Decimal::from(price),
            stock,
            image: None,
        })
        .await
        .unwrap()
}

fn order(buyer: UserId, lines: &[(ProductId, u32)]) -> OrderCreate {
    OrderCreate {
        buyer,
        items: lines
            .iter()
            .map(|(product, units)| LineItemRequest {
                product: *product,
                units_ordered: *units,
                discount_applied: None,
            })
            .collect(),
        delivery_to: AddressId(1),
        billing_to: AddressId(1),
    }
}

async fn stock(system: &MarketplaceSystem, id: ProductId) -> u32 {
    system.product_client.check_stock(id).await.unwrap()
}

#[tokio::test]
async fn placing_an_order_reserves_stock_and_snapshots_price() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let a = product(&system, s1, 100, 10).await;

    let placed = system
        .order_client
        .place_order(order(b, &[(a, 2)]))
        .await
        .unwrap();

    assert_eq!(placed.total_amount, Decimal::from(200));
    assert_eq!(placed.order.status, OrderStatus::Placed);
    assert_eq!(placed.order.seller, s1);
    assert_eq!(placed.order.buyer, b);
    assert_eq!(placed.order.items.len(), 1);
    assert_eq!(placed.order.items[0].units_ordered, 2);
    assert_eq!(placed.order.items[0].unit_cost, Decimal::from(100));
    assert_eq!(stock(&system, a).await, 8);

    // A later price change does not touch the stored order.
    system
        .product_client
        .update_owned(
            a,
            s1,
            ProductUpdate {
                price: Some(Decimal::from(150)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let stored = system
        .order_client
        .get(placed.order.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.items[0].unit_cost, Decimal::from(100));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn mixed_seller_orders_change_nothing() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let s2 = seller(&system, "s2").await;
    let b = buyer(&system, "b").await;
    let first = product(&system, s1, 10, 5).await;
    let second = product(&system, s2, 20, 5).await;

    let result = system
        .order_client
        .place_order(order(b, &[(first, 1), (second, 1)]))
        .await;

    assert_eq!(result.unwrap_err(), OrderError::MixedSeller);
    assert_eq!(stock(&system, first).await, 5);
    assert_eq!(stock(&system, second).await, 5);
    assert!(system.order_client.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn insufficient_stock_is_rejected_without_side_effects() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let plenty = product(&system, s1, 10, 50).await;
    let scarce = product(&system, s1, 20, 5).await;

    let too_many = system
        .order_client
        .place_order(order(b, &[(scarce, 6)]))
        .await;
    assert!(matches!(too_many, Err(OrderError::InsufficientStock(_))));
    assert_eq!(stock(&system, scarce).await, 5);

    // The failing line comes second; the first line's stock stays put.
    let late_failure = system
        .order_client
        .place_order(order(b, &[(plenty, 3), (scarce, 6)]))
        .await;
    assert!(matches!(late_failure, Err(OrderError::InsufficientStock(_))));
    assert_eq!(stock(&system, plenty).await, 50);

    // The same product twice counts cumulatively.
    let repeated = system
        .order_client
        .place_order(order(b, &[(scarce, 3), (scarce, 3)]))
        .await;
    assert!(matches!(repeated, Err(OrderError::InsufficientStock(_))));
    assert_eq!(stock(&system, scarce).await, 5);
}

#[tokio::test]
async fn unknown_and_disabled_products_are_unavailable() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let hidden = product(&system, s1, 10, 5).await;
    system
        .product_client
        .update_owned(
            hidden,
            s1,
            ProductUpdate {
                available: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    for id in [hidden, ProductId(999)] {
        let result = system.order_client.place_order(order(b, &[(id, 1)])).await;
        assert!(
            matches!(result, Err(OrderError::ProductUnavailable(_))),
            "{id}"
        );
    }
    assert_eq!(stock(&system, hidden).await, 5);
}

#[tokio::test]
async fn concurrent_orders_never_oversell() {
    let system = MarketplaceSystem::new(64);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let a = product(&system, s1, 5, 10).await;

    let tasks: Vec<_> = (0..30)
        .map(|_| {
            let orders = system.order_client.clone();
            tokio::spawn(async move { orders.place_order(order(b, &[(a, 1)])).await })
        })
        .collect();

    let mut placed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => placed += 1,
            Err(e) => assert!(matches!(e, OrderError::InsufficientStock(_)), "{e}"),
        }
    }
    assert_eq!(placed, 10);
    assert_eq!(stock(&system, a).await, 0);
    assert_eq!(system.order_client.list().await.unwrap().len(), 10);
}

#[tokio::test]
async fn seller_status_updates_are_idempotent_and_owner_only() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let s2 = seller(&system, "s2").await;
    let b = buyer(&system, "b").await;
    let a = product(&system, s1, 100, 10).await;
    let id = system
        .order_client
        .place_order(order(b, &[(a, 1)]))
        .await
        .unwrap()
        .order
        .id;

    let first = system
        .order_client
        .set_status_as_seller(id, s1, "shipped")
        .await
        .unwrap();
    assert!(first.changed);
    let stamp = first.order.dispatched_at;
    assert!(stamp.is_some());

    let second = system
        .order_client
        .set_status_as_seller(id, s1, "SHIPPED")
        .await
        .unwrap();
    assert!(!second.changed);
    assert_eq!(second.order.dispatched_at, stamp);

    let stranger = system
        .order_client
        .set_status_as_seller(id, s2, "Delivered")
        .await;
    assert_eq!(stranger.unwrap_err(), OrderError::NotOwner);

    let delivered = system
        .order_client
        .set_status_as_seller(id, s1, "delivered")
        .await
        .unwrap();
    assert_eq!(delivered.order.status, OrderStatus::Delivered);
    assert!(delivered.order.completed_at.is_some());

    let admin = system
        .order_client
        .set_status_as_admin(id, "Failed Delivery")
        .await
        .unwrap();
    assert_eq!(admin.order.status, OrderStatus::FailedDelivery);

    let stats = system.order_client.stats().await.unwrap();
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.total_revenue, Decimal::from(100));
    assert_eq!(stats.status_stats[0].status, OrderStatus::FailedDelivery);
}

#[tokio::test]
async fn checkout_turns_the_cart_into_an_order() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let a = product(&system, s1, 10, 10).await;
    let c = product(&system, s1, 25, 10).await;

    system.user_client.add_to_cart(b, a, 2).await.unwrap();
    system.user_client.add_to_cart(b, a, 1).await.unwrap();
    let cart = system.user_client.add_to_cart(b, c, 1).await.unwrap();
    assert_eq!(cart.len(), 2);
    assert_eq!(cart[0].quantity, 3);

    let placed = system
        .order_client
        .checkout(&system.user_client, b, AddressId(1), AddressId(2))
        .await
        .unwrap();
    assert_eq!(placed.total_amount, Decimal::from(55));
    assert_eq!(placed.order.billing_to, AddressId(2));
    assert_eq!(stock(&system, a).await, 7);
    assert!(system.user_client.cart(b).await.unwrap().is_empty());

    let empty = system
        .order_client
        .checkout(&system.user_client, b, AddressId(1), AddressId(1))
        .await;
    assert_eq!(empty.unwrap_err(), OrderError::EmptyCart);
}

#[tokio::test]
async fn failed_checkout_keeps_the_cart() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let a = product(&system, s1, 10, 3).await;

    system.user_client.add_to_cart(b, a, 3).await.unwrap();
    // Stock drops after the item went into the cart.
    system.product_client.reserve_stock(a, 2).await.unwrap();

    let result = system
        .order_client
        .checkout(&system.user_client, b, AddressId(1), AddressId(1))
        .await;
    assert!(matches!(result, Err(OrderError::InsufficientStock(_))));
    assert_eq!(system.user_client.cart(b).await.unwrap().len(), 1);
    assert_eq!(stock(&system, a).await, 1);
}

#[tokio::test]
async fn cart_rules() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let s2 = seller(&system, "s2").await;
    let b = buyer(&system, "b").await;
    let a = product(&system, s1, 10, 2).await;
    let other = product(&system, s2, 10, 2).await;

    system.user_client.add_to_cart(b, a, 1).await.unwrap();
    assert_eq!(
        system.user_client.add_to_cart(b, other, 1).await.unwrap_err(),
        UserError::MixedSellerCart
    );
    assert!(matches!(
        system.user_client.set_cart_quantity(b, a, 3).await,
        Err(UserError::InsufficientStock(_))
    ));
    assert_eq!(
        system.user_client.set_cart_quantity(b, other, 1).await.unwrap_err(),
        UserError::CartItemNotFound(other)
    );

    let cart = system.user_client.remove_from_cart(b, a).await.unwrap();
    assert!(cart.is_empty());
    // With the cart empty, the other seller's product is fine.
    system.user_client.add_to_cart(b, other, 1).await.unwrap();
}

#[tokio::test]
async fn accounts_are_unique_and_authenticate() {
    let system = MarketplaceSystem::new(32);
    let id = buyer(&system, "ada").await;

    let again = Registration {
        email: "ADA@example.com".into(),
        phone: "555-other".into(),
        ..form("ada")
    };
    assert_eq!(
        system.user_client.register_buyer(again).await.unwrap_err(),
        UserError::AlreadyExists
    );

    let user = system
        .user_client
        .authenticate("Ada@Example.com", "pw")
        .await
        .unwrap();
    assert_eq!(user.id, id);
    assert_eq!(
        system
            .user_client
            .authenticate("ada@example.com", "wrong")
            .await
            .unwrap_err(),
        UserError::InvalidCredentials
    );

    let admin = system
        .user_client
        .ensure_admin("Root", "root@example.com", "000", "pw")
        .await
        .unwrap();
    let again = system
        .user_client
        .ensure_admin("Root", "root@example.com", "000", "pw")
        .await
        .unwrap();
    assert_eq!(admin, again);
}

#[tokio::test]
async fn order_totals_beyond_decimal_range_are_rejected() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let huge = system
        .product_client
        .create_product(ProductCreate {
            seller: s1,
            name: "Priceless".into(),
            description: "Test item".into(),
            category: "misc".into(),
            price: Decimal::MAX,
            stock: 10,
            image: None,
        })
        .await
        .unwrap();

    let result = system.order_client.place_order(order(b, &[(huge, 2)])).await;
    assert!(matches!(result, Err(OrderError::ValidationError(_))));
    // Lines that fit on their own but not together.
    let result = system
        .order_client
        .place_order(order(b, &[(huge, 1), (huge, 1)]))
        .await;
    assert!(matches!(result, Err(OrderError::ValidationError(_))));
    assert_eq!(stock(&system, huge).await, 10);
    assert!(system.order_client.list().await.unwrap().is_empty());

    // The order store keeps working and a representable total still goes through.
    let placed = system
        .order_client
        .place_order(order(b, &[(huge, 1)]))
        .await
        .unwrap();
    assert_eq!(placed.total_amount, Decimal::MAX);
    assert_eq!(stock(&system, huge).await, 9);
    assert_eq!(system.order_client.for_buyer(b).await.unwrap().len(), 1);
    let stats = system.order_client.stats().await.unwrap();
    assert_eq!(stats.total_orders, 1);
    assert_eq!(stats.total_revenue, Decimal::MAX);
}

#[tokio::test]
async fn cart_quantities_beyond_u32_are_rejected() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let a = product(&system, s1, 10, u32::MAX).await;

    let cart = system.user_client.add_to_cart(b, a, u32::MAX).await.unwrap();
    assert_eq!(cart[0].quantity, u32::MAX);

    assert!(matches!(
        system.user_client.add_to_cart(b, a, 1).await,
        Err(UserError::ValidationError(_))
    ));

    // The user store is still alive and the line is unchanged.
    assert_eq!(system.user_client.cart(b).await.unwrap()[0].quantity, u32::MAX);
    assert_eq!(system.user_client.require(b).await.unwrap().id, b);
}

#[tokio::test]
async fn merged_cart_lines_are_checked_against_stock() {
    let system = MarketplaceSystem::new(32);
    let s1 = seller(&system, "s1").await;
    let b = buyer(&system, "b").await;
    let a = product(&system, s1, 10, 3).await;

    system.user_client.add_to_cart(b, a, 2).await.unwrap();
    assert!(matches!(
        system.user_client.add_to_cart(b, a, 2).await,
        Err(UserError::InsufficientStock(_))
    ));
    assert_eq!(system.user_client.cart(b).await.unwrap()[0].quantity, 2);

    let cart = system.user_client.add_to_cart(b, a, 1).await.unwrap();
    assert_eq!(cart[0].quantity, 3);
}
