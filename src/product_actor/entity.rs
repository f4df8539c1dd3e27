//! [`ActorEntity`] implementation for [`Product`].

use super::actions::{ProductAction, ProductActionResult, Reservation};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::ActorEntity;
use rust_decimal::Decimal;

fn require_text(field: &str, value: &str) -> Result<(), ProductError> {
    if value.trim().is_empty() {
        return Err(ProductError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

fn require_positive_price(price: Decimal) -> Result<(), ProductError> {
    if price <= Decimal::ZERO {
        return Err(ProductError::ValidationError(
            "price must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        require_text("name", &params.name)?;
        require_text("description", &params.description)?;
        require_text("category", &params.category)?;
        require_positive_price(params.price)?;

        let now = Utc::now();
        Ok(Self {
            id,
            seller: params.seller,
            name: params.name.trim().to_string(),
            description: params.description,
            category: params.category.trim().to_string(),
            price: params.price,
            stock: params.stock,
            available: true,
            image: params.image,
            created_at: now,
            modified_at: now,
        })
    }

    /// Applies every present field. Price and text fields are validated the same way as on
    /// creation; the document is left untouched when any field is rejected.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = &update.name {
            require_text("name", name)?;
        }
        if let Some(description) = &update.description {
            require_text("description", description)?;
        }
        if let Some(category) = &update.category {
            require_text("category", category)?;
        }
        if let Some(price) = update.price {
            require_positive_price(price)?;
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(category) = update.category {
            self.category = category.trim().to_string();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(image) = update.image {
            self.image = Some(image);
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        self.modified_at = Utc::now();
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::ReserveStock(quantity) => {
                if quantity == 0 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                if !self.available {
                    return Err(ProductError::Unavailable(self.id));
                }
                if self.stock < quantity {
                    return Err(ProductError::InsufficientStock {
                        name: self.name.clone(),
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                self.modified_at = Utc::now();
                Ok(ProductActionResult::ReserveStock(Reservation {
                    unit_price: self.price,
                    seller: self.seller,
                    remaining: self.stock,
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    fn create(price: i64, stock: u32) -> ProductCreate {
        ProductCreate {
            seller: UserId(7),
            name: "Lamp".into(),
            description: "Brass desk lamp".into(),
            category: "home".into(),
            price: Decimal::from(price),
            stock,
            image: None,
        }
    }

    #[test]
    fn creation_validates_fields() {
        let product = Product::from_create_params(ProductId(1), create(100, 3)).unwrap();
        assert!(product.available);
        assert_eq!(product.stock, 3);

        let zero_price = Product::from_create_params(ProductId(2), create(0, 3));
        assert!(matches!(zero_price, Err(ProductError::ValidationError(_))));

        let mut blank = create(10, 1);
        blank.category = "  ".into();
        assert!(matches!(
            Product::from_create_params(ProductId(3), blank),
            Err(ProductError::ValidationError(msg)) if msg.contains("category")
        ));
    }

    #[tokio::test]
    async fn reserve_decrements_and_snapshots_price() {
        let mut product = Product::from_create_params(ProductId(1), create(100, 10)).unwrap();

        let result = product
            .handle_action(ProductAction::ReserveStock(2), &())
            .await
            .unwrap();

        assert_eq!(
            result,
            ProductActionResult::ReserveStock(Reservation {
                unit_price: Decimal::from(100),
                seller: UserId(7),
                remaining: 8,
            })
        );
        assert_eq!(product.stock, 8);
    }

    #[tokio::test]
    async fn reserve_rejects_overdraw_and_unavailable() {
        let mut product = Product::from_create_params(ProductId(1), create(100, 5)).unwrap();

        let overdraw = product.handle_action(ProductAction::ReserveStock(6), &()).await;
        assert!(matches!(
            overdraw,
            Err(ProductError::InsufficientStock { requested: 6, available: 5, .. })
        ));
        assert_eq!(product.stock, 5);

        product.available = false;
        let off = product.handle_action(ProductAction::ReserveStock(1), &()).await;
        assert_eq!(off, Err(ProductError::Unavailable(ProductId(1))));
    }

    #[tokio::test]
    async fn rejected_update_changes_nothing() {
        let mut product = Product::from_create_params(ProductId(1), create(100, 5)).unwrap();
        let update = ProductUpdate {
            name: Some("Floor lamp".into()),
            price: Some(Decimal::from(-1)),
            ..Default::default()
        };

        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product.name, "Lamp");
        assert_eq!(product.price, Decimal::from(100));
    }
}
