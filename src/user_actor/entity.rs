//! [`ActorEntity`] implementation for [`User`].
//!
//! Emails are stored lower-cased. Email and phone form a unique index enforced through
//! [`ActorEntity::conflicts_with`], so two registrations racing for the same address cannot both
//! succeed.

use super::actions::CartAction;
use super::error::UserError;
use crate::clients::ProductClient;
use crate::model::{CartItem, Product, ProductId, User, UserCreate, UserId, UserUpdate};
use async_trait::async_trait;
use chrono::Utc;
use resource_actor::{ActorClient, ActorEntity};

fn require_text(field: &str, value: &str) -> Result<String, UserError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(UserError::ValidationError(format!("{field} is required")));
    }
    Ok(value.to_string())
}

impl User {
    /// Fetches a product that may be put in the cart with at least `quantity` units.
    async fn sellable(
        products: &ProductClient,
        id: ProductId,
        quantity: u32,
    ) -> Result<Product, UserError> {
        let product = products
            .get(id)
            .await?
            .filter(|p| p.available)
            .ok_or(UserError::ProductUnavailable(id))?;
        if product.stock < quantity {
            return Err(UserError::InsufficientStock(product.name));
        }
        Ok(product)
    }
}

#[async_trait]
impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Action = CartAction;
    type ActionResult = Vec<CartItem>;
    type Context = ProductClient;
    type Error = UserError;

    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        if params.roles.is_empty() {
            return Err(UserError::ValidationError("at least one role is required".into()));
        }
        Ok(Self {
            id,
            name: require_text("name", &params.name)?,
            email: require_text("email", &params.email)?.to_lowercase(),
            phone: require_text("phone", &params.phone)?,
            roles: params.roles,
            password_hash: params.password_hash,
            seller_profile: params.seller_profile,
            cart: Vec::new(),
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: UserUpdate, _ctx: &ProductClient) -> Result<(), UserError> {
        if let Some(name) = update.name {
            self.name = require_text("name", &name)?;
        }
        if let Some(email) = update.email {
            self.email = require_text("email", &email)?.to_lowercase();
        }
        if let Some(phone) = update.phone {
            self.phone = require_text("phone", &phone)?;
        }
        if let Some(roles) = update.roles {
            if roles.is_empty() {
                return Err(UserError::ValidationError("at least one role is required".into()));
            }
            self.roles = roles;
        }
        if let Some(hash) = update.password_hash {
            self.password_hash = hash;
        }
        if let Some(changes) = update.seller_profile {
            let profile = self
                .seller_profile
                .as_mut()
                .ok_or_else(|| UserError::ValidationError("Not a seller account".into()))?;
            if let Some(tax_id) = changes.tax_id {
                profile.tax_id = require_text("taxId", &tax_id)?;
            }
            if let Some(address) = changes.address {
                let stored = &mut profile.business_address;
                for (field, value) in [
                    (&mut stored.street, address.street),
                    (&mut stored.city, address.city),
                    (&mut stored.postal_code, address.postal_code),
                ] {
                    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
                        *field = value.trim().to_string();
                    }
                }
            }
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        products: &ProductClient,
    ) -> Result<Vec<CartItem>, UserError> {
        match action {
            CartAction::Add { product, quantity } => {
                if quantity == 0 {
                    return Err(UserError::ValidationError(
                        "Quantity must be a positive number".into(),
                    ));
                }
                let in_cart = self
                    .cart
                    .iter()
                    .find(|line| line.product == product)
                    .map_or(0, |line| line.quantity);
                let merged = in_cart.checked_add(quantity).ok_or_else(|| {
                    UserError::ValidationError("Quantity is too large".into())
                })?;
                let adding = Self::sellable(products, product, merged).await?;

                // One lookup per existing line; products that have since been deleted are skipped.
                for line in &self.cart {
                    if let Some(existing) = products.get(line.product).await? {
                        if existing.seller != adding.seller {
                            return Err(UserError::MixedSellerCart);
                        }
                    }
                }

                match self.cart.iter_mut().find(|line| line.product == product) {
                    Some(line) => line.quantity = merged,
                    None => self.cart.push(CartItem { product, quantity }),
                }
            }
            CartAction::SetQuantity { product, quantity } => {
                if quantity == 0 {
                    return Err(UserError::ValidationError(
                        "Quantity must be a positive number".into(),
                    ));
                }
                Self::sellable(products, product, quantity).await?;
                let line = self
                    .cart
                    .iter_mut()
                    .find(|line| line.product == product)
                    .ok_or(UserError::CartItemNotFound(product))?;
                line.quantity = quantity;
            }
            CartAction::Remove(product) => self.cart.retain(|line| line.product != product),
            CartAction::Clear => self.cart.clear(),
        }
        Ok(self.cart.clone())
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.email == other.email || self.phone == other.phone
    }
}
