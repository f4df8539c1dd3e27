use crate::auth::{hash_password, verify_password};
use crate::model::{
    CartItem, ProductId, ProfileForm, Registration, Role, RoleSet, SellerProfile,
    SellerProfileForm, SellerProfileUpdate, SellerRegistration, User, UserCreate, UserId,
    UserUpdate,
};
use crate::user_actor::{CartAction, UserError};
use async_trait::async_trait;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, info, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::from(e)
    }
}

fn check_form(form: &Registration) -> Result<(), UserError> {
    let fields = [
        &form.name,
        &form.email,
        &form.phone,
        &form.password,
        &form.confirm_password,
    ];
    if fields.iter().any(|f| f.trim().is_empty()) {
        return Err(UserError::ValidationError("All fields are required".into()));
    }
    if form.password != form.confirm_password {
        return Err(UserError::ValidationError("Passwords do not match".into()));
    }
    Ok(())
}

/// `None` for blank input, so an empty form field keeps the stored value.
fn given(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

impl UserClient {
    async fn create_and_fetch(&self, params: UserCreate) -> Result<User, UserError> {
        let id = self.inner.create(params).await?;
        self.require(id).await
    }

    /// Fetches a user, turning an absent id into `NotFound`.
    pub async fn require(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn register_buyer(&self, form: Registration) -> Result<User, UserError> {
        check_form(&form)?;
        let user = self
            .create_and_fetch(UserCreate {
                name: form.name,
                email: form.email,
                phone: form.phone,
                password_hash: hash_password(&form.password),
                roles: RoleSet::of([Role::Buyer]),
                seller_profile: None,
            })
            .await?;
        info!(user = %user.id, "Buyer registered");
        Ok(user)
    }

    /// Registers a seller account with an unverified business profile.
    #[instrument(skip(self, form), fields(email = %form.account.email))]
    pub async fn register_seller(&self, form: SellerRegistration) -> Result<User, UserError> {
        check_form(&form.account)?;
        let business_address = form
            .address
            .filter(|a| ![&a.street, &a.city, &a.postal_code].iter().any(|f| f.trim().is_empty()))
            .ok_or_else(|| UserError::ValidationError("All fields are required".into()))?;
        if form.tax_id.trim().is_empty() {
            return Err(UserError::ValidationError("All fields are required".into()));
        }

        let account = form.account;
        let user = self
            .create_and_fetch(UserCreate {
                name: account.name,
                email: account.email,
                phone: account.phone,
                password_hash: hash_password(&account.password),
                roles: RoleSet::of([Role::Seller]),
                seller_profile: Some(SellerProfile {
                    tax_id: form.tax_id.trim().to_string(),
                    verified: false,
                    business_address,
                }),
            })
            .await?;
        info!(user = %user.id, "Seller registered");
        Ok(user)
    }

    /// Creates the configured administrator unless an account with that email already exists.
    #[instrument(skip(self, password))]
    pub async fn ensure_admin(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
    ) -> Result<UserId, UserError> {
        if let Some(existing) = self.find_by_email(email).await? {
            debug!(user = %existing.id, "Admin already present");
            return Ok(existing.id);
        }
        let id = self
            .inner
            .create(UserCreate {
                name: name.to_string(),
                email: email.to_string(),
                phone: phone.to_string(),
                password_hash: hash_password(password),
                roles: RoleSet::of([Role::Admin]),
                seller_profile: None,
            })
            .await?;
        info!(user = %id, "Admin account created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let email = email.trim().to_lowercase();
        Ok(self.list().await?.into_iter().find(|u| u.email == email))
    }

    /// The account matching `email` and `password`. Unknown emails and wrong passwords fail alike.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        self.find_by_email(email)
            .await?
            .filter(|u| verify_password(password, &u.password_hash))
            .ok_or(UserError::InvalidCredentials)
    }

    #[instrument(skip(self))]
    pub async fn sellers(&self) -> Result<Vec<User>, UserError> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|u| u.has_role(Role::Seller))
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(UserError::from)
    }

    /// Applies the caller's own profile form. A non-blank password is re-hashed.
    #[instrument(skip(self, form))]
    pub async fn update_profile(&self, id: UserId, form: ProfileForm) -> Result<User, UserError> {
        let update = UserUpdate {
            name: given(form.name),
            email: given(form.email),
            phone: given(form.phone),
            password_hash: given(form.password).map(|p| hash_password(&p)),
            ..UserUpdate::default()
        };
        let user = self.update_user(id, update).await?;
        info!(user = %id, "Profile updated");
        Ok(user)
    }

    /// Applies a seller's profile form. Fails with `ValidationError` for accounts without a
    /// business record.
    #[instrument(skip(self, form))]
    pub async fn update_seller_profile(
        &self,
        id: UserId,
        form: SellerProfileForm,
    ) -> Result<User, UserError> {
        let update = UserUpdate {
            name: given(form.name),
            phone: given(form.phone),
            seller_profile: Some(SellerProfileUpdate {
                tax_id: given(form.tax_id),
                address: form.address,
            }),
            ..UserUpdate::default()
        };
        let user = self.update_user(id, update).await?;
        info!(user = %id, "Seller profile updated");
        Ok(user)
    }

    /// The user's cart lines in insertion order.
    pub async fn cart(&self, id: UserId) -> Result<Vec<CartItem>, UserError> {
        Ok(self.require(id).await?.cart)
    }

    async fn cart_action(&self, id: UserId, action: CartAction) -> Result<Vec<CartItem>, UserError> {
        debug!(?action, "Sending cart action");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(UserError::from)
    }

    #[instrument(skip(self))]
    pub async fn add_to_cart(
        &self,
        id: UserId,
        product: ProductId,
        quantity: u32,
    ) -> Result<Vec<CartItem>, UserError> {
        self.cart_action(id, CartAction::Add { product, quantity })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_cart_quantity(
        &self,
        id: UserId,
        product: ProductId,
        quantity: u32,
    ) -> Result<Vec<CartItem>, UserError> {
        self.cart_action(id, CartAction::SetQuantity { product, quantity })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_from_cart(
        &self,
        id: UserId,
        product: ProductId,
    ) -> Result<Vec<CartItem>, UserError> {
        self.cart_action(id, CartAction::Remove(product)).await
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, id: UserId) -> Result<(), UserError> {
        self.cart_action(id, CartAction::Clear).await.map(|_| ())
    }
}
