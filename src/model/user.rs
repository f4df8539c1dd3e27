use super::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for Users.
///
/// Id `0` is never allocated.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user_{}", self.0)
    }
}

/// A capability tag carried by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Buyer,
    Seller,
    Admin,
}

/// The set of roles a user holds. Serializes as `["buyer", "seller"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    pub fn of(roles: impl IntoIterator<Item = Role>) -> Self {
        Self(roles.into_iter().collect())
    }

    pub fn contains(&self, role: Role) -> bool {
        self.0.contains(&role)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.iter().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessAddress {
    pub street: String,
    pub city: String,
    pub postal_code: String,
}

/// Extra record attached to seller accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerProfile {
    pub tax_id: String,
    pub verified: bool,
    pub business_address: BusinessAddress,
}

/// One line of the embedded cart. Not validated against stock until checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: ProductId,
    pub quantity: u32,
}

/// Represents a registered account.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](resource_actor::ResourceActor); see
/// [`user_actor`](crate::user_actor) for creation rules, the unique email/phone index and the
/// cart actions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub roles: RoleSet,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller_profile: Option<SellerProfile>,
    pub cart: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(role)
    }
}

/// Payload for creating a new user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub roles: RoleSet,
    pub seller_profile: Option<SellerProfile>,
}

/// Administrative changes to an account. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub roles: Option<RoleSet>,
    /// Set by the profile routes after hashing; never read from a request body.
    #[serde(skip)]
    pub password_hash: Option<String>,
    #[serde(skip)]
    pub seller_profile: Option<SellerProfileUpdate>,
}

/// Partial business address. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessAddressUpdate {
    pub street: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// Changes to a seller's business record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerProfileUpdate {
    pub tax_id: Option<String>,
    pub address: Option<BusinessAddressUpdate>,
}

/// Self-service profile form shared by buyers and admins. Blank fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Seller profile form. Email is not editable here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SellerProfileForm {
    pub name: String,
    pub phone: String,
    pub tax_id: String,
    pub address: Option<BusinessAddressUpdate>,
}

/// Buyer sign-up form. Missing fields deserialize as empty and are rejected by the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Seller sign-up form: the buyer fields plus the business record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerRegistration {
    #[serde(flatten)]
    pub account: Registration,
    #[serde(default)]
    pub tax_id: String,
    #[serde(default)]
    pub address: Option<BusinessAddress>,
}
