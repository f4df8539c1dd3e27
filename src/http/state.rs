use crate::auth::TokenSigner;
use crate::clients::{AddressClient, OrderClient, ProductClient, ReviewClient, UserClient};

/// Shared application state handed to every handler through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub products: ProductClient,
    pub orders: OrderClient,
    pub addresses: AddressClient,
    pub reviews: ReviewClient,
    pub tokens: TokenSigner,
}
