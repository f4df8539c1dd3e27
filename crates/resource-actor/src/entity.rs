//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored document type (User, Product, Order,
//! Address) implements so that a single generic [`ResourceActor`](crate::ResourceActor) can own
//! its collection. It names the id, the create/update payloads, the custom actions and the
//! per-collection error type, and exposes the lifecycle hooks the actor calls.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after construction and before insertion. It may call other
//!   collections through the injected `Context`; if it fails nothing is stored.
//! - [`ActorEntity::on_delete`] runs before removal.
//! - [`ActorEntity::conflicts_with`] is the secondary unique index check (e.g. a second user with
//!   the same email). The default never conflicts.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored document must implement to be managed by a `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can await other actors. The `Context` associated type is handed to
/// every hook; it is supplied to [`ResourceActor::run`](crate::ResourceActor::run) rather than to
/// the constructor so collections can be wired to each other after they are all created.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for sequential id allocation.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The payload required to create a new document.
    type Create: Send + Sync + Debug;

    /// The payload required to update an existing document.
    type Update: Send + Sync + Debug;

    /// Collection-specific operations (e.g. `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()` time.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per collection.
    ///
    /// `Clone` is not required; errors travel back to callers boxed inside
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) and can be recovered
    /// with [`FrameworkError::into_entity_error`](crate::FrameworkError::into_entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full document from the allocated id and the payload.
    /// Synchronous validation of the payload belongs here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the document is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the document is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a collection-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Secondary Unique Index ---

    /// Returns `true` if `self` may not coexist with `other` in the same collection.
    ///
    /// Checked on create against every stored document, and on update against every other
    /// document. Runs inside the actor, so the check and the write are atomic.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}
