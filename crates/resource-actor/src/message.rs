//! # Generic Messages
//!
//! The request envelope sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a collection actor.
///
/// The variants are the document-store verbs every collection supports:
///
/// - **Create**: allocate an id and insert a document built from [`ActorEntity::Create`].
/// - **Get**: fetch one document by id.
/// - **Update**: mutate a document through [`ActorEntity::on_update`].
/// - **Delete**: remove a document.
/// - **Action**: run a collection-specific [`ActorEntity::Action`] against one document.
/// - **Batch**: run several actions as one all-or-nothing unit of work.
/// - **List**: snapshot the whole collection, ordered by id.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Batch {
        actions: Vec<(T::Id, T::Action)>,
        respond_to: Response<Vec<T::ActionResult>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
