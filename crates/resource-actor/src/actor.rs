//! # Generic Actor Server
//!
//! `ResourceActor` owns one collection of documents and processes requests for it one at a
//! time. That sequential loop is the store's atomicity guarantee: a conditional write such as
//! "decrement stock if enough is left" is checked and applied without another request
//! interleaving.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of documents.
///
/// The actor is the "server" half: it owns the `store` and the receiving end of the channel.
/// Each actor runs in its own Tokio task, so the store needs no `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor and a cloneable client.
/// 2.  **Wire**: pass dependencies (other clients) to `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32, label: String }
/// #[derive(Debug)] struct TagCreate(String);
/// #[derive(Debug)] struct TagUpdate;
/// #[derive(Debug)] enum TagAction {}
/// #[derive(Debug, thiserror::Error)] #[error("tag error")] struct TagError;
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32;
///     type Create = TagCreate;
///     type Update = TagUpdate;
///     type Action = TagAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TagError;
///
///     fn from_create_params(id: u32, p: TagCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, label: p.0 })
///     }
///     async fn on_update(&mut self, _: TagUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: TagAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Tag>::new(10);
///     tokio::spawn(actor.run(()));
///     let id = client.create(TagCreate("new".into())).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().label, "new");
/// }
/// ```
///
/// # Write semantics
///
/// Update and Action hooks run against a staged copy of the document. The copy replaces the
/// stored document only when the hook succeeds (and, for updates, when no unique-index conflict
/// arises), so a failed write never leaves a half-mutated document behind. Batch extends the same
/// rule across several documents.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the channel capacity; callers wait for space when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn conflicting(&self, candidate: &T, except: Option<&T::Id>) -> Option<T::Id> {
        self.store
            .iter()
            .filter(|(id, _)| Some(*id) != except)
            .find(|(_, existing)| candidate.conflicts_with(existing))
            .map(|(id, _)| id.clone())
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "marketplace::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Some(existing) = self.conflicting(&item, None) {
                        warn!(entity_type, %existing, "Create conflicts");
                        let _ = respond_to.send(Err(FrameworkError::Conflict(existing.to_string())));
                        continue;
                    }
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.next_id += 1;
                    self.store.insert(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(mut staged) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = staged.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(existing) = self.conflicting(&staged, Some(&id)) {
                        warn!(entity_type, %id, %existing, "Update conflicts");
                        let _ = respond_to.send(Err(FrameworkError::Conflict(existing.to_string())));
                        continue;
                    }
                    self.store.insert(id.clone(), staged.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(staged));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(mut staged) = self.store.get(&id).cloned() else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    match staged.handle_action(action, &context).await {
                        Ok(result) => {
                            self.store.insert(id.clone(), staged);
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Batch {
                    actions,
                    respond_to,
                } => {
                    debug!(entity_type, count = actions.len(), "Batch");
                    let result = self.apply_batch(actions, &context, entity_type).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    let mut items: Vec<(T::Id, T)> = self
                        .store
                        .iter()
                        .map(|(id, item)| (id.clone(), item.clone()))
                        .collect();
                    items.sort_by(|a, b| a.0.cmp(&b.0));
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items.into_iter().map(|(_, item)| item).collect()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Applies every action to staged copies, committing only if all of them succeed.
    ///
    /// The same id may appear more than once; later actions see the effect of earlier ones.
    async fn apply_batch(
        &mut self,
        actions: Vec<(T::Id, T::Action)>,
        context: &T::Context,
        entity_type: &str,
    ) -> Result<Vec<T::ActionResult>, FrameworkError> {
        let mut staged: HashMap<T::Id, T> = HashMap::new();
        let mut results = Vec::with_capacity(actions.len());

        for (id, action) in actions {
            if !staged.contains_key(&id) {
                let Some(current) = self.store.get(&id).cloned() else {
                    warn!(entity_type, %id, "Batch aborted: not found");
                    return Err(FrameworkError::NotFound(id.to_string()));
                };
                staged.insert(id.clone(), current);
            }
            let Some(item) = staged.get_mut(&id) else {
                return Err(FrameworkError::NotFound(id.to_string()));
            };
            match item.handle_action(action, context).await {
                Ok(result) => results.push(result),
                Err(e) => {
                    warn!(entity_type, %id, error = %e, "Batch aborted");
                    return Err(FrameworkError::EntityError(Box::new(e)));
                }
            }
        }

        let touched = staged.len();
        self.store.extend(staged);
        info!(entity_type, touched, "Batch committed");
        Ok(results)
    }
}
