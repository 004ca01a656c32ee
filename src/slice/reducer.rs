//! Reducers for plural and singular resource slices.
//!
//! All slice mutation funnels through these two pure functions. The
//! stale-response guard lives here: read resolutions and failures are applied
//! only when their sequence number is still the latest recorded on the
//! status, otherwise the incoming state is returned unchanged.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::mvi::Reducer;
use crate::slice::collection::Entity;
use crate::slice::intent::{DetailIntent, ResourceIntent};
use crate::slice::state::{DetailState, ResourceState};

pub struct ResourceReducer<T: Entity>(PhantomData<T>);

impl<T: Entity> Reducer for ResourceReducer<T> {
    type State = ResourceState<T>;
    type Intent = ResourceIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResourceIntent::ReadStarted { seq } => ResourceState {
                read: state.read.started(seq),
                ..state
            },

            ResourceIntent::ReadResolved { seq, page } => {
                if !state.read.accepts(seq) {
                    tracing::warn!(seq, latest = state.read.seq, "discarding stale read response");
                    return state;
                }
                let mut collection = (*state.collection).clone();
                collection.upsert_many(page.items);
                collection.set_total(page.total);
                ResourceState {
                    collection: Arc::new(collection),
                    read: state.read.resolved(),
                    ..state
                }
            }

            ResourceIntent::ReadFailed { seq, error } => {
                if !state.read.accepts(seq) {
                    tracing::warn!(seq, latest = state.read.seq, "discarding stale read failure");
                    return state;
                }
                ResourceState {
                    read: state.read.rejected(error),
                    ..state
                }
            }

            ResourceIntent::CreateStarted => {
                let seq = state.create.seq + 1;
                ResourceState {
                    create: state.create.started(seq),
                    ..state
                }
            }

            ResourceIntent::CreateResolved { entity } => {
                let mut collection = (*state.collection).clone();
                collection.upsert_one(entity);
                ResourceState {
                    collection: Arc::new(collection),
                    create: state.create.resolved(),
                    ..state
                }
            }

            ResourceIntent::CreateFailed { error } => ResourceState {
                create: state.create.rejected(error),
                ..state
            },

            ResourceIntent::UpdateStarted => {
                let seq = state.update.seq + 1;
                ResourceState {
                    update: state.update.started(seq),
                    ..state
                }
            }

            ResourceIntent::UpdateResolved { entity } => {
                let mut collection = (*state.collection).clone();
                collection.upsert_one(entity);
                ResourceState {
                    collection: Arc::new(collection),
                    update: state.update.resolved(),
                    ..state
                }
            }

            ResourceIntent::UpdateFailed { error } => ResourceState {
                update: state.update.rejected(error),
                ..state
            },

            ResourceIntent::DeleteStarted => {
                let seq = state.delete.seq + 1;
                ResourceState {
                    delete: state.delete.started(seq),
                    ..state
                }
            }

            ResourceIntent::DeleteResolved { id } => {
                let mut collection = (*state.collection).clone();
                collection.remove(&id);
                ResourceState {
                    collection: Arc::new(collection),
                    delete: state.delete.resolved(),
                    ..state
                }
            }

            ResourceIntent::DeleteFailed { error } => ResourceState {
                delete: state.delete.rejected(error),
                ..state
            },

            ResourceIntent::ReadCancelled { seq } => {
                if !state.read.accepts(seq) {
                    return state;
                }
                ResourceState {
                    read: state.read.cancelled(),
                    ..state
                }
            }

            ResourceIntent::CreateCancelled => ResourceState {
                create: state.create.cancelled(),
                ..state
            },

            ResourceIntent::UpdateCancelled => ResourceState {
                update: state.update.cancelled(),
                ..state
            },

            ResourceIntent::DeleteCancelled => ResourceState {
                delete: state.delete.cancelled(),
                ..state
            },

            ResourceIntent::Invalidated => ResourceState {
                read: state.read.invalidate(),
                ..state
            },
        }
    }
}

pub struct DetailReducer<T: Entity>(PhantomData<T>);

impl<T: Entity> Reducer for DetailReducer<T> {
    type State = DetailState<T>;
    type Intent = DetailIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::ReadStarted { seq } => DetailState {
                read: state.read.started(seq),
                ..state
            },

            DetailIntent::ReadResolved { seq, entity } => {
                if !state.read.accepts(seq) {
                    tracing::warn!(seq, latest = state.read.seq, "discarding stale detail read");
                    return state;
                }
                DetailState {
                    entity: Some(entity),
                    read: state.read.resolved(),
                    ..state
                }
            }

            DetailIntent::ReadFailed { seq, error } => {
                if !state.read.accepts(seq) {
                    tracing::warn!(seq, latest = state.read.seq, "discarding stale detail read failure");
                    return state;
                }
                DetailState {
                    read: state.read.rejected(error),
                    ..state
                }
            }

            DetailIntent::UpdateStarted => {
                let seq = state.update.seq + 1;
                DetailState {
                    update: state.update.started(seq),
                    ..state
                }
            }

            // Success replaces the canonical entity and clears the staged
            // edit; failure keeps both so the user can resubmit.
            DetailIntent::UpdateResolved { entity } => DetailState {
                entity: Some(entity),
                staged: serde_json::Map::new(),
                update: state.update.resolved(),
                ..state
            },

            DetailIntent::UpdateFailed { error } => DetailState {
                update: state.update.rejected(error),
                ..state
            },

            DetailIntent::DeleteStarted => {
                let seq = state.delete.seq + 1;
                DetailState {
                    delete: state.delete.started(seq),
                    ..state
                }
            }

            DetailIntent::DeleteResolved => DetailState {
                entity: None,
                staged: serde_json::Map::new(),
                delete: state.delete.resolved(),
                ..state
            },

            DetailIntent::DeleteFailed { error } => DetailState {
                delete: state.delete.rejected(error),
                ..state
            },

            DetailIntent::ReadCancelled { seq } => {
                if !state.read.accepts(seq) {
                    return state;
                }
                DetailState {
                    read: state.read.cancelled(),
                    ..state
                }
            }

            DetailIntent::UpdateCancelled => DetailState {
                update: state.update.cancelled(),
                ..state
            },

            DetailIntent::DeleteCancelled => DetailState {
                delete: state.delete.cancelled(),
                ..state
            },

            DetailIntent::FieldStaged { field, value } => {
                let mut staged = state.staged;
                staged.insert(field, value);
                DetailState { staged, ..state }
            }

            DetailIntent::StagedDiscarded => DetailState {
                staged: serde_json::Map::new(),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slice::collection::Page;

    #[derive(Debug, Clone, PartialEq)]
    struct Gadget {
        id: String,
        name: String,
    }

    impl Entity for Gadget {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn gadget(id: &str, name: &str) -> Gadget {
        Gadget {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn page(items: Vec<Gadget>, total: u64) -> Page<Gadget> {
        Page { items, total }
    }

    #[test]
    fn stale_read_is_discarded() {
        let state = ResourceState::<Gadget>::default();
        let state = ResourceReducer::reduce(state, ResourceIntent::ReadStarted { seq: 1 });
        let state = ResourceReducer::reduce(state, ResourceIntent::ReadStarted { seq: 2 });
        // Newer call resolves first
        let state = ResourceReducer::reduce(
            state,
            ResourceIntent::ReadResolved {
                seq: 2,
                page: page(vec![gadget("b", "new")], 1),
            },
        );
        // Older call resolves late: dropped
        let state = ResourceReducer::reduce(
            state,
            ResourceIntent::ReadResolved {
                seq: 1,
                page: page(vec![gadget("a", "old")], 1),
            },
        );
        assert!(state.collection.contains("b"));
        assert!(!state.collection.contains("a"));
        assert!(state.read.succeeded());
    }

    #[test]
    fn stale_read_failure_does_not_surface() {
        let state = ResourceState::<Gadget>::default();
        let state = ResourceReducer::reduce(state, ResourceIntent::ReadStarted { seq: 1 });
        let state = ResourceReducer::reduce(state, ResourceIntent::ReadStarted { seq: 2 });
        let state = ResourceReducer::reduce(
            state,
            ResourceIntent::ReadFailed {
                seq: 1,
                error: "old failure".to_string(),
            },
        );
        assert!(state.read.is_requesting());
        assert!(state.read.error.is_none());
    }

    #[test]
    fn failed_read_leaves_collection_untouched() {
        let state = ResourceState::<Gadget>::default();
        let state = ResourceReducer::reduce(state, ResourceIntent::ReadStarted { seq: 1 });
        let state = ResourceReducer::reduce(
            state,
            ResourceIntent::ReadResolved {
                seq: 1,
                page: page(vec![gadget("a", "kept")], 1),
            },
        );
        let before = Arc::clone(&state.collection);
        let state = ResourceReducer::reduce(state, ResourceIntent::ReadStarted { seq: 2 });
        let state = ResourceReducer::reduce(
            state,
            ResourceIntent::ReadFailed {
                seq: 2,
                error: "offline".to_string(),
            },
        );
        assert!(Arc::ptr_eq(&before, &state.collection));
        assert_eq!(state.read.error.as_deref(), Some("offline"));
    }

    #[test]
    fn create_inserts_and_delete_removes() {
        let state = ResourceState::<Gadget>::default();
        let state = ResourceReducer::reduce(state, ResourceIntent::CreateStarted);
        assert!(state.create.is_requesting());
        let state = ResourceReducer::reduce(
            state,
            ResourceIntent::CreateResolved {
                entity: gadget("n", "fresh"),
            },
        );
        assert!(state.collection.contains("n"));
        let state = ResourceReducer::reduce(state, ResourceIntent::DeleteStarted);
        let state = ResourceReducer::reduce(
            state,
            ResourceIntent::DeleteResolved {
                id: "n".to_string(),
            },
        );
        assert!(!state.collection.contains("n"));
        assert!(state.delete.succeeded());
    }

    #[test]
    fn stale_detail_read_failure_does_not_surface() {
        let state = DetailState::<Gadget>::default();
        let state = DetailReducer::reduce(state, DetailIntent::ReadStarted { seq: 1 });
        let state = DetailReducer::reduce(state, DetailIntent::ReadStarted { seq: 2 });
        let state = DetailReducer::reduce(
            state,
            DetailIntent::ReadFailed {
                seq: 1,
                error: "old failure".to_string(),
            },
        );
        assert!(state.read.is_requesting());
        assert!(state.read.error.is_none());
        let state = DetailReducer::reduce(
            state,
            DetailIntent::ReadResolved {
                seq: 2,
                entity: gadget("1", "current"),
            },
        );
        assert!(state.read.succeeded());
        assert_eq!(state.entity.as_ref().unwrap().name, "current");
    }

    #[test]
    fn failed_update_keeps_staged_edit() {
        let state = DetailState::<Gadget>::default();
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FieldStaged {
                field: "name".to_string(),
                value: serde_json::json!("edited"),
            },
        );
        let state = DetailReducer::reduce(state, DetailIntent::UpdateStarted);
        let state = DetailReducer::reduce(
            state,
            DetailIntent::UpdateFailed {
                error: "conflict".to_string(),
            },
        );
        assert!(state.has_staged_edits());
        assert_eq!(state.update.error.as_deref(), Some("conflict"));
    }

    #[test]
    fn successful_update_clears_staged_edit() {
        let state = DetailState::<Gadget>::default();
        let state = DetailReducer::reduce(
            state,
            DetailIntent::FieldStaged {
                field: "name".to_string(),
                value: serde_json::json!("edited"),
            },
        );
        let state = DetailReducer::reduce(state, DetailIntent::UpdateStarted);
        let state = DetailReducer::reduce(
            state,
            DetailIntent::UpdateResolved {
                entity: gadget("1", "edited"),
            },
        );
        assert!(!state.has_staged_edits());
        assert_eq!(state.entity.as_ref().unwrap().name, "edited");
    }
}
