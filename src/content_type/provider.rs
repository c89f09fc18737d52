// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use anyhow::{bail, Result};
use async_graphql::indexmap::IndexMap;
use log::{debug, info, trace};
use tokio::sync::broadcast::{channel, Receiver, Sender};
use tokio::sync::Mutex;

use crate::config::AllowList;
use crate::content_type::ContentType;

/// Provides access to all content types which are exposed on the GraphQL API.
///
/// Content types can be added, updated and removed during runtime, subscribers get informed about
/// every change.
#[derive(Clone, Debug)]
pub struct ContentTypeProvider {
    /// In-memory store of registered content types, indexed by uid.
    content_types: Arc<Mutex<IndexMap<String, ContentType>>>,

    /// Optional list of allowed content type uids. When not set _all_ content types are accepted
    /// (wildcard).
    supported_content_types: AllowList<String>,

    /// Sender for broadcast channel informing subscribers about changed content types.
    tx: Sender<String>,
}

impl ContentTypeProvider {
    /// Returns a `ContentTypeProvider` containing the given content types.
    ///
    /// Content types which are not in the allow list are filtered out.
    pub fn new(
        content_types: Vec<ContentType>,
        supported_content_types: AllowList<String>,
    ) -> Self {
        let mut index = IndexMap::new();
        for content_type in content_types {
            if supported_content_types.contains(&content_type.uid().to_owned()) {
                index.insert(content_type.uid().to_owned(), content_type);
            }
        }

        let (tx, _) = channel(64);

        trace!(
            "Initialised content type provider:\n- {}",
            index.keys().cloned().collect::<Vec<String>>().join("\n- ")
        );

        Self {
            content_types: Arc::new(Mutex::new(index)),
            supported_content_types,
            tx,
        }
    }

    /// Returns receiver for broadcast channel, announcing the uid of every changed content type.
    pub fn on_content_type_changed(&self) -> Receiver<String> {
        self.tx.subscribe()
    }

    /// Retrieve a content type by its uid.
    pub async fn get(&self, uid: &str) -> Option<ContentType> {
        self.content_types.lock().await.get(uid).cloned()
    }

    /// Returns all content types in the order they were first added.
    pub async fn all(&self) -> Vec<ContentType> {
        self.content_types.lock().await.values().cloned().collect()
    }

    /// Inserts or updates the given content type.
    ///
    /// Returns `true` if an existing content type was updated or already existed in its current
    /// state, `false` if it was inserted.
    pub async fn update(&self, content_type: ContentType) -> Result<bool> {
        if !self
            .supported_content_types
            .contains(&content_type.uid().to_owned())
        {
            bail!("Attempted to add unsupported content type to provider");
        }

        let uid = content_type.uid().to_owned();
        let mut content_types = self.content_types.lock().await;

        if content_types.get(&uid) == Some(&content_type) {
            // Nothing changed, we don't need to announce anything
            return Ok(true);
        }

        info!("Updating content type {}", uid);
        let is_update = content_types.insert(uid.clone(), content_type).is_some();
        drop(content_types);

        self.announce(uid);
        Ok(is_update)
    }

    /// Removes the content type with the given uid.
    ///
    /// Returns `true` if it existed.
    pub async fn remove(&self, uid: &str) -> bool {
        let removed = self.content_types.lock().await.shift_remove(uid).is_some();

        if removed {
            info!("Removed content type {}", uid);
            self.announce(uid.to_owned());
        }

        removed
    }

    fn announce(&self, uid: String) {
        if self.tx.send(uid).is_err() {
            debug!("No subscriber has been informed about changed content type");
        }
    }
}

impl Default for ContentTypeProvider {
    fn default() -> Self {
        Self::new(Vec::new(), AllowList::Wildcard)
    }
}
