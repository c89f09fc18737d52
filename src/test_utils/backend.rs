// SPDX-License-Identifier: AGPL-3.0-or-later

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use async_graphql::{Error, Result, Value};
use async_trait::async_trait;

use crate::content_type::ContentType;
use crate::graphql::collaborators::{
    ActionRegistry, QueryResolver, ResolverFactory, ResolverOptions,
};
use crate::graphql::constants::{FIND_ACTION, FIND_ONE_ACTION};

#[derive(Default)]
struct Recorded {
    built_resolvers: Vec<(String, String)>,
    queries: Vec<(String, Value)>,
}

/// In-memory backend with configurable actions and responses, recording every built resolver and
/// every query it received.
///
/// Resolvers without a configured response return null.
#[derive(Default)]
pub struct MockBackend {
    actions: HashSet<String>,
    responses: HashMap<String, Result<Value, String>>,
    recorded: Arc<Mutex<Recorded>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend offering the find-one and find-many actions of the given content type.
    pub fn with_all_actions(content_type: &ContentType) -> Self {
        Self::new().with_content_type_actions(content_type)
    }

    /// Adds the find-one and find-many actions of the given content type.
    pub fn with_content_type_actions(self, content_type: &ContentType) -> Self {
        [FIND_ONE_ACTION, FIND_ACTION]
            .iter()
            .fold(self, |backend, action| {
                backend.with_action(ResolverOptions::new(content_type, action).resolver())
            })
    }

    pub fn with_action(mut self, resolver: &str) -> Self {
        self.actions.insert(resolver.to_owned());
        self
    }

    /// Sets what the resolver of the given action returns, `Err` is turned into a GraphQL error.
    pub fn with_response(mut self, resolver: &str, response: Result<Value, String>) -> Self {
        self.responses.insert(resolver.to_owned(), response);
        self
    }

    /// Model names and resolver references of all resolvers built so far.
    pub fn built_resolvers(&self) -> Vec<(String, String)> {
        self.recorded.lock().unwrap().built_resolvers.clone()
    }

    /// Resolver references and queries of all resolutions so far.
    pub fn queries(&self) -> Vec<(String, Value)> {
        self.recorded.lock().unwrap().queries.clone()
    }
}

impl ActionRegistry for MockBackend {
    fn action_exists(&self, options: &ResolverOptions) -> bool {
        self.actions.contains(options.resolver())
    }
}

impl ResolverFactory for MockBackend {
    fn build_query(&self, model_name: &str, options: &ResolverOptions) -> Arc<dyn QueryResolver> {
        self.recorded
            .lock()
            .unwrap()
            .built_resolvers
            .push((model_name.to_owned(), options.to_string()));

        Arc::new(MockResolver {
            resolver: options.to_string(),
            response: self
                .responses
                .get(options.resolver())
                .cloned()
                .unwrap_or(Ok(Value::Null)),
            recorded: self.recorded.clone(),
        })
    }
}

struct MockResolver {
    resolver: String,
    response: Result<Value, String>,
    recorded: Arc<Mutex<Recorded>>,
}

#[async_trait]
impl QueryResolver for MockResolver {
    async fn resolve(&self, query: Value) -> Result<Value> {
        self.recorded
            .lock()
            .unwrap()
            .queries
            .push((self.resolver.clone(), query));

        self.response.clone().map_err(Error::new)
    }
}
