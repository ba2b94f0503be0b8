//! Route registration that remembers what it registered, so the sitemap reflects the real router.

use crate::handlers::sitemap::Endpoint;
use axum::{
    handler::Handler,
    http::Method,
    routing::{self, MethodRouter},
    Router,
};

struct Entry<S> {
    path: &'static str,
    methods: Vec<Method>,
    router: MethodRouter<S>,
}

pub struct RouteTable<S> {
    entries: Vec<Entry<S>>,
}

impl<S> Default for RouteTable<S> {
    fn default() -> Self {
        RouteTable { entries: Vec::new() }
    }
}

impl<S> RouteTable<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.add(path, Method::GET, routing::get(handler))
    }

    pub fn post<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.add(path, Method::POST, routing::post(handler))
    }

    pub fn put<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.add(path, Method::PUT, routing::put(handler))
    }

    pub fn delete<H, T>(self, path: &'static str, handler: H) -> Self
    where
        H: Handler<T, S>,
        T: 'static,
    {
        self.add(path, Method::DELETE, routing::delete(handler))
    }

    /// Paths in registration order, each with its methods in registration order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.entries
            .iter()
            .map(|e| Endpoint {
                path: e.path.to_string(),
                methods: e.methods.iter().map(|m| m.as_str().to_string()).collect(),
            })
            .collect()
    }

    pub fn into_router(self) -> Router<S> {
        self.entries
            .into_iter()
            .fold(Router::new(), |router, e| router.route(e.path, e.router))
    }

    fn add(mut self, path: &'static str, method: Method, router: MethodRouter<S>) -> Self {
        match self.entries.iter().position(|e| e.path == path) {
            Some(i) => {
                let mut entry = self.entries.remove(i);
                entry.methods.push(method);
                entry.router = entry.router.merge(router);
                self.entries.insert(i, entry);
            }
            None => self.entries.push(Entry {
                path,
                methods: vec![method],
                router,
            }),
        }
        self
    }
}
