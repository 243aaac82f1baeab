use crate::http::{Request, Response};
use matchit::Router as MatchitRouter;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for route handlers
pub type BoxedHandler =
    Box<dyn Fn(Request) -> Pin<Box<dyn Future<Output = Response> + Send>> + Send + Sync>;

/// HTTP router with one match tree per method
pub struct Router {
    get_routes: MatchitRouter<Arc<BoxedHandler>>,
    post_routes: MatchitRouter<Arc<BoxedHandler>>,
    patch_routes: MatchitRouter<Arc<BoxedHandler>>,
    delete_routes: MatchitRouter<Arc<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            get_routes: MatchitRouter::new(),
            post_routes: MatchitRouter::new(),
            patch_routes: MatchitRouter::new(),
            delete_routes: MatchitRouter::new(),
        }
    }

    /// Register a GET route
    pub fn get<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.get_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Register a POST route
    pub fn post<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.post_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Register a PATCH route
    pub fn patch<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.patch_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Register a DELETE route
    pub fn delete<H, Fut>(mut self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Box::new(move |req| Box::pin(handler(req)));
        self.delete_routes.insert(path, Arc::new(handler)).ok();
        self
    }

    /// Match a request and return the handler with extracted params
    pub fn match_route(
        &self,
        method: &hyper::Method,
        path: &str,
    ) -> Option<(Arc<BoxedHandler>, HashMap<String, String>)> {
        let router = match *method {
            hyper::Method::GET => &self.get_routes,
            hyper::Method::POST => &self.post_routes,
            hyper::Method::PATCH => &self.patch_routes,
            hyper::Method::DELETE => &self.delete_routes,
            _ => return None,
        };

        router.at(path).ok().map(|matched| {
            let params: HashMap<String, String> = matched
                .params
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            (matched.value.clone(), params)
        })
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpResponse;
    use pretty_assertions::assert_eq;

    fn sample_router() -> Router {
        Router::new()
            .get("/api/todos/", |_req: Request| async {
                Ok(HttpResponse::new())
            })
            .patch("/api/todos/{id}/toggle/", |_req: Request| async {
                Ok(HttpResponse::new())
            })
            .post("/api/todos/{todo_id}/comments/", |_req: Request| async {
                Ok(HttpResponse::new())
            })
    }

    #[test]
    fn matches_routes_per_method() {
        let router = sample_router();

        assert!(router
            .match_route(&hyper::Method::GET, "/api/todos/")
            .is_some());
        assert!(router
            .match_route(&hyper::Method::POST, "/api/todos/")
            .is_none());
        assert!(router
            .match_route(&hyper::Method::PATCH, "/api/todos/7/toggle/")
            .is_some());
    }

    #[test]
    fn extracts_path_params() {
        let router = sample_router();

        let (_, params) = router
            .match_route(&hyper::Method::POST, "/api/todos/42/comments/")
            .expect("route should match");
        assert_eq!(params.get("todo_id").map(|s| s.as_str()), Some("42"));
    }

    #[test]
    fn unknown_paths_do_not_match() {
        let router = sample_router();

        assert!(router
            .match_route(&hyper::Method::GET, "/api/unknown/")
            .is_none());
    }
}
