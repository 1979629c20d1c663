//! httpmock-style `when/then` facade over the in-process transport in
//! `client::mock_transport`. Tests register routes, hand the server's URL to
//! `ApiClient::new_with_base_url`, and never open a socket.

pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;
    pub const PUT: Method = Method::PUT;
    pub const DELETE: Method = Method::DELETE;

    #[derive(Clone)]
    pub struct MockServer {
        routes: Arc<Mutex<Vec<Route>>>,
        base: String,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        response: MockResponse,
    }

    impl MockServer {
        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                routes: Arc::new(Mutex::new(Vec::new())),
                base: format!("http://mock-{}", id),
            }
        }

        /// Full URL for `path` on this server; registering it as a transport
        /// prefix happens here, so `url("/api")` is also the setup call.
        pub fn url(&self, path: &str) -> String {
            let url = format!("{}{}", self.base, path);
            register_mock(url.clone(), Arc::new(self.clone()));
            url
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let route = Route {
                method: when.method.expect("mock requires a method"),
                path: when.path.expect("mock requires a path"),
                response: MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                ),
            };
            self.routes.lock().expect("mock routes lock").push(route);
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path();
            let routes = self.routes.lock().expect("mock routes lock");

            // Later registrations win, so a test can override a route.
            routes
                .iter()
                .rev()
                .find(|route| route.method == *method && route.path == path)
                .map(|route| route.response.clone())
                .ok_or_else(|| ApiError::unknown(format!("No mock for {} {}", method, path)))
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }
    }
}
