use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue,
};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::*;

pub const APPLICATION_NAME_HEADER: &str = "x-application-name";
pub const SERVER_ID_HEADER: &str = "x-server-id";
pub const LOCALE_HEADER: &str = "x-locale";

/// One outbound call; built and consumed inside a single dispatch.
struct RequestSpec<'a, B: ?Sized> {
    method: Method,
    path: &'a str,
    query: Option<&'a Query>,
    body: Option<&'a B>,
    options: Option<&'a ApiOptions>,
}

impl EngineClient {
    pub fn new(
        config: ClientConfig,
        auth: impl Authorization + 'static,
    ) -> Result<Self, EngineError> {
        Self::with_shared_authorization(config, Arc::new(auth))
    }

    pub fn with_shared_authorization(
        config: ClientConfig,
        auth: Arc<dyn Authorization>,
    ) -> Result<Self, EngineError> {
        Self::with_http_client(reqwest::Client::new(), config, auth)
    }

    /// Use a preconfigured `reqwest::Client` (proxy, TLS, default timeout).
    pub fn with_http_client(
        http: reqwest::Client,
        config: ClientConfig,
        auth: Arc<dyn Authorization>,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            http,
            config: Arc::new(config),
            auth,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Query>,
        options: Option<&ApiOptions>,
    ) -> Result<R, EngineError> {
        self.dispatch::<(), R>(RequestSpec {
            method: Method::GET,
            path,
            query,
            body: None,
            options,
        })
        .await
    }

    pub async fn post<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<&Query>,
        options: Option<&ApiOptions>,
    ) -> Result<R, EngineError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.dispatch(RequestSpec {
            method: Method::POST,
            path,
            query,
            body,
            options,
        })
        .await
    }

    pub async fn put<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<&Query>,
        options: Option<&ApiOptions>,
    ) -> Result<R, EngineError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.dispatch(RequestSpec {
            method: Method::PUT,
            path,
            query,
            body,
            options,
        })
        .await
    }

    pub async fn patch<B, R>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<&Query>,
        options: Option<&ApiOptions>,
    ) -> Result<R, EngineError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.dispatch(RequestSpec {
            method: Method::PATCH,
            path,
            query,
            body,
            options,
        })
        .await
    }

    pub async fn delete<R: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&Query>,
        options: Option<&ApiOptions>,
    ) -> Result<R, EngineError> {
        self.dispatch::<(), R>(RequestSpec {
            method: Method::DELETE,
            path,
            query,
            body: None,
            options,
        })
        .await
    }

    /// DELETE whose response body, if any, is not part of the result.
    pub async fn delete_no_content(
        &self,
        path: &str,
        query: Option<&Query>,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError> {
        self.send::<()>(RequestSpec {
            method: Method::DELETE,
            path,
            query,
            body: None,
            options,
        })
        .await
        .map(drop)
    }

    /// PUT that resolves on any 2xx, whatever the server writes back.
    pub async fn put_no_content<B>(
        &self,
        path: &str,
        body: Option<&B>,
        query: Option<&Query>,
        options: Option<&ApiOptions>,
    ) -> Result<(), EngineError>
    where
        B: Serialize + ?Sized,
    {
        self.send(RequestSpec {
            method: Method::PUT,
            path,
            query,
            body,
            options,
        })
        .await
        .map(drop)
    }

    async fn dispatch<B, R>(&self, spec: RequestSpec<'_, B>) -> Result<R, EngineError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let (status, body) = self.send(spec).await?;
        decode_body(status, &body)
    }

    /// Deliver the request and hand back the status and raw text of a 2xx
    /// response. Anything else is normalized into an [`EngineError`].
    async fn send<B>(&self, spec: RequestSpec<'_, B>) -> Result<(u16, String), EngineError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.request_url(spec.path, spec.query)?;
        let headers = self.request_headers(spec.body.is_some(), spec.options)?;

        let mut builder = self
            .http
            .request(spec.method.clone(), url.clone())
            .headers(headers);
        if let Some(body) = spec.body {
            let json = serde_json::to_vec(body)
                .map_err(|e| EngineError::request("failed to serialize request body", e))?;
            builder = builder.body(json);
        }
        if let Some(timeout) = spec.options.and_then(|o| o.timeout) {
            builder = builder.timeout(timeout);
        }

        tracing::debug!(method = %spec.method, url = %url, "Dispatching request");
        let resp = builder.send().await.map_err(|e| {
            tracing::warn!(method = %spec.method, url = %url, error = %e, "Request not delivered");
            EngineError::network(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(EngineError::network)?;

        if !status.is_success() {
            tracing::warn!(
                method = %spec.method,
                url = %url,
                status = status.as_u16(),
                "Request rejected"
            );
            return Err(EngineError::from_response(status.as_u16(), &body));
        }

        Ok((status.as_u16(), body))
    }

    fn request_url(&self, path: &str, query: Option<&Query>) -> Result<Url, EngineError> {
        let joined = join_url(&self.config.api_url, path);
        let mut url = Url::parse(&joined)
            .map_err(|e| EngineError::request(format!("invalid request url {joined:?}"), e))?;
        if let Some(query) = query {
            query.append_to(&mut url);
        }
        Ok(url)
    }

    /// Default headers, then per-call overrides on top.
    ///
    /// The authorization value is fetched from the strategy on every call.
    fn request_headers(
        &self,
        has_body: bool,
        options: Option<&ApiOptions>,
    ) -> Result<HeaderMap, EngineError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            APPLICATION_NAME_HEADER,
            header_value(&self.config.application_name)?,
        );
        headers.insert(SERVER_ID_HEADER, header_value(&self.config.server_id)?);
        headers.insert(LOCALE_HEADER, header_value(&self.config.locale)?);
        headers.insert(
            AUTHORIZATION,
            header_value(&self.auth.authorization_token())?,
        );
        if has_body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        if let Some(options) = options {
            for (name, value) in &options.headers {
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    EngineError::request(format!("invalid header name {name:?}"), e)
                })?;
                headers.insert(name, header_value(value)?);
            }
        }

        Ok(headers)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, EngineError> {
    HeaderValue::from_str(value).map_err(|e| EngineError::request("invalid header value", e))
}

/// `base` + `/` + `path`, regardless of slashes on either side.
pub(super) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Decode a 2xx body. An empty body decodes as JSON `null`, so `Option<T>`
/// succeeds on 204 while concrete types report a malformed body. Calls with
/// no result go through `*_no_content` and never reach this.
pub(super) fn decode_body<R: DeserializeOwned>(status: u16, body: &str) -> Result<R, EngineError> {
    if body.trim().is_empty() {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| EngineError::malformed(status, e, body));
    }
    serde_json::from_str(body).map_err(|e| EngineError::malformed(status, e, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccessTokenAuthorization, EngineErrorKind};

    fn client() -> EngineClient {
        EngineClient::new(
            ClientConfig::new("http://mock-api", "arena", "srv-1", "en-US"),
            AccessTokenAuthorization::new("tok123").unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn join_url_never_doubles_or_drops_the_slash() {
        for (base, path) in [
            ("http://mock-api", "accounts/acc123"),
            ("http://mock-api/", "accounts/acc123"),
            ("http://mock-api", "/accounts/acc123"),
            ("http://mock-api/", "/accounts/acc123"),
        ] {
            assert_eq!(join_url(base, path), "http://mock-api/accounts/acc123");
        }
    }

    #[test]
    fn request_url_keeps_base_path_prefix() {
        let client = EngineClient::new(
            ClientConfig::new("http://mock-api/v1/", "arena", "srv-1", "en-US"),
            AccessTokenAuthorization::new("tok123").unwrap(),
        )
        .unwrap();
        let url = client.request_url("/cameras/cam1", None).unwrap();
        assert_eq!(url.as_str(), "http://mock-api/v1/cameras/cam1");
    }

    #[test]
    fn request_url_appends_query() {
        let query = Query::new()
            .set("pageIndex", 1_u32)
            .set_opt::<String>("search", None)
            .set("includeDeleted", false);
        let url = client().request_url("accounts", Some(&query)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://mock-api/accounts?pageIndex=1&includeDeleted=false"
        );
    }

    #[test]
    fn default_headers_come_from_config_and_strategy() {
        let headers = client().request_headers(false, None).unwrap();
        assert_eq!(headers[APPLICATION_NAME_HEADER], "arena");
        assert_eq!(headers[SERVER_ID_HEADER], "srv-1");
        assert_eq!(headers[LOCALE_HEADER], "en-US");
        assert_eq!(headers[AUTHORIZATION], "Bearer tok123");
        assert!(headers.get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn option_headers_override_defaults() {
        let options = ApiOptions::new()
            .with_header("X-Locale", "fi-FI")
            .with_header("x-trace-id", "abc");
        let headers = client().request_headers(true, Some(&options)).unwrap();
        assert_eq!(headers[LOCALE_HEADER], "fi-FI");
        assert_eq!(headers.get_all(LOCALE_HEADER).iter().count(), 1);
        assert_eq!(headers["x-trace-id"], "abc");
        assert_eq!(headers[CONTENT_TYPE], "application/json");
    }

    #[test]
    fn invalid_option_header_is_a_request_error() {
        let options = ApiOptions::new().with_header("bad header", "x");
        let err = client().request_headers(false, Some(&options)).unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::Request);
    }

    #[test]
    fn empty_body_decodes_to_unit_and_none() {
        decode_body::<()>(204, "").unwrap();
        let missing: Option<serde_json::Value> = decode_body(204, "").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn empty_body_for_struct_is_malformed() {
        let err = decode_body::<Camera>(200, "").unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::MalformedResponse);
        assert_eq!(err.status_code(), Some(200));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = decode_body::<Camera>(200, "<html>oops</html>").unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::MalformedResponse);
        assert_eq!(
            err.details(),
            Some(&serde_json::Value::String("<html>oops</html>".into()))
        );
    }

    #[test]
    fn rejects_unparseable_api_url() {
        let err = EngineClient::new(
            ClientConfig::new("not a url", "arena", "srv-1", "en-US"),
            AccessTokenAuthorization::new("tok123").unwrap(),
        )
        .unwrap_err();
        assert_eq!(err.kind(), EngineErrorKind::Configuration);
    }
}
