use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    Network,
    MalformedResponse,
    BadClientData,
    NotFound,
    InternalError,
    UnexpectedStatusCode,
}

#[derive(Debug)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

pub type APIResponse<T> = Result<T, APIError>;

pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            client: Client::new(),
            address,
        }
    }

    fn request(&self, method: Method, path: String) -> RequestBuilder {
        self.client
            .request(method, &format!("{}/api/v1/{}", self.address, path))
    }

    async fn send(
        &self,
        req: RequestBuilder,
        expected_status: StatusCode,
    ) -> APIResponse<Response> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;

        let status = res.status();
        if status == expected_status {
            return Ok(res);
        }

        let variant = match status {
            StatusCode::BAD_REQUEST => APIErrorVariant::BadClientData,
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            StatusCode::INTERNAL_SERVER_ERROR => APIErrorVariant::InternalError,
            _ => APIErrorVariant::UnexpectedStatusCode,
        };
        Err(APIError {
            variant,
            message: res.text().await.unwrap_or_default(),
        })
    }

    async fn handle_json_response<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let res = self.send(req, expected_status).await?;
        res.json::<T>().await.map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        self.handle_json_response(self.request(Method::GET, path), expected_status)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        self.handle_json_response(self.request(Method::DELETE, path), expected_status)
            .await
    }

    /// Delete where the server answers without a body
    pub async fn delete_no_content(&self, path: String) -> APIResponse<()> {
        self.send(self.request(Method::DELETE, path), StatusCode::NO_CONTENT)
            .await
            .map(|_| ())
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        self.handle_json_response(self.request(Method::POST, path).json(&body), expected_status)
            .await
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        self.handle_json_response(self.request(Method::PUT, path).json(&body), expected_status)
            .await
    }
}
