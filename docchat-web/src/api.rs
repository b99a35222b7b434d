use crate::config::FrontendConfig;
use once_cell::unsync::OnceCell;
use reqwest::Client;
use shared::config::ClientConfig;
use shared::models::{
    ApiError, ChatRequest, ChatResponse, Page, PagesResponse, Resource, Space, SpacesResponse,
    check_chat_response,
};

thread_local! {
    static SHARED_CLIENT: OnceCell<DocChatClient> = OnceCell::new();
}

/// Thin JSON client for the spaces, pages, and chat endpoints.
#[derive(Clone, Debug)]
pub struct DocChatClient {
    config: ClientConfig,
    client: Client,
}

fn network_error(resource: Resource) -> impl Fn(reqwest::Error) -> ApiError {
    move |err| ApiError::Network {
        resource,
        message: err.to_string(),
    }
}

fn decode_error(resource: Resource) -> impl Fn(reqwest::Error) -> ApiError {
    move |err| ApiError::Decode {
        resource,
        message: err.to_string(),
    }
}

impl DocChatClient {
    /// Create a client for the given endpoint configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Per-thread instance built from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().client_config()))
                .clone()
        })
    }

    /// Endpoint configuration in use.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List the spaces of the workspace.
    pub async fn fetch_spaces(&self) -> Result<Vec<Space>, ApiError> {
        let resource = Resource::Spaces;
        let response = self
            .client
            .get(self.config.spaces_url())
            .send()
            .await
            .map_err(network_error(resource))?;
        let body: SpacesResponse = response.json().await.map_err(decode_error(resource))?;
        body.into_spaces()
    }

    /// List every page of one space, unordered.
    pub async fn fetch_pages(&self, space_id: &str) -> Result<Vec<Page>, ApiError> {
        let resource = Resource::Pages;
        let response = self
            .client
            .get(self.config.pages_url(space_id))
            .send()
            .await
            .map_err(network_error(resource))?;
        let body: PagesResponse = response.json().await.map_err(decode_error(resource))?;
        body.into_pages()
    }

    /// Send a chat message with its selection context.
    pub async fn post_chat(&self, request: &ChatRequest) -> Result<ChatResponse, ApiError> {
        let resource = Resource::Chat;
        let response = self
            .client
            .post(self.config.chat_url())
            .json(request)
            .send()
            .await
            .map_err(network_error(resource))?;
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        check_chat_response(status, &body)
    }
}
