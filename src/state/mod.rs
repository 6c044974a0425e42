pub mod http;
pub mod role;

use anyhow::Result;

use self::http::HttpClient;
use self::role::Role;
use crate::config::DEFAULT_SERVICE_ID;
use crate::store::context::Context;
use crate::store::Store;

#[derive(Debug)]
pub struct State {
    pub ctx: Context,
    /// Client for the public API, authenticated as the user.
    pub http: HttpClient,
    /// Role used for calls to the internal API.
    pub role: Role,
    pub service_key: Option<String>,
}

pub struct StateOptions {
    pub override_token: Option<String>,
    pub override_user_id: Option<String>,
}

impl State {
    pub async fn new(options: StateOptions) -> Result<Self> {
        let ctx = Context::new().await?;

        let token = Context::user_token(options.override_token);
        let http = HttpClient::new(&token, ctx.public_api_url())?;

        // act on behalf of a user only if one is known
        let role = match options.override_user_id.or_else(|| ctx.user_id.clone()) {
            Some(user_id) => Role::user(&user_id, DEFAULT_SERVICE_ID),
            None => Role::service(DEFAULT_SERVICE_ID),
        };

        log::debug!("Using {} with role {:?}", http.base_url, role);

        Ok(State {
            ctx,
            http,
            role,
            service_key: Context::service_key(),
        })
    }
}
