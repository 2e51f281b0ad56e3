//! User-configuration API client wired to the resolved base URL.

use lookout_core::config::api_base_url;
use lookout_core::{ApiResult, UserConfigClient};

/// Builds the client the three list managers share.
pub fn new_user_config_client() -> ApiResult<UserConfigClient> {
    UserConfigClient::new(api_base_url())
}
