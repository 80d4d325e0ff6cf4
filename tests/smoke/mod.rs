use charter_seed::service::smoke::{SmokeChecks, SmokeClient};
use charter_seed_test_utils::prelude::*;
use serde_json::json;

mod envelope;
mod run;

fn client(base_url: &str) -> SmokeClient {
    SmokeClient::new(reqwest::Client::new(), base_url)
}
