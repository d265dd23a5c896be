//! One-shot submit commands (no UI).
//!
//! These exercise the same client and wire contract as the auth page, with
//! the outcome printed instead of shown as an alert. A rejection exits
//! non-zero with the server's message.

use anyhow::Result;
use portico_core::client::{self, AuthClient, LoginRequest, SignupRequest, SubmitOutcome};
use portico_core::config::Config;

pub async fn login(config: &Config, email: String, password: String) -> Result<()> {
    let client = build_client(config)?;
    let outcome = client.login(&LoginRequest { email, password }).await?;
    report("Login", &outcome)
}

pub async fn signup(
    config: &Config,
    username: String,
    email: String,
    password: String,
) -> Result<()> {
    let client = build_client(config)?;
    let outcome = client
        .signup(&SignupRequest {
            username,
            email,
            password,
        })
        .await?;
    report("Signup", &outcome)
}

fn build_client(config: &Config) -> Result<AuthClient> {
    let base_url = client::resolve_base_url(config.base_url.as_deref())?;
    AuthClient::new(&base_url, config.request_timeout())
}

fn report(operation: &str, outcome: &SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Accepted => {
            println!("{operation} succeeded.");
            Ok(())
        }
        SubmitOutcome::Rejected { message } => {
            anyhow::bail!(
                "{operation} rejected: {}",
                message.as_deref().unwrap_or("no reason given")
            )
        }
    }
}
