use anyhow::{Context as _, Result, bail};
use shared::{RemoteTokenValidator, TokenValidator};

use super::Context;

/// Print whether the stored token is accepted by the API.
pub async fn check(ctx: &Context) -> Result<()> {
    let valid = match ctx.state.token.get() {
        Some(token) => {
            RemoteTokenValidator::new(ctx.api.clone())
                .is_valid(&token)
                .await
        }
        None => false,
    };
    println!("{}", if valid { "valid" } else { "invalid" });
    Ok(())
}

/// Fetch the signed-in user's profile and cache it.
pub async fn whoami(ctx: &Context) -> Result<()> {
    let Some(token) = ctx.state.token.get() else {
        bail!("no token stored; run `backoffice token set <TOKEN>` first");
    };

    let profile = ctx
        .api
        .authenticated_user(&token)
        .await
        .with_context(|| format!("failed to fetch profile from {}", ctx.api.base_url()))?;
    ctx.state
        .user
        .set(profile.clone())
        .context("failed to cache profile")?;

    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

/// Drop the session token and cached profile.
pub fn logout(ctx: &Context) -> Result<()> {
    ctx.state.logout().context("failed to clear session")?;
    println!("Signed out");
    Ok(())
}
