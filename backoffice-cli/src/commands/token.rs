use anyhow::{Context as _, Result};
use clap::Subcommand;

use super::Context;

/// Token management actions
#[derive(Subcommand, Debug)]
pub enum TokenAction {
    /// Store a bearer token obtained from the login endpoint
    Set {
        /// The bearer token
        token: String,
    },
    /// Print the stored token
    Show,
    /// Remove the stored token
    Clear,
}

pub fn run(ctx: &Context, action: TokenAction) -> Result<()> {
    match action {
        TokenAction::Set { token } => {
            ctx.state
                .token
                .set(token)
                .with_context(|| format!("failed to write {}", ctx.storage_path.display()))?;
            println!("Token stored in {}", ctx.storage_path.display());
        }
        TokenAction::Show => match ctx.state.token.get() {
            Some(token) => println!("{token}"),
            None => println!("no token stored"),
        },
        TokenAction::Clear => {
            ctx.state
                .token
                .clear()
                .with_context(|| format!("failed to write {}", ctx.storage_path.display()))?;
            println!("Token cleared");
        }
    }
    Ok(())
}
