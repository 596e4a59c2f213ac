use std::sync::Arc;

use anyhow::Result;
use shared::{NavigationGuard, NavigationRequest, RemoteTokenValidator, RouteTable};

use super::Context;

/// Print the route table.
pub fn list_routes() -> Result<()> {
    let table = RouteTable::dashboard();
    let width = table.iter().map(|route| route.name.len()).max().unwrap_or(0);
    for route in table.iter() {
        let access = if route.requires_auth { "auth" } else { "public" };
        println!("{:<width$}  {:<6}  {}", route.name, access, route.path);
    }
    Ok(())
}

/// Run the guard for `route` (optionally leaving `from`) and print the
/// disposition and the route the user would land on.
pub async fn navigate(ctx: &Context, route: &str, from: Option<&str>) -> Result<()> {
    let routes = Arc::new(RouteTable::dashboard());
    let to = *routes.require(route)?;
    let from = from.map(|name| routes.require(name).copied()).transpose()?;

    let guard = NavigationGuard::new(
        Arc::clone(&ctx.state),
        RemoteTokenValidator::new(ctx.api.clone()),
        Arc::clone(&routes),
    );
    let disposition = guard.evaluate(NavigationRequest::new(to, from)).await;
    let destination = disposition.destination(to, &routes);

    println!("{disposition} -> {} ({})", destination.name, destination.path);
    Ok(())
}
