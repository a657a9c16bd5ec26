//! Subcommand implementations.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use chrono::{Local, Timelike};

use vetmock_fixtures::FixtureRepository;
use vetmock_model::parse_date;

use crate::cli::{FixturesArgs, ServeArgs, ServeGraphqlArgs, ServeRestArgs};
use crate::tables;

/// Build the demo repository around the local clock. A missing seed is drawn
/// from entropy and logged, so any run can be replayed with `--seed`.
fn build_repository(seed: Option<u64>) -> anyhow::Result<Arc<FixtureRepository>> {
    let seed = seed.unwrap_or_else(rand::random);
    let now = Local::now();
    let repo = FixtureRepository::demo(seed, now.date_naive(), now.hour())
        .context("failed to build fixture repository")?;
    tracing::info!(
        seed,
        appointments = repo.appointments().len(),
        "fixture repository generated"
    );
    Ok(Arc::new(repo))
}

pub async fn run_serve(args: &ServeArgs) -> anyhow::Result<()> {
    let repo = build_repository(args.seed)?;
    let rest_addr = SocketAddr::new(args.host, args.rest_port);
    let graphql_addr = SocketAddr::new(args.host, args.graphql_port);
    tokio::try_join!(
        vetmock_rest::serve(rest_addr, Arc::clone(&repo)),
        vetmock_graphql::serve(graphql_addr, repo),
    )
    .context("server error")?;
    Ok(())
}

pub async fn run_serve_rest(args: &ServeRestArgs) -> anyhow::Result<()> {
    let repo = build_repository(args.seed)?;
    let addr = SocketAddr::new(args.host, args.port);
    vetmock_rest::serve(addr, repo).await.context("server error")?;
    Ok(())
}

pub async fn run_serve_graphql(args: &ServeGraphqlArgs) -> anyhow::Result<()> {
    let repo = build_repository(args.seed)?;
    let addr = SocketAddr::new(args.host, args.port);
    vetmock_graphql::serve(addr, repo)
        .await
        .context("server error")?;
    Ok(())
}

pub fn run_fixtures(args: &FixturesArgs) -> anyhow::Result<()> {
    let repo = build_repository(args.seed)?;
    match &args.date {
        Some(raw) => {
            let date = parse_date(raw).with_context(|| format!("invalid --date {raw:?}"))?;
            tables::print_day(&repo, date);
        }
        None => tables::print_overview(&repo),
    }
    Ok(())
}
