// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Proteus CLI entrypoint.
//!
//! By default this runs the HTTP/WebSocket server and serves MCP over
//! streamable HTTP at `http://127.0.0.1:<port>/mcp`.
//!
//! Use `--mcp` to run the MCP server over stdio instead (intended for tool
//! integrations); the HTTP ingest endpoints are not available in that mode.

use std::error::Error;
use std::sync::Arc;

use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_HTTP_PORT: u16 = 3846;
const UPSTREAM_ENV_VAR: &str = "DESIGN_MCP_URL";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--port <port>] [--upstream <url>]\n  {program} --mcp [--upstream <url>]\n\nHTTP mode (default) listens on 127.0.0.1:<port> (default {DEFAULT_HTTP_PORT}) and serves\nMCP over streamable HTTP at `http://127.0.0.1:<port>/mcp`.\n\n--mcp runs the MCP server over stdio instead; HTTP ingest is unavailable.\n\n--upstream points at a design provider MCP endpoint whose tools are merged\ninto ours ({UPSTREAM_ENV_VAR} environment variable is the fallback)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    mcp: bool,
    port: Option<u16>,
    upstream: Option<String>,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--mcp" => {
                if options.mcp {
                    return Err(());
                }
                options.mcp = true;
            }
            "--port" => {
                if options.port.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                let port: u16 = raw.parse().map_err(|_| ())?;
                options.port = Some(port);
            }
            "--upstream" => {
                if options.upstream.is_some() {
                    return Err(());
                }
                let url = args.next().ok_or(())?;
                options.upstream = Some(url);
            }
            _ => return Err(()),
        }
    }

    if options.mcp && options.port.is_some() {
        return Err(());
    }

    Ok(options)
}

fn upstream_provider(
    options: &CliOptions,
) -> Option<Arc<dyn proteus::mcp::DesignProvider>> {
    let url = options
        .upstream
        .clone()
        .or_else(|| std::env::var(UPSTREAM_ENV_VAR).ok())?;
    Some(Arc::new(proteus::mcp::HttpDesignProvider::new(url)))
}

fn build_mcp(
    state: &proteus::server::AppState,
    options: &CliOptions,
) -> proteus::mcp::ProteusMcp {
    match upstream_provider(options) {
        Some(upstream) => {
            proteus::mcp::ProteusMcp::with_upstream(state.store.clone(), upstream)
        }
        None => proteus::mcp::ProteusMcp::new(state.store.clone()),
    }
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "proteus".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        // Logs go to stderr in both modes; in stdio MCP mode stdout is the
        // protocol channel.
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "proteus=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        let state = proteus::server::AppState::new();
        let mcp = build_mcp(&state, &options);

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        if options.mcp {
            runtime.block_on(mcp.serve_stdio())?;
            return Ok(());
        }

        let port = options.port.unwrap_or(DEFAULT_HTTP_PORT);

        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
            let address = listener.local_addr()?;

            let config = StreamableHttpServerConfig {
                stateful_mode: true,
                ..StreamableHttpServerConfig::default()
            };
            let shutdown_token = config.cancellation_token.clone();

            let session_manager = Arc::new(LocalSessionManager::default());
            let mcp_service =
                StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

            let router = proteus::server::router(state).nest_service("/mcp", mcp_service);

            tracing::info!(%address, "listening (HTTP, WebSocket at /ws, MCP at /mcp)");
            let serve = axum::serve(listener, router).with_graceful_shutdown(async move {
                let _ = tokio::signal::ctrl_c().await;
                shutdown_token.cancel();
            });
            serve.await?;
            Ok::<(), Box<dyn Error>>(())
        })?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("proteus: {err}");
        std::process::exit(1);
    }
}
