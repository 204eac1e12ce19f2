// ABOUTME: Newline-delimited JSON-RPC transport over stdin/stdout
// ABOUTME: Handles each request on its own task and serializes output through one writer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MLB Stats MCP Server Contributors

//! # Stdio Transport
//!
//! stdout carries protocol messages only; logs go to stderr or a file. Responses are
//! written in completion order, so concurrent calls may answer out of request order.

use std::sync::Arc;

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::errors::{AppError, AppResult};
use crate::mcp::request_processor::RequestProcessor;
use crate::mcp::resources::ServerResources;

const OUTBOUND_BUFFER: usize = 64;

/// Serve requests from `reader`, writing responses to `writer`, until EOF
///
/// Returns once input is exhausted and every in-flight request has been answered.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails
pub async fn serve<R, W>(processor: RequestProcessor, reader: R, mut writer: W) -> AppResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, mut rx) = mpsc::channel::<String>(OUTBOUND_BUFFER);

    let writer_task = tokio::spawn(async move {
        while let Some(message) = rx.recv().await {
            writer.write_all(message.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
        Ok::<(), io::Error>(())
    });

    let mut lines = reader.lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| AppError::internal(format!("Failed to read stdin: {e}")))?
    {
        if line.trim().is_empty() {
            continue;
        }
        let processor = processor.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let Some(response) = processor.handle_line(&line).await else {
                return;
            };
            match serde_json::to_string(&response) {
                Ok(message) => {
                    if tx.send(message).await.is_err() {
                        debug!("Output channel closed before response was written");
                    }
                }
                Err(e) => error!(error = %e, "Failed to serialize response"),
            }
        });
    }
    drop(tx);

    writer_task
        .await
        .map_err(|e| AppError::internal(format!("Writer task failed: {e}")))?
        .map_err(|e| AppError::internal(format!("Failed to write stdout: {e}")))
}

/// Run the MCP server on the process's stdin and stdout
///
/// # Errors
///
/// Returns an error if stdin or stdout fails
pub async fn run_stdio(resources: Arc<ServerResources>) -> AppResult<()> {
    info!(
        tool_count = resources.tools.len(),
        "MCP server listening on stdio"
    );
    let processor = RequestProcessor::new(resources);
    serve(processor, BufReader::new(io::stdin()), io::stdout()).await?;
    info!("stdin closed, shutting down");
    Ok(())
}
