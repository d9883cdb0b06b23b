#![cfg(feature = "stdio")]
//! rmcp session tests.
//!
//! The server is served over an in-memory duplex stream, which is the same
//! byte-stream framing the STDIO transport uses, and driven by an rmcp client.

use rmcp::{
    RoleClient, ServiceExt,
    model::{CallToolRequestParam, CallToolResult, ErrorCode, RawContent},
    service::{RunningService, ServiceError},
};
use serde_json::{Map, Value, json};

use catalog_calculator_mcp::{Config, McpServer};

async fn connect() -> anyhow::Result<RunningService<RoleClient, ()>> {
    let (server_transport, client_transport) = tokio::io::duplex(4096);

    let server = McpServer::new(Config::default())?;
    tokio::spawn(async move {
        server.serve(server_transport).await?.waiting().await?;
        anyhow::Ok(())
    });

    Ok(().serve(client_transport).await?)
}

fn call(name: &'static str, arguments: Value) -> CallToolRequestParam {
    CallToolRequestParam {
        name: name.into(),
        arguments: arguments.as_object().cloned().or_else(|| Some(Map::new())),
    }
}

fn texts(result: &CallToolResult) -> Vec<String> {
    result
        .content
        .iter()
        .map(|item| match &item.raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {:?}", other),
        })
        .collect()
}

#[tokio::test]
async fn test_initialize_reports_configured_server() -> anyhow::Result<()> {
    let client = connect().await?;

    let info = client.peer_info().expect("server info after initialize");
    assert_eq!(info.server_info.name, "Authless Calculator");
    assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
    assert!(info.capabilities.tools.is_some());

    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn test_list_tools() -> anyhow::Result<()> {
    let client = connect().await?;

    let mut names: Vec<String> = client
        .list_all_tools()
        .await?
        .into_iter()
        .map(|tool| tool.name.to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["add", "calculate", "search_products"]);

    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn test_add() -> anyhow::Result<()> {
    let client = connect().await?;

    let result = client.call_tool(call("add", json!({ "a": 2, "b": 3 }))).await?;
    assert_eq!(texts(&result), vec!["5"]);
    assert!(!result.is_error.unwrap_or(false));

    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn test_divide_by_zero_is_a_result() -> anyhow::Result<()> {
    let client = connect().await?;

    let result = client
        .call_tool(call(
            "calculate",
            json!({ "operation": "divide", "a": 1, "b": 0 }),
        ))
        .await?;
    assert_eq!(texts(&result), vec!["Error: Cannot divide by zero"]);

    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn test_search_drops_payment_links() -> anyhow::Result<()> {
    let client = connect().await?;

    let result = client
        .call_tool(call("search_products", json!({ "query": "randonnee" })))
        .await?;
    let lines = texts(&result);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with('['));
    assert!(!lines[0].contains("pay.example.com"));

    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn test_missing_argument_is_invalid_params() -> anyhow::Result<()> {
    let client = connect().await?;

    let err = client
        .call_tool(call("add", json!({ "a": 1 })))
        .await
        .unwrap_err();
    match err {
        ServiceError::McpError(error) => {
            assert_eq!(error.code, ErrorCode::INVALID_PARAMS);
            let data = error.data.expect("validation data");
            assert_eq!(data["path"], "b");
            assert_eq!(data["expected"], "number");
        }
        other => panic!("expected MCP error, got {:?}", other),
    }

    // The session survives a rejected call.
    let result = client.call_tool(call("add", json!({ "a": 1, "b": 1 }))).await?;
    assert_eq!(texts(&result), vec!["2"]);

    client.cancel().await?;
    Ok(())
}

#[tokio::test]
async fn test_unknown_tool_is_invalid_params() -> anyhow::Result<()> {
    let client = connect().await?;

    let err = client
        .call_tool(call("nonexistent_tool", json!({})))
        .await
        .unwrap_err();
    match err {
        ServiceError::McpError(error) => assert_eq!(error.code, ErrorCode::INVALID_PARAMS),
        other => panic!("expected MCP error, got {:?}", other),
    }

    client.cancel().await?;
    Ok(())
}
