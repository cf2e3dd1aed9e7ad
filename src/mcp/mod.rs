//! MCP server exposing the style guide to AI assistants.

mod types;

pub use types::*;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::Serialize;

use crate::error::GuideError;
use crate::registry::Registry;
use crate::render;

#[derive(Clone)]
pub struct McpServer {
    registry: Registry,
    tool_router: ToolRouter<Self>,
}

fn to_mcp_error(e: GuideError) -> McpError {
    if e.is_not_found() {
        McpError::invalid_params(e.to_string(), None)
    } else {
        McpError::internal_error(e.to_string(), None)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

impl McpServer {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            tool_router: Self::tool_router(),
        }
    }

    // ============================================================
    // Tool logic - shared by the tool handlers and tests
    // ============================================================

    pub fn guide_info(&self) -> GuideInfo {
        GuideInfo {
            title: self.registry.title().to_string(),
            version: self.registry.version().to_string(),
            categories: self.registry.category_summaries(),
        }
    }

    pub fn rule_list(&self, category: &str) -> Result<RuleListResponse, McpError> {
        let rules = self.registry.list_rules(category).map_err(to_mcp_error)?;

        Ok(RuleListResponse {
            category: category.to_string(),
            rules: rules
                .iter()
                .map(|r| RuleSummaryInfo {
                    category: category.to_string(),
                    id: r.id.clone(),
                    summary: self.registry.get_summary(r).to_string(),
                })
                .collect(),
        })
    }

    pub fn rule_info(&self, category: Option<&str>, rule: &str) -> Result<RuleInfo, McpError> {
        match category {
            Some(category) => {
                let found = self
                    .registry
                    .get_rule(category, rule)
                    .map_err(to_mcp_error)?;
                Ok(RuleInfo::new(category, found))
            }
            None => {
                let (category, found) = self.registry.find_rule(rule).map_err(to_mcp_error)?;
                Ok(RuleInfo::new(&category.id, found))
            }
        }
    }

    pub fn search_info(&self, query: &str) -> Result<SearchResponse, McpError> {
        if query.trim().is_empty() {
            return Err(McpError::invalid_params("Query must not be empty", None));
        }

        Ok(SearchResponse {
            query: query.to_string(),
            results: self
                .registry
                .search(query)
                .into_iter()
                .map(|r| RuleSummaryInfo {
                    category: r.category,
                    id: r.rule,
                    summary: r.summary,
                })
                .collect(),
        })
    }

    pub fn index_tree(&self) -> String {
        render::render_tree(self.registry.guide())
    }
}

#[tool_router]
impl McpServer {
    #[tool(
        description = "List the categories of the style guide with their descriptions and rule counts. Call this FIRST to discover which categories exist before listing rules."
    )]
    async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.guide_info())
    }

    #[tool(
        description = "List the rules in one category as one-line summaries. Use the summaries to decide which rules are relevant, then call get_rule for the full rationale and examples."
    )]
    async fn list_rules(
        &self,
        params: Parameters<ListRulesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        json_result(&self.rule_list(&req.category)?)
    }

    #[tool(
        description = "Get one rule in full: summary, rationale and code examples labeled 'preferred' or 'discouraged'. Follow the preferred examples when writing code."
    )]
    async fn get_rule(
        &self,
        params: Parameters<GetRuleRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        json_result(&self.rule_info(req.category.as_deref(), &req.rule)?)
    }

    #[tool(
        description = "Search rules by text. Matches rule ids, summaries and rationales case-insensitively. Returns rule summaries in guide order."
    )]
    async fn search_rules(
        &self,
        params: Parameters<SearchRulesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        json_result(&self.search_info(&req.query)?)
    }

    #[tool(
        description = "Render the whole guide as an ASCII tree of categories and rule ids. Symbols: ● rule has preferred and discouraged examples, ○ preferred examples only."
    )]
    async fn render_index(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            self.index_tree(),
        )]))
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: rmcp::model::Implementation {
                name: "stylebook".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                title: Some(self.registry.title().to_string()),
                icons: None,
                website_url: None,
            },
            capabilities: rmcp::model::ServerCapabilities::builder()
                .enable_tools()
                .build(),
            instructions: Some(
                r#"Stylebook serves an Elixir style guide as structured data.

The guide is organized into categories (e.g. CodeStyle, SoftwareDesign). Each
category holds rules; each rule has a one-line summary, a rationale and code
examples labeled 'preferred' or 'discouraged'.

WORKFLOW:
1. Call list_categories to see what the guide covers
2. Call list_rules on the relevant category to scan rule summaries
3. Call get_rule for rules that apply to the code you are writing or reviewing
4. Use search_rules when you know a topic (e.g. 'pipe', 'GenServer') but not the category

IMPORTANT:
- Write code that follows the 'preferred' examples
- When reviewing, cite the rule id so the author can look it up"#
                    .into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(registry: Registry) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(registry);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
