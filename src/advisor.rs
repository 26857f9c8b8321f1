// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::Transaction;
use crate::utils::http_client;

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";
const PLACEHOLDER_KEY: &str = "YOUR_API_KEY_PLACEHOLDER";
const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
const MODEL: &str = "gemini-3-flash-preview";
const BUSY_FALLBACK: &str = "AI 忙碌中，请稍后再试。";

#[derive(Debug, Error)]
pub enum AdvisoryError {
    #[error("advisory credential is not configured")]
    MissingKey,
    #[error("advisory credential rejected (HTTP 403)")]
    Forbidden,
    #[error("advisory request rate limited (HTTP 429)")]
    RateLimited,
    #[error("advisory service returned HTTP {0}")]
    Status(u16),
    #[error("advisory request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl AdvisoryError {
    /// The string shown in place of a report; callers never see the
    /// error itself.
    pub fn user_message(&self) -> String {
        match self {
            AdvisoryError::MissingKey => format!(
                "⚠️ 缺少 API Key！\n\n【配置方法】：\n1. 设置环境变量 {}（也可以写进 .env 文件）\n2. 重新运行 advise 命令。",
                API_KEY_ENV
            ),
            AdvisoryError::Forbidden => {
                "分析失败：API Key 被拒绝（HTTP 403），请检查密钥是否有效、是否有访问权限。".to_string()
            }
            AdvisoryError::RateLimited => {
                "分析失败：请求过于频繁（HTTP 429），请稍后再试。".to_string()
            }
            AdvisoryError::Status(status) => {
                format!("分析失败：服务返回异常状态（HTTP {}）。", status)
            }
            AdvisoryError::Transport(_) => "分析失败：请检查网络是否畅通。".to_string(),
        }
    }
}

/// One-shot client for the advisory text endpoint. No retry, no
/// backoff; a second request simply runs independently of the first.
pub struct Advisor {
    endpoint: String,
    api_key: Option<String>,
}

impl Advisor {
    pub fn from_env() -> Self {
        Self::new(DEFAULT_ENDPOINT, std::env::var(API_KEY_ENV).ok())
    }

    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Advisor {
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Requests an advisory report. Always resolves to display text;
    /// every failure is folded into its user-facing message, and the
    /// transactions are never touched.
    pub fn analyze(&self, transactions: &[Transaction]) -> String {
        match self.request(transactions) {
            Ok(text) => text,
            Err(err) => {
                debug!(error = %err, "advisory request failed");
                err.user_message()
            }
        }
    }

    fn request(&self, transactions: &[Transaction]) -> std::result::Result<String, AdvisoryError> {
        let key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_KEY)
            .ok_or(AdvisoryError::MissingKey)?;

        let url = format!("{}/v1beta/models/{}:generateContent", self.endpoint, MODEL);
        debug!(transactions = transactions.len(), "requesting advisory");

        let resp = http_client()?
            .post(url)
            .header("x-goog-api-key", key)
            .json(&GenerateRequest::from_prompt(build_prompt(transactions)))
            .send()?;

        let status = resp.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(AdvisoryError::Forbidden);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AdvisoryError::RateLimited);
        }
        if !status.is_success() {
            return Err(AdvisoryError::Status(status.as_u16()));
        }

        let body: GenerateResponse = resp.json()?;
        Ok(body.text().unwrap_or_else(|| BUSY_FALLBACK.to_string()))
    }
}

pub fn build_prompt(transactions: &[Transaction]) -> String {
    let summary = transactions
        .iter()
        .map(summary_line)
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "你是一个专业的家庭理财管家。这是我家的账单：\n{}\n\n请分析消费结构，指出不合理支出，并给出具体的省钱建议。请用活泼的口吻，多用 Emoji，300字以内。",
        summary
    )
}

pub fn summary_line(t: &Transaction) -> String {
    format!(
        "{} {} {} {}元 [{}]: {}",
        t.date.format("%Y-%m-%d"),
        t.member_name,
        t.r#type.label(),
        t.amount,
        t.category,
        t.description
    )
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

impl GenerateRequest {
    fn from_prompt(text: String) -> Self {
        GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text }],
            }],
        }
    }
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateResponse {
    fn text(&self) -> Option<String> {
        let text = self
            .candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .trim();
        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }
}
