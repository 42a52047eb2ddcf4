//! 演示客户端
//!
//! 把一份理财档案发给摘要服务并打印结果；服务不可用时展示本地兜底。

use finchat::api::dto::chat_dto::ChatRequest;
use finchat::client::ChatClient;
use finchat::models::PromptSource;
use std::collections::BTreeMap;
use tracing::info;

/// 演示用的默认档案
fn demo_request() -> ChatRequest {
    ChatRequest {
        user_id: "demo_user".to_string(),
        occupation: "student".to_string(),
        age: 22,
        income_monthly: 15000.0,
        expenses: BTreeMap::from([
            ("rent".to_string(), 4000.0),
            ("food".to_string(), 2000.0),
            ("transport".to_string(), 500.0),
        ]),
        prompt_source: PromptSource::Hf,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let api_url = std::env::var("FINCHAT_API_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:8000/chat".to_string());

    // 可选参数：档案 JSON 文件路径；缺省时使用演示档案
    let request = match std::env::args().nth(1) {
        Some(path) => {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str::<ChatRequest>(&contents)?
        }
        None => demo_request(),
    };

    info!("Requesting summary from {}", api_url);

    let client = ChatClient::new(&api_url)?;
    let view = client.request_summary(&request).await;

    if view.fallback_used {
        println!("⚠️ Backend unavailable. Showing local summary instead.");
    }

    println!("💡 Budget Summary");
    println!("{}", view.summary);
    println!();
    println!("📊 Detailed Calculations");
    println!("{}", serde_json::to_string_pretty(&view.details)?);

    Ok(())
}
