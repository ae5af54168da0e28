use aliyun_iot::{Client, Config, ParameterSet, Region};
use aliyun_iot_core::{Context, OsEnv, Result};
use aliyun_iot_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Create context
    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);

    // Credentials come from ALIBABA_CLOUD_ACCESS_KEY_ID /
    // ALIBABA_CLOUD_ACCESS_KEY_SECRET.
    let config = Config {
        region_id: Some(Region::CnShanghai),
        ..Default::default()
    }
    .from_env(&ctx);

    let client = Client::new(ctx, config)?;

    let resp = client
        .query_product_list(
            ParameterSet::new()
                .with("PageSize", 10)
                .with("CurrentPage", 1),
        )
        .await?;

    println!("status: {}", resp.status());
    println!("body: {}", String::from_utf8_lossy(resp.body()));

    Ok(())
}
